//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use super::expr::Precedence;
use crate::ast::{
    BlockStatement, ExpressionStatement, ForStatement, LetStatement, ReturnStatement, Statement,
};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → let_stmt | return_stmt | for_stmt | expr_stmt
    /// ```
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            TokenKind::For => self.parse_for_statement().map(Statement::For),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// Parses a let statement. The current token is `let`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENT "=" expr ";"?
    /// ```
    pub(super) fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        let name = self.expect_peek_identifier()?;
        if !self.expect_peek(&TokenKind::Equals) {
            return None;
        }

        self.advance_tokens();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(&TokenKind::Semicolon) {
            self.advance_tokens();
        }

        Some(LetStatement { token, name, value })
    }

    /// Parses a return statement. The current token is `return`.
    ///
    /// A `return` immediately followed by `;`, `}` or end of input carries
    /// no value; the evaluator supplies null.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expr? ";"?
    /// ```
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.cur_token.clone();

        if matches!(
            self.peek_token.kind,
            TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Eof
        ) {
            if self.peek_token_is(&TokenKind::Semicolon) {
                self.advance_tokens();
            }
            return Some(ReturnStatement {
                token,
                return_value: None,
            });
        }

        self.advance_tokens();
        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(&TokenKind::Semicolon) {
            self.advance_tokens();
        }

        Some(ReturnStatement {
            token,
            return_value: Some(return_value),
        })
    }

    /// Parses a three-clause for statement. The current token is `for`.
    ///
    /// The update rule must be a let statement; it conventionally rebinds
    /// the loop counter, though the parser does not enforce the name.
    ///
    /// # Grammar
    ///
    /// ```text
    /// for_stmt → "for" "(" IDENT "=" expr ";" expr ";" let_stmt ")" block
    /// ```
    fn parse_for_statement(&mut self) -> Option<ForStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(&TokenKind::LeftParen) {
            return None;
        }
        let counter = self.expect_peek_identifier()?;
        if !self.expect_peek(&TokenKind::Equals) {
            return None;
        }

        self.advance_tokens();
        let initial_value = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&TokenKind::Semicolon) {
            return None;
        }

        self.advance_tokens();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&TokenKind::Semicolon) {
            return None;
        }

        if !self.expect_peek(&TokenKind::Let) {
            return None;
        }
        let update_rule = self.parse_let_statement()?;

        if !self.expect_peek(&TokenKind::RightParen) {
            return None;
        }
        if !self.expect_peek(&TokenKind::LeftBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(ForStatement {
            token,
            counter,
            initial_value,
            condition,
            update_rule: Box::new(update_rule),
            body,
        })
    }

    /// Parses a brace-delimited block. The current token is `{`; on
    /// success the current token is the closing `}`.
    ///
    /// Statements that fail to parse inside the block are recovered from
    /// the same way as at the top level.
    pub(super) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.cur_token.clone();
        self.advance_tokens();

        let mut statements = Vec::new();
        while !self.cur_token_is(&TokenKind::RightBrace) {
            if self.cur_token_is(&TokenKind::Eof) {
                let error = ParseError::unexpected_token(
                    &TokenKind::RightBrace.to_string(),
                    &self.cur_token.kind.to_string(),
                    self.cur_token.span,
                );
                self.errors.push(error);
                return None;
            }

            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => self.synchronize(),
            }
            self.advance_tokens();
        }

        Some(BlockStatement { token, statements })
    }

    /// Parses an expression in statement position.
    ///
    /// A trailing semicolon is consumed but never required.
    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(&TokenKind::Semicolon) {
            self.advance_tokens();
        }

        Some(ExpressionStatement { token, expression })
    }
}
