//! Expression parsing using the Pratt algorithm.
//!
//! This module implements expression parsing with proper operator
//! precedence. Each token kind that can start an expression has a prefix
//! rule; operators, `(` (call) and `[` (index) additionally have infix
//! rules and a [`Precedence`]. The core loop in
//! [`parse_expression`](Parser::parse_expression) keeps consuming infix
//! forms while the lookahead token binds tighter than the minimum
//! precedence it was given.

use super::Parser;
use super::error::ParseError;
use crate::ast::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, InfixOperator, IntegerLiteral, ListLiteral,
    PrefixExpression, PrefixOperator, StringLiteral,
};
use crate::token::TokenKind;

/// Operator precedence levels, lowest to highest.
///
/// The derived `Ord` follows declaration order, so `Lowest` binds loosest
/// and `Index` binds tightest. All binary operators are left-associative:
/// the Pratt loop only continues while the lookahead binds *strictly*
/// tighter than the minimum, so `a - b - c` parses as `((a - b) - c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// The entry precedence for a fresh expression.
    Lowest,
    /// `==` and `!=`.
    Equals,
    /// `<`, `>`, `<=`, `>=`.
    LessGreater,
    /// `+` and binary `-`.
    Sum,
    /// `*` and `/`.
    Product,
    /// Unary `-` and `!`.
    Prefix,
    /// `(` as an infix token: a call.
    Call,
    /// `[` as an infix token: an index.
    Index,
}

/// Returns the binary operator a token maps to, if any.
fn infix_operator(kind: &TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Star => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::LessThan => Some(InfixOperator::LessThan),
        TokenKind::GreaterThan => Some(InfixOperator::GreaterThan),
        TokenKind::LessEqual => Some(InfixOperator::LessEqual),
        TokenKind::GreaterEqual => Some(InfixOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(InfixOperator::Equal),
        TokenKind::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

/// Returns the precedence of a binary operator.
fn operator_precedence(operator: InfixOperator) -> Precedence {
    match operator {
        InfixOperator::Equal | InfixOperator::NotEqual => Precedence::Equals,
        InfixOperator::LessThan
        | InfixOperator::GreaterThan
        | InfixOperator::LessEqual
        | InfixOperator::GreaterEqual => Precedence::LessGreater,
        InfixOperator::Add | InfixOperator::Sub => Precedence::Sum,
        InfixOperator::Mul | InfixOperator::Div => Precedence::Product,
    }
}

/// Returns the infix precedence of a token, if it can appear in infix
/// position: binary operators plus `(` (call) and `[` (index).
fn infix_precedence(kind: &TokenKind) -> Option<Precedence> {
    match kind {
        TokenKind::LeftParen => Some(Precedence::Call),
        TokenKind::LeftBracket => Some(Precedence::Index),
        _ => infix_operator(kind).map(operator_precedence),
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression with a minimum binding precedence.
    ///
    /// This is the Pratt core: parse a prefix form for the current token,
    /// then repeatedly consume infix forms while the lookahead token binds
    /// tighter than `precedence`. A lookahead semicolon always ends the
    /// expression. On success the current token is the last token of the
    /// expression.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        loop {
            if self.peek_token_is(&TokenKind::Semicolon) {
                break;
            }
            let Some(peek_precedence) = infix_precedence(&self.peek_token.kind) else {
                break;
            };
            if precedence >= peek_precedence {
                break;
            }

            self.advance_tokens();
            left = match self.cur_token.kind {
                TokenKind::LeftParen => Expression::Call(self.parse_call_expression(left)?),
                TokenKind::LeftBracket => Expression::Index(self.parse_index_expression(left)?),
                _ => Expression::Infix(self.parse_infix_expression(left)?),
            };
        }

        Some(left)
    }

    /// Parses the prefix form for the current token.
    ///
    /// Records a "No prefix parser function" error when the current token
    /// cannot start an expression (this is also how `Illegal` tokens
    /// surface).
    fn parse_prefix(&mut self) -> Option<Expression> {
        match &self.cur_token.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                Some(Expression::Identifier(Identifier {
                    token: self.cur_token.clone(),
                    name,
                }))
            }
            TokenKind::Int(_) => self.parse_integer_literal().map(Expression::Integer),
            TokenKind::StringLiteral(value) => {
                let value = value.clone();
                Some(Expression::Str(StringLiteral {
                    token: self.cur_token.clone(),
                    value,
                }))
            }
            TokenKind::True => Some(Expression::Boolean(BooleanLiteral {
                token: self.cur_token.clone(),
                value: true,
            })),
            TokenKind::False => Some(Expression::Boolean(BooleanLiteral {
                token: self.cur_token.clone(),
                value: false,
            })),
            TokenKind::Bang | TokenKind::Minus => {
                self.parse_prefix_expression().map(Expression::Prefix)
            }
            TokenKind::LeftParen => self.parse_grouped_expression(),
            TokenKind::LeftBracket => self.parse_list_literal().map(Expression::List),
            TokenKind::If => self.parse_if_expression().map(Expression::If),
            TokenKind::Func => self.parse_function_literal().map(Expression::Function),
            _ => {
                let error = ParseError::no_prefix_parse_fn(
                    &self.cur_token.kind.to_string(),
                    self.cur_token.span,
                );
                self.errors.push(error);
                None
            }
        }
    }

    /// Parses an integer literal, converting the digit string to `i64`.
    ///
    /// A literal that does not fit is a parse error, not a lexer failure.
    fn parse_integer_literal(&mut self) -> Option<IntegerLiteral> {
        let token = self.cur_token.clone();
        let TokenKind::Int(digits) = &token.kind else {
            return None;
        };

        match digits.parse::<i64>() {
            Ok(value) => Some(IntegerLiteral {
                token: token.clone(),
                value,
            }),
            Err(_) => {
                let error = ParseError::invalid_integer_literal(digits, token.span);
                self.errors.push(error);
                None
            }
        }
    }

    /// Parses a prefix operation (`!x` or `-x`). The operand is parsed at
    /// `Prefix` precedence, so `-a * b` parses as `((-a) * b)`.
    fn parse_prefix_expression(&mut self) -> Option<PrefixExpression> {
        let token = self.cur_token.clone();
        let operator = match token.kind {
            TokenKind::Bang => PrefixOperator::Not,
            _ => PrefixOperator::Neg,
        };

        self.advance_tokens();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        })
    }

    /// Parses a binary operation. The current token is the operator; the
    /// right operand is parsed at the operator's own precedence, which
    /// together with the strict comparison in the Pratt loop yields left
    /// associativity.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<InfixExpression> {
        let token = self.cur_token.clone();
        let operator = infix_operator(&token.kind)?;
        let precedence = operator_precedence(operator);

        self.advance_tokens();
        let right = self.parse_expression(precedence)?;

        Some(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Parses a parenthesized expression. The parens only steer
    /// precedence; no AST node is created for them.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance_tokens();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&TokenKind::RightParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses an if expression. Parens around the condition are
    /// mandatory; the alternative block is optional.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_expr → "if" "(" expr ")" block ("else" block)?
    /// ```
    fn parse_if_expression(&mut self) -> Option<IfExpression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(&TokenKind::LeftParen) {
            return None;
        }

        self.advance_tokens();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&TokenKind::RightParen) {
            return None;
        }
        if !self.expect_peek(&TokenKind::LeftBrace) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(&TokenKind::Else) {
            self.advance_tokens();
            if !self.expect_peek(&TokenKind::LeftBrace) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Parses a function literal.
    ///
    /// # Grammar
    ///
    /// ```text
    /// func_literal → "func" "(" (IDENT ("," IDENT)*)? ")" block
    /// ```
    fn parse_function_literal(&mut self) -> Option<FunctionLiteral> {
        let token = self.cur_token.clone();

        if !self.expect_peek(&TokenKind::LeftParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&TokenKind::LeftBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(FunctionLiteral {
            token,
            parameters,
            body,
        })
    }

    /// Parses a comma-separated, possibly empty parameter list. The
    /// current token is `(`; on success it is `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(&TokenKind::RightParen) {
            self.advance_tokens();
            return Some(parameters);
        }

        parameters.push(self.expect_peek_identifier()?);
        while self.peek_token_is(&TokenKind::Comma) {
            self.advance_tokens();
            parameters.push(self.expect_peek_identifier()?);
        }

        if !self.expect_peek(&TokenKind::RightParen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses a call expression. `left` is the callee, already parsed;
    /// the current token is the `(` that triggered the infix rule.
    fn parse_call_expression(&mut self, left: Expression) -> Option<CallExpression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(&TokenKind::RightParen)?;

        Some(CallExpression {
            token,
            function: Box::new(left),
            arguments,
        })
    }

    /// Parses an index expression. `left` is the collection, already
    /// parsed; the current token is the `[` that triggered the infix
    /// rule.
    fn parse_index_expression(&mut self, left: Expression) -> Option<IndexExpression> {
        let token = self.cur_token.clone();

        self.advance_tokens();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&TokenKind::RightBracket) {
            return None;
        }

        Some(IndexExpression {
            token,
            collection: Box::new(left),
            index: Box::new(index),
        })
    }

    /// Parses a list literal.
    fn parse_list_literal(&mut self) -> Option<ListLiteral> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(&TokenKind::RightBracket)?;

        Some(ListLiteral { token, elements })
    }

    /// Parses a comma-separated, possibly empty expression list closed by
    /// `end` — call arguments or list literal elements. The current token
    /// is the opening delimiter; on success it is `end`.
    fn parse_expression_list(&mut self, end: &TokenKind) -> Option<Vec<Expression>> {
        let mut expressions = Vec::new();

        if self.peek_token_is(end) {
            self.advance_tokens();
            return Some(expressions);
        }

        self.advance_tokens();
        expressions.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(&TokenKind::Comma) {
            self.advance_tokens();
            self.advance_tokens();
            expressions.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(expressions)
    }
}
