//! Token reading and recognition for the lexer.
//!
//! This module provides the methods that read the various token types from
//! the input: identifiers, keywords, integer and string literals,
//! punctuation, operators, and comments.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// Whitespace is skipped first. At the end of the input an
    /// [`TokenKind::Eof`] token is returned; further calls keep returning
    /// `Eof`, which gives the parser a stable lookahead window.
    ///
    /// This method never fails: characters that do not start any token
    /// become [`TokenKind::Illegal`] tokens.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.current_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start_pos, start_pos, start_line, start_column),
            );
        };

        if let Some(token) = self.next_punctuation_or_operator(c, start_pos, start_line, start_column)
        {
            return token;
        }

        match c {
            '"' => self.read_string(start_pos, start_line, start_column),
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ => {
                self.advance();
                Token::new(
                    TokenKind::Illegal(c),
                    Span::new(start_pos, self.pos, start_line, start_column),
                )
            }
        }
    }

    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Consumes a one- or two-character operator, picking `two` when the
    /// next character is `=` and `one` otherwise.
    fn one_or_two_char_token(
        &mut self,
        one: TokenKind,
        two: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let kind = if self.current_char() == Some('=') {
            self.advance();
            two
        } else {
            one
        };
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    fn next_punctuation_or_operator(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Token> {
        let token = match c {
            '(' => self.single_char_token(TokenKind::LeftParen, start_pos, start_line, start_column),
            ')' => {
                self.single_char_token(TokenKind::RightParen, start_pos, start_line, start_column)
            }
            '[' => {
                self.single_char_token(TokenKind::LeftBracket, start_pos, start_line, start_column)
            }
            ']' => {
                self.single_char_token(TokenKind::RightBracket, start_pos, start_line, start_column)
            }
            '{' => self.single_char_token(TokenKind::LeftBrace, start_pos, start_line, start_column),
            '}' => {
                self.single_char_token(TokenKind::RightBrace, start_pos, start_line, start_column)
            }
            ';' => self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '*' => self.single_char_token(TokenKind::Star, start_pos, start_line, start_column),
            '/' => {
                if self.peek_char() == Some('/') {
                    self.read_comment(start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column)
                }
            }
            '=' => self.one_or_two_char_token(
                TokenKind::Equals,
                TokenKind::EqualEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '!' => self.one_or_two_char_token(
                TokenKind::Bang,
                TokenKind::BangEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '<' => self.one_or_two_char_token(
                TokenKind::LessThan,
                TokenKind::LessEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '>' => self.one_or_two_char_token(
                TokenKind::GreaterThan,
                TokenKind::GreaterEqual,
                start_pos,
                start_line,
                start_column,
            ),
            _ => return None,
        };

        Some(token)
    }

    /// Reads a line comment starting at `//`.
    ///
    /// The token text runs to the end of the line; the newline itself is
    /// not part of the token and is consumed later as whitespace.
    fn read_comment(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self.current_char().is_some_and(|c| c != '\n') {
            self.advance();
        }

        let text = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Comment(text), span)
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote is at the current position. The token
    /// value is the text between the quotes, verbatim: vih performs no
    /// escape processing. An unterminated string runs to the end of the
    /// input.
    fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance(); // skip opening "
        let value_start = self.pos;

        while self.current_char().is_some_and(|c| c != '"') {
            self.advance();
        }

        let value = self.input[value_start..self.pos].to_string();
        if self.current_char() == Some('"') {
            self.advance(); // skip closing "
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::StringLiteral(value), span)
    }

    /// Reads an integer literal as its raw digit string.
    ///
    /// Numeric conversion happens in the parser, so a literal that does
    /// not fit in an `i64` is reported there as a parse error.
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let digits = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int(digits), span)
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers consist of an ASCII alphabetic character or underscore
    /// followed by any number of ASCII alphanumerics or underscores. If
    /// the text matches a keyword (`if`, `else`, `for`, `func`, `let`,
    /// `return`, `true`, `false`), the corresponding keyword token is
    /// returned instead.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "func" => TokenKind::Func,
            "let" => TokenKind::Let,
            "return" => TokenKind::Return,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Identifier(value.to_string()),
        };

        Token::new(kind, span)
    }
}
