//! Token kinds for the vih lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the vih language.

use std::fmt;

/// The kind of token recognized by the lexer.
///
/// Each variant may carry associated data (e.g., the actual string value
/// for identifiers and string literals). Integer literals carry their raw
/// digit string; numeric conversion happens in the parser so that an
/// out-of-range literal is reported as a parse error rather than a lexer
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (variable or function name).
    ///
    /// Identifiers start with an ASCII alphabetic character or underscore,
    /// followed by any number of ASCII alphanumerics or underscores.
    Identifier(String),

    /// An integer literal as its raw digit string (e.g., `"42"`).
    Int(String),

    /// A string literal enclosed in double quotes.
    ///
    /// The contained `String` is the text between the quotes, verbatim.
    /// vih performs no escape processing.
    StringLiteral(String),

    /// A left parenthesis `(`.
    LeftParen,
    /// A right parenthesis `)`.
    RightParen,
    /// A left bracket `[`.
    LeftBracket,
    /// A right bracket `]`.
    RightBracket,
    /// A left brace `{`.
    LeftBrace,
    /// A right brace `}`.
    RightBrace,
    /// A semicolon `;`.
    Semicolon,
    /// A comma `,`.
    Comma,

    /// An equals sign `=` for let bindings.
    Equals,
    /// A plus sign `+`.
    Plus,
    /// A minus sign `-` (infix subtraction or prefix negation).
    Minus,
    /// An asterisk `*`.
    Star,
    /// A forward slash `/`.
    Slash,
    /// A bang `!` for logical NOT.
    Bang,

    /// Double equals `==`.
    EqualEqual,
    /// Not equals `!=`.
    BangEqual,
    /// Less than `<`.
    LessThan,
    /// Greater than `>`.
    GreaterThan,
    /// Less than or equal `<=`.
    LessEqual,
    /// Greater than or equal `>=`.
    GreaterEqual,

    /// The `if` keyword.
    If,
    /// The `else` keyword.
    Else,
    /// The `for` keyword.
    For,
    /// The `func` keyword introducing a function literal.
    Func,
    /// The `let` keyword.
    Let,
    /// The `return` keyword.
    Return,
    /// The `true` boolean literal.
    True,
    /// The `false` boolean literal.
    False,

    /// A line comment, including the leading `//`.
    ///
    /// Comments are surfaced so the `lexer` CLI mode can print them; the
    /// parser skips them when pulling tokens from the stream.
    Comment(String),

    /// A character the lexer does not recognize.
    ///
    /// Illegal tokens surface as parse errors; the lexer itself never
    /// fails.
    Illegal(char),

    /// End of input marker. Once emitted, the lexer keeps returning it.
    Eof,
}

impl TokenKind {
    /// Returns the uppercase tag of this kind, used by the `lexer` CLI mode.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "IDENT",
            TokenKind::Int(_) => "INT",
            TokenKind::StringLiteral(_) => "STRING",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Bang => "BANG",
            TokenKind::EqualEqual => "EQ",
            TokenKind::BangEqual => "NEQ",
            TokenKind::LessThan => "LT",
            TokenKind::GreaterThan => "GT",
            TokenKind::LessEqual => "LEQ",
            TokenKind::GreaterEqual => "GEQ",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::Func => "FUNC",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Comment(_) => "COMMENT",
            TokenKind::Illegal(_) => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Reconstructs the source text of this token.
    ///
    /// For string literals this is the text between the quotes; for `Eof`
    /// it is the empty string.
    pub fn literal(&self) -> String {
        match self {
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::Int(digits) => digits.clone(),
            TokenKind::StringLiteral(value) => value.clone(),
            TokenKind::Comment(text) => text.clone(),
            TokenKind::Illegal(c) => c.to_string(),
            TokenKind::Eof => String::new(),
            TokenKind::LeftParen => "(".to_string(),
            TokenKind::RightParen => ")".to_string(),
            TokenKind::LeftBracket => "[".to_string(),
            TokenKind::RightBracket => "]".to_string(),
            TokenKind::LeftBrace => "{".to_string(),
            TokenKind::RightBrace => "}".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Equals => "=".to_string(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::Bang => "!".to_string(),
            TokenKind::EqualEqual => "==".to_string(),
            TokenKind::BangEqual => "!=".to_string(),
            TokenKind::LessThan => "<".to_string(),
            TokenKind::GreaterThan => ">".to_string(),
            TokenKind::LessEqual => "<=".to_string(),
            TokenKind::GreaterEqual => ">=".to_string(),
            TokenKind::If => "if".to_string(),
            TokenKind::Else => "else".to_string(),
            TokenKind::For => "for".to_string(),
            TokenKind::Func => "func".to_string(),
            TokenKind::Let => "let".to_string(),
            TokenKind::Return => "return".to_string(),
            TokenKind::True => "true".to_string(),
            TokenKind::False => "false".to_string(),
        }
    }
}

/// A user-friendly rendering of the kind, used in parse error messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::Int(digits) => write!(f, "integer '{}'", digits),
            TokenKind::StringLiteral(value) => {
                if value.chars().count() > 20 {
                    let prefix: String = value.chars().take(20).collect();
                    write!(f, "string \"{}...\"", prefix)
                } else {
                    write!(f, "string \"{}\"", value)
                }
            }
            TokenKind::If
            | TokenKind::Else
            | TokenKind::For
            | TokenKind::Func
            | TokenKind::Let
            | TokenKind::Return => write!(f, "'{}' keyword", self.literal()),
            TokenKind::Comment(_) => write!(f, "comment"),
            TokenKind::Illegal(c) => write!(f, "illegal character '{}'", c),
            TokenKind::Eof => write!(f, "end of file"),
            _ => write!(f, "'{}'", self.literal()),
        }
    }
}
