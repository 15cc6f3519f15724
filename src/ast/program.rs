//! The top-level program node.

use std::fmt;

use super::stmt::Statement;

/// The root of a parsed vih program: an ordered sequence of statements.
#[derive(Debug, Clone)]
pub struct Program {
    /// The statements of the program, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.statements.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
