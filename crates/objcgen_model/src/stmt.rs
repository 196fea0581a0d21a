//! Statement and expression trees.
//!
//! These are opaque to the implementation generator: it hands them to a statement generator and splices the returned
//! text. Front ends that lower bodies themselves use [`Statement::Native`] / [`Expression::Native`] to carry
//! already-translated target code.

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `{ ... }`
    Block(Vec<Statement>),
    /// Target-language statement text, emitted verbatim.
    Native(String),
    /// An expression evaluated for its side effects.
    Expression(Expression),
    Return(Option<Expression>),
}

impl Statement {
    pub fn native(code: impl Into<String>) -> Self {
        Statement::Native(code.into())
    }

    pub fn block(stmts: Vec<Statement>) -> Self {
        Statement::Block(stmts)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Target-language expression text, emitted verbatim.
    Native(String),
    StringLiteral(String),
    /// Numeric literal, already spelled for the target (`42`, `1.5f`, `10LL`).
    NumberLiteral(String),
    BooleanLiteral(bool),
    Null,
}

impl Expression {
    pub fn native(code: impl Into<String>) -> Self {
        Expression::Native(code.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(value.into())
    }

    pub fn number(spelling: impl Into<String>) -> Self {
        Expression::NumberLiteral(spelling.into())
    }
}
