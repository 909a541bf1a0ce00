//! Error types for chain_ast crate.

use thiserror::Error;

/// Errors raised while constructing or combining fractions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Text that does not read as `n` or `n/d` with integer parts
    #[error("cannot parse '{0}' as a fraction")]
    Parse(String),

    /// Zero denominator or zero divisor
    #[error("division by zero")]
    DivisionByZero,
}

/// Matrix shape violations detected at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// Matrix rows are ragged, empty, or missing entirely
    #[error("invalid matrix: {reason}")]
    InvalidMatrix { reason: String },
}
