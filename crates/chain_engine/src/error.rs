//! Error types for chain evaluation.

use chain_ast::Op;
use thiserror::Error;

/// Everything that can abort a chain evaluation. Errors are terminal:
/// no partial result is produced and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("the chain has no elements")]
    EmptyChain,

    /// A non-first element without an operation tag
    #[error("element {index} has no operation")]
    MissingOperation { index: usize },

    /// Operation not permitted for this combination of kinds
    #[error("operation '{op}' is not valid here: {reason}")]
    InvalidOperationForType { op: Op, reason: String },

    #[error("dimension mismatch for '{op}': {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        op: Op,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("matrix must be square to be raised to a power, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent must be an integer")]
    InvalidExponent,
}
