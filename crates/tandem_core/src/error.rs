//! # Core Error Types
//!
//! Errors returned by the `try_*` forms of the helpers. The plain forms
//! `assume` the same conditions and abort instead.

use thiserror::Error;

/// Arithmetic operation that overflowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// Unsigned addition.
    Add,
    /// Unsigned multiplication.
    Mul,
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Mul => f.write_str("*"),
        }
    }
}

/// Errors that can occur in the core helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The result does not fit in a `u64`.
    #[error("arithmetic overflow: {lhs} {op} {rhs}")]
    Overflow {
        /// The operation.
        op: ArithOp,
        /// Left operand.
        lhs: u64,
        /// Right operand.
        rhs: u64,
    },

    /// Split point lies past the end of the slice.
    #[error("split at {at} out of bounds for slice of length {len}")]
    SplitOutOfBounds {
        /// Requested split point.
        at: usize,
        /// Length of the slice.
        len: usize,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
