//! Errors raised while building or evaluating a proximity operator

use thiserror::Error;

/// Errors that can occur when constructing or evaluating a prox operator.
///
/// An indicator function evaluating to `+inf` is not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProxError {
    /// A vector's length does not match the operator's fixed dimension.
    #[error("dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A box bound pair with `lower > upper`, or a NaN bound.
    #[error("invalid bound at index {index}: lower must not exceed upper")]
    InvalidBound { index: usize },

    /// The L1 weight must be nonnegative.
    #[error("l1 scale must be nonnegative")]
    NegativeScale,

    /// The operator returned no minimizer although one was requested.
    #[error("operator did not return a minimizer")]
    MissingMinimizer,
}

pub type Result<T> = std::result::Result<T, ProxError>;
