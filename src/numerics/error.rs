//! Error types for the numerics core.
//!
//! Every failure is detected synchronously at the offending call and returned
//! to the caller. Nothing here is retried, logged, or silently recovered;
//! deciding whether a failure is fatal belongs to the layer above.

use thiserror::Error;

/// Unified error type for the numerics core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericsError {
    /// Constructor or accessor input is malformed (wrong buffer length,
    /// out-of-range index, degenerate projection parameters).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The shape of dynamically sized input disagrees with the target
    /// container shape.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The operation is undefined for this dimension (e.g. cross product
    /// on a non-3-dimensional vector).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Inverse requested for a singular matrix.
    #[error("matrix is not invertible (determinant {determinant:.3e})")]
    NotInvertible { determinant: f64 },

    /// A zero-length vector cannot be normalized or used as a direction.
    #[error("degenerate vector: magnitude is zero")]
    DegenerateVector,
}

/// Convenience alias for `Result<T, NumericsError>`.
pub type NumericsResult<T> = Result<T, NumericsError>;
