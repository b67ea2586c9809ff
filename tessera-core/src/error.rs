//! Structured errors for matrix operations
//!
//! Errors are values that propagate through computations. Shape mismatches
//! are programmer or input errors, not transient faults: there is no retry
//! path, and no partial matrix ever accompanies an error.

use crate::Shape;
use thiserror::Error;

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Raised at construction for redundant nesting or uneven row lengths,
    /// never by a post-construction operation
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Elementwise addition of differently shaped matrices
    #[error("not addable: shapes {lhs} and {rhs} differ")]
    NotAddable { lhs: Shape, rhs: Shape },

    /// Inner dimensions disagree
    #[error("not multipliable: incompatible dimensions {lhs} and {rhs}")]
    NotMultipliable { lhs: Shape, rhs: Shape },

    /// The delegated numeric kernel reported singularity or a non-square input
    #[error("inversion failed: {0}")]
    InversionFailed(String),
}

impl MatrixError {
    pub fn invalid_shape(details: impl Into<String>) -> Self {
        MatrixError::InvalidShape(details.into())
    }

    pub fn singular(shape: Shape) -> Self {
        MatrixError::InversionFailed(format!("{shape} matrix is singular"))
    }

    pub fn not_square(op: &str, shape: Shape) -> Self {
        MatrixError::InversionFailed(format!("{op} requires a square matrix, got {shape}"))
    }
}
