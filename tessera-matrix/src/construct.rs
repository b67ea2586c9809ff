//! Convenience constructors
//!
//! All of these canonicalize: a result with one row comes back as the flat
//! form, so 1×1 and 1×N values are indistinguishable from ones built with
//! [`Matrix::from_vec`].

use crate::types::Matrix;
use tessera_core::MatrixError;

impl Matrix {
    /// n×n identity matrix
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::invalid_shape("identity needs n ≥ 1"));
        }
        Self::from_computed_rows(
            (0..n)
                .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect(),
        )
    }

    /// rows×cols matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::invalid_shape("zeros needs rows ≥ 1 and cols ≥ 1"));
        }
        Self::from_computed_rows(vec![vec![0.0; cols]; rows])
    }

    /// Square matrix with `diag` on the diagonal and zeros elsewhere
    pub fn diagonal(diag: &[f64]) -> Result<Self, MatrixError> {
        if diag.is_empty() {
            return Err(MatrixError::invalid_shape(
                "diagonal needs at least one entry",
            ));
        }
        let n = diag.len();
        Self::from_computed_rows(
            (0..n)
                .map(|i| (0..n).map(|j| if i == j { diag[i] } else { 0.0 }).collect())
                .collect(),
        )
    }
}
