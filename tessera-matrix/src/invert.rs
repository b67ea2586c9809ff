//! Delegated inversion and determinant
//!
//! The numeric kernels live in nalgebra; this module only adapts shapes and
//! failures across the boundary. No decomposition is implemented here.

use crate::types::Matrix;
use tessera_core::MatrixError;
use tracing::debug;

impl Matrix {
    /// Multiplicative inverse of a square matrix.
    ///
    /// The kernel is nalgebra's dense inversion. A singular or non-square
    /// input surfaces as [`MatrixError::InversionFailed`]; the 1×1 case is
    /// the reciprocal.
    pub fn invert(&self) -> Result<Matrix, MatrixError> {
        let shape = self.shape();
        if !shape.is_square() {
            return Err(MatrixError::not_square("invert", shape));
        }
        debug!(%shape, "delegating inversion to nalgebra");
        match self.to_dmatrix().try_inverse() {
            Some(inv) => Matrix::from_dmatrix(&inv),
            None => {
                debug!(%shape, "kernel reported a singular matrix");
                Err(MatrixError::singular(shape))
            }
        }
    }

    /// Determinant of a square matrix, computed by the same kernel family
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        let shape = self.shape();
        if !shape.is_square() {
            return Err(MatrixError::not_square("determinant", shape));
        }
        Ok(self.to_dmatrix().determinant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_invert_two_by_two() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let inv = m.invert().unwrap();
        let expected = [[-2.0, 1.0], [1.5, -0.5]];
        for i in 0..2 {
            for j in 0..2 {
                assert_close(expected[i][j], inv.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_invert_one_by_one_is_reciprocal() {
        let m = Matrix::from_vec(vec![4.0]).unwrap();
        let inv = m.invert().unwrap();
        assert_close(0.25, inv.get(0, 0).unwrap());
    }

    #[test]
    fn test_invert_times_original_is_identity() {
        let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let product = m.invert().unwrap().mul(&m).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_close(expected, product.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_invert_singular_fails() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let err = m.invert().unwrap_err();
        assert!(matches!(err, MatrixError::InversionFailed(_)));
    }

    #[test]
    fn test_invert_non_square_fails() {
        let m = Matrix::from_vec(vec![1.0, 2.0]).unwrap();
        let err = m.invert().unwrap_err();
        assert!(matches!(err, MatrixError::InversionFailed(_)));
    }

    #[test]
    fn test_determinant() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_close(-2.0, m.determinant().unwrap());
    }

    #[test]
    fn test_determinant_non_square_fails() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
            .unwrap();
        assert!(m.determinant().is_err());
    }
}
