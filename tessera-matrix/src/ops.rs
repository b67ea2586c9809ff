//! Matrix arithmetic and structural operations
//!
//! Shape validation always precedes computation: a mismatched pair of
//! operands produces an error and nothing else, never a wrong-shaped or
//! partial result.

use crate::types::{Matrix, MatrixData};
use tessera_core::MatrixError;

/// Sum of pairwise products, left to right, accumulator seeded at zero.
/// Summation order is part of the contract so results stay bit-identical.
fn inner_product(row: &[f64], col: &[f64]) -> f64 {
    row.iter().zip(col).fold(0.0, |acc, (a, b)| acc + a * b)
}

impl Matrix {
    /// True when `self + other` is defined (identical shapes)
    pub fn addable(&self, other: &Matrix) -> bool {
        self.shape().addable_with(&other.shape())
    }

    /// True when `self × other` is defined (inner dimensions agree)
    pub fn multipliable(&self, other: &Matrix) -> bool {
        self.shape().multipliable_with(&other.shape())
    }

    /// Elementwise sum, position for position
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if !self.addable(other) {
            return Err(MatrixError::NotAddable {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        self.map_rows(|row, i| {
            let rhs = match other.data() {
                MatrixData::Row(v) => &v[..],
                MatrixData::Grid(g) => &g[i][..],
            };
            row.iter().zip(rhs).map(|(a, b)| op(*a, *b)).collect()
        })
    }

    /// Standard matrix product.
    ///
    /// Cell (i, j) of the result is the inner product of row i of `self`
    /// and column j of `other`. A row-vector receiver produces its flat
    /// result row directly, with no grid intermediate.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if !self.multipliable(other) {
            return Err(MatrixError::NotMultipliable {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        // Columns of `other`, extracted once up front. When `other` is the
        // flat form its columns are its individual scalars.
        let columns: Vec<Vec<f64>> = (0..other.cols())
            .map(|j| match other.data() {
                MatrixData::Row(v) => vec![v[j]],
                MatrixData::Grid(g) => g.iter().map(|r| r[j]).collect(),
            })
            .collect();
        self.map_rows(|row, _| {
            columns
                .iter()
                .map(|col| inner_product(row, col))
                .collect()
        })
    }

    /// Scalar multiple
    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|v| v * k)
    }

    /// Transpose: cell (i, j) of the result is cell (j, i) of the input.
    /// Total; the one-row result of transposing an M×1 grid comes back in
    /// the canonical flat form, and a 1×1 value transposes to itself.
    pub fn transpose(&self) -> Matrix {
        match self.data() {
            MatrixData::Row(v) if v.len() == 1 => self.clone(),
            MatrixData::Row(v) => Matrix {
                data: MatrixData::Grid(v.iter().map(|&x| vec![x]).collect()),
            },
            MatrixData::Grid(g) if g[0].len() == 1 => Matrix {
                data: MatrixData::Row(g.iter().map(|r| r[0]).collect()),
            },
            MatrixData::Grid(g) => Matrix {
                data: MatrixData::Grid(
                    (0..g[0].len())
                        .map(|j| g.iter().map(|r| r[j]).collect())
                        .collect(),
                ),
            },
        }
    }

    /// Sum of the diagonal; square matrices only
    pub fn trace(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::invalid_shape(format!(
                "trace requires a square matrix, got {}",
                self.shape()
            )));
        }
        Ok(match self.data() {
            MatrixData::Row(v) => v[0],
            MatrixData::Grid(g) => g.iter().enumerate().fold(0.0, |acc, (i, r)| acc + r[i]),
        })
    }

    /// Apply `f` to every element, preserving shape
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        let data = match self.data() {
            MatrixData::Row(v) => MatrixData::Row(v.iter().map(|&x| f(x)).collect()),
            MatrixData::Grid(g) => MatrixData::Grid(
                g.iter()
                    .map(|r| r.iter().map(|&x| f(x)).collect())
                    .collect(),
            ),
        };
        Matrix { data }
    }

    /// Transform every row with `f`, which receives the row and its index;
    /// for the flat form the whole sequence is the single row at index 0.
    ///
    /// Rows may change length (this is how `mul` reshapes), but the produced
    /// rows must be uniform and non-empty - anything else is `InvalidShape`.
    /// A one-row result collapses to the flat form.
    pub fn map_rows(
        &self,
        f: impl Fn(&[f64], usize) -> Vec<f64>,
    ) -> Result<Matrix, MatrixError> {
        match self.data() {
            MatrixData::Row(v) => Matrix::from_vec(f(v, 0)),
            MatrixData::Grid(g) => Matrix::from_computed_rows(
                g.iter().enumerate().map(|(i, row)| f(row, i)).collect(),
            ),
        }
    }
}
