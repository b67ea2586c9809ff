//! Core matrix type and validated construction

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use tessera_core::{MatrixError, Shape};

/// Backing value of a [`Matrix`]: a flat row vector or a rectangular grid.
///
/// The tag is fixed at construction and never probed again. A one-row grid
/// is never represented - the flat form is canonical for 1×N - so structural
/// equality on the representation is shape-and-elements equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixData {
    /// Flat ordered sequence: one row of N elements
    Row(Vec<f64>),
    /// M×N grid, M ≥ 2, every row the same length
    Grid(Vec<Vec<f64>>),
}

/// An immutable numeric matrix with construction-time shape validation.
///
/// Every operation returns a newly constructed `Matrix`; nothing mutates.
/// Deserialization routes through the same validation as construction, so a
/// decoded value upholds the same invariants as a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData", into = "MatrixData")]
pub struct Matrix {
    pub(crate) data: MatrixData,
}

impl Matrix {
    /// Construct a 1×N row vector from a flat sequence
    pub fn from_vec(values: Vec<f64>) -> Result<Self, MatrixError> {
        if values.is_empty() {
            return Err(MatrixError::invalid_shape(
                "a row vector needs at least one element",
            ));
        }
        Ok(Self {
            data: MatrixData::Row(values),
        })
    }

    /// Construct an M×N rectangular matrix from nested rows.
    ///
    /// A single nested row is rejected as redundant nesting: the 1×N case is
    /// always representable as the flat form, so callers holding one row
    /// should use [`Matrix::from_vec`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::invalid_shape("a matrix needs at least one row"));
        }
        if rows.len() == 1 {
            return Err(MatrixError::invalid_shape(
                "a single nested row is redundant nesting; pass the flat form instead",
            ));
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(MatrixError::invalid_shape("rows must not be empty"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::invalid_shape(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }
        Ok(Self {
            data: MatrixData::Grid(rows),
        })
    }

    /// Build from computed rows, collapsing the one-row case to the flat
    /// form so results of `transpose`, `mul` and friends stay canonical
    pub(crate) fn from_computed_rows(mut rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.len() == 1 {
            return Self::from_vec(rows.swap_remove(0));
        }
        Self::from_rows(rows)
    }

    /// Shape derived from the backing value
    pub fn shape(&self) -> Shape {
        match &self.data {
            MatrixData::Row(v) => Shape::new(1, v.len()),
            MatrixData::Grid(g) => Shape::new(g.len(), g[0].len()),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.shape().rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.shape().cols
    }

    /// True when row and column counts agree
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Element at (row, col), if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        match &self.data {
            MatrixData::Row(v) => {
                if row == 0 {
                    v.get(col).copied()
                } else {
                    None
                }
            }
            MatrixData::Grid(g) => g.get(row).and_then(|r| r.get(col).copied()),
        }
    }

    /// Borrow row `i`; for the flat form the whole sequence is row 0
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        match &self.data {
            MatrixData::Row(v) => (i == 0).then_some(v.as_slice()),
            MatrixData::Grid(g) => g.get(i).map(|r| r.as_slice()),
        }
    }

    /// Column `j` as an owned vector; for the flat form a column is the
    /// single scalar at position `j`
    pub fn col(&self, j: usize) -> Option<Vec<f64>> {
        if j >= self.cols() {
            return None;
        }
        Some(match &self.data {
            MatrixData::Row(v) => vec![v[j]],
            MatrixData::Grid(g) => g.iter().map(|r| r[j]).collect(),
        })
    }

    /// Read-only view of the backing value
    pub fn data(&self) -> &MatrixData {
        &self.data
    }

    /// Materialize as nested rows; the flat form becomes one nested row
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        match &self.data {
            MatrixData::Row(v) => vec![v.clone()],
            MatrixData::Grid(g) => g.clone(),
        }
    }

    /// Convert to an nalgebra matrix for delegated kernels
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        let shape = self.shape();
        DMatrix::from_fn(shape.rows, shape.cols, |i, j| match &self.data {
            MatrixData::Row(v) => v[j],
            MatrixData::Grid(g) => g[i][j],
        })
    }

    /// Convert back from an nalgebra matrix, canonicalizing the one-row case
    pub fn from_dmatrix(m: &DMatrix<f64>) -> Result<Self, MatrixError> {
        if m.nrows() == 0 || m.ncols() == 0 {
            return Err(MatrixError::invalid_shape(
                "cannot build a matrix from an empty kernel result",
            ));
        }
        if m.nrows() == 1 {
            return Self::from_vec((0..m.ncols()).map(|j| m[(0, j)]).collect());
        }
        Self::from_rows(
            (0..m.nrows())
                .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
                .collect(),
        )
    }
}

impl TryFrom<MatrixData> for Matrix {
    type Error = MatrixError;

    fn try_from(data: MatrixData) -> Result<Self, MatrixError> {
        match data {
            MatrixData::Row(v) => Matrix::from_vec(v),
            MatrixData::Grid(g) => Matrix::from_rows(g),
        }
    }
}

impl From<Matrix> for MatrixData {
    fn from(m: Matrix) -> MatrixData {
        m.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_vector_shape() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.shape(), Shape::new(1, 3));
    }

    #[test]
    fn test_single_element_is_valid() {
        let m = Matrix::from_vec(vec![1.0]).unwrap();
        assert_eq!(m.shape(), Shape::new(1, 1));
        assert!(m.is_square());
    }

    #[test]
    fn test_grid_shape() {
        let m = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 1);
    }

    #[test]
    fn test_rejects_redundant_nesting() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidShape(_)));
    }

    #[test]
    fn test_rejects_uneven_rows() {
        let err =
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidShape(_)));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Matrix::from_vec(vec![]).is_err());
        assert!(Matrix::from_rows(vec![]).is_err());
        assert!(Matrix::from_rows(vec![vec![], vec![]]).is_err());
    }

    #[test]
    fn test_get_in_and_out_of_bounds() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(1, 1), Some(4.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);

        let v = Matrix::from_vec(vec![5.0, 6.0]).unwrap();
        assert_eq!(v.get(0, 1), Some(6.0));
        assert_eq!(v.get(1, 0), None);
    }

    #[test]
    fn test_row_and_col_access() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row(1), Some(&[3.0, 4.0][..]));
        assert_eq!(m.col(0), Some(vec![1.0, 3.0]));
        assert_eq!(m.row(2), None);
        assert_eq!(m.col(2), None);

        let v = Matrix::from_vec(vec![1.0, 2.0]).unwrap();
        assert_eq!(v.row(0), Some(&[1.0, 2.0][..]));
        assert_eq!(v.col(1), Some(vec![2.0]));
    }

    #[test]
    fn test_dmatrix_round_trip() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let back = Matrix::from_dmatrix(&m.to_dmatrix()).unwrap();
        assert_eq!(m, back);

        let v = Matrix::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        let back = Matrix::from_dmatrix(&v.to_dmatrix()).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn test_structural_equality() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let c = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
