//! Tessera Matrix - immutable dimensionally-aware matrices
//!
//! Provides the Matrix value type for Tessera:
//! - Validated construction (flat row vectors, rectangular grids, identity,
//!   zeros, diagonal)
//! - Shape queries and compatibility predicates (addable, multipliable)
//! - Arithmetic (add, sub, mul, scale) and structural operations
//!   (transpose, map, map_rows)
//! - Inversion and determinant, delegated to nalgebra
//! - Column-aligned rendering via Display
//!
//! Matrices are value-semantic: every operation returns a new `Matrix` and
//! never mutates its inputs. Shape is derived from the backing value, which
//! is either a flat 1×N row vector or an M×N grid (M ≥ 2); the one-row grid
//! form is rejected at construction so the representation stays canonical.

mod types;
mod construct;
mod ops;
mod invert;
mod render;

pub use types::{Matrix, MatrixData};

// Re-export core types so callers need only one crate
pub use tessera_core::{MatrixError, Shape};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Matrix, MatrixData, MatrixError, Shape};
}
