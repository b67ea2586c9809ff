//! Human-readable rendering
//!
//! A row vector renders as a single space-separated line. A grid renders one
//! bracketed line per row, every column right-aligned to the widest entry in
//! that column. Entries use the value's natural decimal form; negative signs
//! count toward the width.

use crate::types::{Matrix, MatrixData};
use std::fmt;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            MatrixData::Row(v) => {
                write!(f, "[")?;
                for x in v {
                    write!(f, " {x}")?;
                }
                write!(f, " ]")
            }
            MatrixData::Grid(g) => {
                // Column widths are computed independently per column
                let widths: Vec<usize> = (0..g[0].len())
                    .map(|j| {
                        g.iter()
                            .map(|row| row[j].to_string().len())
                            .max()
                            .unwrap_or(0)
                    })
                    .collect();
                for (i, row) in g.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[")?;
                    for (j, x) in row.iter().enumerate() {
                        write!(f, " {x:>width$}", width = widths[j])?;
                    }
                    write!(f, " ]")?;
                }
                Ok(())
            }
        }
    }
}
