//! Dense rectangular grids of fractions.

use crate::error::AstError;
use crate::fraction::Fraction;

/// A non-empty rectangular matrix of fractions, stored flat in row-major
/// order. Shape is validated at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Fraction>,
}

impl Matrix {
    /// Build from rows of cells. Every row must have the same non-zero
    /// length and there must be at least one row.
    pub fn from_rows(rows: Vec<Vec<Fraction>>) -> Result<Self, AstError> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(AstError::InvalidMatrix {
                reason: "matrix needs at least one row and one column".to_string(),
            });
        }
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(AstError::InvalidMatrix {
                    reason: format!("row {} has {} cells, expected {}", i + 1, row.len(), cols),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Build cell by cell from a closure over `(row, col)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut cell: impl FnMut(usize, usize) -> Fraction,
    ) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(cell(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// The n-by-n identity: `1/1` on the diagonal, `0/1` elsewhere.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| {
            if i == j {
                Fraction::one()
            } else {
                Fraction::zero()
            }
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &Fraction {
        &self.data[row * self.cols + col]
    }

    /// One row as a slice of cells.
    pub fn row(&self, row: usize) -> &[Fraction] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}
