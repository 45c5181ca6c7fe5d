//! Dense square probability matrices.

use serde::{Deserialize, Serialize};

use crate::error::{LangDistError, LangDistResult};

/// `N × N` matrix of non-negative reals stored row-major.
///
/// Every cell a language does not populate is exactly `0.0`; the distance
/// engine relies on that to skip cells.
///
/// Deserialization goes through the same checks as construction: the cell
/// count must be `dim²` and every cell finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct LangMatrix {
    dim: usize,
    cells: Vec<f64>,
}

/// Unchecked wire form of [`LangMatrix`].
#[derive(Deserialize)]
struct RawMatrix {
    dim: usize,
    cells: Vec<f64>,
}

impl TryFrom<RawMatrix> for LangMatrix {
    type Error = LangDistError;

    fn try_from(raw: RawMatrix) -> LangDistResult<Self> {
        if raw.dim.checked_mul(raw.dim) != Some(raw.cells.len()) {
            return Err(LangDistError::invalid_param(
                "cells",
                raw.cells.len(),
                format!("a {0}x{0} matrix needs {0}² cells", raw.dim),
            ));
        }
        if let Some(bad) = raw.cells.iter().find(|v| !(v.is_finite() && **v >= 0.0)) {
            return Err(LangDistError::invalid_param(
                "cells",
                bad,
                "cells must be finite and non-negative",
            ));
        }
        Ok(Self {
            dim: raw.dim,
            cells: raw.cells,
        })
    }
}

impl LangMatrix {
    /// All-zero matrix of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![0.0; dim * dim],
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if any row's length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> LangDistResult<Self> {
        let dim = rows.len();
        let mut cells = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(LangDistError::ShapeMismatch {
                    left: dim,
                    right: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { dim, cells })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Value at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.dim + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.dim && col < self.dim, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.dim + col] = value;
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, an empty matrix has no rows anyway
        self.cells.chunks_exact(self.dim.max(1))
    }

    /// Number of non-zero cells.
    pub fn nonzero_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0.0).count()
    }

    /// Sum of all cells.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }
}
