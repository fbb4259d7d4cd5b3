#![forbid(unsafe_code)]

//! Ragged grid storage for decoded cells.
//!
//! Art files routinely have rows of differing lengths (newline-delimited
//! sources trim trailing spaces), so rows are stored as-is and the grid
//! width is the longest row seen. Trailing columns of short rows are
//! simply absent and rasterize as transparent.
//!
//! # Invariants
//!
//! 1. `width()` equals the length of the longest row
//! 2. `height()` equals the number of completed rows
//! 3. Rows are immutable once recorded

use crate::cell::Cell;

/// A ragged, row-major grid of decoded cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl CellGrid {
    /// Create an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            width: 0,
        }
    }

    /// Build a grid from pre-assembled rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Record a completed row, updating the cached width.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Width in columns (length of the longest row).
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when the grid has no renderable content (zero rows or zero
    /// columns). This is the sole failure signal the parser produces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    /// All rows, in order.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The row at `y`, or `None` past the last row.
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// The cell at `(x, y)`, or `None` outside the ragged extent.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }
}
