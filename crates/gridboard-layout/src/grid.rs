#![forbid(unsafe_code)]

//! Row-major placement of an ordered widget list into a bucket's columns.
//!
//! The dashboard grid flows left to right, then top to bottom, so the
//! widget at list index `i` lands in row `i / columns`, column
//! `i % columns`. Reordering the list is the only way to move a widget.

use gridboard_core::Bucket;

/// A cell position in the dashboard grid (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Row index.
    pub row: usize,
    /// Column index, `< columns`.
    pub column: usize,
}

/// Placement for `len` items in a bucket's column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    columns: usize,
    len: usize,
}

impl GridPlacement {
    /// Placement for `len` widgets in `bucket`.
    #[must_use]
    pub fn new(bucket: Bucket, len: usize) -> Self {
        Self {
            columns: usize::from(bucket.columns()),
            len,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows needed (the last row may be partial).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Cell for list index `index`, or `None` past the end.
    #[must_use]
    pub const fn cell(&self, index: usize) -> Option<GridCell> {
        if index >= self.len {
            return None;
        }
        Some(GridCell {
            row: index / self.columns,
            column: index % self.columns,
        })
    }

    /// List index occupying `cell`, or `None` for an empty cell.
    #[must_use]
    pub const fn index_at(&self, cell: GridCell) -> Option<usize> {
        if cell.column >= self.columns {
            return None;
        }
        let index = cell.row * self.columns + cell.column;
        if index < self.len { Some(index) } else { None }
    }

    /// All cells in list order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.len).filter_map(|i| self.cell(i))
    }
}
