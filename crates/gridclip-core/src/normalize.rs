//! Canonical rectangles and row intervals.
//!
//! Range selections store their endpoints in click order. Everything that
//! reads a range (export, highlighting) goes through the types here, which
//! sort each axis independently so the drag direction never matters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::coordinate::CellCoordinate;

/// A rectangular region of cells with inclusive bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRegion {
    pub min_column: usize,
    pub max_column: usize,
    pub min_row: usize,
    pub max_row: usize,
}

impl CellRegion {
    /// Create a region from two opposite corners given in any order
    #[inline]
    pub fn from_corners(a: CellCoordinate, b: CellCoordinate) -> Self {
        Self {
            min_column: a.column.min(b.column),
            max_column: a.column.max(b.column),
            min_row: a.row.min(b.row),
            max_row: a.row.max(b.row),
        }
    }

    /// Create a single-cell region
    #[inline]
    pub fn single(coordinate: CellCoordinate) -> Self {
        Self::from_corners(coordinate, coordinate)
    }

    /// Re-sort the bounds. A region built by [`CellRegion::from_corners`] is
    /// already canonical and comes back unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        Self::from_corners(
            CellCoordinate::new(self.min_column, self.min_row),
            CellCoordinate::new(self.max_column, self.max_row),
        )
    }

    /// Top-left corner
    #[inline]
    pub fn top_left(&self) -> CellCoordinate {
        CellCoordinate::new(self.min_column, self.min_row)
    }

    /// Bottom-right corner
    #[inline]
    pub fn bottom_right(&self) -> CellCoordinate {
        CellCoordinate::new(self.max_column, self.max_row)
    }

    #[inline]
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.min_column..=self.max_column
    }

    #[inline]
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.min_row..=self.max_row
    }

    /// Check if a cell is within this region - O(1)
    #[inline]
    pub fn contains(&self, coordinate: CellCoordinate) -> bool {
        self.columns().contains(&coordinate.column) && self.rows().contains(&coordinate.row)
    }

    /// Saturates at `usize::MAX` for a region spanning the whole axis
    #[inline]
    pub fn row_count(&self) -> usize {
        span(self.min_row, self.max_row)
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        span(self.min_column, self.max_column)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.row_count().saturating_mul(self.column_count())
    }

    /// Iterate over all cells in the region (row-major order)
    pub fn iter(&self) -> impl Iterator<Item = CellCoordinate> + '_ {
        self.rows()
            .flat_map(move |row| self.columns().map(move |column| CellCoordinate { column, row }))
    }
}

/// A contiguous, inclusive interval of rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowInterval {
    pub start_row: usize,
    pub end_row: usize,
}

impl RowInterval {
    /// Create an interval from two endpoints given in any order
    #[inline]
    pub fn from_endpoints(a: usize, b: usize) -> Self {
        Self {
            start_row: a.min(b),
            end_row: a.max(b),
        }
    }

    #[inline]
    pub fn normalize(self) -> Self {
        Self::from_endpoints(self.start_row, self.end_row)
    }

    #[inline]
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start_row && row <= self.end_row
    }

    /// Saturates at `usize::MAX`, like [`CellRegion::row_count`]
    #[inline]
    pub fn len(&self) -> usize {
        span(self.start_row, self.end_row)
    }

    /// Never true; an interval always holds at least one row
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        self.start_row..=self.end_row
    }
}

#[inline]
fn span(min: usize, max: usize) -> usize {
    max.saturating_sub(min).saturating_add(1)
}
