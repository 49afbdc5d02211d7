//! The selection state machine.
//!
//! A grid has exactly one active selection mode at a time. Modeling the modes
//! as variants of one enum means entering a mode always replaces whatever was
//! selected before; there is no combination of fields to keep in sync.

use serde::{Deserialize, Serialize};

use crate::coordinate::CellCoordinate;
use crate::ctrl_rows::CtrlRows;
use crate::normalize::{CellRegion, RowInterval};

/// Lifecycle of a range selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePhase {
    /// Anchor set, focus follows the pointer
    #[default]
    Pending,
    /// Closed by a second qualifying click; ready to export
    Finalized,
}

/// Which selection mode is active, without its extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Empty,
    CellRange,
    RowRange,
    CtrlRows,
}

/// The single active selection of a grid.
///
/// `anchor` and `focus` are kept in click order. Use [`SelectionState::cell_region`]
/// or [`SelectionState::row_interval`] to read canonical bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Empty,
    CellRange {
        anchor: CellCoordinate,
        focus: CellCoordinate,
        phase: RangePhase,
    },
    RowRange {
        anchor: usize,
        focus: usize,
        phase: RangePhase,
    },
    CtrlRows {
        rows: CtrlRows,
    },
}

impl SelectionState {
    /// Pending single-cell range, as left by the first shift+click
    pub fn cell_range(anchor: CellCoordinate) -> Self {
        Self::CellRange {
            anchor,
            focus: anchor,
            phase: RangePhase::Pending,
        }
    }

    /// Pending single-row range, as left by the first shift+click on the row-index column
    pub fn row_range(anchor: usize) -> Self {
        Self::RowRange {
            anchor,
            focus: anchor,
            phase: RangePhase::Pending,
        }
    }

    pub fn ctrl_rows(row: usize) -> Self {
        Self::CtrlRows {
            rows: CtrlRows::single(row),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Empty => SelectionMode::Empty,
            Self::CellRange { .. } => SelectionMode::CellRange,
            Self::RowRange { .. } => SelectionMode::RowRange,
            Self::CtrlRows { .. } => SelectionMode::CtrlRows,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Phase of the active range, `None` for non-range modes
    pub fn phase(&self) -> Option<RangePhase> {
        match self {
            Self::CellRange { phase, .. } | Self::RowRange { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.phase() == Some(RangePhase::Finalized)
    }

    /// Drop the active selection
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Canonical rectangle of an active cell range
    pub fn cell_region(&self) -> Option<CellRegion> {
        match self {
            Self::CellRange { anchor, focus, .. } => Some(CellRegion::from_corners(*anchor, *focus)),
            _ => None,
        }
    }

    /// Canonical interval of an active row range
    pub fn row_interval(&self) -> Option<RowInterval> {
        match self {
            Self::RowRange { anchor, focus, .. } => Some(RowInterval::from_endpoints(*anchor, *focus)),
            _ => None,
        }
    }

    /// Rows picked with ctrl+click, in pick order
    pub fn ctrl_row_list(&self) -> Option<&CtrlRows> {
        match self {
            Self::CtrlRows { rows } => Some(rows),
            _ => None,
        }
    }

    /// Whether a rendered cell should be highlighted.
    ///
    /// Row selections cover every column of their rows, the row-index column included.
    pub fn contains_cell(&self, coordinate: CellCoordinate) -> bool {
        match self {
            Self::Empty => false,
            Self::CellRange { anchor, focus, .. } => {
                CellRegion::from_corners(*anchor, *focus).contains(coordinate)
            }
            Self::RowRange { .. } | Self::CtrlRows { .. } => self.contains_row(coordinate.row),
        }
    }

    /// Whether a whole row is selected (row range or ctrl rows)
    pub fn contains_row(&self, row: usize) -> bool {
        match self {
            Self::RowRange { anchor, focus, .. } => {
                RowInterval::from_endpoints(*anchor, *focus).contains(row)
            }
            Self::CtrlRows { rows } => rows.contains(row),
            _ => false,
        }
    }

    /// Number of whole rows selected
    pub fn selected_row_count(&self) -> usize {
        match self {
            Self::RowRange { anchor, focus, .. } => RowInterval::from_endpoints(*anchor, *focus).len(),
            Self::CtrlRows { rows } => rows.len(),
            _ => 0,
        }
    }

    /// Number of cells in an active cell range
    pub fn selected_cell_count(&self) -> usize {
        self.cell_region().map(|r| r.cell_count()).unwrap_or(0)
    }

    /// Short human-readable summary for status bars
    pub fn summary(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::CellRange { anchor, focus, .. } => {
                let region = CellRegion::from_corners(*anchor, *focus);
                format!(
                    "{} cells ({} x {})",
                    region.cell_count(),
                    region.row_count(),
                    region.column_count()
                )
            }
            Self::RowRange { .. } | Self::CtrlRows { .. } => {
                let count = self.selected_row_count();
                if count == 1 {
                    "1 row".to_string()
                } else {
                    format!("{count} rows")
                }
            }
        }
    }
}
