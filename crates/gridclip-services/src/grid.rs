//! Read access to what the grid has rendered.

use std::collections::BTreeMap;

use gridclip_core::{CellCoordinate, ROW_HEADER_COLUMN};

/// The grid rendering collaborator as seen by the exporter.
///
/// Column indexes are grid columns: `0` is the row-index column and data
/// columns start at `1`.
pub trait GridSource {
    /// Raw value currently rendered at `coordinate`, `None` when the cell is
    /// blank or its row is not materialized
    fn cell_value(&self, coordinate: CellCoordinate) -> Option<&str>;

    /// Display name of a data column
    fn column_name(&self, column: usize) -> Option<&str>;

    /// Names of the visible data columns in grid order
    fn visible_columns(&self) -> Vec<String>;
}

/// In-memory rendered grid: visible column names plus the rows currently
/// materialized by the virtualized view.
#[derive(Clone, Debug, Default)]
pub struct RenderedGrid {
    columns: Vec<String>,
    rows: BTreeMap<usize, Vec<Option<String>>>,
}

impl RenderedGrid {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: BTreeMap::new(),
        }
    }

    /// Builder form of [`RenderedGrid::set_row`]
    pub fn with_row<I, S>(mut self, row: usize, values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.set_row(row, values);
        self
    }

    /// Materialize a row. `values[0]` belongs to data column `1`.
    pub fn set_row<I, S>(&mut self, row: usize, values: I)
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let values = values.into_iter().map(|v| v.map(Into::into)).collect();
        self.rows.insert(row, values);
    }

    /// Drop rows that scrolled out of the rendered window
    pub fn evict_rows_outside(&mut self, keep: std::ops::RangeInclusive<usize>) {
        self.rows.retain(|row, _| keep.contains(row));
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn materialized_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.keys().copied()
    }

    fn data_index(column: usize) -> Option<usize> {
        column.checked_sub(ROW_HEADER_COLUMN + 1)
    }
}

impl GridSource for RenderedGrid {
    fn cell_value(&self, coordinate: CellCoordinate) -> Option<&str> {
        let index = Self::data_index(coordinate.column)?;
        self.rows
            .get(&coordinate.row)?
            .get(index)?
            .as_deref()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        let index = Self::data_index(column)?;
        self.columns.get(index).map(String::as_str)
    }

    fn visible_columns(&self) -> Vec<String> {
        self.columns.clone()
    }
}
