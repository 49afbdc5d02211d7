//! Delimited text for cell ranges, and the request shape for row ranges.

use gridclip_core::{CellCoordinate, CellRegion, RowInterval};
use serde::{Deserialize, Serialize};

use crate::error::ExportResult;
use crate::grid::GridSource;

/// Separators used when rendering a cell range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    /// Between values of one row
    pub column: String,
    /// After every line, the last one included
    pub line: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            column: "\t".to_string(),
            line: "\n".to_string(),
        }
    }
}

/// Formatting choices applied when an export view opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportOptions {
    /// Initial state of the header toggle
    pub include_headers: bool,
    pub delimiters: Delimiters,
}

/// Render a cell region from the values the grid currently shows.
///
/// Blank or unmaterialized cells become empty strings. With `include_headers`
/// the first line holds the column names of the region.
pub fn render_cell_region(
    region: &CellRegion,
    grid: &dyn GridSource,
    include_headers: bool,
    delimiters: &Delimiters,
) -> String {
    let mut text = String::new();

    if include_headers {
        let header: Vec<&str> = region
            .columns()
            .map(|column| grid.column_name(column).unwrap_or_default())
            .collect();
        text.push_str(&header.join(&delimiters.column));
        text.push_str(&delimiters.line);
    }

    for row in region.rows() {
        let values: Vec<&str> = region
            .columns()
            .map(|column| {
                grid.cell_value(CellCoordinate::new(column, row))
                    .unwrap_or_default()
            })
            .collect();
        text.push_str(&values.join(&delimiters.column));
        text.push_str(&delimiters.line);
    }

    text
}

/// Parameters sent to the row export endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowExportRequest {
    pub start_row: usize,
    pub end_row: usize,
    /// Visible data columns, in grid order
    pub columns: Vec<String>,
}

impl RowExportRequest {
    pub fn new(interval: RowInterval, columns: Vec<String>) -> Self {
        let interval = interval.normalize();
        Self {
            start_row: interval.start_row,
            end_row: interval.end_row,
            columns,
        }
    }

    pub fn interval(&self) -> RowInterval {
        RowInterval::from_endpoints(self.start_row, self.end_row)
    }

    /// Column names as a JSON list literal, e.g. `["col1","col2"]`
    pub fn columns_literal(&self) -> ExportResult<String> {
        Ok(serde_json::to_string(&self.columns)?)
    }

    /// Form fields as the endpoint expects them
    pub fn form_fields(&self) -> ExportResult<Vec<(&'static str, String)>> {
        Ok(vec![
            ("start", self.start_row.to_string()),
            ("end", self.end_row.to_string()),
            ("columns", self.columns_literal()?),
        ])
    }
}
