use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GridError, GridResult};

/// Separator between the column and row halves of a cell key
pub const CELL_KEY_SEPARATOR: char = '|';

/// Column index of the non-data row-index column at the grid's left edge
pub const ROW_HEADER_COLUMN: usize = 0;

/// Logical position of a rendered cell.
///
/// Column `0` is the row-index column; clicks there select whole rows instead
/// of cells. Ordering is row-major so sorted coordinates read like the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellCoordinate {
    pub column: usize,
    pub row: usize,
}

impl CellCoordinate {
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Whether this coordinate sits in the row-index column
    #[inline]
    pub const fn is_row_header(&self) -> bool {
        self.column == ROW_HEADER_COLUMN
    }

    /// Encode as the `"<column>|<row>"` attribute key
    pub fn to_key(&self) -> String {
        self.to_string()
    }

    /// Decode an attribute key produced by [`CellCoordinate::to_key`]
    pub fn parse_key(key: &str) -> GridResult<Self> {
        key.parse()
    }
}

impl PartialOrd for CellCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellCoordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, CELL_KEY_SEPARATOR, self.row)
    }
}

impl FromStr for CellCoordinate {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidCoordinate(s.to_string());
        let (column, row) = s.split_once(CELL_KEY_SEPARATOR).ok_or_else(invalid)?;
        let column = column.parse::<usize>().map_err(|_| invalid())?;
        let row = row.parse::<usize>().map_err(|_| invalid())?;
        Ok(Self { column, row })
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from((column, row): (usize, usize)) -> Self {
        Self { column, row }
    }
}

impl Serialize for CellCoordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellCoordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
