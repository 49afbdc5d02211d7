use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Rows picked one at a time with ctrl+click on the row-index column.
///
/// Keeps insertion order. Toggling a present row removes it without
/// reordering the rows that remain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CtrlRows {
    rows: IndexSet<usize>,
}

impl CtrlRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(row: usize) -> Self {
        let mut rows = IndexSet::new();
        rows.insert(row);
        Self { rows }
    }

    /// Add the row if absent, remove it if present.
    ///
    /// Returns `true` when the row is selected afterwards.
    pub fn toggle(&mut self, row: usize) -> bool {
        if self.rows.shift_remove(&row) {
            false
        } else {
            self.rows.insert(row);
            true
        }
    }

    #[inline]
    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in the order they were picked
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for CtrlRows {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
