//! Tabular projection of records

use graphlens_core::ScalarRow;

/// Collects one [`ScalarRow`] per qualifying record
///
/// A record qualifies when it has at least one scalar field, or when it had no
/// graph-shaped field at all. A record holding only nodes, relationships or
/// paths contributes nothing.
#[derive(Debug, Default)]
pub struct RowBuilder {
    rows: Vec<ScalarRow>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the scalar fields of one record; returns true if a row was added
    pub fn add_record(&mut self, scalars: ScalarRow, had_graph_field: bool) -> bool {
        if scalars.is_empty() && had_graph_field {
            return false;
        }
        self.rows.push(scalars);
        true
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows collected so far, absent when there are none
    pub fn rows(&self) -> Option<&[ScalarRow]> {
        if self.rows.is_empty() {
            None
        } else {
            Some(&self.rows)
        }
    }

    /// Finish collection; absent when no row was collected
    pub fn into_rows(self) -> Option<Vec<ScalarRow>> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.rows)
        }
    }
}
