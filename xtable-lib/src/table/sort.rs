//! Stable sort engine

use std::cmp::Ordering;

use serde::Serialize;

use super::Table;
use crate::error::AccessError;
use crate::model::ColumnType;
use crate::model::Value;

/// Current sort state: at most one active sort column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    /// The active sort column id, if any.
    pub column: Option<String>,
    /// Sort direction for the active column.
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl Table {
    /// Returns the current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Sorts the rows by a column, in place.
    ///
    /// `None` direction on the already-active column flips the direction;
    /// establishing a new sort column without an explicit direction sorts
    /// ascending. An explicit direction is set exactly, regardless of the
    /// current state.
    ///
    /// The sort is stable: rows whose keys compare equal keep their
    /// relative order, in both directions, so repeated re-sorts on tied
    /// keys are deterministic. An unknown column is an error and leaves
    /// both the sort state and the row order untouched.
    pub fn sort_by(&mut self, column_id: &str, direction: Option<bool>) -> Result<(), AccessError> {
        let column_type = self
            .column_type(column_id)
            .ok_or_else(|| AccessError::column_not_found(column_id))?;

        let ascending = match direction {
            None if self.sort.column.as_deref() == Some(column_id) => !self.sort.ascending,
            None => true,
            Some(direction) => direction,
        };
        self.sort.column = Some(column_id.to_string());
        self.sort.ascending = ascending;

        // Vec::sort_by is stable; reversing Equal keeps ties in input order
        // for descending sorts too.
        self.rows.sort_by(|ra, rb| {
            let ordering = compare_values(
                ra.value_or_null(column_id),
                rb.value_or_null(column_id),
                column_type,
            );
            if ascending { ordering } else { ordering.reverse() }
        });

        log::debug!(
            "sorted by '{}' ({})",
            column_id,
            if ascending { "asc" } else { "desc" }
        );
        Ok(())
    }
}

/// Three-way compare of two cells under a column's inferred type.
///
/// Numeric and Date columns compare raw values; a cell that does not hold
/// the column's type compares Equal (a silent data issue by contract,
/// which can make such comparisons degenerate). Text columns, and every
/// other type, compare upper-cased display strings.
fn compare_values(a: &Value, b: &Value, column_type: ColumnType) -> Ordering {
    match column_type {
        ColumnType::Numeric => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        ColumnType::Date => match (a.as_date(), b.as_date()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        },
        ColumnType::Text => a
            .to_string()
            .to_uppercase()
            .cmp(&b.to_string().to_uppercase()),
    }
}
