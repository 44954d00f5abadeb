//! Row store: identity-addressed CRUD on the live row collection.

use std::collections::HashMap;

use super::Table;
use crate::error::AccessError;
use crate::model::Row;
use crate::model::Value;

impl Table {
    /// Returns the live row collection, in current order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows. Only reachable through
    /// removal; a data load always carries at least one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the serialized view of the row with the given id, restricted
    /// to the currently known columns.
    pub fn get_row(&self, id: &str) -> Result<HashMap<String, Value>, AccessError> {
        let row = self
            .rows
            .iter()
            .find(|row| row.id() == id)
            .ok_or_else(|| AccessError::row_not_found(id))?;
        Ok(self.serialize_row(row))
    }

    /// Removes every row whose id matches (normally exactly one).
    ///
    /// Returns `true` if anything was removed; a miss is a no-op. A removed
    /// id is also dropped from the selection and highlight sets so they
    /// never point at rows that no longer exist.
    pub fn remove_row(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        let removed = self.rows.len() != before;
        if removed {
            self.selected.remove(id);
            self.highlighted.remove(id);
            log::debug!("removed row '{}'", id);
        }
        removed
    }

    /// Moves the row at `from` so that it lands at index `to`.
    ///
    /// Positional on purpose: this backs drag-and-drop, where the view
    /// already knows both positions. Out-of-range indices are an explicit
    /// error and leave the order untouched.
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<(), AccessError> {
        let len = self.rows.len();
        if from >= len {
            return Err(AccessError::RowIndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(AccessError::RowIndexOutOfBounds { index: to, len });
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        log::debug!("moved row from {} to {}", from, to);
        Ok(())
    }

    /// Sets one cell on the row with the given id.
    ///
    /// Addressed by column id; view layers that only know the column label
    /// translate it first (see [`Gesture::CellEdit`](super::Gesture)).
    pub fn update_cell(
        &mut self,
        row_id: &str,
        column_id: &str,
        value: impl Into<Value>,
    ) -> Result<(), AccessError> {
        if !self.columns.contains_key(column_id) {
            return Err(AccessError::column_not_found(column_id));
        }
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == row_id)
            .ok_or_else(|| AccessError::row_not_found(row_id))?;
        row.insert(column_id, value.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::sample_table;
    use super::*;

    fn ids(table: &Table) -> Vec<&str> {
        table.rows().iter().map(Row::id).collect()
    }

    #[test]
    fn test_get_row_serializes_by_id() {
        let table = sample_table();
        let row = table.get_row("r2").unwrap();
        assert_eq!(row["name"], Value::from("Grace"));
        assert_eq!(row["age"], Value::Int(85));
    }

    #[test]
    fn test_get_row_miss_is_typed() {
        let table = sample_table();
        assert_eq!(
            table.get_row("nope").unwrap_err(),
            AccessError::row_not_found("nope")
        );
    }

    #[test]
    fn test_remove_row_removes_exactly_one() {
        let mut table = sample_table();
        assert!(table.remove_row("r2"));
        assert_eq!(table.len(), 2);
        assert_eq!(ids(&table), ["r1", "r3"]);
        // Remaining rows untouched.
        assert_eq!(table.get_row("r1").unwrap()["age"], Value::Int(36));
    }

    #[test]
    fn test_remove_row_miss_is_noop() {
        let mut table = sample_table();
        assert!(!table.remove_row("nope"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_move_row_front_to_back() {
        let mut table = sample_table();
        table.move_row(0, 2).unwrap();
        assert_eq!(ids(&table), ["r2", "r3", "r1"]);
    }

    #[test]
    fn test_move_row_back_to_front() {
        let mut table = sample_table();
        table.move_row(2, 0).unwrap();
        assert_eq!(ids(&table), ["r3", "r1", "r2"]);
    }

    #[test]
    fn test_move_row_out_of_range() {
        let mut table = sample_table();
        assert_eq!(
            table.move_row(3, 0).unwrap_err(),
            AccessError::RowIndexOutOfBounds { index: 3, len: 3 }
        );
        assert_eq!(
            table.move_row(0, 9).unwrap_err(),
            AccessError::RowIndexOutOfBounds { index: 9, len: 3 }
        );
        assert_eq!(ids(&table), ["r1", "r2", "r3"]);
    }

    #[test]
    fn test_update_cell_round_trip() {
        let mut table = sample_table();
        table.update_cell("r1", "city", "Cambridge").unwrap();
        assert_eq!(
            table.get_row("r1").unwrap()["city"],
            Value::from("Cambridge")
        );
    }

    #[test]
    fn test_update_cell_misses_are_typed() {
        let mut table = sample_table();
        assert_eq!(
            table.update_cell("nope", "city", "x").unwrap_err(),
            AccessError::row_not_found("nope")
        );
        assert_eq!(
            table.update_cell("r1", "nope", "x").unwrap_err(),
            AccessError::column_not_found("nope")
        );
    }
}
