//! Identity-bearing row storage

use std::collections::HashMap;

use super::Value;

static NULL: Value = Value::Null;

/// One table row: an opaque stable identifier plus cells keyed by column id.
///
/// The identifier addresses the row for selection, removal, lookup and
/// editing; array position is never used as identity (drag-reorder is the
/// one positional operation, and it lives on the table, not the row).
///
/// # Example
///
/// ```
/// use xtable_lib::model::Row;
///
/// let row = Row::new("r1").set("name", "Ada").set("age", 36i64);
/// assert_eq!(row.id(), "r1");
/// assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The opaque stable identifier.
    pub(crate) id: String,

    /// Cell values keyed by column id.
    pub(crate) cells: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: HashMap::new(),
        }
    }

    /// Returns the row identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a reference to the cell value, if the cell exists.
    pub fn get(&self, column_id: &str) -> Option<&Value> {
        self.cells.get(column_id)
    }

    /// Returns the cell value, reading absent cells as null.
    pub fn value_or_null(&self, column_id: &str) -> &Value {
        self.cells.get(column_id).unwrap_or(&NULL)
    }

    /// Returns `true` if the row has a cell for the given column id.
    pub fn contains(&self, column_id: &str) -> bool {
        self.cells.contains_key(column_id)
    }

    /// Returns a reference to all cells.
    pub fn cells(&self) -> &HashMap<String, Value> {
        &self.cells
    }

    /// Sets a cell value (builder pattern).
    pub fn set(mut self, column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }

    /// Inserts a cell value.
    pub fn insert(&mut self, column_id: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(column_id.into(), value.into());
    }

    /// Removes a cell and returns its value.
    pub fn remove(&mut self, column_id: &str) -> Option<Value> {
        self.cells.remove(column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_access() {
        let row = Row::new("r1").set("a", 1i64).set("b", "x");
        assert_eq!(row.id(), "r1");
        assert_eq!(row.get("a"), Some(&Value::Int(1)));
        assert!(row.contains("b"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_value_or_null_for_absent_cell() {
        let row = Row::new("r1");
        assert!(row.value_or_null("anything").is_null());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut row = Row::new("r1").set("a", 1i64);
        row.insert("a", 2i64);
        assert_eq!(row.get("a"), Some(&Value::Int(2)));
    }
}
