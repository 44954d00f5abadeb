//! The table model
//!
//! Owns column metadata, inferred column types, row storage, sort state and
//! the selection/highlight sets, plus every operation that mutates or
//! queries that state. A view layer renders from the query surface and
//! translates user gestures into the mutation operations (directly, or via
//! [`Gesture`] dispatch); the model never calls back into the view and
//! pushes no change notifications, so callers re-query after mutating.

mod dispatch;
mod rows;
mod selection;
mod sort;

pub use dispatch::*;
pub use sort::SortState;

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DataError;
use crate::model::Column;
use crate::model::ColumnType;
use crate::model::Row;
use crate::model::Value;
use crate::options::TableOptions;

/// The construction payload: column definitions plus row records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    /// Column definitions, in initial display order.
    pub columns: Vec<Column>,
    /// Row records. Must be non-empty; type inference reads the first row.
    pub rows: Vec<Row>,
}

/// The table model.
///
/// # Example
///
/// ```
/// use xtable_lib::options::TableOptions;
/// use xtable_lib::table::{Table, TableData};
///
/// let data: TableData = serde_json::from_str(r#"{
///     "columns": [{"id": "name", "label": "Name"}, {"id": "age", "label": "Age"}],
///     "rows": [
///         {"id": "r1", "name": "Ada", "age": 36},
///         {"id": "r2", "name": "Grace", "age": 85}
///     ]
/// }"#).unwrap();
///
/// let mut table = Table::new(data, TableOptions::default()).unwrap();
/// table.sort_by("age", Some(false)).unwrap();
/// assert_eq!(table.rows()[0].id(), "r2");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Display order of column ids. Independent from the column map;
    /// mutated only by explicit reordering.
    column_order: Vec<String>,
    /// Column id to column metadata.
    columns: HashMap<String, Column>,
    /// Column label to column id reverse lookup.
    labels: HashMap<String, String>,
    /// Column id to type inferred from the first row at load time.
    types: HashMap<String, ColumnType>,
    /// Row storage, in current display order.
    rows: Vec<Row>,
    sort: SortState,
    options: TableOptions,
    pub(crate) selected: HashSet<String>,
    pub(crate) highlighted: HashSet<String>,
}

impl Table {
    /// Builds a table from a data payload and configuration.
    ///
    /// Fails fast on malformed input (empty rows, duplicate column ids or
    /// labels). The configured column order and row order are applied as
    /// part of the load.
    pub fn new(data: TableData, options: TableOptions) -> Result<Self, DataError> {
        let mut table = Self {
            column_order: Vec::new(),
            columns: HashMap::new(),
            labels: HashMap::new(),
            types: HashMap::new(),
            rows: Vec::new(),
            sort: SortState::default(),
            options,
            selected: HashSet::new(),
            highlighted: HashSet::new(),
        };
        table.update_data(data)?;
        Ok(table)
    }

    /// Replaces the whole dataset.
    ///
    /// All lookup structures are rebuilt from scratch (never merged with
    /// prior state), column types are re-inferred from the new first row,
    /// sort state and selection are reset, and the configured column and
    /// row ordering are re-applied. Validation completes before any state
    /// is touched, so a failed load leaves the previous dataset intact.
    pub fn update_data(&mut self, data: TableData) -> Result<(), DataError> {
        let first = data.rows.first().ok_or(DataError::EmptyRows)?;

        let mut column_order = Vec::with_capacity(data.columns.len());
        let mut columns = HashMap::with_capacity(data.columns.len());
        let mut labels = HashMap::with_capacity(data.columns.len());
        let mut types = HashMap::with_capacity(data.columns.len());

        for column in &data.columns {
            if columns.contains_key(&column.id) {
                return Err(DataError::duplicate_column_id(&column.id));
            }
            if labels.contains_key(&column.label) {
                return Err(DataError::duplicate_column_label(&column.label));
            }
            // First-row-wins type sampling; never revisited for later rows.
            let column_type = ColumnType::infer(first.value_or_null(&column.id));
            column_order.push(column.id.clone());
            labels.insert(column.label.clone(), column.id.clone());
            types.insert(column.id.clone(), column_type);
            columns.insert(column.id.clone(), column.clone());
        }

        self.column_order = column_order;
        self.columns = columns;
        self.labels = labels;
        self.types = types;
        self.rows = data.rows;
        self.sort = SortState::default();
        self.selected.clear();
        self.highlighted.clear();

        log::debug!(
            "loaded {} columns, {} rows",
            self.column_order.len(),
            self.rows.len()
        );

        if let Some(order) = self.options.column_order.clone() {
            self.set_column_order(&order);
        }
        if let Some(row_order) = self.options.row_order.clone() {
            match self.column_id_for_label(&row_order.label) {
                Some(id) => {
                    let id = id.to_string();
                    // The id was just resolved from the label map, so the
                    // sort cannot miss.
                    let _ = self.sort_by(&id, Some(row_order.ascending));
                }
                None => log::warn!(
                    "rowOrder column '{}' not found; skipping initial sort",
                    row_order.label
                ),
            }
        }

        Ok(())
    }

    /// Replaces the stored options.
    ///
    /// Already-applied ordering is not re-derived; the new `columnOrder`
    /// and `rowOrder` take effect on the next data load.
    pub fn update_options(&mut self, options: TableOptions) {
        self.options = options;
    }

    /// Returns the stored options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    // =========================================================================
    // Column queries
    // =========================================================================

    /// Returns the column metadata in current display order.
    pub fn columns(&self) -> Vec<Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id).cloned())
            .collect()
    }

    /// Returns the column labels in current display order.
    pub fn column_names(&self) -> Vec<String> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id).map(|c| c.label.clone()))
            .collect()
    }

    /// Returns the column ids in current display order.
    pub fn column_ids(&self) -> &[String] {
        &self.column_order
    }

    /// Returns the inferred type of a column.
    pub fn column_type(&self, id: &str) -> Option<ColumnType> {
        self.types.get(id).copied()
    }

    /// Resolves a column label to its id.
    pub fn column_id_for_label(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    /// Reorders the column sequence.
    ///
    /// Ids listed in `order` come first, in that order; unlisted ids keep
    /// their relative order after all listed ones. Stable reorder of the
    /// existing sequence, never a replacement.
    pub fn set_column_order(&mut self, order: &[String]) {
        // Unknown index sorts after every listed id.
        self.column_order
            .sort_by_key(|id| order.iter().position(|o| o == id).unwrap_or(usize::MAX));
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Projects a row down to exactly the currently known column ids.
    ///
    /// Cells for absent columns read as null; extra fields on the row
    /// (including its identifier, unless `id` is itself a declared column)
    /// never leak into the output.
    pub fn serialize_row(&self, row: &Row) -> HashMap<String, Value> {
        self.column_order
            .iter()
            .map(|column_id| {
                let value = match row.get(column_id) {
                    Some(value) => value.clone(),
                    // A declared "id" column reads the row identifier.
                    None if column_id == "id" => Value::String(row.id().to_string()),
                    None => Value::Null,
                };
                (column_id.clone(), value)
            })
            .collect()
    }

    /// Serializes every row, in current order.
    pub fn serialized(&self) -> Vec<HashMap<String, Value>> {
        self.rows.iter().map(|row| self.serialize_row(row)).collect()
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use crate::model::Column;

    /// Three rows over a text, a numeric and a text column.
    pub(crate) fn sample_data() -> TableData {
        TableData {
            columns: vec![
                Column::new("name", "Name"),
                Column::new("age", "Age"),
                Column::new("city", "City"),
            ],
            rows: vec![
                Row::new("r1").set("name", "Ada").set("age", 36i64).set("city", "London"),
                Row::new("r2")
                    .set("name", "Grace")
                    .set("age", 85i64)
                    .set("city", "Arlington"),
                Row::new("r3").set("name", "Edsger").set("age", 72i64).set("city", "Austin"),
            ],
        }
    }

    pub(crate) fn sample_table() -> Table {
        Table::new(sample_data(), TableOptions::default()).unwrap()
    }
}
