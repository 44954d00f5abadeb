//! Load-time data payload errors

/// Error type for malformed construction payloads.
///
/// Raised by [`Table::new`](crate::table::Table::new) and
/// [`Table::update_data`](crate::table::Table::update_data) before any
/// model state is touched, so a failed load leaves the prior dataset
/// intact. A row without an `id` field fails earlier, when the payload is
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// Type inference samples the first row, so a load needs at least one.
    #[error("data payload has no rows; at least one row is required for type inference")]
    EmptyRows,

    /// Two column definitions share an id.
    #[error("duplicate column id '{id}' in data payload")]
    DuplicateColumnId { id: String },

    /// Two column definitions share a label; labels back the reverse
    /// label-to-id lookup and must be unique.
    #[error("duplicate column label '{label}' in data payload")]
    DuplicateColumnLabel { label: String },
}

impl DataError {
    /// Creates a duplicate column id error.
    pub fn duplicate_column_id(id: impl Into<String>) -> Self {
        Self::DuplicateColumnId { id: id.into() }
    }

    /// Creates a duplicate column label error.
    pub fn duplicate_column_label(label: impl Into<String>) -> Self {
        Self::DuplicateColumnLabel {
            label: label.into(),
        }
    }
}
