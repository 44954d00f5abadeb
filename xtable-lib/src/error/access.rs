//! AccessError for id- and index-addressed table operations

/// Error type for row and column addressed operations on a table.
///
/// Lookup misses are explicit typed errors rather than silently
/// propagating absent values into the caller's view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No row with the requested identifier exists.
    #[error("row '{id}' not found")]
    RowNotFound { id: String },

    /// No column with the requested id (or label, for gesture dispatch)
    /// exists in the current dataset.
    #[error("column '{id}' not found")]
    ColumnNotFound { id: String },

    /// A positional row operation addressed an index past the end of the
    /// row collection.
    #[error("row index {index} out of bounds for {len} rows")]
    RowIndexOutOfBounds { index: usize, len: usize },
}

impl AccessError {
    /// Creates a row-not-found error.
    pub fn row_not_found(id: impl Into<String>) -> Self {
        Self::RowNotFound { id: id.into() }
    }

    /// Creates a column-not-found error.
    pub fn column_not_found(id: impl Into<String>) -> Self {
        Self::ColumnNotFound { id: id.into() }
    }
}
