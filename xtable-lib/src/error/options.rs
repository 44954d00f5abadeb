//! Configuration parsing errors

/// Error type for malformed configuration options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// The `rowOrder` string did not match `"<column label> <asc|desc>"`.
    #[error("invalid rowOrder '{input}': expected \"<column label> <asc|desc>\"")]
    InvalidRowOrder { input: String },
}

impl OptionsError {
    /// Creates an invalid rowOrder error.
    pub fn invalid_row_order(input: impl Into<String>) -> Self {
        Self::InvalidRowOrder {
            input: input.into(),
        }
    }
}
