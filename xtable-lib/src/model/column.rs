//! Column metadata and first-row type inference

use serde::Deserialize;
use serde::Serialize;
use std::fmt;

use super::Value;

/// One column definition from the construction payload.
///
/// `id` keys row cells; `label` is the display name and backs the reverse
/// label lookup, so both must be unique within one data load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique column identifier.
    pub id: String,
    /// Unique human-readable display name.
    pub label: String,
}

impl Column {
    /// Creates a new column definition.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The sort/format type of a column.
///
/// Inferred exactly once per data load from the value the FIRST row holds
/// for the column, and never revisited: a mixed-type column sorts and
/// formats every row under the first row's type. This first-row-wins rule
/// is a behavioral contract observable by callers, not an optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Integer or floating point; compared numerically.
    Numeric,
    /// Date/time; compared chronologically.
    Date,
    /// Everything else (including null and boolean); compared as
    /// case-insensitive text.
    #[default]
    Text,
}

impl ColumnType {
    /// Infers the column type from a sampled cell value.
    ///
    /// Text is the fallback for every non-numeric, non-date case.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Int(_) | Value::Float(_) => ColumnType::Numeric,
            Value::Date(_) => ColumnType::Date,
            _ => ColumnType::Text,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
        };
        f.write_str(name)
    }
}
