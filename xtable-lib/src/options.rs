//! Table configuration options
//!
//! Options deserialize from the caller's JSON options dictionary. Every
//! field is optional; an empty dictionary yields the defaults (everything
//! off, no configured ordering).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;

use crate::error::OptionsError;

/// Presentational style flags. The model stores them untouched for the
/// view layer to query; they have no effect on model behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    Striped,
    Condensed,
    Bordered,
    Hover,
}

/// Selection behavior flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOptions {
    /// Selection commands are no-ops unless set.
    #[serde(default)]
    pub allow: bool,

    /// Selection is a set instead of a single row id.
    #[serde(default)]
    pub multi_select: bool,

    /// The view shows a selection affordance (checkbox or radio button).
    #[serde(default)]
    pub indicator: bool,
}

/// Requested initial row ordering, parsed from `"<column label> <asc|desc>"`.
///
/// The direction is the last whitespace-separated token, so column labels
/// may themselves contain spaces. Applied once per data load by resolving
/// the label to a column id; an unknown label is skipped with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOrder {
    /// The column label to sort by.
    pub label: String,
    /// `true` for `asc`, `false` for `desc`.
    pub ascending: bool,
}

impl FromStr for RowOrder {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((label, direction)) = s.trim().rsplit_once(char::is_whitespace) else {
            return Err(OptionsError::invalid_row_order(s));
        };
        let ascending = match direction {
            "asc" => true,
            "desc" => false,
            _ => return Err(OptionsError::invalid_row_order(s)),
        };
        let label = label.trim();
        if label.is_empty() {
            return Err(OptionsError::invalid_row_order(s));
        }
        Ok(RowOrder {
            label: label.to_string(),
            ascending,
        })
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.label,
            if self.ascending { "asc" } else { "desc" }
        )
    }
}

impl Serialize for RowOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RowOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Recognized configuration options.
///
/// # Example
///
/// ```
/// use xtable_lib::options::TableOptions;
///
/// let options: TableOptions = serde_json::from_str(r#"{
///     "style": ["striped", "hover"],
///     "selection": { "allow": true, "multiSelect": true },
///     "edit": true,
///     "columnClick": true,
///     "rowOrder": "Name asc"
/// }"#).unwrap();
/// assert!(options.selection.allow);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// Presentational style flags, passed through to the view layer.
    #[serde(default)]
    pub style: HashSet<TableStyle>,

    /// Selection behavior.
    #[serde(default)]
    pub selection: SelectionOptions,

    /// Cell values may be edited.
    #[serde(default)]
    pub edit: bool,

    /// Rows may be reordered by dragging (backed by `move_row`).
    #[serde(default)]
    pub drag: bool,

    /// Rows may be deleted (backed by `remove_row`).
    #[serde(default)]
    pub remove: bool,

    /// Header clicks sort by the clicked column.
    #[serde(default)]
    pub column_click: bool,

    /// Column ids in display order, applied once per data load; unlisted
    /// columns keep their relative order after the listed ones.
    #[serde(default)]
    pub column_order: Option<Vec<String>>,

    /// Initial row ordering, applied once per data load.
    #[serde(default)]
    pub row_order: Option<RowOrder>,
}

impl TableOptions {
    /// Returns `true` if the given style flag is set.
    pub fn has_style(&self, style: TableStyle) -> bool {
        self.style.contains(&style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_dictionary() {
        let options: TableOptions = serde_json::from_str("{}").unwrap();
        assert!(options.style.is_empty());
        assert!(!options.selection.allow);
        assert!(!options.edit);
        assert!(!options.drag);
        assert!(!options.remove);
        assert!(!options.column_click);
        assert!(options.column_order.is_none());
        assert!(options.row_order.is_none());
    }

    #[test]
    fn test_full_options_dictionary() {
        let options: TableOptions = serde_json::from_str(
            r#"{
                "style": ["striped", "condensed"],
                "selection": { "allow": true, "multiSelect": true, "indicator": true },
                "edit": true,
                "drag": true,
                "remove": true,
                "columnClick": true,
                "columnOrder": ["b", "a"],
                "rowOrder": "Age desc"
            }"#,
        )
        .unwrap();

        assert!(options.has_style(TableStyle::Striped));
        assert!(options.has_style(TableStyle::Condensed));
        assert!(!options.has_style(TableStyle::Hover));
        assert!(options.selection.multi_select);
        assert_eq!(options.column_order.as_deref(), Some(&["b".to_string(), "a".to_string()][..]));
        let row_order = options.row_order.unwrap();
        assert_eq!(row_order.label, "Age");
        assert!(!row_order.ascending);
    }

    #[test]
    fn test_row_order_parse() {
        let order: RowOrder = "Name asc".parse().unwrap();
        assert_eq!(order.label, "Name");
        assert!(order.ascending);
    }

    #[test]
    fn test_row_order_label_may_contain_spaces() {
        let order: RowOrder = "First Name desc".parse().unwrap();
        assert_eq!(order.label, "First Name");
        assert!(!order.ascending);
    }

    #[test]
    fn test_row_order_rejects_bad_direction() {
        assert!("Name up".parse::<RowOrder>().is_err());
        assert!("Name".parse::<RowOrder>().is_err());
        assert!(" asc".parse::<RowOrder>().is_err());
    }

    #[test]
    fn test_row_order_display_round_trip() {
        let order: RowOrder = "Age desc".parse().unwrap();
        assert_eq!(order.to_string(), "Age desc");
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, "\"Age desc\"");
        let back: RowOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
