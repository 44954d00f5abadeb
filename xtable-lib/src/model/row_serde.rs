//! Custom serialization for Row.
//!
//! A row travels as one flat JSON map: the `"id"` key carries the stable
//! row identifier (a string, or a number which is stringified) and every
//! other key is a cell keyed by column id:
//!
//! ```json
//! { "id": "r1", "name": "Ada", "age": 36 }
//! ```
//!
//! A row with no `"id"` key is malformed input and fails deserialization.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Row;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map representing a table row with an 'id' key")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Row, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut cells: HashMap<String, Value> = HashMap::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;

            if key == "id" {
                id = Some(match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    other => {
                        return Err(de::Error::custom(format!(
                            "row id must be a string or number, got {}",
                            other
                        )));
                    }
                });
            } else {
                cells.insert(key, json_to_value(value));
            }
        }

        let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
        Ok(Row { id, cells })
    }
}

/// Maps a raw JSON value onto a cell value. Arrays and objects fall back to
/// the `Json` variant; dates never come out of JSON (see [`Value`]).
fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        other => Value::Json(other),
    }
}
