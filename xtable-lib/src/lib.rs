//! In-memory model for an interactive tabular data widget.
//!
//! Given column definitions and row records, the [`table::Table`] model
//! infers per-column types from the first row, keeps rows addressable by a
//! stable identifier across sorting, reordering, editing and removal, and
//! projects rows back to the column-keyed view callers expect. Rendering
//! belongs to an external view layer that draws from the query surface and
//! feeds user gestures back in, either as direct mutation calls or through
//! [`table::Gesture`] dispatch.
//!
//! Everything is synchronous and single-threaded; the model never calls
//! back into the view and pushes no change notifications, so callers
//! re-query after each mutation.
//!
//! # Example
//!
//! ```
//! use xtable_lib::options::TableOptions;
//! use xtable_lib::table::{Gesture, Table, TableData};
//!
//! let data: TableData = serde_json::from_str(r#"{
//!     "columns": [{"id": "name", "label": "Name"}, {"id": "age", "label": "Age"}],
//!     "rows": [
//!         {"id": "r1", "name": "Ada", "age": 36},
//!         {"id": "r2", "name": "Grace", "age": 85}
//!     ]
//! }"#).unwrap();
//! let options: TableOptions =
//!     serde_json::from_str(r#"{ "columnClick": true }"#).unwrap();
//!
//! let mut table = Table::new(data, options).unwrap();
//! table.apply(Gesture::HeaderClick { column_id: "age".to_string() }).unwrap();
//! assert_eq!(table.rows()[0].id(), "r1");
//! ```

pub mod error;
pub mod model;
pub mod options;
pub mod table;

pub use table::Table;
