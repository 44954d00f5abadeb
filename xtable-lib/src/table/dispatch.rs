//! Gesture dispatch
//!
//! Maps view-layer gestures onto model mutations through one command
//! table, decoupled from any markup or UI toolkit. The view reports what
//! the user did (by row id, or by position for drags); the model decides
//! what that means under the current options and answers with the event
//! the caller's output channels want.

use std::collections::HashMap;

use super::Table;
use crate::error::AccessError;
use crate::model::Value;

/// A user gesture reported by the view layer.
///
/// Cell edits carry the column LABEL, not the id: an editable view knows
/// the display name it rendered, and dispatch owns the label-to-id
/// translation so the row store can stay id-addressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Click on a column header.
    HeaderClick { column_id: String },
    /// An edited cell lost focus with a changed value.
    CellEdit {
        row_id: String,
        column_label: String,
        value: Value,
    },
    /// Click on a row body.
    RowClick { row_id: String },
    /// Click on a row's selection indicator.
    IndicatorClick { row_id: String },
    /// Click on a row's remove affordance.
    RemoveClick { row_id: String },
    /// A drag ended, moving a row between positions the view knows.
    DragEnd { from: usize, to: usize },
    /// The pointer entered a row.
    HoverEnter { row_id: String },
    /// The pointer left the table body.
    HoverLeave,
}

/// Model change produced by a gesture, for the caller's output channels.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Rows were re-sorted by a header click.
    Sorted { column_id: String, ascending: bool },
    /// A cell changed; carries the serialized row before and after.
    Edited {
        old: HashMap<String, Value>,
        new: HashMap<String, Value>,
    },
    /// A row was removed.
    Removed { row_id: String },
    /// The selection changed; carries the full selected set, sorted.
    Selected { row_ids: Vec<String> },
    /// A row was clicked while selection is disabled.
    Clicked { row_id: String },
    /// The highlight set changed; carries the full set, sorted.
    Highlighted { row_ids: Vec<String> },
}

impl Table {
    /// Applies one gesture.
    ///
    /// A gesture whose feature flag is off (`columnClick`, `edit`, `drag`,
    /// `remove`) is a no-op returning `Ok(None)`. Gestures addressing rows
    /// or columns that do not exist fail with the usual typed errors and
    /// leave the model untouched.
    pub fn apply(&mut self, gesture: Gesture) -> Result<Option<TableEvent>, AccessError> {
        match gesture {
            Gesture::HeaderClick { column_id } => {
                if !self.options().column_click {
                    return Ok(None);
                }
                self.sort_by(&column_id, None)?;
                Ok(Some(TableEvent::Sorted {
                    ascending: self.sort_state().ascending,
                    column_id,
                }))
            }
            Gesture::CellEdit {
                row_id,
                column_label,
                value,
            } => {
                if !self.options().edit {
                    return Ok(None);
                }
                let column_id = self
                    .column_id_for_label(&column_label)
                    .ok_or_else(|| AccessError::column_not_found(&column_label))?
                    .to_string();
                let old = self.get_row(&row_id)?;
                self.update_cell(&row_id, &column_id, value)?;
                let new = self.get_row(&row_id)?;
                Ok(Some(TableEvent::Edited { old, new }))
            }
            Gesture::RowClick { row_id } | Gesture::IndicatorClick { row_id } => {
                if self.options().selection.allow {
                    let multi = self.options().selection.multi_select;
                    self.set_selected(&[row_id.as_str()], multi);
                    Ok(Some(TableEvent::Selected {
                        row_ids: sorted(self.selected()),
                    }))
                } else {
                    Ok(Some(TableEvent::Clicked { row_id }))
                }
            }
            Gesture::RemoveClick { row_id } => {
                if !self.options().remove {
                    return Ok(None);
                }
                if self.remove_row(&row_id) {
                    Ok(Some(TableEvent::Removed { row_id }))
                } else {
                    Err(AccessError::row_not_found(row_id))
                }
            }
            Gesture::DragEnd { from, to } => {
                if !self.options().drag {
                    return Ok(None);
                }
                self.move_row(from, to)?;
                Ok(None)
            }
            Gesture::HoverEnter { row_id } => {
                self.set_highlighted(&[row_id.as_str()]);
                Ok(Some(TableEvent::Highlighted {
                    row_ids: sorted(self.highlighted()),
                }))
            }
            Gesture::HoverLeave => {
                self.set_highlighted(&[]);
                Ok(Some(TableEvent::Highlighted {
                    row_ids: Vec::new(),
                }))
            }
        }
    }
}

fn sorted(ids: &std::collections::HashSet<String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.iter().cloned().collect();
    ids.sort_unstable();
    ids
}
