//! Selection and highlight state, addressed by row id.

use std::collections::HashSet;

use super::Table;

impl Table {
    /// Replaces or toggles the selection set.
    ///
    /// No-op unless selection is allowed by the options. Without `append`,
    /// the selection becomes exactly the given ids. With `append`
    /// (multi-select), each given id toggles: an already-selected id is
    /// deselected, any other is added, and ids not mentioned keep their
    /// state. Unknown row ids are ignored either way.
    pub fn set_selected(&mut self, ids: &[&str], append: bool) {
        if !self.options().selection.allow {
            return;
        }
        if append {
            for id in ids {
                if self.row_exists(id) && !self.selected.remove(*id) {
                    self.selected.insert((*id).to_string());
                }
            }
        } else {
            self.selected = ids
                .iter()
                .filter(|id| self.row_exists(id))
                .map(|id| (*id).to_string())
                .collect();
        }
    }

    /// Returns the selected row ids.
    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Replaces the highlight set. Unknown row ids are ignored.
    pub fn set_highlighted(&mut self, ids: &[&str]) {
        self.highlighted = ids
            .iter()
            .filter(|id| self.row_exists(id))
            .map(|id| (*id).to_string())
            .collect();
    }

    /// Returns the highlighted row ids.
    pub fn highlighted(&self) -> &HashSet<String> {
        &self.highlighted
    }

    fn row_exists(&self, id: &str) -> bool {
        self.rows().iter().any(|row| row.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Table;
    use super::super::test_fixtures::sample_data;
    use crate::options::SelectionOptions;
    use crate::options::TableOptions;

    fn selectable_table(multi: bool) -> Table {
        let options = TableOptions {
            selection: SelectionOptions {
                allow: true,
                multi_select: multi,
                indicator: false,
            },
            ..TableOptions::default()
        };
        Table::new(sample_data(), options).unwrap()
    }

    #[test]
    fn test_selection_requires_allow() {
        let mut table = Table::new(sample_data(), TableOptions::default()).unwrap();
        table.set_selected(&["r1"], false);
        assert!(table.selected().is_empty());
    }

    #[test]
    fn test_replace_selection() {
        let mut table = selectable_table(false);
        table.set_selected(&["r1"], false);
        assert!(table.selected().contains("r1"));
        table.set_selected(&["r2"], false);
        assert!(!table.selected().contains("r1"));
        assert!(table.selected().contains("r2"));
    }

    #[test]
    fn test_append_toggles_each_id() {
        let mut table = selectable_table(true);
        table.set_selected(&["r1"], true);
        table.set_selected(&["r2"], true);
        assert_eq!(table.selected().len(), 2);

        // Re-targeting a selected id deselects it; others keep their state.
        table.set_selected(&["r1"], true);
        assert!(!table.selected().contains("r1"));
        assert!(table.selected().contains("r2"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut table = selectable_table(true);
        table.set_selected(&["nope"], true);
        assert!(table.selected().is_empty());
        table.set_highlighted(&["nope", "r3"]);
        assert_eq!(table.highlighted().len(), 1);
    }

    #[test]
    fn test_highlight_replaces_and_needs_no_allow() {
        let mut table = Table::new(sample_data(), TableOptions::default()).unwrap();
        table.set_highlighted(&["r1"]);
        assert!(table.highlighted().contains("r1"));
        table.set_highlighted(&["r2"]);
        assert!(!table.highlighted().contains("r1"));
        assert!(table.highlighted().contains("r2"));
    }

    #[test]
    fn test_removal_purges_selection_and_highlight() {
        let mut table = selectable_table(true);
        table.set_selected(&["r1", "r2"], true);
        table.set_highlighted(&["r1"]);
        table.remove_row("r1");
        assert!(!table.selected().contains("r1"));
        assert!(table.selected().contains("r2"));
        assert!(table.highlighted().is_empty());
    }
}
