//! Selection
//!
//! Row selection tracking for the DataTable. Selection is independent of the
//! sort and page state: keys of rows that are not currently visible stay
//! selected. The model runs in one of two modes per table instance:
//!
//! - uncontrolled: the model owns the set and updates it on `commit`;
//! - controlled: the caller supplies the authoritative set each update and
//!   the model never stores its own copy — every mutation produces a fresh
//!   set that is routed back to the caller through the table's
//!   selection-change callback.

use std::collections::HashSet;

use gpui::SharedString;

/// Identity of a row, read off the row by the table's key function.
///
/// Keys must be unique across the current data set. The engine cannot detect
/// collisions; a duplicate key makes selection ambiguous for those rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Int(i64),
    Text(SharedString),
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        RowKey::Int(value)
    }
}

impl From<i32> for RowKey {
    fn from(value: i32) -> Self {
        RowKey::Int(i64::from(value))
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Text(SharedString::from(value.to_string()))
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey::Text(value.into())
    }
}

impl From<SharedString> for RowKey {
    fn from(value: SharedString) -> Self {
        RowKey::Text(value)
    }
}

/// Tri-state rendered by the header select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Dual-mode selection set
#[derive(Debug, Default)]
pub struct SelectionModel {
    internal: HashSet<RowKey>,
    external: Option<HashSet<RowKey>>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the caller owns the selection set
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Supply (or withdraw) the caller-owned set. While present it is
    /// authoritative and the model never writes to it.
    pub fn set_external(&mut self, set: Option<HashSet<RowKey>>) {
        self.external = set;
    }

    /// The set mutations and queries operate on
    pub fn active(&self) -> &HashSet<RowKey> {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.active().contains(key)
    }

    pub fn selected_count(&self) -> usize {
        self.active().len()
    }

    /// A fresh set with `key`'s membership flipped. The active set is never
    /// mutated in place, so callers can rely on every change producing a new
    /// set.
    pub fn toggled(&self, key: &RowKey) -> HashSet<RowKey> {
        let mut next = self.active().clone();
        if !next.remove(key) {
            next.insert(key.clone());
        }
        next
    }

    /// A fresh set where the visible keys are all removed (when every one of
    /// them was selected) or all added. Keys on other pages are untouched.
    pub fn toggled_all(&self, visible: &[RowKey]) -> HashSet<RowKey> {
        let mut next = self.active().clone();
        let all_selected = !visible.is_empty() && visible.iter().all(|key| next.contains(key));
        if all_selected {
            for key in visible {
                next.remove(key);
            }
        } else {
            for key in visible {
                next.insert(key.clone());
            }
        }
        next
    }

    /// Store `next` as the engine-owned set. A no-op in controlled mode: the
    /// caller is expected to feed the new set back through `set_external`.
    pub fn commit(&mut self, next: HashSet<RowKey>) {
        if self.external.is_none() {
            self.internal = next;
        }
    }

    /// Header checkbox state for the currently visible keys
    pub fn header_state(&self, visible: &[RowKey]) -> HeaderCheckState {
        if visible.is_empty() {
            return HeaderCheckState::Unchecked;
        }
        let active = self.active();
        let selected_visible = visible.iter().filter(|key| active.contains(key)).count();
        if selected_visible == visible.len() {
            HeaderCheckState::Checked
        } else if selected_visible > 0 {
            HeaderCheckState::Indeterminate
        } else {
            HeaderCheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ids: &[i64]) -> Vec<RowKey> {
        ids.iter().map(|id| RowKey::Int(*id)).collect()
    }

    #[test]
    fn test_toggle_flips_membership_in_a_fresh_set() {
        let mut model = SelectionModel::new();
        let key = RowKey::Int(7);

        let next = model.toggled(&key);
        assert!(next.contains(&key));
        assert_eq!(next.len(), 1);
        // The model itself is unchanged until the commit.
        assert_eq!(model.selected_count(), 0);

        model.commit(next);
        let reverted = model.toggled(&key);
        assert!(reverted.is_empty());
    }

    #[test]
    fn test_controlled_mode_never_stores() {
        let mut model = SelectionModel::new();
        let external: HashSet<RowKey> = keys(&[1, 2]).into_iter().collect();
        model.set_external(Some(external.clone()));

        let next = model.toggled(&RowKey::Int(3));
        // Differs from the input only by the toggled key.
        assert_eq!(next.len(), 3);
        assert!(next.contains(&RowKey::Int(1)));
        assert!(next.contains(&RowKey::Int(3)));

        // Commit must not touch the caller-supplied set.
        model.commit(next);
        assert_eq!(model.active(), &external);
    }

    #[test]
    fn test_toggle_all_only_affects_visible_keys() {
        let mut model = SelectionModel::new();
        model.commit(keys(&[99]).into_iter().collect());

        let visible = keys(&[1, 2, 3]);
        let next = model.toggled_all(&visible);
        assert_eq!(next.len(), 4);
        assert!(next.contains(&RowKey::Int(99)));

        model.commit(next);
        let reverted = model.toggled_all(&visible);
        // Removing the visible keys leaves the off-page key alone.
        assert_eq!(reverted, keys(&[99]).into_iter().collect());
    }

    #[test]
    fn test_toggle_all_twice_is_identity() {
        let mut model = SelectionModel::new();
        model.commit(keys(&[2]).into_iter().collect());
        let before = model.active().clone();

        let visible = keys(&[1, 2, 3]);
        model.commit(model.toggled_all(&visible));
        model.commit(model.toggled_all(&visible));
        assert_eq!(model.active(), &before);
    }

    #[test]
    fn test_header_state() {
        let mut model = SelectionModel::new();
        let visible = keys(&[1, 2, 3]);

        assert_eq!(model.header_state(&visible), HeaderCheckState::Unchecked);
        assert_eq!(model.header_state(&[]), HeaderCheckState::Unchecked);

        model.commit(keys(&[1]).into_iter().collect());
        assert_eq!(model.header_state(&visible), HeaderCheckState::Indeterminate);

        model.commit(keys(&[1, 2, 3]).into_iter().collect());
        assert_eq!(model.header_state(&visible), HeaderCheckState::Checked);

        // A fully selected other page does not affect this page's header.
        assert_eq!(
            model.header_state(&keys(&[4, 5])),
            HeaderCheckState::Unchecked
        );
    }
}
