//! Authoritative window record store.
//!
//! The store holds exactly one [`WindowRecord`] per [`WindowId`] and a single z counter. Every
//! operation is total: misuse (minimizing a closed window, focusing a closed window) leaves the
//! store untouched.

use crate::model::{Position, WindowId, WindowRecord};

/// Value of the z counter before any window has been opened.
pub const INITIAL_Z_INDEX: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStore {
    records: [WindowRecord; WindowId::COUNT],
    top_z: u64,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self {
            records: WindowId::ALL.map(WindowRecord::closed),
            top_z: INITIAL_Z_INDEX,
        }
    }
}

impl WindowStore {
    pub fn record(&self, id: WindowId) -> &WindowRecord {
        &self.records[id.index()]
    }

    fn record_mut(&mut self, id: WindowId) -> &mut WindowRecord {
        &mut self.records[id.index()]
    }

    /// Last z value handed out.
    pub fn top_z(&self) -> u64 {
        self.top_z
    }

    fn next_z(&mut self) -> u64 {
        self.top_z = self.top_z.saturating_add(1);
        self.top_z
    }

    /// Opens (or re-raises) a window.
    pub fn open(&mut self, id: WindowId) {
        let z_index = self.next_z();
        let record = self.record_mut(id);
        record.is_open = true;
        record.is_minimized = false;
        record.z_index = z_index;
    }

    /// Closes a window. Position is kept for the next open.
    pub fn close(&mut self, id: WindowId) {
        let record = self.record_mut(id);
        record.is_open = false;
        record.is_minimized = false;
        record.is_maximized = false;
    }

    pub fn minimize(&mut self, id: WindowId) {
        let record = self.record_mut(id);
        if record.is_open && !record.is_minimized {
            record.is_minimized = true;
        }
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        let record = self.record_mut(id);
        if record.is_open {
            record.is_maximized = !record.is_maximized;
        }
    }

    /// Restores and raises an open window. Closed windows are left closed.
    pub fn focus(&mut self, id: WindowId) {
        if !self.record(id).is_open {
            return;
        }
        let z_index = self.next_z();
        let record = self.record_mut(id);
        record.is_minimized = false;
        record.z_index = z_index;
    }

    /// Accepts any position, including off-screen ones.
    pub fn update_position(&mut self, id: WindowId, position: Position) {
        self.record_mut(id).position = position;
    }

    /// Open windows (minimized included) in id order.
    pub fn list_open(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter().filter(|record| record.is_open)
    }

    /// Highest stacked (open, not minimized) window.
    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.records
            .iter()
            .filter(|record| record.is_stacked())
            .max_by_key(|record| record.z_index)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_ids(store: &WindowStore) -> Vec<WindowId> {
        store.list_open().map(|record| record.id).collect()
    }

    #[test]
    fn store_is_total_over_window_ids() {
        let mut store = WindowStore::default();
        store.open(WindowId::Snake);
        store.close(WindowId::Snake);
        store.minimize(WindowId::Game);
        for id in WindowId::ALL {
            assert_eq!(store.record(id).id, id);
        }
        assert_eq!(store.records.len(), WindowId::COUNT);
    }

    #[test]
    fn first_open_assigns_z_two() {
        let mut store = WindowStore::default();
        assert_eq!(store.top_z(), INITIAL_Z_INDEX);
        store.open(WindowId::About);
        assert_eq!(store.record(WindowId::About).z_index, 2);
    }

    #[test]
    fn open_then_list_includes_window() {
        let mut store = WindowStore::default();
        store.open(WindowId::Notepad);
        assert_eq!(open_ids(&store), vec![WindowId::Notepad]);
    }

    #[test]
    fn reopen_refocuses_instead_of_duplicating() {
        let mut store = WindowStore::default();
        store.open(WindowId::About);
        store.open(WindowId::Projects);
        store.open(WindowId::About);
        assert_eq!(open_ids(&store), vec![WindowId::About, WindowId::Projects]);
        assert_eq!(store.topmost().map(|r| r.id), Some(WindowId::About));
    }

    #[test]
    fn close_clears_flags_and_keeps_position() {
        let mut store = WindowStore::default();
        store.open(WindowId::Resume);
        store.toggle_maximize(WindowId::Resume);
        store.minimize(WindowId::Resume);
        store.update_position(WindowId::Resume, Position::new(-40, 900));
        store.close(WindowId::Resume);

        let record = store.record(WindowId::Resume);
        assert!(!record.is_open);
        assert!(!record.is_minimized);
        assert!(!record.is_maximized);
        assert_eq!(record.position, Position::new(-40, 900));
        assert!(open_ids(&store).is_empty());
    }

    #[test]
    fn minimize_closed_window_is_noop() {
        let mut store = WindowStore::default();
        let before = store.clone();
        store.minimize(WindowId::Contact);
        assert_eq!(store, before);
        assert!(!store.record(WindowId::Contact).is_open);
    }

    #[test]
    fn minimize_twice_is_noop() {
        let mut store = WindowStore::default();
        store.open(WindowId::Calculator);
        store.minimize(WindowId::Calculator);
        let before = store.clone();
        store.minimize(WindowId::Calculator);
        assert_eq!(store, before);
    }

    #[test]
    fn focus_closed_window_keeps_minimized_implies_open() {
        let mut store = WindowStore::default();
        store.focus(WindowId::Settings);
        let record = store.record(WindowId::Settings);
        assert!(!record.is_open);
        assert!(!record.is_minimized);
        assert_eq!(store.top_z(), INITIAL_Z_INDEX);
    }

    #[test]
    fn focus_restores_minimized_window_to_top() {
        let mut store = WindowStore::default();
        store.open(WindowId::Game);
        store.open(WindowId::Snake);
        store.minimize(WindowId::Game);
        store.focus(WindowId::Game);
        let record = store.record(WindowId::Game);
        assert!(!record.is_minimized);
        assert_eq!(record.z_index, store.top_z());
    }

    #[test]
    fn most_recent_open_or_focus_has_strictly_max_z() {
        let mut store = WindowStore::default();
        let script = [
            (true, WindowId::About),
            (true, WindowId::Projects),
            (false, WindowId::About),
            (true, WindowId::Notepad),
            (false, WindowId::Projects),
            (true, WindowId::Projects),
            (false, WindowId::Notepad),
        ];
        for (is_open, id) in script {
            if is_open {
                store.open(id);
            } else {
                store.focus(id);
            }
            let top = store.record(id).z_index;
            for other in store.list_open().filter(|record| record.id != id) {
                assert!(top > other.z_index, "{id} should sit above {}", other.id);
            }
        }
    }

    #[test]
    fn toggle_maximize_round_trips_without_touching_z() {
        let mut store = WindowStore::default();
        store.open(WindowId::Contact);
        let before = store.clone();
        store.toggle_maximize(WindowId::Contact);
        assert!(store.record(WindowId::Contact).is_maximized);
        assert_eq!(store.top_z(), before.top_z());
        store.toggle_maximize(WindowId::Contact);
        assert_eq!(store, before);
    }

    #[test]
    fn toggle_maximize_on_closed_window_is_noop() {
        let mut store = WindowStore::default();
        store.toggle_maximize(WindowId::About);
        assert!(!store.record(WindowId::About).is_maximized);
    }
}
