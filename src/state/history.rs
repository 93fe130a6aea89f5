//! Operation-level undo/redo over an externally owned polygon list.
//!
//! The history manager never mutates the polygon list. It watches the list
//! as the owner publishes it and keeps a linear log of snapshots with a
//! cursor pointing at the state currently applied:
//!
//! - a growth of more than one polygon at once is a bulk load and becomes the
//!   new base state (log reset to a single snapshot),
//! - a growth of exactly one (a finished drawing) or any shrink (a deletion)
//!   is an operation and is pushed, discarding any redo branch,
//! - an unchanged polygon count is not a change.
//!
//! Undo and redo hand back a snapshot for the caller to send to the owner.
//! The owner's echo of that snapshot must not be recorded again, so the
//! manager arms a single-slot "skip next change" flag before returning. The
//! flag is not a counter: two undo/redo requests before the owner round-trips
//! leave one pending skip, not two.

use crate::model::{Polygon, PolygonSet};

use super::snapshot::HistorySnapshot;

/// How an observed polygon list was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Same polygon count as last time; nothing recorded.
    Unchanged,
    /// The change was the echo of our own undo/redo; nothing recorded.
    OwnChange,
    /// Bulk load; the log now holds only this state.
    Reset,
    /// Single operation; pushed as a new snapshot.
    Pushed,
}

/// Linear undo/redo log of polygon-set snapshots with a cursor at the
/// state currently applied by the owner.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: Vec<HistorySnapshot>,
    cursor: usize,
    /// Polygon count of the last observed list
    last_len: usize,
    /// Skip recording the next observed change
    skip_next: bool,
    next_revision: u64,
}

impl HistoryManager {
    /// Seed the log with the initial polygon list as its base state.
    pub fn new(initial: &[Polygon]) -> Self {
        Self {
            snapshots: vec![HistorySnapshot::new(0, initial)],
            cursor: 0,
            last_len: initial.len(),
            skip_next: false,
            next_revision: 1,
        }
    }

    /// Record a newly published polygon list if it represents a change.
    pub fn observe(&mut self, polygons: &[Polygon]) -> Observation {
        let prev_len = self.last_len;
        let len = polygons.len();
        self.last_len = len;

        if len == prev_len {
            return Observation::Unchanged;
        }

        if self.skip_next {
            self.skip_next = false;
            log::debug!("History: skipped own change ({} -> {})", prev_len, len);
            return Observation::OwnChange;
        }

        if len > prev_len + 1 {
            let revision = self.bump_revision();
            self.snapshots = vec![HistorySnapshot::new(revision, polygons)];
            self.cursor = 0;
            log::info!("History: bulk load of {} polygons, new base state", len);
            Observation::Reset
        } else {
            let revision = self.bump_revision();
            self.snapshots.truncate(self.cursor + 1);
            self.snapshots.push(HistorySnapshot::new(revision, polygons));
            self.cursor = self.snapshots.len() - 1;
            log::debug!(
                "History: pushed snapshot r{} ({} polygons), step {}/{}",
                revision,
                len,
                self.cursor,
                self.snapshots.len() - 1
            );
            Observation::Pushed
        }
    }

    /// Step back one operation and return the state the owner should apply.
    pub fn undo(&mut self) -> Option<PolygonSet> {
        if !self.can_undo() {
            return None;
        }
        self.skip_next = true;
        self.cursor -= 1;
        log::info!("History: undo to step {}", self.cursor);
        Some(self.snapshots[self.cursor].polygons.clone())
    }

    /// Step forward one operation and return the state the owner should apply.
    pub fn redo(&mut self) -> Option<PolygonSet> {
        if !self.can_redo() {
            return None;
        }
        self.skip_next = true;
        self.cursor += 1;
        log::info!("History: redo to step {}", self.cursor);
        Some(self.snapshots[self.cursor].polygons.clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot the manager believes is currently applied.
    pub fn current(&self) -> &HistorySnapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether the next observed change will be treated as our own echo.
    pub fn has_pending_own_change(&self) -> bool {
        self.skip_next
    }

    fn bump_revision(&mut self) -> u64 {
        let revision = self.next_revision;
        self.next_revision += 1;
        revision
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn poly(id: &str) -> Polygon {
        Polygon::new(
            id,
            vec![Point::new(0.1, 0.1), Point::new(0.2, 0.1), Point::new(0.2, 0.2)],
            "#DF00FF",
        )
    }

    fn set(ids: &[&str]) -> PolygonSet {
        ids.iter().map(|id| poly(id)).collect()
    }

    fn ids(polygons: &[Polygon]) -> Vec<&str> {
        polygons.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_new_history_is_base_state() {
        let h = HistoryManager::new(&set(&["a", "b"]));
        assert_eq!(h.len(), 1);
        assert_eq!(h.cursor(), 0);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.current().len(), 2);
    }

    #[test]
    fn test_single_addition_is_pushed() {
        let mut h = HistoryManager::new(&[]);
        assert_eq!(h.observe(&set(&["a"])), Observation::Pushed);
        assert_eq!(h.len(), 2);
        assert_eq!(h.cursor(), 1);
        assert!(h.can_undo());
    }

    #[test]
    fn test_bulk_addition_resets() {
        let mut h = HistoryManager::new(&[]);
        h.observe(&set(&["a"]));
        assert_eq!(h.observe(&set(&["a", "b", "c"])), Observation::Reset);
        assert_eq!(h.len(), 1);
        assert_eq!(h.cursor(), 0);
        assert!(!h.can_undo());
        assert_eq!(ids(&h.current().polygons), ["a", "b", "c"]);
    }

    #[test]
    fn test_deletion_is_pushed() {
        let mut h = HistoryManager::new(&set(&["a", "b", "c"]));
        // Dropping several at once is still one operation
        assert_eq!(h.observe(&set(&["a"])), Observation::Pushed);
        assert_eq!(h.cursor(), 1);
    }

    #[test]
    fn test_same_count_is_unchanged() {
        let mut h = HistoryManager::new(&set(&["a"]));
        assert_eq!(h.observe(&set(&["z"])), Observation::Unchanged);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_undo_redo_skip_own_echo() {
        let mut h = HistoryManager::new(&[]);
        h.observe(&set(&["a"]));
        h.observe(&set(&["a", "b"]));

        let undone = h.undo().unwrap();
        assert_eq!(ids(&undone), ["a"]);
        assert!(h.has_pending_own_change());
        assert_eq!(h.observe(&undone), Observation::OwnChange);
        assert!(!h.has_pending_own_change());
        assert_eq!(h.len(), 3);
        assert!(h.can_redo());

        let redone = h.redo().unwrap();
        assert_eq!(ids(&redone), ["a", "b"]);
        assert_eq!(h.observe(&redone), Observation::OwnChange);
        assert!(!h.can_redo());
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn test_new_operation_discards_redo_branch() {
        let mut h = HistoryManager::new(&[]);
        h.observe(&set(&["a"]));
        h.observe(&set(&["a", "b"]));

        let undone = h.undo().unwrap();
        h.observe(&undone);
        assert!(h.can_redo());

        assert_eq!(h.observe(&set(&["a", "c"])), Observation::Pushed);
        assert!(!h.can_redo());
        assert_eq!(h.redo(), None);
        assert_eq!(h.len(), 3);
        assert_eq!(ids(&h.current().polygons), ["a", "c"]);
    }

    #[test]
    fn test_undo_at_base_is_noop() {
        let mut h = HistoryManager::new(&set(&["a"]));
        assert_eq!(h.undo(), None);
        assert_eq!(h.redo(), None);
        assert!(!h.has_pending_own_change());
    }

    #[test]
    fn test_skip_flag_is_single_slot() {
        let mut h = HistoryManager::new(&[]);
        h.observe(&set(&["a"]));
        h.observe(&set(&["a", "b"]));
        h.observe(&set(&["a", "b", "c"]));

        // Two undos before the owner answers leave one pending skip
        h.undo();
        let second = h.undo().unwrap();
        assert_eq!(ids(&second), ["a"]);
        assert_eq!(h.observe(&second), Observation::OwnChange);
        assert_eq!(h.observe(&set(&["a", "x"])), Observation::Pushed);
    }

    #[test]
    fn test_revisions_are_monotonic_across_reset() {
        let mut h = HistoryManager::new(&[]);
        h.observe(&set(&["a"]));
        let before = h.current().revision;
        h.observe(&set(&["a", "b", "c"]));
        assert!(h.current().revision > before);
    }
}
