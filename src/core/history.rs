//! Linear undo/redo history of visited states.
//!
//! History is an ordered list of entries plus a pointer marking the active
//! one. The active entry is not necessarily the last: undo moves the pointer
//! back without dropping anything, and a later push lands after the old tail,
//! leaving the undone entries in place but unreachable.

use super::config::StateName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single visited slot.
///
/// `state` is `None` when the machine was driven through an event with no
/// defined target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// State name, or `None` for the undefined-state sentinel
    pub state: Option<StateName>,
    /// When the entry was appended
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(state: Option<StateName>) -> Self {
        Self {
            state,
            entered_at: Utc::now(),
        }
    }

    /// State name as a string slice.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

/// Ordered entries and the pointer to the active one.
///
/// History is never empty and the pointer always indexes a valid entry.
///
/// Serializes as `{"entries": [...], "pointer": n}` for inspection. There is
/// no way to load one back: a history only ever grows out of a machine.
///
/// # Example
///
/// ```rust
/// use waypoint::core::History;
///
/// let mut history = History::new(Some("draft".to_string()));
/// history.push(Some("review".to_string()));
/// history.push(Some("published".to_string()));
///
/// assert!(history.back());
/// assert_eq!(history.current(), Some("review"));
/// assert_eq!(history.len(), 3);
///
/// history.collapse();
/// assert_eq!(history.current(), Some("review"));
/// assert_eq!(history.len(), 1);
/// assert!(!history.back());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    pointer: usize,
}

impl History {
    /// Create a history seeded with a single entry.
    pub fn new(initial: Option<StateName>) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial)],
            pointer: 0,
        }
    }

    /// Append a slot and make it active.
    pub fn push(&mut self, state: Option<StateName>) {
        self.entries.push(HistoryEntry::new(state));
        self.pointer = self.entries.len() - 1;
    }

    /// The active entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.pointer]
    }

    /// State name of the active entry.
    pub fn current(&self) -> Option<&str> {
        self.current_entry().state()
    }

    /// Whether an earlier entry exists.
    pub fn can_back(&self) -> bool {
        self.pointer > 0
    }

    /// Whether a later entry exists.
    pub fn can_forward(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Move the pointer one entry back. Returns `false` at the start.
    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.pointer -= 1;
        true
    }

    /// Move the pointer one entry forward. Returns `false` at the end.
    pub fn forward(&mut self) -> bool {
        if !self.can_forward() {
            return false;
        }
        self.pointer += 1;
        true
    }

    /// Drop every entry except the active one.
    pub fn collapse(&mut self) {
        let current = self.entries.swap_remove(self.pointer);
        self.entries = vec![current];
        self.pointer = 0;
    }

    /// Index of the active entry.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of entries, including ones beyond the pointer.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the active entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Sequence of state names in chronological order.
    pub fn path(&self) -> Vec<Option<&str>> {
        self.entries.iter().map(HistoryEntry::state).collect()
    }

    /// Time between the first and last appended entry.
    ///
    /// `None` if the clock went backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Option<StateName> {
        Some(s.to_string())
    }

    #[test]
    fn new_history_has_single_entry() {
        let history = History::new(name("Initial"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.pointer(), 0);
        assert_eq!(history.current(), Some("Initial"));
        assert!(!history.is_empty());
    }

    #[test]
    fn push_moves_pointer_to_end() {
        let mut history = History::new(name("Initial"));
        history.push(name("Processing"));
        history.push(name("Complete"));

        assert_eq!(history.pointer(), 2);
        assert_eq!(history.current(), Some("Complete"));
    }

    #[test]
    fn push_after_back_keeps_stale_entries() {
        let mut history = History::new(name("A"));
        history.push(name("B"));
        history.push(name("C"));
        assert!(history.back());
        assert!(history.back());

        history.push(name("D"));

        assert_eq!(history.path(), vec![Some("A"), Some("B"), Some("C"), Some("D")]);
        assert_eq!(history.pointer(), 3);
        assert!(!history.can_forward());
    }

    #[test]
    fn back_stops_at_start() {
        let mut history = History::new(name("A"));
        assert!(!history.back());
        assert_eq!(history.pointer(), 0);
    }

    #[test]
    fn forward_stops_at_end() {
        let mut history = History::new(name("A"));
        history.push(name("B"));
        assert!(!history.forward());
        assert!(history.back());
        assert!(history.forward());
        assert_eq!(history.current(), Some("B"));
    }

    #[test]
    fn undefined_slot_is_stored() {
        let mut history = History::new(name("A"));
        history.push(None);
        assert_eq!(history.current(), None);
        assert_eq!(history.path(), vec![Some("A"), None]);
    }

    #[test]
    fn collapse_keeps_active_entry() {
        let mut history = History::new(name("A"));
        history.push(name("B"));
        history.push(name("C"));
        history.back();

        let entry = history.current_entry().clone();
        history.collapse();

        assert_eq!(history.entries(), &[entry]);
        assert_eq!(history.pointer(), 0);
        assert!(!history.can_back());
        assert!(!history.can_forward());
    }

    #[test]
    fn duration_is_non_negative() {
        let mut history = History::new(name("A"));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));

        std::thread::sleep(Duration::from_millis(10));
        history.push(name("B"));

        assert!(history.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new(name("A"));
        history.push(None);
        history.back();

        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(value["pointer"], 0);
        assert_eq!(value["entries"][0]["state"], "A");
        assert!(value["entries"][1]["state"].is_null());

        let entry: HistoryEntry =
            serde_json::from_value(value["entries"][0].clone()).unwrap();
        assert_eq!(&entry, &history.entries()[0]);
    }
}
