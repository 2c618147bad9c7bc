//! Ordered, never-empty mode history.
//!
//! `ModeHistory` is the pure part of the mode stack: it holds the sequence
//! of modes (most recent last) and applies push, replace and pop, reporting
//! each applied change. It knows nothing about observers.

use super::change::{ChangeKind, ModeChange};
use super::mode::Mode;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when rebuilding a history from raw parts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    #[error("Mode history cannot be empty; it always holds the initial mode")]
    Empty,
}

/// Ordered history of modes, most recent last.
///
/// The first element is the initial mode and can never be removed, so
/// `current()` is always defined.
///
/// # Example
///
/// ```rust
/// use visual_mode::core::ModeHistory;
///
/// let mut history = ModeHistory::new("EMPTY");
/// history.push("CREATE");
/// history.replace("SAVING");
///
/// assert_eq!(history.modes(), &["EMPTY", "SAVING"]);
/// assert_eq!(history.current(), &"SAVING");
///
/// history.pop();
/// assert!(history.pop().is_none());
/// assert_eq!(history.current(), &"EMPTY");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ModeHistory<M> {
    modes: Vec<M>,
}

impl<M: Mode> ModeHistory<M> {
    /// Create a history holding only the initial mode.
    pub fn new(initial: M) -> Self {
        Self {
            modes: vec![initial],
        }
    }

    /// The most recent mode.
    pub fn current(&self) -> &M {
        // The initial mode is never removed.
        &self.modes[self.modes.len() - 1]
    }

    /// The mode the history was seeded with.
    pub fn initial(&self) -> &M {
        &self.modes[0]
    }

    /// Number of modes, the initial one included.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Always false; kept for the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when only the initial mode remains.
    pub fn is_at_floor(&self) -> bool {
        self.modes.len() == 1
    }

    /// All modes, oldest first.
    pub fn modes(&self) -> &[M] {
        &self.modes
    }

    /// Append a mode, creating a new undo checkpoint.
    pub fn push(&mut self, mode: M) -> ModeChange<M> {
        let from = self.current().clone();
        self.modes.push(mode.clone());
        ModeChange::new(from, mode, ChangeKind::Push, self.modes.len())
    }

    /// Overwrite the most recent mode, leaving earlier ones untouched.
    pub fn replace(&mut self, mode: M) -> ModeChange<M> {
        let top = self.modes.len() - 1;
        let from = std::mem::replace(&mut self.modes[top], mode.clone());
        ModeChange::new(from, mode, ChangeKind::Replace, self.modes.len())
    }

    /// Remove the most recent mode.
    ///
    /// Returns `None` and leaves the history untouched when only the
    /// initial mode is left.
    pub fn pop(&mut self) -> Option<ModeChange<M>> {
        if self.is_at_floor() {
            return None;
        }
        let from = self.modes.pop()?;
        let to = self.current().clone();
        let depth = self.modes.len();
        Some(ModeChange::new(from, to, ChangeKind::Back, depth))
    }
}

impl<M: Mode> TryFrom<Vec<M>> for ModeHistory<M> {
    type Error = HistoryError;

    fn try_from(modes: Vec<M>) -> Result<Self, Self::Error> {
        if modes.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self { modes })
    }
}

impl<M> From<ModeHistory<M>> for Vec<M> {
    fn from(history: ModeHistory<M>) -> Self {
        history.modes
    }
}

// Serialized as a bare sequence of modes, oldest first.
impl<M: Serialize> Serialize for ModeHistory<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.modes)
    }
}

impl<'de, M> Deserialize<'de> for ModeHistory<M>
where
    M: Mode + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let modes = Vec::<M>::deserialize(deserializer)?;
        Self::try_from(modes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_initial_mode() {
        let history = ModeHistory::new("EMPTY");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &"EMPTY");
        assert_eq!(history.initial(), &"EMPTY");
        assert!(history.is_at_floor());
        assert!(!history.is_empty());
    }

    #[test]
    fn push_appends_and_reports_change() {
        let mut history = ModeHistory::new("SHOW");
        let change = history.push("EDIT");

        assert_eq!(history.modes(), &["SHOW", "EDIT"]);
        assert_eq!(change.from, "SHOW");
        assert_eq!(change.to, "EDIT");
        assert_eq!(change.kind, ChangeKind::Push);
        assert_eq!(change.depth, 2);
    }

    #[test]
    fn replace_swaps_only_the_top() {
        let mut history = ModeHistory::new("SHOW");
        history.push("CONFIRM");
        let change = history.replace("DELETING");

        assert_eq!(history.modes(), &["SHOW", "DELETING"]);
        assert_eq!(change.from, "CONFIRM");
        assert_eq!(change.kind, ChangeKind::Replace);
        assert_eq!(change.depth, 2);
    }

    #[test]
    fn replace_at_floor_swaps_initial_mode() {
        let mut history = ModeHistory::new("EMPTY");
        history.replace("SHOW");

        assert_eq!(history.modes(), &["SHOW"]);
        assert_eq!(history.initial(), &"SHOW");
        assert!(history.pop().is_none());
    }

    #[test]
    fn pop_reveals_previous_mode() {
        let mut history = ModeHistory::new("EMPTY");
        history.push("CREATE");

        let change = history.pop().unwrap();
        assert_eq!(change.from, "CREATE");
        assert_eq!(change.to, "EMPTY");
        assert_eq!(change.kind, ChangeKind::Back);
        assert_eq!(change.depth, 1);
        assert_eq!(history.current(), &"EMPTY");
    }

    #[test]
    fn pop_at_floor_is_noop() {
        let mut history = ModeHistory::new("SHOW");
        assert!(history.pop().is_none());
        assert_eq!(history.modes(), &["SHOW"]);
    }

    #[test]
    fn try_from_rejects_empty_sequence() {
        let result = ModeHistory::<String>::try_from(Vec::new());
        assert_eq!(result, Err(HistoryError::Empty));

        let modes = vec!["SHOW".to_string(), "EDIT".to_string()];
        let history = ModeHistory::try_from(modes).unwrap();
        assert_eq!(history.current(), "EDIT");
    }

    #[test]
    fn history_serializes_as_sequence() {
        let mut history = ModeHistory::new("SHOW".to_string());
        history.push("EDIT".to_string());

        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["SHOW","EDIT"]"#);

        let restored: ModeHistory<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }

    #[test]
    fn empty_json_history_is_rejected() {
        let result: Result<ModeHistory<String>, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
