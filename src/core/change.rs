//! Records of applied mode changes.

use super::mode::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a change altered the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A new mode was appended, creating an undo checkpoint
    Push,
    /// The top mode was overwritten in place
    Replace,
    /// The top mode was removed
    Back,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Push => "push",
            Self::Replace => "replace",
            Self::Back => "back",
        };
        f.write_str(label)
    }
}

/// Record of a single applied change.
///
/// Handed to observers after the history has been updated, so `to` is
/// always the new current mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeChange<M> {
    /// Mode that was current before the change
    pub from: M,
    /// Mode that is current after the change
    pub to: M,
    /// Which operation produced the change
    pub kind: ChangeKind,
    /// History length after the change
    pub depth: usize,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl<M: Mode> ModeChange<M> {
    pub(crate) fn new(from: M, to: M, kind: ChangeKind, depth: usize) -> Self {
        Self {
            from,
            to,
            kind,
            depth,
            timestamp: Utc::now(),
        }
    }

    /// True when the change landed on a different mode than it left.
    pub fn is_visible(&self) -> bool {
        self.from != self.to
    }
}
