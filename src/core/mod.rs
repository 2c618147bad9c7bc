//! Core mode-history types.
//!
//! This module contains the mode stack and its pure parts:
//! - Mode labels via the `Mode` trait
//! - The never-empty `ModeHistory`
//! - `ModeChange` records handed to observers
//! - `ModeStack`, which ties history and observers together
//!
//! Nothing here validates transitions or performs I/O; callers decide
//! which mode follows which.

mod change;
mod history;
mod mode;
mod observer;
mod stack;

pub use change::{ChangeKind, ModeChange};
pub use history::{HistoryError, ModeHistory};
pub use mode::Mode;
pub use observer::{Observer, SubscriptionId};
pub use stack::ModeStack;
