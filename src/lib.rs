//! Visual Mode: undoable view-mode history for interactive slots
//!
//! A `ModeStack` holds the ordered history of modes for one slot of a
//! scheduling view. Moving forward either pushes a new undo checkpoint or
//! replaces the current mode in place; going back pops one checkpoint and
//! never removes the initial mode. Observers are told about every applied
//! change, synchronously.
//!
//! # Core Concepts
//!
//! - **Mode**: an opaque label chosen by the caller, via the `Mode` trait
//! - **Push / Replace**: create a checkpoint, or overwrite the current one
//! - **Back**: undo one checkpoint; a no-op at the initial mode
//!
//! The `appointment` module uses the stack to drive the create, edit and
//! delete flow of an interview booking.
//!
//! # Example
//!
//! ```rust
//! use visual_mode::core::ModeStack;
//!
//! let mut stack = ModeStack::new("EMPTY");
//! stack.transition("CREATE", false);
//! stack.transition("SAVING", true);
//! stack.transition("SHOW", true);
//! assert_eq!(stack.history().modes(), &["EMPTY", "SHOW"]);
//!
//! stack.back();
//! assert_eq!(stack.current_mode(), &"EMPTY");
//! assert!(stack.back().is_none());
//! ```

pub mod appointment;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, ModeStackBuilder};
pub use crate::core::{ChangeKind, Mode, ModeChange, ModeHistory, ModeStack, SubscriptionId};
