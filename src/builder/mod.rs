//! Builder API for ergonomic mode stack construction.
//!
//! This module provides a fluent builder and the `mode_enum!` macro for
//! declaring mode types with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod stack;

pub use error::BuildError;
pub use stack::ModeStackBuilder;
