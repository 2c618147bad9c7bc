//! Builder for constructing mode stacks.

use crate::builder::error::BuildError;
use crate::core::{Mode, ModeChange, ModeStack, Observer};

/// Builder for constructing mode stacks with a fluent API.
pub struct ModeStackBuilder<M: Mode> {
    initial: Option<M>,
    observers: Vec<Observer<M>>,
}

impl<M: Mode> ModeStackBuilder<M> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            observers: Vec::new(),
        }
    }

    /// Set the initial mode (required).
    pub fn initial(mut self, mode: M) -> Self {
        self.initial = Some(mode);
        self
    }

    /// Set the initial mode from a condition, e.g. whether a slot is booked.
    pub fn initial_when(self, condition: bool, then: M, otherwise: M) -> Self {
        self.initial(if condition { then } else { otherwise })
    }

    /// Subscribe an observer as soon as the stack exists.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&ModeChange<M>) + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the stack.
    /// Returns an error if no initial mode was given.
    pub fn build(self) -> Result<ModeStack<M>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialMode)?;

        let mut stack = ModeStack::new(initial);
        for observer in self.observers {
            stack.subscribe_boxed(observer);
        }

        Ok(stack)
    }
}

impl<M: Mode> Default for ModeStackBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
