//! The mode history stack with change notification.

use super::change::ModeChange;
use super::history::ModeHistory;
use super::mode::Mode;
use super::observer::{Observer, Observers, SubscriptionId};
use std::fmt;

/// Undoable stack of visual modes for one interactive slot.
///
/// `transition` either pushes a new checkpoint or replaces the current
/// mode in place; `back` undoes one checkpoint and never removes the
/// initial mode. Every applied change is handed to the subscribed
/// observers synchronously, after the history has been updated.
///
/// No transition is ever rejected: any mode may follow any mode.
///
/// # Example
///
/// ```rust
/// use visual_mode::core::ModeStack;
///
/// let mut stack = ModeStack::new("SHOW");
/// stack.transition("EDIT", false);
/// stack.transition("SAVING", true);
/// stack.transition("ERROR_SAVE", true);
/// assert_eq!(stack.history().modes(), &["SHOW", "ERROR_SAVE"]);
///
/// stack.back();
/// assert_eq!(stack.current_mode(), &"SHOW");
/// ```
pub struct ModeStack<M: Mode> {
    history: ModeHistory<M>,
    observers: Observers<M>,
}

impl<M: Mode> ModeStack<M> {
    /// Create a stack seeded with its initial mode.
    pub fn new(initial: M) -> Self {
        Self {
            history: ModeHistory::new(initial),
            observers: Observers::new(),
        }
    }

    /// Start a `ModeStackBuilder`.
    pub fn builder() -> crate::builder::ModeStackBuilder<M> {
        crate::builder::ModeStackBuilder::new()
    }

    /// The mode to render now.
    pub fn current_mode(&self) -> &M {
        self.history.current()
    }

    /// Every mode still on the stack, oldest first.
    pub fn history(&self) -> &ModeHistory<M> {
        &self.history
    }

    /// Number of modes on the stack; 1 at the initial mode.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether `back` would change anything.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_at_floor()
    }

    /// Move to `mode`.
    ///
    /// With `replace == false` the mode is pushed and `back` will return to
    /// the current one. With `replace == true` the current mode is
    /// overwritten and is no longer reachable through `back`.
    pub fn transition(&mut self, mode: M, replace: bool) -> ModeChange<M> {
        let change = if replace {
            self.history.replace(mode)
        } else {
            self.history.push(mode)
        };
        self.publish(&change);
        change
    }

    /// Shorthand for `transition(mode, false)`.
    pub fn push(&mut self, mode: M) -> ModeChange<M> {
        self.transition(mode, false)
    }

    /// Shorthand for `transition(mode, true)`.
    pub fn replace(&mut self, mode: M) -> ModeChange<M> {
        self.transition(mode, true)
    }

    /// Undo one checkpoint.
    ///
    /// At the initial mode this does nothing, notifies nobody and returns
    /// `None`.
    pub fn back(&mut self) -> Option<ModeChange<M>> {
        match self.history.pop() {
            Some(change) => {
                self.publish(&change);
                Some(change)
            }
            None => {
                tracing::trace!(
                    mode = self.current_mode().name(),
                    "back ignored at initial mode"
                );
                None
            }
        }
    }

    /// Register an observer for every applied change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ModeChange<M>) + 'static,
    {
        self.observers.add(Box::new(observer))
    }

    pub(crate) fn subscribe_boxed(&mut self, observer: Observer<M>) -> SubscriptionId {
        self.observers.add(observer)
    }

    /// Remove an observer. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn publish(&mut self, change: &ModeChange<M>) {
        tracing::debug!(
            from = change.from.name(),
            to = change.to.name(),
            kind = %change.kind,
            depth = change.depth,
            "mode changed"
        );
        self.observers.notify(change);
    }
}

impl<M: Mode> fmt::Debug for ModeStack<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeStack")
            .field("history", &self.history.modes())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::change::ChangeKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<ModeChange<&'static str>>>>;

    fn recorded(stack: &mut ModeStack<&'static str>) -> Log {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        stack.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        log
    }

    #[test]
    fn push_grows_history() {
        let mut stack = ModeStack::new("EMPTY");
        stack.transition("CREATE", false);

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current_mode(), &"CREATE");
        assert!(stack.can_go_back());
    }

    #[test]
    fn replace_keeps_depth() {
        let mut stack = ModeStack::new("EMPTY");
        stack.push("CREATE");
        stack.replace("SAVING");

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.history().modes(), &["EMPTY", "SAVING"]);
    }

    #[test]
    fn create_save_show_then_back() {
        let mut stack = ModeStack::new("EMPTY");

        stack.transition("CREATE", false);
        assert_eq!(stack.history().modes(), &["EMPTY", "CREATE"]);

        stack.transition("SAVING", true);
        assert_eq!(stack.history().modes(), &["EMPTY", "SAVING"]);

        stack.transition("SHOW", true);
        assert_eq!(stack.history().modes(), &["EMPTY", "SHOW"]);

        stack.back();
        assert_eq!(stack.history().modes(), &["EMPTY"]);
        assert_eq!(stack.current_mode(), &"EMPTY");
    }

    #[test]
    fn failed_edit_collapses_to_show() {
        let mut stack = ModeStack::new("SHOW");
        stack.transition("EDIT", false);
        stack.transition("SAVING", true);
        stack.transition("ERROR_SAVE", true);
        assert_eq!(stack.history().modes(), &["SHOW", "ERROR_SAVE"]);

        stack.back();
        assert_eq!(stack.history().modes(), &["SHOW"]);
    }

    #[test]
    fn back_at_floor_is_silent() {
        let mut stack = ModeStack::new("SHOW");
        let log = recorded(&mut stack);

        assert!(stack.back().is_none());
        assert_eq!(stack.current_mode(), &"SHOW");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn every_transition_notifies_after_mutation() {
        let mut stack = ModeStack::new("SHOW");
        let log = recorded(&mut stack);

        stack.push("CONFIRM");
        stack.replace("DELETING");
        stack.replace("DELETING");
        stack.back();

        let log = log.borrow();
        let kinds: Vec<ChangeKind> = log.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Push,
                ChangeKind::Replace,
                ChangeKind::Replace,
                ChangeKind::Back
            ]
        );
        assert_eq!(log[0].to, "CONFIRM");
        assert_eq!(log[1].from, "CONFIRM");
        assert_eq!(log[2].from, "DELETING");
        assert_eq!(log[3].to, "SHOW");
        assert_eq!(log[3].depth, 1);
    }

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let mut stack = ModeStack::new("EMPTY");
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = stack.subscribe(move |_| *counter.borrow_mut() += 1);

        stack.push("CREATE");
        assert!(stack.unsubscribe(id));
        stack.back();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(stack.observer_count(), 0);
    }

    #[test]
    fn any_mode_may_follow_any_mode() {
        let mut stack = ModeStack::new("ERROR_DELETE".to_string());
        stack.push("EMPTY".to_string());
        stack.push("EMPTY".to_string());
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.current_mode(), "EMPTY");
    }

    #[test]
    fn debug_lists_history() {
        let mut stack = ModeStack::new("SHOW");
        stack.push("EDIT");
        let rendered = format!("{:?}", stack);
        assert!(rendered.contains("SHOW"));
        assert!(rendered.contains("EDIT"));
    }
}
