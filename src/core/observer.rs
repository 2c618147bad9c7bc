//! Change observers for a mode stack.

use super::change::ModeChange;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Callback invoked after every applied mode change.
pub type Observer<M> = Box<dyn FnMut(&ModeChange<M>)>;

/// Handle returned by `subscribe`, used to remove the observer later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordered set of observers. Notification follows subscription order.
pub(crate) struct Observers<M> {
    entries: Vec<(SubscriptionId, Observer<M>)>,
}

impl<M> Observers<M> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, observer: Observer<M>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, change: &ModeChange<M>) {
        for (_, observer) in self.entries.iter_mut() {
            observer(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::change::ChangeKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_run_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&calls);
        observers.add(Box::new(move |_: &ModeChange<&'static str>| {
            first.borrow_mut().push("first")
        }));
        let second = Rc::clone(&calls);
        observers.add(Box::new(move |_: &ModeChange<&'static str>| {
            second.borrow_mut().push("second")
        }));

        observers.notify(&ModeChange::new("SHOW", "EDIT", ChangeKind::Push, 2));

        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn remove_reports_whether_observer_existed() {
        let mut observers: Observers<&'static str> = Observers::new();
        let id = observers.add(Box::new(|_: &ModeChange<&'static str>| {}));

        assert_eq!(observers.len(), 1);
        assert!(observers.remove(id));
        assert!(!observers.remove(id));
        assert_eq!(observers.len(), 0);
    }

    #[test]
    fn subscription_ids_are_unique() {
        let mut observers: Observers<&'static str> = Observers::new();
        let a = observers.add(Box::new(|_: &ModeChange<&'static str>| {}));
        let b = observers.add(Box::new(|_: &ModeChange<&'static str>| {}));
        assert_ne!(a, b);
    }
}
