//! Synchronous state-change listeners.

use crate::core::{StateChange, StateKind};

/// Handle returned by `add_listener`, used to remove the listener later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<K> = Box<dyn FnMut(&StateChange<K>)>;

/// Ordered list of listeners, notified in subscription order.
pub(crate) struct Listeners<K: StateKind> {
    next_id: u64,
    entries: Vec<(ListenerId, Callback<K>)>,
}

impl<K: StateKind> Listeners<K> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StateChange<K>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, change: &StateChange<K>) {
        for (_, listener) in self.entries.iter_mut() {
            listener(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
