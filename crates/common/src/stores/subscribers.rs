//! Synchronous subscriber registry shared by the stores

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered set of snapshot callbacks.
///
/// Callbacks run synchronously on the mutating thread, in subscription
/// order, after the state lock has been released. The registry lock is not
/// held during delivery, so a callback may subscribe or unsubscribe without
/// deadlocking.
pub(crate) struct SubscriberSet<T> {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Callback<T>)>>,
}

impl<T> Default for SubscriberSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SubscriberSet<T> {
    pub(crate) fn new() -> Self {
        Self { next_id: AtomicU64::new(1), entries: Mutex::new(Vec::new()) }
    }

    pub(crate) fn subscribe(
        &self,
        callback: impl Fn(&T) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().push((id, Arc::new(callback)));
        SubscriptionId(id)
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id.0);
        entries.len() != before
    }

    pub(crate) fn notify(&self, snapshot: &T) {
        let callbacks: Vec<Callback<T>> =
            self.entries.lock().iter().map(|(_, callback)| Arc::clone(callback)).collect();
        for callback in callbacks {
            callback(snapshot);
        }
    }
}
