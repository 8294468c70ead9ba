//! Change notification for stores.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// A mutation that has been applied and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A key was written
    Set { namespace: String, key: String },
    /// A key was explicitly deleted
    Deleted { namespace: String, key: String },
    /// An expired key was evicted on access
    Expired { namespace: String, key: String },
    /// A whole namespace was emptied
    Cleared { namespace: String },
}

impl StoreEvent {
    pub fn namespace(&self) -> &str {
        match self {
            StoreEvent::Set { namespace, .. }
            | StoreEvent::Deleted { namespace, .. }
            | StoreEvent::Expired { namespace, .. }
            | StoreEvent::Cleared { namespace } => namespace,
        }
    }

    /// The affected key; `None` for namespace-wide events.
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreEvent::Set { key, .. }
            | StoreEvent::Deleted { key, .. }
            | StoreEvent::Expired { key, .. } => Some(key),
            StoreEvent::Cleared { .. } => None,
        }
    }
}

/// Callback invoked for every [`StoreEvent`].
pub type ChangeListener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Registered callbacks. Registration needs only a shared reference.
#[derive(Default)]
pub(crate) struct Listeners(RwLock<Vec<ChangeListener>>);

impl Listeners {
    pub fn push(&self, listener: ChangeListener) {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Calls every listener outside the lock, so a listener may register more.
    pub fn emit(&self, event: StoreEvent) {
        let listeners = self.0.read().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in &listeners {
            listener(&event);
        }
    }

    fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}
