//! Store Module
//!
//! Namespaced, TTL-aware key-value store with lazy expiration.

mod adapter;
mod events;
mod iter;
mod namespaced;
mod stats;


// Re-export public types
pub use adapter::StorageAdapter;
pub use events::{ChangeListener, StoreEvent};
pub use namespaced::NamespacedStore;
pub use stats::StoreStats;
