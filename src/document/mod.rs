//! Document Module
//!
//! The full persisted state: namespace name -> key -> entry.
//!
//! Serialized shape:
//! `{ "__keyv": { "<namespace>": { "<key>": { "value": ..., "expire": <ms> } } } }`

mod entry;
mod order;
mod table;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use entry::{current_timestamp_ms, Entry};
pub use order::KeyOrder;
pub use table::NamespaceTable;

/// Top-level key the namespaces live under.
pub const ROOT_KEY: &str = "__keyv";

// == Stored Value ==
/// Any payload the document can round-trip through serde.
pub trait StoredValue: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> StoredValue for T where T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

// == Document ==
/// All namespaces of a backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "V: Serialize", deserialize = "V: Deserialize<'de>"))]
pub struct Document<V> {
    #[serde(rename = "__keyv", default)]
    namespaces: BTreeMap<String, NamespaceTable<V>>,
}

impl<V> Document<V> {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self {
            namespaces: BTreeMap::new(),
        }
    }

    /// Returns the table for `namespace`, if it has been created.
    pub fn namespace(&self, namespace: &str) -> Option<&NamespaceTable<V>> {
        self.namespaces.get(namespace)
    }

    /// Returns the table for `namespace`, creating it when missing.
    pub fn namespace_mut(&mut self, namespace: &str) -> &mut NamespaceTable<V> {
        self.namespaces.entry(namespace.to_string()).or_default()
    }

    /// Makes sure a table exists for `namespace`.
    pub fn ensure_namespace(&mut self, namespace: &str) {
        self.namespace_mut(namespace);
    }

    /// Replaces the table for `namespace` with an empty one.
    pub fn reset_namespace(&mut self, namespace: &str) {
        self.namespaces
            .insert(namespace.to_string(), NamespaceTable::new());
    }

    /// Names of every namespace in the document.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Number of entries across all namespaces, expired ones included.
    pub fn total_entries(&self) -> usize {
        self.namespaces.values().map(NamespaceTable::len).sum()
    }
}

impl<V> Default for Document<V> {
    fn default() -> Self {
        Self::new()
    }
}
