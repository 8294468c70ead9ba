//! Namespace Table Module
//!
//! Insertion-ordered mapping from key to entry for a single namespace.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::{Entry, KeyOrder};

// == Namespace Table ==
/// Key-to-entry mapping that iterates in insertion order.
///
/// Overwriting a key keeps its position; deleting it drops the position.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceTable<V> {
    entries: HashMap<String, Entry<V>>,
    order: KeyOrder,
}

impl<V> NamespaceTable<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: KeyOrder::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Entry<V>> {
        self.entries.get(key)
    }

    /// Raw membership, regardless of expiration.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Insert ==
    /// Stores an entry, returning the one it replaced.
    pub fn insert(&mut self, key: String, entry: Entry<V>) -> Option<Entry<V>> {
        if !self.entries.contains_key(&key) {
            self.order.push(&key);
        }
        self.entries.insert(key, entry)
    }

    // == Remove ==
    pub fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.order.remove(key);
        }
        removed
    }

    /// Returns the key at `index` in insertion order.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.order.key_at(index)
    }

    /// Returns the current insertion-order position of `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.order.position(key)
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter()
    }

    /// Iterates `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<V>)> {
        self.order
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|entry| (key, entry)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for NamespaceTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Serde ==
impl<V: Serialize> Serialize for NamespaceTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, entry) in self.iter() {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for NamespaceTable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

struct TableVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for TableVisitor<V> {
    type Value = NamespaceTable<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of keys to cache entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = NamespaceTable::new();
        while let Some((key, entry)) = access.next_entry::<String, Entry<V>>()? {
            table.insert(key, entry);
        }
        Ok(table)
    }
}
