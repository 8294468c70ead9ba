//! Key Order Module
//!
//! Tracks insertion order of keys within a namespace table.

use std::collections::VecDeque;

// == Key Order ==
/// Tracks the order in which keys were first inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest insertion
/// - Back = Newest insertion
///
/// Re-inserting a tracked key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOrder {
    order: VecDeque<String>,
}

impl KeyOrder {
    // == Constructor ==
    /// Creates a new empty order tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Insert ==
    /// Appends a key that is not tracked yet.
    ///
    /// Callers only append keys that are new to the table, so the
    /// tracker never holds duplicates.
    pub fn push(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(index) = self.position(key) {
            self.order.remove(index);
        }
    }

    // == Key At ==
    /// Returns the key at the given position, if any.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    /// Iterates keys from oldest to newest insertion.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    // == Position ==
    /// Returns the current position of `key`, if tracked.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = KeyOrder::new();
        assert_eq!(order.iter().count(), 0);
        assert_eq!(order.key_at(0), None);
    }

    #[test]
    fn test_order_push() {
        let mut order = KeyOrder::new();

        order.push("key1");
        order.push("key2");
        order.push("key3");

        assert_eq!(order.iter().collect::<Vec<_>>(), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_order_remove_shifts_later_keys() {
        let mut order = KeyOrder::new();

        order.push("key1");
        order.push("key2");
        order.push("key3");
        order.remove("key2");

        assert_eq!(order.key_at(0), Some("key1"));
        assert_eq!(order.key_at(1), Some("key3"));
        assert_eq!(order.position("key3"), Some(1));
        assert_eq!(order.position("key2"), None);
    }

    #[test]
    fn test_order_remove_nonexistent() {
        let mut order = KeyOrder::new();

        order.push("key1");
        order.remove("nonexistent");

        assert_eq!(order.position("key1"), Some(0));
    }
}
