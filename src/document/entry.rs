//! Document Entry Module
//!
//! Defines the stored unit: a value plus an optional absolute expiration.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// == Entry ==
/// A single stored value with its expiration metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<u64>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry with an optional TTL in milliseconds.
    ///
    /// A TTL of zero is treated the same as no TTL: the entry never expires.
    pub fn new(value: V, ttl_ms: Option<u64>) -> Self {
        let expire = ttl_ms
            .filter(|ttl| *ttl > 0)
            .map(|ttl| current_timestamp_ms().saturating_add(ttl));

        Self { value, expire }
    }

    // == Is Expired ==
    /// Checks if the entry is expired at the given instant.
    ///
    /// An entry is expired once `now >= expire`; entries without an
    /// expiration never expire.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expire {
            Some(expire) => now_ms >= expire,
            None => false,
        }
    }

    /// Checks if the entry is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired
    /// - `Some(remaining_ms)` if the entry has TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expire
            .map(|expire| expire.saturating_sub(current_timestamp_ms()))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = Entry::new("test_value".to_string(), None);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expire.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl_never_expires() {
        let entry = Entry::new(1, Some(0));

        assert!(entry.expire.is_none());
        assert!(!entry.is_expired_at(u64::MAX));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let before = current_timestamp_ms();
        let entry = Entry::new("test_value".to_string(), Some(60_000));

        let expire = entry.expire.unwrap();
        assert!(expire >= before + 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = Entry::new("test_value".to_string(), Some(50));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = Entry {
            value: "test",
            expire: Some(1_000),
        };

        assert!(!entry.is_expired_at(999));
        assert!(entry.is_expired_at(1_000), "Entry should be expired at boundary");
        assert!(entry.is_expired_at(1_001));
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = Entry::new("test_value", Some(10_000));

        let remaining_ms = entry.ttl_remaining_ms().unwrap();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired_and_unbounded() {
        let expired = Entry {
            value: "v",
            expire: Some(1),
        };
        assert_eq!(expired.ttl_remaining_ms(), Some(0));

        let forever = Entry::new("v", None);
        assert!(forever.ttl_remaining_ms().is_none());
    }

    #[test]
    fn test_entry_serde_shape() {
        let forever = Entry::new(serde_json::json!({"a": 1}), None);
        let json = serde_json::to_value(&forever).unwrap();
        assert_eq!(json, serde_json::json!({"value": {"a": 1}}));

        let timed: Entry<String> =
            serde_json::from_str(r#"{"value":"x","expire":1700000000000}"#).unwrap();
        assert_eq!(timed.expire, Some(1_700_000_000_000));
    }
}
