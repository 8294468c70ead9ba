//! In-memory document adapter.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::document::{Document, StoredValue};
use crate::error::Result;
use crate::persistence::DocumentAdapter;

/// Keeps the last written document in memory. No durability.
///
/// Share it through an `Arc` to reopen a database on previously written state.
#[derive(Debug)]
pub struct MemoryAdapter<V> {
    saved: Mutex<Option<Document<V>>>,
}

impl<V> MemoryAdapter<V> {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(None),
        }
    }
}

impl<V> Default for MemoryAdapter<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V: StoredValue> DocumentAdapter<V> for MemoryAdapter<V> {
    async fn read(&self) -> Result<Option<Document<V>>> {
        Ok(self.saved.lock().await.clone())
    }

    async fn write(&self, document: &Document<V>) -> Result<()> {
        *self.saved.lock().await = Some(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Entry;

    #[tokio::test]
    async fn test_memory_adapter_read_before_write() {
        let adapter: MemoryAdapter<String> = MemoryAdapter::new();
        assert!(adapter.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_adapter_returns_last_write() {
        let adapter = MemoryAdapter::new();
        let mut doc = Document::new();
        doc.namespace_mut("cache")
            .insert("k".to_string(), Entry::new("v".to_string(), None));

        adapter.write(&doc).await.unwrap();

        assert_eq!(adapter.read().await.unwrap(), Some(doc));
    }
}
