//! Storage adapter contract consumed by caching front-ends.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::document::StoredValue;
use crate::error::Result;
use crate::store::NamespacedStore;

/// Key-value backend contract: `get`/`set`/`delete` plus bulk and
/// iteration helpers, all scoped to one namespace.
#[async_trait]
pub trait StorageAdapter<V: StoredValue>: Send + Sync {
    /// Namespace the adapter operates on.
    fn namespace(&self) -> &str;

    async fn get(&self, key: &str) -> Result<Option<V>>;

    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<V>>>;

    async fn set(&self, key: &str, value: V, ttl_ms: Option<u64>) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<bool>;

    async fn delete_many(&self, keys: &[String]) -> Result<bool>;

    /// Raw presence, regardless of expiration.
    async fn has(&self, key: &str) -> Result<bool>;

    async fn clear(&self) -> Result<()>;

    async fn disconnect(&self) -> Result<()>;

    fn iterator<'a>(&'a self, namespace: Option<&'a str>) -> BoxStream<'a, Result<(String, V)>>;
}

#[async_trait]
impl<V: StoredValue> StorageAdapter<V> for NamespacedStore<V> {
    fn namespace(&self) -> &str {
        NamespacedStore::namespace(self)
    }

    async fn get(&self, key: &str) -> Result<Option<V>> {
        NamespacedStore::get(self, key).await
    }

    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<V>>> {
        NamespacedStore::get_many(self, keys).await
    }

    async fn set(&self, key: &str, value: V, ttl_ms: Option<u64>) -> Result<()> {
        NamespacedStore::set(self, key, value, ttl_ms).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        NamespacedStore::delete(self, key).await
    }

    async fn delete_many(&self, keys: &[String]) -> Result<bool> {
        NamespacedStore::delete_many(self, keys).await
    }

    async fn has(&self, key: &str) -> Result<bool> {
        Ok(NamespacedStore::has(self, key).await)
    }

    async fn clear(&self) -> Result<()> {
        NamespacedStore::clear(self).await
    }

    async fn disconnect(&self) -> Result<()> {
        NamespacedStore::disconnect(self).await
    }

    fn iterator<'a>(&'a self, namespace: Option<&'a str>) -> BoxStream<'a, Result<(String, V)>> {
        self.iter(namespace)
    }
}
