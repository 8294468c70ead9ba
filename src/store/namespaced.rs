//! Namespaced Store Module
//!
//! Read/write/expiry logic for one namespace of a shared document.

use std::sync::Arc;

use futures::future::join_all;
use futures::stream::BoxStream;
use tracing::{debug, info};

use crate::config::{StoreConfig, DEFAULT_NAMESPACE};
use crate::document::{current_timestamp_ms, Document, Entry, StoredValue};
use crate::error::Result;
use crate::persistence::{Database, JsonFileAdapter};
use crate::store::events::{ChangeListener, Listeners, StoreEvent};
use crate::store::iter;
use crate::store::stats::{StatsRecorder, StoreStats};

// == Namespaced Store ==
/// TTL-aware key-value store over one namespace of a [`Database`].
///
/// Every mutation rewrites the whole document before returning. Expiry is
/// lazy: an expired entry stays in the table until a read touches it.
#[derive(Debug)]
pub struct NamespacedStore<V: StoredValue> {
    /// Namespace this store reads and writes
    namespace: String,
    /// Document shared with other stores
    db: Arc<Database<V>>,
    /// Change callbacks
    listeners: Listeners,
    /// Activity counters
    stats: StatsRecorder,
}

impl<V: StoredValue> NamespacedStore<V> {
    // == Constructors ==
    /// Attaches a store for `namespace` to `db`.
    ///
    /// The namespace table is created in the mirror right away, so reads
    /// never see a missing table.
    pub async fn new(namespace: impl Into<String>, db: Arc<Database<V>>) -> Self {
        let namespace = namespace.into();
        db.lock().await.ensure_namespace(&namespace);
        debug!(namespace = %namespace, "Store attached");

        Self {
            namespace,
            db,
            listeners: Listeners::default(),
            stats: StatsRecorder::new(),
        }
    }

    /// Creates a store on a private in-memory database, in the default namespace.
    pub async fn in_memory() -> Self {
        Self::new(DEFAULT_NAMESPACE, Arc::new(Database::in_memory())).await
    }

    /// Creates a store from configuration.
    ///
    /// Opens the JSON document at `config.path` when set, otherwise a
    /// private in-memory database.
    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        let db = match &config.path {
            Some(path) => Database::open(JsonFileAdapter::new(path)).await?,
            None => Database::in_memory(),
        };
        Ok(Self::new(config.namespace.clone(), Arc::new(db)).await)
    }

    // == Accessors ==
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The database this store writes to, for attaching sibling namespaces.
    pub fn database(&self) -> &Arc<Database<V>> {
        &self.db
    }

    /// Registers a callback run after each persisted mutation.
    ///
    /// Takes `&self`, so listeners can be added to a store that is already
    /// shared behind an `Arc`.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let listener: ChangeListener = Arc::new(listener);
        self.listeners.push(listener);
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// An expired entry is evicted (and the document rewritten) before
    /// `None` is returned.
    pub async fn get(&self, key: &str) -> Result<Option<V>> {
        self.resolve(&self.namespace, key).await
    }

    /// Looks up every key independently; results line up with `keys`.
    pub async fn get_many<K: AsRef<str>>(&self, keys: &[K]) -> Result<Vec<Option<V>>> {
        join_all(keys.iter().map(|key| self.get(key.as_ref())))
            .await
            .into_iter()
            .collect()
    }

    // == Has ==
    /// Raw membership check. Does not consult expiration.
    pub async fn has(&self, key: &str) -> bool {
        self.db
            .lock()
            .await
            .namespace(&self.namespace)
            .is_some_and(|table| table.contains_key(key))
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting any existing entry.
    ///
    /// `ttl_ms` of `None` or `Some(0)` stores an entry that never expires.
    pub async fn set(&self, key: &str, value: V, ttl_ms: Option<u64>) -> Result<()> {
        let entry = Entry::new(value, ttl_ms);

        let mut data = self.db.lock().await;
        data.namespace_mut(&self.namespace)
            .insert(key.to_string(), entry);
        self.flush(&data).await?;
        drop(data);

        debug!(namespace = %self.namespace, key, ttl_ms, "Entry set");
        self.listeners.emit(StoreEvent::Set {
            namespace: self.namespace.clone(),
            key: key.to_string(),
        });
        Ok(())
    }

    // == Delete ==
    /// Removes `key`. Returns `false` if it was not present.
    ///
    /// Presence is raw: deleting an expired entry still returns `true`.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let mut data = self.db.lock().await;
        if data.namespace_mut(&self.namespace).remove(key).is_none() {
            return Ok(false);
        }
        self.flush(&data).await?;
        drop(data);

        debug!(namespace = %self.namespace, key, "Entry deleted");
        self.listeners.emit(StoreEvent::Deleted {
            namespace: self.namespace.clone(),
            key: key.to_string(),
        });
        Ok(true)
    }

    /// Deletes every key; `true` only if each one was present.
    ///
    /// All deletions run even when some keys are missing.
    pub async fn delete_many<K: AsRef<str>>(&self, keys: &[K]) -> Result<bool> {
        join_all(keys.iter().map(|key| self.delete(key.as_ref())))
            .await
            .into_iter()
            .try_fold(true, |all, deleted| deleted.map(|deleted| all && deleted))
    }

    // == Clear ==
    /// Empties this namespace. Other namespaces are untouched.
    pub async fn clear(&self) -> Result<()> {
        let mut data = self.db.lock().await;
        data.reset_namespace(&self.namespace);
        self.flush(&data).await?;
        drop(data);

        info!(namespace = %self.namespace, "Namespace cleared");
        self.listeners.emit(StoreEvent::Cleared {
            namespace: self.namespace.clone(),
        });
        Ok(())
    }

    // == Iterate ==
    /// Streams live `(key, value)` pairs of `namespace` (default: this store's).
    ///
    /// Keys are visited in table order, one at a time. Expired entries are
    /// evicted and skipped. The stream reads the live table at each step, so
    /// concurrent writes may change which keys are visited. Deleting keys that
    /// were already yielded never causes a live key to be skipped.
    ///
    /// Lookups and evictions happen in `namespace`, not this store's own
    /// namespace, and `Expired` events name the iterated namespace.
    pub fn iter<'a>(&'a self, namespace: Option<&str>) -> BoxStream<'a, Result<(String, V)>> {
        let namespace = namespace.unwrap_or(self.namespace.as_str()).to_string();
        iter::entries(self, namespace)
    }

    /// No-op; the database lifecycle is owned by the caller.
    pub async fn disconnect(&self) -> Result<()> {
        debug!(namespace = %self.namespace, "Store disconnected");
        Ok(())
    }

    // == Stats ==
    /// Returns current statistics for this store.
    pub async fn stats(&self) -> StoreStats {
        self.stats.snapshot(self.len().await)
    }

    /// Number of entries physically present, expired ones included.
    pub async fn len(&self) -> usize {
        self.db
            .lock()
            .await
            .namespace(&self.namespace)
            .map_or(0, |table| table.len())
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Internals ==
    /// Resolves `key` in `namespace`, evicting it if expired.
    pub(crate) async fn resolve(&self, namespace: &str, key: &str) -> Result<Option<V>> {
        let now = current_timestamp_ms();
        let mut data = self.db.lock().await;

        match data.namespace(namespace).and_then(|table| table.get(key)) {
            None => {
                self.stats.record_miss();
                return Ok(None);
            }
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                return Ok(Some(entry.value.clone()));
            }
            Some(_) => {}
        }

        data.namespace_mut(namespace).remove(key);
        self.flush(&data).await?;
        drop(data);

        self.stats.record_expiration();
        self.stats.record_miss();
        debug!(namespace, key, "Expired entry evicted");
        self.listeners.emit(StoreEvent::Expired {
            namespace: namespace.to_string(),
            key: key.to_string(),
        });
        Ok(None)
    }

    /// Returns the first key of the live table for `namespace` that comes
    /// after the most recently yielded key still present.
    ///
    /// `yielded` lists keys in the order they were handed out. When none of
    /// them remain, scanning starts from the front of the table.
    pub(crate) async fn next_key(&self, namespace: &str, yielded: &[String]) -> Option<String> {
        let data = self.db.lock().await;
        let table = data.namespace(namespace)?;
        let start = yielded
            .iter()
            .rev()
            .find_map(|key| table.position(key))
            .map_or(0, |index| index + 1);
        table.key_at(start).map(str::to_string)
    }

    async fn flush(&self, data: &Document<V>) -> Result<()> {
        self.db.persist(data).await?;
        self.stats.record_write();
        Ok(())
    }
}
