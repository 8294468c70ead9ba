//! Persistence Module
//!
//! The in-memory document mirror shared by stores, and the adapters that
//! load and commit it.
//!
//! # Adapters
//! - [`MemoryAdapter`]: keeps the last written document in process memory
//! - [`JsonFileAdapter`]: reads and rewrites a JSON file

mod json_file;
mod memory;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::document::{Document, StoredValue};
use crate::error::Result;

pub use json_file::JsonFileAdapter;
pub use memory::MemoryAdapter;

// == Document Adapter ==
/// Loads and commits a whole [`Document`].
#[async_trait]
pub trait DocumentAdapter<V: StoredValue>: Send + Sync {
    /// Returns the persisted document, or `None` if nothing was persisted yet.
    async fn read(&self) -> Result<Option<Document<V>>>;

    /// Durably commits the entire document.
    async fn write(&self, document: &Document<V>) -> Result<()>;
}

#[async_trait]
impl<V, A> DocumentAdapter<V> for Arc<A>
where
    V: StoredValue,
    A: DocumentAdapter<V> + ?Sized,
{
    async fn read(&self) -> Result<Option<Document<V>>> {
        (**self).read().await
    }

    async fn write(&self, document: &Document<V>) -> Result<()> {
        (**self).write(document).await
    }
}

// == Database ==
/// In-memory mirror of a persisted document.
///
/// Every store sharing a `Database` goes through the same lock, so a
/// read -> mutate -> write sequence is never interleaved with another.
///
/// Each write commits the entire document, not a delta: the cost of a
/// mutation grows with the total size of all namespaces. Suited to small,
/// embedded datasets only.
pub struct Database<V: StoredValue> {
    data: Mutex<Document<V>>,
    adapter: Box<dyn DocumentAdapter<V>>,
}

impl<V: StoredValue> Database<V> {
    // == Constructors ==
    /// Reads the document through `adapter`, starting empty when none exists.
    pub async fn open<A>(adapter: A) -> Result<Self>
    where
        A: DocumentAdapter<V> + 'static,
    {
        let data = adapter.read().await?.unwrap_or_default();
        info!(
            namespaces = data.namespaces().count(),
            entries = data.total_entries(),
            "Document loaded"
        );

        Ok(Self {
            data: Mutex::new(data),
            adapter: Box::new(adapter),
        })
    }

    /// Creates a fresh, empty database that is never persisted outside the process.
    pub fn in_memory() -> Self {
        Self {
            data: Mutex::new(Document::new()),
            adapter: Box::new(MemoryAdapter::new()),
        }
    }

    // == Access ==
    /// Locks the mirror for a read-modify-write sequence.
    pub async fn lock(&self) -> MutexGuard<'_, Document<V>> {
        self.data.lock().await
    }

    /// Commits `data`, the document held through [`Database::lock`].
    pub async fn persist(&self, data: &Document<V>) -> Result<()> {
        debug!(entries = data.total_entries(), "Writing document");
        self.adapter.write(data).await.map_err(|e| {
            warn!(error = %e, "Failed to persist document");
            e
        })
    }

    /// Locks the mirror and commits its current state.
    pub async fn write(&self) -> Result<()> {
        let data = self.lock().await;
        self.persist(&data).await
    }

    /// Returns a copy of the current document.
    pub async fn snapshot(&self) -> Document<V> {
        self.lock().await.clone()
    }
}

impl<V: StoredValue> fmt::Debug for Database<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}
