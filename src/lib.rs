//! Docstore Cache - A namespaced key-value cache over a persistent document
//!
//! Provides get/set/delete/iterate semantics with lazy TTL expiration. Every
//! mutation rewrites the whole backing document.

pub mod config;
pub mod document;
pub mod error;
pub mod persistence;
pub mod store;

pub use config::StoreConfig;
pub use document::{Document, Entry, StoredValue};
pub use error::{Result, StoreError};
pub use persistence::{Database, DocumentAdapter, JsonFileAdapter, MemoryAdapter};
pub use store::{NamespacedStore, StorageAdapter, StoreEvent, StoreStats};
