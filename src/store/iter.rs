//! Pull-based iteration over a live namespace table.

use futures::stream::{self, BoxStream, StreamExt};

use crate::document::StoredValue;
use crate::error::Result;
use crate::store::NamespacedStore;

/// Resume point in the live table of one namespace.
///
/// Keys before the most recently yielded survivor have all been visited or
/// evicted, so removing any of them never skips a live key.
struct Cursor<'a, V: StoredValue> {
    store: &'a NamespacedStore<V>,
    namespace: String,
    yielded: Vec<String>,
}

/// Streams live pairs of `namespace`, resolving one key per poll.
pub(crate) fn entries<V: StoredValue>(
    store: &NamespacedStore<V>,
    namespace: String,
) -> BoxStream<'_, Result<(String, V)>> {
    let cursor = Cursor {
        store,
        namespace,
        yielded: Vec::new(),
    };
    stream::try_unfold(cursor, advance).boxed()
}

async fn advance<'a, V: StoredValue>(
    mut cursor: Cursor<'a, V>,
) -> Result<Option<((String, V), Cursor<'a, V>)>> {
    while let Some(key) = cursor
        .store
        .next_key(&cursor.namespace, &cursor.yielded)
        .await
    {
        // An expired key is evicted here, so the next lookup moves past it.
        if let Some(value) = cursor.store.resolve(&cursor.namespace, &key).await? {
            cursor.yielded.push(key.clone());
            return Ok(Some(((key, value), cursor)));
        }
    }
    Ok(None)
}
