use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-wide store of extracted document text, keyed by chat id.
///
/// Entries are insert-only: a document is never updated or removed once
/// stored, and the whole map lives exactly as long as the process. Handles
/// are cheap to clone and share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` under a freshly generated chat id and returns the id.
    ///
    /// The id is generated while holding the write lock, so the insert is
    /// atomic insert-if-absent: a colliding id is regenerated rather than
    /// overwriting an existing document.
    pub async fn insert(&self, text: String) -> String {
        let mut guard = self.inner.write().await;
        let mut id = Uuid::new_v4().to_string();
        while guard.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }
        guard.insert(id.clone(), text);
        id
    }

    /// Returns a copy of the stored text for `id`, if any.
    pub async fn get(&self, id: &str) -> Option<String> {
        self.inner.read().await.get(id).cloned()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
