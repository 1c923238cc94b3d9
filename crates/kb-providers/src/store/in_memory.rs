//! In-memory document store
//!
//! Keeps every document in a concurrent map. Data is not persisted and is
//! lost on restart.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use kb_domain::error::{Error, Result};
use kb_domain::ports::DocumentStore;
use kb_domain::value_objects::{DocumentId, DocumentPayload, Embedding, StoredDocument};

/// In-memory document store
///
/// Ids come from an atomic counter starting at [`DocumentId::FIRST`] and are
/// never reused. Listing operations sort by id so callers always see
/// insertion order regardless of the map's internal layout.
pub struct InMemoryDocumentStore {
    documents: DashMap<DocumentId, StoredDocument>,
    next_id: AtomicU64,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            next_id: AtomicU64::new(DocumentId::FIRST.get()),
        }
    }

    fn snapshot(&self) -> Vec<StoredDocument> {
        let mut docs: Vec<StoredDocument> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        docs.sort_by_key(|doc| doc.id);
        docs
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn document_not_found(id: DocumentId) -> Error {
    Error::not_found(format!("Document {id}"))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn append(&self, embedding: Embedding, payload: DocumentPayload) -> Result<DocumentId> {
        let id = DocumentId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.documents.insert(
            id,
            StoredDocument {
                id,
                embedding,
                payload,
            },
        );
        Ok(id)
    }

    async fn all(&self) -> Result<Vec<StoredDocument>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: DocumentId) -> Result<StoredDocument> {
        self.documents
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| document_not_found(id))
    }

    async fn update(
        &self,
        id: DocumentId,
        embedding: Embedding,
        mut payload: DocumentPayload,
    ) -> Result<StoredDocument> {
        let mut entry = self
            .documents
            .get_mut(&id)
            .ok_or_else(|| document_not_found(id))?;

        payload.created_at = entry.payload.created_at;
        payload.updated_at = Utc::now();
        entry.embedding = embedding;
        entry.payload = payload;
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: DocumentId) -> Result<()> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| document_not_found(id))
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<StoredDocument>> {
        Ok(self
            .snapshot()
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.documents.len())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
