use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{DocumentId, DocumentPayload, Embedding, StoredDocument};

/// Document Storage Interface
///
/// Holds embedded documents and hands out their identities. The ranking
/// pipeline only needs [`append`](Self::append) and [`all`](Self::all); the
/// remaining operations back the document management endpoints.
///
/// ## Contract
///
/// - `append` assigns a fresh sequential id and never overwrites
/// - `all` and `list` return documents in insertion (id) order
/// - `get`, `update` and `delete` on a missing id return `Error::NotFound`
/// - `update` keeps the original `created_at`
///
/// # Example
///
/// ```ignore
/// use kb_domain::ports::DocumentStore;
///
/// let id = store.append(embedding, payload).await?;
/// let doc = store.get(id).await?;
/// store.delete(id).await?;
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a new document and return its id
    async fn append(&self, embedding: Embedding, payload: DocumentPayload) -> Result<DocumentId>;

    /// Snapshot of every document in insertion order
    async fn all(&self) -> Result<Vec<StoredDocument>>;

    /// Fetch a single document
    async fn get(&self, id: DocumentId) -> Result<StoredDocument>;

    /// Replace the vector and payload of an existing document
    async fn update(
        &self,
        id: DocumentId,
        embedding: Embedding,
        payload: DocumentPayload,
    ) -> Result<StoredDocument>;

    /// Remove a document
    async fn delete(&self, id: DocumentId) -> Result<()>;

    /// A page of documents in insertion order
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<StoredDocument>>;

    /// Number of stored documents
    async fn count(&self) -> Result<usize>;

    /// Identifier of this store implementation (e.g. "memory")
    fn provider_name(&self) -> &str;

    /// Health check for the store (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.count().await?;
        Ok(())
    }
}
