//! Instrumented document store wrapper
//!
//! Adds timing and `tracing` events to any [`DocumentStore`].
//!
//! ## Architecture
//!
//! This store follows the Decorator pattern:
//! - Wraps any `DocumentStore` implementation
//! - Forwards every call unchanged
//! - Logs each call at `debug`, and at `warn` when it fails or runs longer
//!   than the configured slow threshold
//!
//! ## Usage
//!
//! ```ignore
//! use kb_providers::store::{InMemoryDocumentStore, InstrumentedDocumentStore};
//!
//! let store = InstrumentedDocumentStore::new(InMemoryDocumentStore::new(), Duration::from_millis(100));
//! ```

use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use kb_domain::error::Result;
use kb_domain::ports::DocumentStore;
use kb_domain::value_objects::{DocumentId, DocumentPayload, Embedding, StoredDocument};

/// Instrumented document store
pub struct InstrumentedDocumentStore<S: DocumentStore> {
    /// Underlying store
    inner: S,
    /// Calls at or above this duration are logged at `warn`
    slow_threshold: Duration,
}

impl<S: DocumentStore> InstrumentedDocumentStore<S> {
    /// Wrap `inner`, flagging calls slower than `slow_threshold`
    pub fn new(inner: S, slow_threshold: Duration) -> Self {
        Self {
            inner,
            slow_threshold,
        }
    }

    /// Get a reference to the inner store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Threshold above which calls are reported as slow
    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    async fn observe<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
        T: Send,
    {
        let started = Instant::now();
        let outcome = call.await;
        let elapsed = started.elapsed();
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let store = self.inner.provider_name();

        match &outcome {
            Err(e) => {
                tracing::warn!(store, operation, elapsed_ms, error = %e, "Store operation failed");
            }
            Ok(_) if elapsed >= self.slow_threshold => {
                tracing::warn!(store, operation, elapsed_ms, "Slow store operation");
            }
            Ok(_) => {
                tracing::debug!(store, operation, elapsed_ms, "Store operation completed");
            }
        }
        outcome
    }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for InstrumentedDocumentStore<S> {
    async fn append(&self, embedding: Embedding, payload: DocumentPayload) -> Result<DocumentId> {
        self.observe("append", self.inner.append(embedding, payload))
            .await
    }

    async fn all(&self) -> Result<Vec<StoredDocument>> {
        self.observe("all", self.inner.all()).await
    }

    async fn get(&self, id: DocumentId) -> Result<StoredDocument> {
        self.observe("get", self.inner.get(id)).await
    }

    async fn update(
        &self,
        id: DocumentId,
        embedding: Embedding,
        payload: DocumentPayload,
    ) -> Result<StoredDocument> {
        self.observe("update", self.inner.update(id, embedding, payload))
            .await
    }

    async fn delete(&self, id: DocumentId) -> Result<()> {
        self.observe("delete", self.inner.delete(id)).await
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<StoredDocument>> {
        self.observe("list", self.inner.list(offset, limit)).await
    }

    async fn count(&self) -> Result<usize> {
        self.observe("count", self.inner.count()).await
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    async fn health_check(&self) -> Result<()> {
        self.observe("health_check", self.inner.health_check())
            .await
    }
}
