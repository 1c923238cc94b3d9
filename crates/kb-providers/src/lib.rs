//! # Knowledge Base - Provider Implementations
//!
//! Concrete implementations of the ports defined in `kb-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | [`HashEmbeddingProvider`] |
//! | Document Store | `DocumentStore` | [`InMemoryDocumentStore`], [`InstrumentedDocumentStore`] |
//!
//! ## Usage
//!
//! ```ignore
//! use kb_providers::embedding::HashEmbeddingProvider;
//! use kb_providers::store::{InMemoryDocumentStore, InstrumentedDocumentStore};
//!
//! let embedder = HashEmbeddingProvider::new(10);
//! let store = InstrumentedDocumentStore::new(InMemoryDocumentStore::new(), slow_threshold);
//! ```

// Re-export kb-domain types commonly used with providers
pub use kb_domain::error::{Error, Result};
pub use kb_domain::ports::{DocumentStore, EmbeddingProvider};

/// Embedding provider implementations
pub mod embedding;

/// Document store implementations
pub mod store;

pub use embedding::{HashEmbeddingProvider, TokenizationMode};
pub use store::{InMemoryDocumentStore, InstrumentedDocumentStore};
