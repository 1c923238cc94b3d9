//! # Knowledge Base Domain Layer
//!
//! Core types shared by every other crate in the workspace.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Defaults shared across layers |
//! | [`value_objects`] | Embeddings, documents and ranked results |
//! | [`ports`] | Contracts for embedding providers and document stores |
//!
//! The domain has no knowledge of HTTP, configuration files or the concrete
//! store implementation; those live in the outer crates.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{DocumentStore, EmbeddingProvider};
pub use value_objects::{
    DocumentId, DocumentPayload, DocumentSource, Embedding, RankedResult, SearchQuery,
    StoredDocument,
};
