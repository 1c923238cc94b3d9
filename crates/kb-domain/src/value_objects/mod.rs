//! Domain Value Objects
//!
//! Plain data carried between the ports, the ranker and the HTTP layer.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Fixed-length vector derived from text |
//! | [`DocumentId`] | Store-assigned sequential identifier |
//! | [`DocumentSource`] | How a document entered the knowledge base |
//! | [`DocumentPayload`] | Content and metadata supplied at ingestion |
//! | [`StoredDocument`] | Payload plus id and embedding as held by a store |
//! | [`SearchQuery`] | Validated search request |
//! | [`RankedResult`] | Payload paired with its similarity score |

/// Document value objects
pub mod document;
/// Embedding value objects
pub mod embedding;
/// Search-related value objects
pub mod search;

pub use document::{DocumentId, DocumentPayload, DocumentSource, StoredDocument};
pub use embedding::Embedding;
pub use search::{RankedResult, SearchQuery};
