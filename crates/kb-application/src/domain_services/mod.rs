//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`Ranker`] | Cosine similarity ranking with threshold and top-k |
//! | [`KnowledgeServiceInterface`] | Ingestion, search and document management |

/// Knowledge service interface and its input types
pub mod knowledge;
/// Similarity ranking
pub mod ranking;

pub use knowledge::{
    DocumentUpdate, FileSubmission, HealthReport, KnowledgeServiceInterface, SearchSettings,
    TextSubmission, VideoSubmission,
};
pub use ranking::{Ranker, cosine_similarity};
