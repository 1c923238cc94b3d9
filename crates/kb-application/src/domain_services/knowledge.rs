//! Knowledge Service Interface
//!
//! The contract between the HTTP layer and the ingestion/search logic, plus
//! the plain input types each operation accepts.

use async_trait::async_trait;
use kb_domain::constants::{DEFAULT_MAX_SEARCH_K, DEFAULT_SEARCH_K};
use kb_domain::error::{Error, Result};
use kb_domain::value_objects::{DocumentId, RankedResult, SearchQuery, StoredDocument};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Inputs
// ============================================================================

/// Raw text submitted by a client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSubmission {
    /// Text to store and embed
    pub text: String,
    /// Optional title
    pub title: Option<String>,
    /// Free-form metadata merged into the stored document
    pub metadata: Map<String, Value>,
    /// Labels attached to the document
    pub tags: Vec<String>,
}

/// An uploaded file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSubmission {
    /// Original file name as sent by the client
    pub filename: String,
    /// Declared MIME type, if any
    pub content_type: Option<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// A video transcript
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSubmission {
    /// Transcript text
    pub transcription: String,
    /// Optional title
    pub title: Option<String>,
}

/// Partial update of a stored document; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentUpdate {
    /// New title
    pub title: Option<String>,
    /// New content; triggers re-embedding when it differs
    pub content: Option<String>,
    /// Replacement metadata
    pub metadata: Option<Map<String, Value>>,
    /// Replacement tags
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Search settings
// ============================================================================

/// Limits applied to the `k` a client asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// `k` used when the client gives none
    pub default_k: usize,
    /// Largest `k` accepted
    pub max_k: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_SEARCH_K,
            max_k: DEFAULT_MAX_SEARCH_K,
        }
    }
}

impl SearchSettings {
    /// Resolve a client-supplied `k`, which may be absent or negative
    pub fn resolve_k(&self, requested: Option<i64>) -> Result<usize> {
        let Some(requested) = requested else {
            return Ok(self.default_k);
        };
        let k = usize::try_from(requested)
            .ok()
            .filter(|k| *k > 0)
            .ok_or_else(|| {
                Error::invalid_argument(format!("k must be a positive integer, got {requested}"))
            })?;
        if k > self.max_k {
            return Err(Error::invalid_argument(format!(
                "k must not exceed {}, got {k}",
                self.max_k
            )));
        }
        Ok(k)
    }

    /// Build a [`SearchQuery`] from raw request fields
    pub fn query(
        &self,
        text: Option<String>,
        k: Option<i64>,
        threshold: Option<f64>,
    ) -> Result<SearchQuery> {
        let text = text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::validation("Missing query parameter"))?;
        Ok(SearchQuery::new(text)
            .with_k(self.resolve_k(k)?)
            .with_threshold(threshold))
    }
}

// ============================================================================
// Health
// ============================================================================

/// Snapshot of the service's dependencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Whether the store answered its health check
    pub healthy: bool,
    /// Name of the store implementation
    pub store: String,
    /// Number of stored documents; zero when the store is unhealthy
    pub document_count: usize,
    /// Failure description when unhealthy
    pub error: Option<String>,
}

// ============================================================================
// Service interface
// ============================================================================

/// Knowledge Service Interface
///
/// Ingests text, files and transcripts, ranks stored documents against a
/// query and manages individual documents.
#[async_trait]
pub trait KnowledgeServiceInterface: Send + Sync {
    /// Store raw text
    async fn add_text(&self, submission: TextSubmission) -> Result<DocumentId>;

    /// Store the contents of an uploaded file
    async fn add_file(&self, submission: FileSubmission) -> Result<DocumentId>;

    /// Store a video transcript
    async fn add_video(&self, submission: VideoSubmission) -> Result<DocumentId>;

    /// Rank stored documents against a query
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RankedResult<StoredDocument>>>;

    /// Fetch a single document
    async fn get(&self, id: DocumentId) -> Result<StoredDocument>;

    /// Apply a partial update to a document
    async fn update(&self, id: DocumentId, update: DocumentUpdate) -> Result<StoredDocument>;

    /// Remove a document
    async fn delete(&self, id: DocumentId) -> Result<()>;

    /// A page of documents in insertion order
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<StoredDocument>>;

    /// Check the store and report the document count
    async fn health(&self) -> HealthReport;

    /// Limits applied to requested `k` values
    fn search_settings(&self) -> SearchSettings;
}
