//! API data models
//!
//! Request and response bodies for the HTTP API. Every failure is rendered
//! as [`ErrorResponse`].

use chrono::{DateTime, Utc};
use kb_application::{DocumentUpdate, TextSubmission};
use kb_domain::value_objects::{DocumentId, RankedResult, StoredDocument};
use rocket::FromForm;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Errors
// ============================================================================

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable message
    pub error: String,
    /// Debug rendering of the error chain, development only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create an error body without details
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    /// Attach details
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

// ============================================================================
// Search
// ============================================================================

/// `POST /search` body
///
/// `limit` is accepted as an alias of `k`; `k` wins when both are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Query text
    pub query: Option<String>,
    /// Number of results
    pub k: Option<i64>,
    /// Alias of `k`
    pub limit: Option<i64>,
    /// Minimum similarity
    pub threshold: Option<f64>,
}

/// One ranked document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Document id
    pub id: DocumentId,
    /// Stored or default title
    pub title: String,
    /// Document text
    pub content: String,
    /// User metadata plus `title`, `added_at` and source-specific keys
    pub metadata: Map<String, Value>,
    /// Cosine similarity to the query
    pub similarity: f64,
    /// `metadata.source` when it is a string, otherwise `Unknown`
    pub source: String,
}

impl From<RankedResult<StoredDocument>> for SearchResultItem {
    fn from(result: RankedResult<StoredDocument>) -> Self {
        let document = result.payload;
        Self {
            id: document.id,
            title: document.title(),
            metadata: document.metadata_view(),
            source: document.source_label(),
            content: document.payload.content,
            similarity: result.score,
        }
    }
}

/// `POST /search` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Always `true`
    pub success: bool,
    /// Query text echoed back
    pub query: String,
    /// Ranked documents, best first
    pub results: Vec<SearchResultItem>,
    /// Number of entries in `results`
    pub result_count: usize,
}

// ============================================================================
// Ingestion
// ============================================================================

/// `POST /add/text` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTextRequest {
    /// Text to store
    pub text: Option<String>,
    /// Optional title
    pub title: Option<String>,
    /// Free-form metadata
    pub metadata: Option<Map<String, Value>>,
    /// Labels
    pub tags: Option<Vec<String>>,
}

impl From<AddTextRequest> for TextSubmission {
    fn from(request: AddTextRequest) -> Self {
        Self {
            text: request.text.unwrap_or_default(),
            title: request.title,
            metadata: request.metadata.unwrap_or_default(),
            tags: request.tags.unwrap_or_default(),
        }
    }
}

/// `POST /add/video` body, JSON or form encoded
#[derive(Debug, Clone, Default, Deserialize, FromForm)]
pub struct AddVideoRequest {
    /// Transcript text
    pub transcription: Option<String>,
    /// Optional title
    pub title: Option<String>,
}

/// Response to every successful ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    /// Always `true`
    pub success: bool,
    /// Confirmation message
    pub message: String,
    /// Id assigned by the store
    pub doc_id: DocumentId,
}

impl AddResponse {
    /// Confirmation for a newly stored document
    pub fn created(message: impl Into<String>, doc_id: DocumentId) -> Self {
        Self {
            success: true,
            message: message.into(),
            doc_id,
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

/// A stored document without its vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentView {
    /// Document id
    pub id: DocumentId,
    /// Stored or default title
    pub title: String,
    /// Document text
    pub content: String,
    /// Ingestion path
    pub source: String,
    /// Metadata including `title` and `added_at`
    pub metadata: Map<String, Value>,
    /// Labels
    pub tags: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl From<StoredDocument> for DocumentView {
    fn from(document: StoredDocument) -> Self {
        Self {
            id: document.id,
            title: document.title(),
            metadata: document.metadata_view(),
            source: document.payload.source.as_str().to_string(),
            content: document.payload.content,
            tags: document.payload.tags,
            created_at: document.payload.created_at,
            updated_at: document.payload.updated_at,
        }
    }
}

/// `GET/PUT /documents/<id>` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEnvelope {
    /// Always `true`
    pub success: bool,
    /// The document
    pub data: DocumentView,
}

impl From<StoredDocument> for DocumentEnvelope {
    fn from(document: StoredDocument) -> Self {
        Self {
            success: true,
            data: document.into(),
        }
    }
}

/// `GET /documents` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    /// Always `true`
    pub success: bool,
    /// Number of entries in `data`
    pub count: usize,
    /// One page of documents in insertion order
    pub data: Vec<DocumentView>,
}

/// `PUT /documents/<id>` body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocumentRequest {
    /// New title
    pub title: Option<String>,
    /// New content
    pub content: Option<String>,
    /// Replacement metadata
    pub metadata: Option<Map<String, Value>>,
    /// Replacement tags
    pub tags: Option<Vec<String>>,
}

impl From<UpdateDocumentRequest> for DocumentUpdate {
    fn from(request: UpdateDocumentRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            metadata: request.metadata,
            tags: request.tags,
        }
    }
}

// ============================================================================
// Service
// ============================================================================

/// Health status values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Store reachable
    Ok,
    /// Store health check failed
    Degraded,
}

/// `GET /health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: HealthStatus,
    /// Human-readable summary
    pub message: String,
    /// Server version
    pub version: String,
    /// Seconds since start-up
    pub uptime_seconds: u64,
    /// Stored documents
    pub document_count: usize,
    /// Store implementation name
    pub store: String,
    /// Failure description when degraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry of the info endpoint's route table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    /// HTTP method
    pub method: String,
    /// Path relative to the mount point
    pub path: String,
    /// What the route does
    pub description: String,
}

impl EndpointInfo {
    fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

/// `GET /` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Service name
    pub name: String,
    /// Server version
    pub version: String,
    /// Always `running`
    pub status: String,
    /// Available routes
    pub endpoints: Vec<EndpointInfo>,
}

/// Route table advertised by `GET /`
pub fn endpoint_table() -> Vec<EndpointInfo> {
    vec![
        EndpointInfo::new("GET", "/", "API information"),
        EndpointInfo::new("GET", "/health", "Service health"),
        EndpointInfo::new("POST", "/search", "Similarity search"),
        EndpointInfo::new("POST", "/add/text", "Store raw text"),
        EndpointInfo::new("POST", "/add/file", "Store an uploaded file"),
        EndpointInfo::new("POST", "/add/video", "Store a video transcript"),
        EndpointInfo::new("GET", "/documents", "List documents"),
        EndpointInfo::new("GET", "/documents/<id>", "Fetch a document"),
        EndpointInfo::new("PUT", "/documents/<id>", "Update a document"),
        EndpointInfo::new("DELETE", "/documents/<id>", "Delete a document"),
    ]
}
