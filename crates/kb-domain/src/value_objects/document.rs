//! Document Value Objects
//!
//! What a client submits and what a store hands back.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{METADATA_ADDED_AT, METADATA_SOURCE, METADATA_TITLE, UNKNOWN_SOURCE};
use crate::error::Error;
use crate::value_objects::Embedding;

/// Store-assigned document identifier
///
/// Ids are sequential and start at 1. A store never reuses an id, even after
/// the document holding it was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl DocumentId {
    /// First id handed out by an empty store
    pub const FIRST: Self = Self(1);

    /// Raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DocumentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::invalid_argument(format!("Invalid document id: {s}")))
    }
}

/// How a document entered the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    /// Raw text posted by a client
    TextInput,
    /// Contents of an uploaded file
    FileUpload,
    /// A video transcript
    Video,
}

impl DocumentSource {
    /// Stable identifier used in serialized payloads
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextInput => "text_input",
            Self::FileUpload => "file_upload",
            Self::Video => "video",
        }
    }

    /// Prefix of the title shown when the client supplied none
    pub fn default_title_prefix(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::TextInput | Self::FileUpload => "Document",
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content and metadata of a document, independent of its vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    /// Client-supplied title, if any
    pub title: Option<String>,
    /// Text that was embedded
    pub content: String,
    /// Ingestion channel
    pub source: DocumentSource,
    /// Free-form JSON metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Labels; not used for ranking
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the document was first stored
    pub created_at: DateTime<Utc>,
    /// When the document was last modified
    pub updated_at: DateTime<Utc>,
}

impl DocumentPayload {
    /// Create a payload stamped with the current time
    pub fn new(content: impl Into<String>, source: DocumentSource) -> Self {
        let now = Utc::now();
        Self {
            title: None,
            content: content.into(),
            source,
            metadata: Map::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the title; blank titles count as absent
    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.trim().is_empty());
        self
    }

    /// Replace the metadata map
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Insert a single metadata entry
    #[must_use]
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Replace the tag list
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Title to display for a document stored under `id`
    pub fn display_title(&self, id: DocumentId) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{} {id}", self.source.default_title_prefix()),
        }
    }
}

/// A document as held by a [`DocumentStore`](crate::ports::DocumentStore)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Store-assigned identifier
    pub id: DocumentId,
    /// Vector used for ranking
    pub embedding: Embedding,
    /// Content and metadata
    pub payload: DocumentPayload,
}

impl StoredDocument {
    /// Title, falling back to the per-source default
    pub fn title(&self) -> String {
        self.payload.display_title(self.id)
    }

    /// Metadata as reported to clients
    ///
    /// The user metadata with `title` and `added_at` overwritten by the
    /// document's own values.
    pub fn metadata_view(&self) -> Map<String, Value> {
        let mut view = self.payload.metadata.clone();
        view.insert(METADATA_TITLE.to_string(), Value::String(self.title()));
        view.insert(
            METADATA_ADDED_AT.to_string(),
            Value::String(self.payload.created_at.to_rfc3339()),
        );
        view
    }

    /// `metadata.source` when it is a string, otherwise `"Unknown"`
    pub fn source_label(&self) -> String {
        self.payload
            .metadata
            .get(METADATA_SOURCE)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_SOURCE)
            .to_string()
    }
}
