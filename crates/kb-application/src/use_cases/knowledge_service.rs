//! Knowledge Service Use Case
//!
//! Embeds submitted content, hands it to the document store and ranks stored
//! documents at query time.

use std::sync::Arc;

use async_trait::async_trait;
use kb_domain::constants::{METADATA_SOURCE, VIDEO_CONTENT_TYPE};
use kb_domain::error::{Error, Result};
use kb_domain::ports::{DocumentStore, EmbeddingProvider};
use kb_domain::value_objects::{
    DocumentId, DocumentPayload, DocumentSource, RankedResult, SearchQuery, StoredDocument,
};
use serde_json::Value;

use crate::domain_services::knowledge::{
    DocumentUpdate, FileSubmission, HealthReport, KnowledgeServiceInterface, SearchSettings,
    TextSubmission, VideoSubmission,
};
use crate::domain_services::ranking::Ranker;

/// Name recorded for uploads that arrive without one
const UNNAMED_UPLOAD: &str = "upload";

/// Knowledge service implementation
pub struct KnowledgeServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    document_store: Arc<dyn DocumentStore>,
    ranker: Ranker,
    settings: SearchSettings,
}

impl KnowledgeServiceImpl {
    /// Create a new knowledge service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        document_store: Arc<dyn DocumentStore>,
        ranker: Ranker,
        settings: SearchSettings,
    ) -> Self {
        Self {
            embedding_provider,
            document_store,
            ranker,
            settings,
        }
    }

    /// Embed `payload.content` and append the result
    async fn ingest(&self, payload: DocumentPayload) -> Result<DocumentId> {
        let embedding = self.embedding_provider.embed(&payload.content);
        let source = payload.source;
        let id = self.document_store.append(embedding, payload).await?;
        tracing::info!(doc_id = %id, %source, "Document added to knowledge base");
        Ok(id)
    }
}

fn require_text(text: String, message: &str) -> Result<String> {
    if text.trim().is_empty() {
        Err(Error::validation(message))
    } else {
        Ok(text)
    }
}

#[async_trait]
impl KnowledgeServiceInterface for KnowledgeServiceImpl {
    async fn add_text(&self, submission: TextSubmission) -> Result<DocumentId> {
        let text = require_text(submission.text, "Missing text parameter")?;
        let payload = DocumentPayload::new(text, DocumentSource::TextInput)
            .with_title(submission.title)
            .with_metadata(submission.metadata)
            .with_tags(submission.tags);
        self.ingest(payload).await
    }

    async fn add_file(&self, submission: FileSubmission) -> Result<DocumentId> {
        let filename = if submission.filename.trim().is_empty() {
            UNNAMED_UPLOAD.to_string()
        } else {
            submission.filename
        };
        let size = submission.bytes.len();
        let content = String::from_utf8_lossy(&submission.bytes).into_owned();

        let payload = DocumentPayload::new(content, DocumentSource::FileUpload)
            .with_metadata_entry("filename", filename.clone())
            .with_metadata_entry(
                "mimetype",
                submission.content_type.map_or(Value::Null, Value::String),
            )
            .with_metadata_entry("size", size)
            .with_metadata_entry(METADATA_SOURCE, filename);
        self.ingest(payload).await
    }

    async fn add_video(&self, submission: VideoSubmission) -> Result<DocumentId> {
        let transcription = require_text(submission.transcription, "No transcription provided")?;
        let payload = DocumentPayload::new(transcription, DocumentSource::Video)
            .with_title(submission.title)
            .with_metadata_entry("content_type", VIDEO_CONTENT_TYPE);
        self.ingest(payload).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RankedResult<StoredDocument>>> {
        let query_embedding = self.embedding_provider.embed(&query.text);
        let documents = self.document_store.all().await?;
        let candidate_count = documents.len();

        let candidates: Vec<_> = documents
            .iter()
            .map(|doc| (doc.embedding.as_slice(), doc))
            .collect();
        let ranked = self.ranker.rank(
            query_embedding.as_slice(),
            candidates,
            query.k,
            query.threshold,
        )?;

        tracing::debug!(
            k = query.k,
            threshold = ?query.threshold,
            candidates = candidate_count,
            results = ranked.len(),
            "Search completed"
        );
        Ok(ranked
            .into_iter()
            .map(|result| result.map(StoredDocument::clone))
            .collect())
    }

    async fn get(&self, id: DocumentId) -> Result<StoredDocument> {
        self.document_store.get(id).await
    }

    async fn update(&self, id: DocumentId, update: DocumentUpdate) -> Result<StoredDocument> {
        let existing = self.document_store.get(id).await?;
        let mut payload = existing.payload;
        let mut embedding = existing.embedding;

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(Error::validation("Title cannot be empty"));
            }
            payload.title = Some(title);
        }
        if let Some(content) = update.content {
            if content.trim().is_empty() {
                return Err(Error::validation("Content cannot be empty"));
            }
            if content != payload.content {
                embedding = self.embedding_provider.embed(&content);
                payload.content = content;
            }
        }
        if let Some(metadata) = update.metadata {
            payload.metadata = metadata;
        }
        if let Some(tags) = update.tags {
            payload.tags = tags;
        }

        let updated = self.document_store.update(id, embedding, payload).await?;
        tracing::info!(doc_id = %id, "Document updated");
        Ok(updated)
    }

    async fn delete(&self, id: DocumentId) -> Result<()> {
        self.document_store.delete(id).await?;
        tracing::info!(doc_id = %id, "Document deleted");
        Ok(())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<StoredDocument>> {
        if limit == 0 {
            return Err(Error::invalid_argument("limit must be at least 1"));
        }
        self.document_store.list(offset, limit).await
    }

    async fn health(&self) -> HealthReport {
        let store = self.document_store.provider_name().to_string();
        let checked = match self.document_store.health_check().await {
            Ok(()) => self.document_store.count().await,
            Err(e) => Err(e),
        };
        match checked {
            Ok(document_count) => HealthReport {
                healthy: true,
                store,
                document_count,
                error: None,
            },
            Err(e) => {
                tracing::warn!(store = %store, error = %e, "Document store health check failed");
                HealthReport {
                    healthy: false,
                    store,
                    document_count: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn search_settings(&self) -> SearchSettings {
        self.settings
    }
}
