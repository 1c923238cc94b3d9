//! Tests for the knowledge service use case

use std::sync::Arc;

use kb_application::{
    DocumentUpdate, FileSubmission, KnowledgeServiceImpl, KnowledgeServiceInterface, Ranker,
    SearchSettings, TextSubmission, VideoSubmission,
};
use kb_domain::value_objects::{DocumentId, DocumentSource, SearchQuery};
use kb_domain::{DocumentStore, Error};
use kb_providers::embedding::HashEmbeddingProvider;
use kb_providers::store::InMemoryDocumentStore;
use serde_json::{Map, json};

fn service() -> (KnowledgeServiceImpl, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let service = KnowledgeServiceImpl::new(
        Arc::new(HashEmbeddingProvider::new(10)),
        store.clone(),
        Ranker::default(),
        SearchSettings::default(),
    );
    (service, store)
}

fn text(body: &str) -> TextSubmission {
    TextSubmission {
        text: body.to_string(),
        ..TextSubmission::default()
    }
}

#[tokio::test]
async fn test_add_text_stores_embedded_document() {
    let (service, store) = service();
    let mut metadata = Map::new();
    metadata.insert("author".into(), json!("ada"));

    let id = service
        .add_text(TextSubmission {
            text: "Rust ownership rules".into(),
            title: Some("Ownership".into()),
            metadata,
            tags: vec!["rust".into()],
        })
        .await
        .unwrap();

    assert_eq!(id, DocumentId(1));
    let doc = store.get(id).await.unwrap();
    assert_eq!(doc.payload.content, "Rust ownership rules");
    assert_eq!(doc.payload.source, DocumentSource::TextInput);
    assert_eq!(doc.payload.tags, vec!["rust".to_string()]);
    assert_eq!(doc.title(), "Ownership");
    assert_eq!(doc.payload.metadata["author"], "ada");
    assert_eq!(doc.embedding.dimensions, 10);
}

#[tokio::test]
async fn test_add_text_requires_text() {
    let (service, _) = service();
    let err = service.add_text(text("  ")).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(err.to_string(), "Missing text parameter");
}

#[tokio::test]
async fn test_add_text_default_title() {
    let (service, store) = service();
    service.add_text(text("first")).await.unwrap();
    let id = service.add_text(text("second")).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().title(), "Document 2");
}

#[tokio::test]
async fn test_add_file_records_file_metadata() {
    let (service, store) = service();
    let id = service
        .add_file(FileSubmission {
            filename: "notes.txt".into(),
            content_type: Some("text/plain".into()),
            bytes: b"meeting notes".to_vec(),
        })
        .await
        .unwrap();

    let doc = store.get(id).await.unwrap();
    assert_eq!(doc.payload.content, "meeting notes");
    assert_eq!(doc.payload.source, DocumentSource::FileUpload);
    assert_eq!(doc.payload.metadata["filename"], "notes.txt");
    assert_eq!(doc.payload.metadata["mimetype"], "text/plain");
    assert_eq!(doc.payload.metadata["size"], 13);
    assert_eq!(doc.source_label(), "notes.txt");
    assert_eq!(doc.title(), "Document 1");
}

#[tokio::test]
async fn test_add_file_decodes_invalid_utf8_lossily() {
    let (service, store) = service();
    let id = service
        .add_file(FileSubmission {
            filename: String::new(),
            content_type: None,
            bytes: vec![b'o', b'k', 0xFF, b'!'],
        })
        .await
        .unwrap();

    let doc = store.get(id).await.unwrap();
    assert_eq!(doc.payload.content, "ok\u{FFFD}!");
    assert_eq!(doc.payload.metadata["filename"], "upload");
    assert!(doc.payload.metadata["mimetype"].is_null());
}

#[tokio::test]
async fn test_add_video_tags_transcript() {
    let (service, store) = service();
    let id = service
        .add_video(VideoSubmission {
            transcription: "welcome to the lecture".into(),
            title: None,
        })
        .await
        .unwrap();

    let doc = store.get(id).await.unwrap();
    assert_eq!(doc.payload.source, DocumentSource::Video);
    assert_eq!(doc.payload.metadata["content_type"], "video_transcription");
    assert_eq!(doc.title(), "Video 1");
}

#[tokio::test]
async fn test_add_video_requires_transcription() {
    let (service, _) = service();
    let err = service
        .add_video(VideoSubmission::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No transcription provided");
}

#[tokio::test]
async fn test_search_ranks_exact_match_first() {
    let (service, _) = service();
    service.add_text(text("the cat sat on the mat")).await.unwrap();
    service.add_text(text("hello world")).await.unwrap();
    service.add_text(text("stock market report")).await.unwrap();

    let results = service
        .search(&SearchQuery::new("hello world").with_k(2))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].payload.payload.content, "hello world");
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert!(results[0].score >= results[1].score);
}

#[tokio::test]
async fn test_search_on_empty_store() {
    let (service, _) = service();
    let results = service.search(&SearchQuery::new("anything")).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_threshold_filters_results() {
    let (service, _) = service();
    service.add_text(text("hello world")).await.unwrap();
    service.add_text(text("unrelated entry")).await.unwrap();

    let results = service
        .search(&SearchQuery::new("hello world").with_threshold(Some(0.999_999)))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].payload.id, DocumentId(1));
}

#[tokio::test]
async fn test_search_rejects_zero_k() {
    let (service, _) = service();
    service.add_text(text("hello")).await.unwrap();
    let err = service
        .search(&SearchQuery::new("hello").with_k(0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_search_detects_foreign_dimensions() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let narrow = KnowledgeServiceImpl::new(
        Arc::new(HashEmbeddingProvider::new(5)),
        store.clone(),
        Ranker::default(),
        SearchSettings::default(),
    );
    narrow.add_text(text("five dims")).await.unwrap();

    let wide = KnowledgeServiceImpl::new(
        Arc::new(HashEmbeddingProvider::new(10)),
        store,
        Ranker::default(),
        SearchSettings::default(),
    );
    let err = wide
        .search(&SearchQuery::new("ten dims"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 10,
            actual: 5
        }
    ));
}

#[tokio::test]
async fn test_update_reembeds_changed_content() {
    let (service, _) = service();
    let id = service.add_text(text("original content")).await.unwrap();
    let before = service.get(id).await.unwrap();

    let updated = service
        .update(
            id,
            DocumentUpdate {
                content: Some("rewritten content".into()),
                title: Some("Rewritten".into()),
                ..DocumentUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.payload.content, "rewritten content");
    assert_eq!(updated.title(), "Rewritten");
    assert_ne!(updated.embedding, before.embedding);
    assert_eq!(updated.payload.created_at, before.payload.created_at);
}

#[tokio::test]
async fn test_update_without_content_keeps_embedding() {
    let (service, _) = service();
    let id = service.add_text(text("stable content")).await.unwrap();
    let before = service.get(id).await.unwrap();

    let updated = service
        .update(
            id,
            DocumentUpdate {
                tags: Some(vec!["pinned".into()]),
                ..DocumentUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.embedding, before.embedding);
    assert_eq!(updated.payload.tags, vec!["pinned".to_string()]);
}

#[tokio::test]
async fn test_update_rejects_empty_fields() {
    let (service, _) = service();
    let id = service.add_text(text("content")).await.unwrap();

    let err = service
        .update(
            id,
            DocumentUpdate {
                title: Some(String::new()),
                ..DocumentUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Title cannot be empty");

    let err = service
        .update(
            id,
            DocumentUpdate {
                content: Some(" ".into()),
                ..DocumentUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Content cannot be empty");
}

#[tokio::test]
async fn test_update_missing_document() {
    let (service, _) = service();
    let err = service
        .update(DocumentId(9), DocumentUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_and_get() {
    let (service, _) = service();
    let id = service.add_text(text("short lived")).await.unwrap();
    service.delete(id).await.unwrap();

    assert!(matches!(service.get(id).await, Err(Error::NotFound { .. })));
    assert!(matches!(service.delete(id).await, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_list_pages() {
    let (service, _) = service();
    for i in 0..4 {
        service.add_text(text(&format!("doc {i}"))).await.unwrap();
    }

    let page = service.list(2, 10).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, DocumentId(3));

    assert!(matches!(
        service.list(0, 0).await,
        Err(Error::InvalidArgument { .. })
    ));
}

#[tokio::test]
async fn test_health_reports_count() {
    let (service, _) = service();
    service.add_text(text("one")).await.unwrap();

    let report = service.health().await;
    assert!(report.healthy);
    assert_eq!(report.document_count, 1);
    assert_eq!(report.store, "memory");
    assert!(report.error.is_none());
}

#[test]
fn test_service_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KnowledgeServiceImpl>();
}
