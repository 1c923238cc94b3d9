//! Ingestion endpoint tests

use rocket::http::{ContentType, Status};
use serde_json::json;

use crate::support::{
    BOUNDARY, file_part, json_body, multipart_type, post_json, spawn, spawn_offline, spawn_with,
};

#[rocket::async_test]
async fn test_add_text_assigns_sequential_ids() {
    let server = spawn().await;
    let response = server
        .client
        .post("/add/text")
        .header(ContentType::JSON)
        .body(json!({ "text": "hello world", "title": "Greeting" }).to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Created);
    assert_eq!(response.headers().get_one("Location"), Some("/documents/1"));
    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["doc_id"], 1);
    assert_eq!(json["message"], "Text added successfully");

    let (_, second) = post_json(&server, "/api/add/text", &json!({ "text": "again" })).await;
    assert_eq!(second["doc_id"], 2);
}

#[rocket::async_test]
async fn test_add_text_requires_text() {
    let server = spawn().await;
    for body in [json!({}), json!({ "text": "   " }), json!({ "title": "only" })] {
        let (status, json) = post_json(&server, "/add/text", &body).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing text parameter");
    }
}

#[rocket::async_test]
async fn test_add_text_empty_body_reports_missing_text() {
    let server = spawn().await;
    let response = server
        .client
        .post("/add/text")
        .header(ContentType::JSON)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Missing text parameter");
}

#[rocket::async_test]
async fn test_add_text_keeps_metadata_and_tags() {
    let server = spawn().await;
    let (status, _) = post_json(
        &server,
        "/add/text",
        &json!({ "text": "rust ownership", "metadata": { "source": "book", "page": 4 }, "tags": ["rust"] }),
    )
    .await;
    assert_eq!(status, Status::Created);

    let response = server.client.get("/documents/1").dispatch().await;
    let json = json_body(response).await;
    assert_eq!(json["data"]["metadata"]["source"], "book");
    assert_eq!(json["data"]["metadata"]["page"], 4);
    assert_eq!(json["data"]["metadata"]["title"], "Document 1");
    assert!(json["data"]["metadata"]["added_at"].is_string());
    assert_eq!(json["data"]["tags"], json!(["rust"]));
    assert_eq!(json["data"]["source"], "text_input");
}

#[rocket::async_test]
async fn test_add_video_json_and_form() {
    let server = spawn().await;
    let (status, json) = post_json(
        &server,
        "/add/video",
        &json!({ "transcription": "welcome to the talk" }),
    )
    .await;
    assert_eq!(status, Status::Created);
    assert_eq!(json["message"], "Video transcription added successfully");

    let response = server
        .client
        .post("/add/video")
        .header(ContentType::Form)
        .body("transcription=second+talk&title=Keynote")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    assert_eq!(json_body(response).await["doc_id"], 2);

    let first = json_body(server.client.get("/documents/1").dispatch().await).await;
    assert_eq!(first["data"]["title"], "Video 1");
    assert_eq!(first["data"]["metadata"]["content_type"], "video_transcription");

    let second = json_body(server.client.get("/documents/2").dispatch().await).await;
    assert_eq!(second["data"]["title"], "Keynote");
}

#[rocket::async_test]
async fn test_add_video_requires_transcription() {
    let server = spawn().await;
    let (status, json) = post_json(&server, "/add/video", &json!({ "title": "Silent" })).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "No transcription provided");

    let response = server
        .client
        .post("/add/video")
        .header(ContentType::Form)
        .body("title=Silent")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(json_body(response).await["error"], "No transcription provided");
}

#[rocket::async_test]
async fn test_add_video_without_body_reports_missing_transcription() {
    let server = spawn().await;
    let bare = server.client.post("/add/video").dispatch().await;
    assert_eq!(bare.status(), Status::BadRequest);
    assert_eq!(json_body(bare).await["error"], "No transcription provided");

    let empty_json = server
        .client
        .post("/api/add/video")
        .header(ContentType::JSON)
        .dispatch()
        .await;
    assert_eq!(empty_json.status(), Status::BadRequest);
    assert_eq!(json_body(empty_json).await["error"], "No transcription provided");
}

#[rocket::async_test]
async fn test_add_file_stores_content_and_metadata() {
    let server = spawn().await;
    let response = server
        .client
        .post("/add/file")
        .header(multipart_type())
        .body(file_part("file", "notes.txt", "text/plain", "hello from a file"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Created);
    let json = json_body(response).await;
    assert_eq!(json["message"], "File uploaded successfully");
    assert_eq!(json["doc_id"], 1);

    let document = json_body(server.client.get("/documents/1").dispatch().await).await;
    let data = &document["data"];
    assert_eq!(data["content"], "hello from a file");
    assert_eq!(data["title"], "Document 1");
    assert_eq!(data["source"], "file_upload");
    assert_eq!(data["metadata"]["filename"], "notes.txt");
    assert_eq!(data["metadata"]["source"], "notes.txt");
    assert_eq!(data["metadata"]["mimetype"], "text/plain");
    assert_eq!(data["metadata"]["size"], 17);
}

#[rocket::async_test]
async fn test_add_file_without_file_part() {
    let server = spawn().await;
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"note\"\r\n\r\n\
         just text\r\n\
         --{BOUNDARY}--\r\n"
    );
    let response = server
        .client
        .post("/add/file")
        .header(multipart_type())
        .body(body)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(json_body(response).await["error"], "No file provided");
}

#[rocket::async_test]
async fn test_add_file_without_multipart_body() {
    let server = spawn().await;
    let bare = server.client.post("/add/file").dispatch().await;
    assert_eq!(bare.status(), Status::BadRequest);
    let json = json_body(bare).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No file provided");

    let as_json = server
        .client
        .post("/api/add/file")
        .header(ContentType::JSON)
        .body(json!({ "file": "notes.txt" }).to_string())
        .dispatch()
        .await;
    assert_eq!(as_json.status(), Status::BadRequest);
    assert_eq!(json_body(as_json).await["error"], "No file provided");
}

#[rocket::async_test]
async fn test_add_file_default_types_reject_images() {
    let server = spawn().await;
    let response = server
        .client
        .post("/add/file")
        .header(multipart_type())
        .body(file_part("file", "pic.png", "image/png", "not really a png"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(json_body(response).await["error"], "Invalid file type");
}

#[rocket::async_test]
async fn test_add_file_rejects_disallowed_type() {
    let server = spawn_with(|s| s.allowed_content_types = vec!["text/plain".to_string()]).await;
    let response = server
        .client
        .post("/add/file")
        .header(multipart_type())
        .body(file_part("file", "pic.png", "image/png", "not really a png"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(json_body(response).await["error"], "Invalid file type");

    let health = json_body(server.client.get("/health").dispatch().await).await;
    assert_eq!(health["document_count"], 0);
}

#[rocket::async_test]
async fn test_add_file_over_limit_is_rejected() {
    let server = spawn_with(|s| s.max_upload_bytes = 16).await;
    let response = server
        .client
        .post("/add/file")
        .header(multipart_type())
        .body(file_part("file", "big.txt", "text/plain", &"x".repeat(4096)))
        .dispatch()
        .await;

    assert!(response.status().class().is_client_error());
    assert_eq!(json_body(response).await["success"], false);
}

#[rocket::async_test]
async fn test_store_failure_maps_to_503() {
    let server = spawn_offline().await;
    let (status, json) = post_json(&server, "/add/text", &json!({ "text": "hello" })).await;
    assert_eq!(status, Status::ServiceUnavailable);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Store unavailable: offline");
    assert!(json.get("details").is_none());
}
