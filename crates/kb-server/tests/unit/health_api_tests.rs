//! Info, health, CORS and request-id tests

use rocket::http::{Header, Status};

use crate::support::{add_text, json_body, spawn, spawn_offline, spawn_with};

#[rocket::async_test]
async fn test_index_lists_endpoints() {
    let server = spawn().await;
    let response = server.client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json = json_body(response).await;
    assert_eq!(json["name"], "Knowledge Base API");
    assert_eq!(json["status"], "running");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    let endpoints = json["endpoints"].as_array().expect("endpoints");
    assert!(endpoints.iter().any(|e| e["path"] == "/search" && e["method"] == "POST"));
}

#[rocket::async_test]
async fn test_health_reports_document_count() {
    let server = spawn().await;
    add_text(&server, "first").await;
    add_text(&server, "second").await;

    let response = server.client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["document_count"], 2);
    assert_eq!(json["store"], "memory");
    assert!(json["uptime_seconds"].is_u64());
    assert!(json.get("error").is_none());
}

#[rocket::async_test]
async fn test_health_degraded_when_store_fails() {
    let server = spawn_offline().await;
    let response = server.client.get("/api/health").dispatch().await;
    assert_eq!(response.status(), Status::ServiceUnavailable);

    let json = json_body(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store"], "offline");
    assert_eq!(json["document_count"], 0);
    assert!(json["error"].as_str().unwrap().contains("offline"));
}

#[rocket::async_test]
async fn test_every_response_carries_request_id() {
    let server = spawn().await;
    let first = server.client.get("/health").dispatch().await;
    let second = server.client.get("/missing").dispatch().await;

    let first_id = first.headers().get_one("X-Request-Id").map(str::to_string);
    let second_id = second.headers().get_one("X-Request-Id").map(str::to_string);
    assert!(first_id.is_some());
    assert!(second_id.is_some());
    assert_ne!(first_id, second_id);
}

#[rocket::async_test]
async fn test_cors_headers_and_preflight() {
    let server = spawn().await;
    let response = server
        .client
        .options("/api/search")
        .header(Header::new("Origin", "http://localhost:5173"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NoContent);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Methods")
            .unwrap()
            .contains("DELETE")
    );
}

#[rocket::async_test]
async fn test_cors_can_be_disabled() {
    let server = spawn_with(|s| s.cors_enabled = false).await;
    let response = server.client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none()
    );
}

#[rocket::async_test]
async fn test_unknown_route_returns_json_404() {
    let server = spawn().await;
    let response = server.client.get("/nope").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Route not found");
}

#[rocket::async_test]
async fn test_custom_api_prefix() {
    let server = spawn_with(|s| s.api_prefix = "/v1/kb/".to_string()).await;
    let response = server.client.get("/v1/kb/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let response = server.client.get("/api/health").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}
