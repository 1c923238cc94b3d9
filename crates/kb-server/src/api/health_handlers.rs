//! Service information and health handlers

use kb_infrastructure::logging::log_health_check;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};

use super::ApiState;
use super::models::{ApiInfo, HealthResponse, HealthStatus, endpoint_table};
use crate::constants::{SERVICE_NAME, SERVICE_VERSION};

/// API information
#[get("/")]
pub fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        status: "running".to_string(),
        endpoints: endpoint_table(),
    })
}

/// Health check
///
/// 200 with `status: "ok"` while the store answers, 503 with
/// `status: "degraded"` otherwise.
#[get("/health")]
pub async fn health(state: &State<ApiState>) -> (Status, Json<HealthResponse>) {
    let report = state.service.health().await;
    log_health_check(&report.store, report.healthy, report.error.as_deref());

    let (status, health_status, message) = if report.healthy {
        (Status::Ok, HealthStatus::Ok, "Knowledge base service is running")
    } else {
        (
            Status::ServiceUnavailable,
            HealthStatus::Degraded,
            "Document store health check failed",
        )
    };

    (
        status,
        Json(HealthResponse {
            status: health_status,
            message: message.to_string(),
            version: SERVICE_VERSION.to_string(),
            uptime_seconds: state.uptime_seconds(),
            document_count: report.document_count,
            store: report.store,
            error: report.error,
        }),
    )
}
