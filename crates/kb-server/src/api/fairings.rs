//! Rocket fairings
//!
//! [`Cors`] adds permissive CORS headers; [`RequestLogger`] emits one tracing
//! event per request and tags the response with an `X-Request-Id`.

use kb_infrastructure::TimedOperation;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Data, Request, Response};
use uuid::Uuid;

use crate::constants::{CORS_ALLOWED_METHODS, REQUEST_ID_HEADER};

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOWED_METHODS,
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Per-request id and start time, cached on the request
struct RequestTrace {
    id: Uuid,
    timer: TimedOperation,
}

impl RequestTrace {
    fn begin() -> Self {
        Self {
            id: Uuid::new_v4(),
            timer: TimedOperation::start(),
        }
    }
}

/// Request logging fairing
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        request.local_cache(RequestTrace::begin);
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let trace = request.local_cache(RequestTrace::begin);
        let status = response.status().code;
        let duration_ms = trace.timer.elapsed_ms();

        response.set_header(Header::new(REQUEST_ID_HEADER, trace.id.to_string()));

        if status >= 500 {
            tracing::warn!(
                request_id = %trace.id,
                method = %request.method(),
                uri = %request.uri(),
                status,
                duration_ms,
                "Request completed with server error"
            );
        } else {
            tracing::info!(
                request_id = %trace.id,
                method = %request.method(),
                uri = %request.uri(),
                status,
                duration_ms,
                "Request completed"
            );
        }
    }
}
