//! Domain error to HTTP response mapping

use kb_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::{self, Json};

use super::models::ErrorResponse;
use crate::constants::INVALID_BODY_MESSAGE;

/// Error half of every handler result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP status for a domain error
pub fn status_for(error: &Error) -> Status {
    match error {
        Error::Validation { .. } | Error::InvalidArgument { .. } => Status::BadRequest,
        Error::NotFound { .. } => Status::NotFound,
        Error::StoreUnavailable { .. } => Status::ServiceUnavailable,
        _ => Status::InternalServerError,
    }
}

/// Client-facing message for a domain error
///
/// Every error surfaces its own message; only the source chain is held back
/// for `details`.
pub fn message_for(error: &Error) -> String {
    match error {
        Error::NotFound { resource } => {
            let kind = resource.split_whitespace().next().unwrap_or("Resource");
            format!("{kind} not found")
        }
        _ => error.to_string(),
    }
}

/// Debug rendering of an error and its source chain
pub fn error_chain(error: &Error) -> String {
    let mut rendered = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Build the error response for `error`
pub fn api_error(error: &Error, expose_details: bool) -> ApiError {
    let status = status_for(error);
    if status.code >= 500 {
        tracing::error!(status = status.code, error = %error_chain(error), "Request failed");
    } else {
        tracing::debug!(status = status.code, error = %error, "Request rejected");
    }

    let mut body = ErrorResponse::new(message_for(error));
    if expose_details {
        body = body.with_details(error_chain(error));
    }
    (status, Json(body))
}

/// Error response for a plain 400 raised by the HTTP layer itself
pub fn bad_request(message: impl Into<String>) -> ApiError {
    (Status::BadRequest, Json(ErrorResponse::new(message)))
}

/// Unwrap an optional JSON body
///
/// An empty body reads as `T::default()`, so missing fields are reported by
/// the handler's own validation. A body that is present but unparseable is
/// a 400.
pub fn json_or_default<T: Default>(body: Result<Json<T>, json::Error<'_>>) -> ApiResult<T> {
    match body {
        Ok(body) => Ok(body.into_inner()),
        Err(json::Error::Parse(raw, _)) if raw.trim().is_empty() => Ok(T::default()),
        Err(e) => {
            tracing::debug!(error = ?e, "Rejected request body");
            Err(bad_request(INVALID_BODY_MESSAGE))
        }
    }
}
