//! JSON error catchers
//!
//! Unmatched routes, body parse failures and oversized uploads get the same
//! `{success: false, error}` body as handler errors.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};

use super::models::ErrorResponse;
use crate::constants::INVALID_BODY_MESSAGE;

/// No route matched
#[catch(404)]
pub fn not_found(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Route not found"))
}

/// Every other status without a handler-provided body
#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let message = match status.code {
        400 | 422 => INVALID_BODY_MESSAGE.to_string(),
        413 => "Upload exceeds the maximum allowed size".to_string(),
        _ => status.reason().unwrap_or("Unknown error").to_string(),
    };
    (status, Json(ErrorResponse::new(message)))
}

/// Catchers registered at `/`
pub fn json_catchers() -> Vec<Catcher> {
    catchers![not_found, default_catcher]
}
