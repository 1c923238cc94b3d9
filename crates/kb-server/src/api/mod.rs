//! HTTP API
//!
//! Every route is mounted at `/` and again under `server.api_prefix`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`search_handlers`] | `POST /search` |
//! | [`ingest_handlers`] | `POST /add/text`, `/add/file`, `/add/video` |
//! | [`document_handlers`] | `GET/PUT/DELETE /documents` |
//! | [`health_handlers`] | `GET /`, `GET /health` |
//! | [`fairings`] | CORS headers and request logging |
//! | [`catchers`] | JSON bodies for unmatched or rejected requests |

pub mod catchers;
pub mod document_handlers;
pub mod error;
pub mod fairings;
pub mod health_handlers;
pub mod ingest_handlers;
pub mod models;
pub mod search_handlers;
pub mod state;

use rocket::data::{ByteUnit, Limits};
use rocket::http::Status;
use rocket::{Build, Rocket, Route, options, routes};

pub use state::ApiState;

use crate::constants::MULTIPART_OVERHEAD_BYTES;
use fairings::{Cors, RequestLogger};

/// Answer any CORS preflight request
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

/// All API routes, ready to mount
pub fn api_routes() -> Vec<Route> {
    routes![
        health_handlers::index,
        health_handlers::health,
        search_handlers::search,
        ingest_handlers::add_text,
        ingest_handlers::add_file,
        ingest_handlers::add_file_missing,
        ingest_handlers::add_video_json,
        ingest_handlers::add_video_form,
        ingest_handlers::add_video_missing,
        document_handlers::list_documents,
        document_handlers::get_document,
        document_handlers::update_document,
        document_handlers::delete_document,
    ]
}

/// Mount point for the prefixed copy of the routes, `None` when it is `/`
fn prefixed_mount(api_prefix: &str) -> Option<&str> {
    let trimmed = api_prefix.trim_end_matches('/');
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Build the Rocket application
///
/// Address, port, upload limits and the temporary upload directory come
/// from `state.server`; everything else from Rocket's own figment.
pub fn build_rocket(state: ApiState) -> Rocket<Build> {
    let server = state.server.clone();
    let file_limit = ByteUnit::from(server.max_upload_bytes);
    let form_limit =
        ByteUnit::from(server.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES));
    let limits = Limits::default()
        .limit("file", file_limit)
        .limit("data-form", form_limit);

    let figment = rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port))
        .merge(("temp_dir", server.upload_dir.clone()))
        .merge(("limits", limits));

    let mut rocket = rocket::custom(figment)
        .manage(state)
        .mount("/", api_routes())
        .register("/", catchers::json_catchers())
        .attach(RequestLogger);

    if let Some(prefix) = prefixed_mount(&server.api_prefix) {
        rocket = rocket.mount(prefix, api_routes());
    }

    if server.cors_enabled {
        rocket = rocket.attach(Cors).mount("/", routes![preflight]);
    }

    rocket
}
