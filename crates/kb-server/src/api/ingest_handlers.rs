//! Ingestion handlers
//!
//! ## Endpoints
//!
//! | Path | Method | Body |
//! |------|--------|------|
//! | `/add/text` | POST | JSON `{text, title?, metadata?, tags?}` |
//! | `/add/file` | POST | multipart, field `file` |
//! | `/add/video` | POST | JSON or form `{transcription, title?}` |

use std::pin::pin;

use kb_application::{FileSubmission, VideoSubmission};
use kb_domain::value_objects::DocumentId;
use kb_infrastructure::ErrorContext;
use rocket::FromForm;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::status::Created;
use rocket::serde::json::{self, Json};
use rocket::{State, post};
use tokio::io::AsyncReadExt;

use super::ApiState;
use super::error::{ApiError, ApiResult, bad_request, json_or_default};
use super::models::{AddResponse, AddTextRequest, AddVideoRequest};

/// Multipart body of `POST /add/file`
#[derive(FromForm)]
pub struct FileUploadForm<'r> {
    /// The uploaded file
    pub file: Option<TempFile<'r>>,
}

fn created(message: &str, id: DocumentId) -> Created<Json<AddResponse>> {
    Created::new(format!("/documents/{id}")).body(Json(AddResponse::created(message, id)))
}

/// Store raw text
#[post("/add/text", data = "<request>")]
pub async fn add_text(
    state: &State<ApiState>,
    request: Result<Json<AddTextRequest>, json::Error<'_>>,
) -> ApiResult<Created<Json<AddResponse>>> {
    let request = json_or_default(request)?;
    let id = state
        .service
        .add_text(request.into())
        .await
        .map_err(|e| state.fail(&e))?;
    Ok(created("Text added successfully", id))
}

/// Store an uploaded file
///
/// The temporary upload lives in `server.upload_dir` and is removed by
/// Rocket once the request completes.
#[post("/add/file", data = "<form>")]
pub async fn add_file(
    state: &State<ApiState>,
    form: Form<FileUploadForm<'_>>,
) -> ApiResult<Created<Json<AddResponse>>> {
    let Some(file) = form.into_inner().file else {
        return Err(bad_request("No file provided"));
    };

    let content_type = file.content_type().map(ToString::to_string);
    if !state.server.accepts_content_type(content_type.as_deref()) {
        tracing::debug!(content_type = ?content_type, "Rejected upload content type");
        return Err(bad_request("Invalid file type"));
    }

    // Recorded as metadata only; never used to build a path.
    let filename = file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_default();
    let bytes = read_upload(&file).await.map_err(|e| state.fail(&e))?;

    let id = state
        .service
        .add_file(FileSubmission {
            filename,
            content_type,
            bytes,
        })
        .await
        .map_err(|e| state.fail(&e))?;
    Ok(created("File uploaded successfully", id))
}

/// `POST /add/file` without a multipart body
#[post("/add/file", rank = 2)]
pub fn add_file_missing() -> ApiError {
    bad_request("No file provided")
}

async fn read_upload(file: &TempFile<'_>) -> kb_domain::error::Result<Vec<u8>> {
    let reader = file.open().await.io_context("Failed to open upload")?;
    let mut reader = pin!(reader);
    let mut bytes = Vec::with_capacity(usize::try_from(file.len()).unwrap_or_default());
    reader
        .read_to_end(&mut bytes)
        .await
        .io_context("Failed to read upload")?;
    Ok(bytes)
}

/// Store a video transcript sent as JSON
#[post("/add/video", format = "json", data = "<request>")]
pub async fn add_video_json(
    state: &State<ApiState>,
    request: Result<Json<AddVideoRequest>, json::Error<'_>>,
) -> ApiResult<Created<Json<AddResponse>>> {
    add_video(state, json_or_default(request)?).await
}

/// Store a video transcript sent as form fields
#[post("/add/video", data = "<request>", rank = 2)]
pub async fn add_video_form(
    state: &State<ApiState>,
    request: Form<AddVideoRequest>,
) -> ApiResult<Created<Json<AddResponse>>> {
    add_video(state, request.into_inner()).await
}

/// `POST /add/video` with neither a JSON nor a form body
#[post("/add/video", rank = 3)]
pub fn add_video_missing() -> ApiError {
    bad_request("No transcription provided")
}

async fn add_video(
    state: &ApiState,
    request: AddVideoRequest,
) -> ApiResult<Created<Json<AddResponse>>> {
    let id = state
        .service
        .add_video(VideoSubmission {
            transcription: request.transcription.unwrap_or_default(),
            title: request.title,
        })
        .await
        .map_err(|e| state.fail(&e))?;
    Ok(created("Video transcription added successfully", id))
}
