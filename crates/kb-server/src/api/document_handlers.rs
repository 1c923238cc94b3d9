//! Document management handlers
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/documents?offset&limit` | GET | One page in insertion order |
//! | `/documents/<id>` | GET | Single document |
//! | `/documents/<id>` | PUT | Partial update, re-embeds changed content |
//! | `/documents/<id>` | DELETE | Remove, 204 on success |

use kb_domain::value_objects::DocumentId;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, put};

use super::ApiState;
use super::error::ApiResult;
use super::models::{DocumentEnvelope, DocumentListResponse, DocumentView, UpdateDocumentRequest};
use crate::constants::DEFAULT_PAGE_LIMIT;

/// List documents
#[get("/documents?<offset>&<limit>")]
pub async fn list_documents(
    state: &State<ApiState>,
    offset: Option<usize>,
    limit: Option<usize>,
) -> ApiResult<Json<DocumentListResponse>> {
    let documents = state
        .service
        .list(offset.unwrap_or(0), limit.unwrap_or(DEFAULT_PAGE_LIMIT))
        .await
        .map_err(|e| state.fail(&e))?;

    let data: Vec<DocumentView> = documents.into_iter().map(Into::into).collect();
    Ok(Json(DocumentListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// Fetch a document
#[get("/documents/<id>")]
pub async fn get_document(
    state: &State<ApiState>,
    id: u64,
) -> ApiResult<Json<DocumentEnvelope>> {
    let document = state
        .service
        .get(DocumentId::from(id))
        .await
        .map_err(|e| state.fail(&e))?;
    Ok(Json(document.into()))
}

/// Update a document
#[put("/documents/<id>", data = "<request>")]
pub async fn update_document(
    state: &State<ApiState>,
    id: u64,
    request: Json<UpdateDocumentRequest>,
) -> ApiResult<Json<DocumentEnvelope>> {
    let document = state
        .service
        .update(DocumentId::from(id), request.into_inner().into())
        .await
        .map_err(|e| state.fail(&e))?;
    Ok(Json(document.into()))
}

/// Delete a document
#[delete("/documents/<id>")]
pub async fn delete_document(state: &State<ApiState>, id: u64) -> ApiResult<Status> {
    state
        .service
        .delete(DocumentId::from(id))
        .await
        .map_err(|e| state.fail(&e))?;
    Ok(Status::NoContent)
}
