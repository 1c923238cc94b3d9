//! Search handler

use rocket::serde::json::{self, Json};
use rocket::{State, post};

use super::ApiState;
use super::error::{ApiResult, json_or_default};
use super::models::{SearchRequest, SearchResponse, SearchResultItem};

/// Rank stored documents against a query
///
/// Body: `{query, k?, limit?, threshold?}`. A missing or blank `query`,
/// including an empty body, is a 400 `Missing query parameter`; `k` outside
/// `1..=max_k` is a 400.
#[post("/search", data = "<request>")]
pub async fn search(
    state: &State<ApiState>,
    request: Result<Json<SearchRequest>, json::Error<'_>>,
) -> ApiResult<Json<SearchResponse>> {
    let request = json_or_default(request)?;
    let query = state
        .service
        .search_settings()
        .query(request.query, request.k.or(request.limit), request.threshold)
        .map_err(|e| state.fail(&e))?;

    let ranked = state
        .service
        .search(&query)
        .await
        .map_err(|e| state.fail(&e))?;
    let results: Vec<SearchResultItem> = ranked.into_iter().map(Into::into).collect();

    Ok(Json(SearchResponse {
        success: true,
        query: query.text,
        result_count: results.len(),
        results,
    }))
}
