//! Handlers for link management endpoints (create, list, read, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, DeleteLinkResponse, LinkSummary,
};
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com",
///   "customCode": "AbC123"
/// }
/// ```
///
/// `customCode` is optional; without it a random 6-character code is generated.
///
/// # Errors
///
/// - 400 if the URL or custom code is malformed, or the body is not valid JSON
/// - 409 if the custom code already exists
/// - 500 if no free code could be generated or the store fails
pub async fn create_link_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let custom_code = payload.custom_code();

    let link = state
        .link_service
        .create_link(payload.target_url, custom_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse::from_link(link, &state.base_url)),
    ))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkSummary>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkSummary::from_link(link, &state.base_url))
            .collect(),
    ))
}

/// Returns a single link with its click counters.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if no link has this code.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkSummary>, AppError> {
    let link = state
        .link_service
        .get_link(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

    Ok(Json(LinkSummary::from_link(link, &state.base_url)))
}

/// Deletes a link. The code becomes available again immediately.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if no link has this code.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    let deleted = state
        .link_service
        .delete_link(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

    Ok(Json(DeleteLinkResponse {
        message: "Link deleted successfully".to_string(),
        code: deleted.code,
    }))
}
