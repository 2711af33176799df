//! Handler for unmatched routes.

use axum::{Json, extract::OriginalUri, http::StatusCode};
use serde_json::{Value, json};

/// Returns 404 with the requested path for any route that matched nothing.
///
/// Uses the original URI so misses inside `/api` report the full path.
pub async fn route_not_found_handler(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path(),
        })),
    )
}
