//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::pages;

/// Redirects a short code to its target URL and records the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the target. The redirect is temporary and
///   marked `no-store` so every visit reaches the server and is counted
/// - **404** JSON for reserved path segments
/// - **404** HTML "invalid link" page for malformed codes, including segments that
///   do not percent-decode to UTF-8
/// - **404** HTML "link not found" page for unknown or just-deleted codes
/// - **500** HTML error page if the store fails; no redirect is issued
pub async fn redirect_handler(
    uri: Uri,
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Response {
    let code = match code {
        Ok(Path(code)) => code,
        Err(rejection) => {
            debug!(uri = %uri, error = %rejection, "Undecodable short code");
            metrics::counter!("tinylink_redirects_total", "outcome" => "malformed").increment(1);
            return pages::invalid_link(uri.path().trim_start_matches('/'));
        }
    };

    let resolution = match state.redirect_service.resolve(&code).await {
        Ok(resolution) => resolution,
        Err(e) => {
            error!(code = %code, error = %e, "Redirect resolution failed");
            metrics::counter!("tinylink_redirects_total", "outcome" => "error").increment(1);
            return pages::server_error();
        }
    };

    debug!(code = %code, outcome = resolution.outcome(), "Resolved short code");
    metrics::counter!("tinylink_redirects_total", "outcome" => resolution.outcome()).increment(1);

    match resolution {
        Resolution::Redirect(link) => (
            StatusCode::FOUND,
            [
                (header::LOCATION, link.target_url),
                (header::CACHE_CONTROL, "no-store".to_string()),
            ],
        )
            .into_response(),
        Resolution::Reserved => AppError::not_found("Not found", json!({})).into_response(),
        Resolution::Malformed => pages::invalid_link(&code),
        Resolution::Unknown => pages::link_not_found(&code),
    }
}
