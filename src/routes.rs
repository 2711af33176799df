//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Health check (link store connectivity)
//! - `/api/*`            - JSON link management API
//! - `GET  /{code}`      - Short link redirect
//! - anything else       - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, route_not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Builds the router with all routes and the tracing layer.
///
/// Static routes take precedence over `/{code}`, so `/healthz` and `/api/...`
/// never reach the redirect handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{code}", get(redirect_handler))
        .fallback(route_not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Builds the served application: [`router`] wrapped in trailing-slash trimming.
///
/// Normalization has to wrap the router from the outside to run before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
