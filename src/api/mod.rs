//! HTTP layer for the JSON API, the redirect path and the health check.
//!
//! # Modules
//!
//! - [`dto`] - Request and response payloads
//! - [`extractors`] - Request extractors with validation
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - `/api` route configuration

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
