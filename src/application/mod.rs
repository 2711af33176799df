//! Application layer services implementing business logic.
//!
//! Services receive the link store at construction and are shared by HTTP handlers
//! through [`crate::state::AppState`].
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, listing, lookup and deletion
//! - [`services::redirect_service::RedirectService`] - Code resolution with click accounting

pub mod services;
