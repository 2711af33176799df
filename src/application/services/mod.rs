//! Business logic services for the application layer.

pub mod link_service;
pub mod redirect_service;

pub use link_service::{DEFAULT_MAX_GENERATE_ATTEMPTS, LinkService};
pub use redirect_service::{RESERVED_PATHS, RedirectService, Resolution};
