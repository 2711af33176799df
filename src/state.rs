//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    /// Public prefix used to build `shortUrl` values.
    pub base_url: String,
    pub started_at: Instant,
}

impl AppState {
    /// Wires both services to the same link repository.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
        max_generate_attempts: usize,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::with_max_attempts(
                Arc::clone(&link_repository),
                max_generate_attempts,
            )),
            redirect_service: Arc::new(RedirectService::new(link_repository)),
            base_url: base_url.into(),
            started_at: Instant::now(),
        }
    }
}
