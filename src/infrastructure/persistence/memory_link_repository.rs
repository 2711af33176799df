//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct MemoryState {
    links: HashMap<String, Link>,
    next_id: i64,
}

/// Link store backed by a map behind a single lock.
///
/// Each operation takes the lock once, which makes create and click increment
/// atomic in the same way the PostgreSQL statements are. Data lives only as long as
/// the process.
///
/// # Use Cases
///
/// - HTTP and service tests without a database
/// - Local runs with `STORAGE_BACKEND=memory`
#[derive(Default)]
pub struct MemoryLinkRepository {
    state: RwLock<MemoryState>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut state = self.state.write().await;

        if state.links.contains_key(&new_link.code) {
            return Err(AppError::code_taken(&new_link.code));
        }

        state.next_id += 1;
        let link = Link::new(
            state.next_id,
            new_link.code,
            new_link.target_url,
            0,
            None,
            Utc::now(),
        );
        state.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.state.read().await.links.get(code).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.state.read().await.links.values().cloned().collect();

        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.state.read().await.links.contains_key(code))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut state = self.state.write().await;

        Ok(state.links.get_mut(code).map(|link| {
            link.record_click(Utc::now());
            link.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.state.write().await.links.remove(code))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
