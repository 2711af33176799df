#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use tinylink::domain::entities::{Link, NewLink};
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::{MemoryLinkRepository, with_store_timeout};
use tinylink::routes::{app_router, router};
use tinylink::state::AppState;

pub const BASE_URL: &str = "https://s.test";

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), BASE_URL, 10);
    (state, repo)
}

/// Full application router over an in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repo)
}

/// The served application: router wrapped in trailing-slash normalization.
pub fn create_app_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server =
        TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        code: code.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap()
}

/// Store whose every call fails, standing in for an unreachable database.
pub struct FailingLinkRepository;

#[async_trait::async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn exists_by_code(&self, _code: &str) -> Result<bool, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn delete(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::storage("connection refused"))
    }
}

/// Full application router over a store that always fails.
pub fn create_failing_server() -> TestServer {
    let state = AppState::new(Arc::new(FailingLinkRepository), BASE_URL, 10);
    TestServer::new(router(state)).unwrap()
}

/// Store whose every call hangs until the per-call timeout fires.
pub struct StalledLinkRepository {
    pub limit: Duration,
}

impl StalledLinkRepository {
    async fn stall<T>(&self) -> Result<T, AppError> {
        with_store_timeout(self.limit, std::future::pending::<Result<T, AppError>>()).await
    }
}

#[async_trait::async_trait]
impl LinkRepository for StalledLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        self.stall().await
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        self.stall().await
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        self.stall().await
    }

    async fn exists_by_code(&self, _code: &str) -> Result<bool, AppError> {
        self.stall().await
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<Link>, AppError> {
        self.stall().await
    }

    async fn delete(&self, _code: &str) -> Result<Option<Link>, AppError> {
        self.stall().await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.stall().await
    }
}

/// Full application router over a store that never answers in time.
pub fn create_stalled_server() -> TestServer {
    let repo = StalledLinkRepository {
        limit: Duration::from_millis(50),
    };
    let state = AppState::new(Arc::new(repo), BASE_URL, 10);
    TestServer::new(router(state)).unwrap()
}
