//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::timeout::with_store_timeout;

/// Upper bound for a single storage call when none is configured.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    total_clicks: i64,
    last_clicked_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.code,
            r.target_url,
            r.total_clicks,
            r.last_clicked_at,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for link storage.
///
/// Uniqueness of `code` is enforced by the `links_code_key` constraint and click
/// accounting is a single `UPDATE ... RETURNING`, so neither depends on
/// application-level locking. Every call is bounded by `timeout`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgLinkRepository {
    /// Creates a new repository with the default per-call timeout.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeout(pool, DEFAULT_STORE_TIMEOUT)
    }

    /// Creates a new repository with an explicit per-call timeout.
    pub fn with_timeout(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        with_store_timeout(self.timeout, query).await
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING id, code, target_url, total_clicks, last_clicked_at, created_at
            "#,
                )
                .bind(&new_link.code)
                .bind(&new_link.target_url)
                .fetch_one(self.pool.as_ref()),
            )
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
            SELECT id, code, target_url, total_clicks, last_clicked_at, created_at
            FROM links
            WHERE code = $1
            "#,
                )
                .bind(code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
            SELECT id, code, target_url, total_clicks, last_clicked_at, created_at
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
                )
                .fetch_all(self.pool.as_ref()),
            )
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError> {
        self.bounded(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref()),
        )
        .await
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
            UPDATE links
            SET total_clicks = total_clicks + 1,
                last_clicked_at = GREATEST(COALESCE(last_clicked_at, NOW()), NOW())
            WHERE code = $1
            RETURNING id, code, target_url, total_clicks, last_clicked_at, created_at
            "#,
                )
                .bind(code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn delete(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
            DELETE FROM links
            WHERE code = $1
            RETURNING id, code, target_url, total_clicks, last_clicked_at, created_at
            "#,
                )
                .bind(code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded(sqlx::query("SELECT 1").execute(self.pool.as_ref()))
            .await
            .map(|_| ())
    }
}
