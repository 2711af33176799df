//! Repository trait for link storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for links. The store is the single source of truth.
///
/// Every method is atomic with respect to concurrent callers. Implementations must
/// express read-modify-write operations ([`Self::increment_clicks`], [`Self::delete`])
/// as a single indivisible step, and must enforce code uniqueness in [`Self::create`]
/// itself rather than relying on a prior [`Self::exists_by_code`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Storage`] on backend errors or timeouts.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its code. A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors or timeouts.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors or timeouts.
    async fn find_all(&self) -> Result<Vec<Link>, AppError>;

    /// Advisory existence check. [`Self::create`] remains the authority.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors or timeouts.
    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Adds one click and sets `last_clicked_at` to now, in one step.
    ///
    /// Returns the updated link, or `Ok(None)` if the code no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors or timeouts.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Removes a link, returning the removed record or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors or timeouts.
    async fn delete(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backend does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
