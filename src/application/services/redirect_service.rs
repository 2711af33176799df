//! Short code resolution for the public redirect path.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validation::is_valid_code;

/// Top-level path segments owned by other routes. Matched case-insensitively.
pub const RESERVED_PATHS: &[&str] = &["css", "js", "assets", "images", "api", "healthz", "code"];

/// Outcome of resolving a raw path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The segment belongs to another route. The store was not consulted.
    Reserved,
    /// The segment is not a syntactically valid code. The store was not consulted.
    Malformed,
    /// No link exists for the code, or it was deleted before the click landed.
    Unknown,
    /// The click was recorded; carries the updated link.
    Redirect(Link),
}

impl Resolution {
    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Reserved => "reserved",
            Resolution::Malformed => "malformed",
            Resolution::Unknown => "unknown",
            Resolution::Redirect(_) => "redirect",
        }
    }
}

/// Resolves codes to targets and records a click for every successful resolution.
///
/// # Resolution Order
///
/// 1. Reserved path segment
/// 2. Malformed code
/// 3. Unknown code (lookup miss)
/// 4. Click increment; a miss here means the link was deleted concurrently and is
///    reported as unknown rather than redirecting to a stale target
///
/// Store errors are returned as-is and never retried, so one request cannot record
/// more than one click.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Returns true if `segment` is owned by another route.
    pub fn is_reserved(segment: &str) -> bool {
        RESERVED_PATHS
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(segment))
    }

    /// Resolves a raw path segment.
    ///
    /// The click increment runs on its own task, so it completes even if the
    /// calling request is dropped mid-flight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the lookup or the increment fails.
    pub async fn resolve(&self, raw: &str) -> Result<Resolution, AppError> {
        if Self::is_reserved(raw) {
            return Ok(Resolution::Reserved);
        }

        if !is_valid_code(raw) {
            return Ok(Resolution::Malformed);
        }

        if self.link_repository.find_by_code(raw).await?.is_none() {
            return Ok(Resolution::Unknown);
        }

        let repository = Arc::clone(&self.link_repository);
        let code = raw.to_owned();
        let updated = tokio::spawn(async move { repository.increment_clicks(&code).await })
            .await
            .map_err(|e| AppError::storage(format!("Click increment task failed: {e}")))??;

        match updated {
            Some(link) => Ok(Resolution::Redirect(link)),
            None => {
                debug!(code = raw, "Link deleted between lookup and click");
                Ok(Resolution::Unknown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewLink;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::persistence::MemoryLinkRepository;
    use chrono::Utc;

    fn link(code: &str, clicks: i64) -> Link {
        Link::new(
            1,
            code.to_string(),
            "https://example.com".to_string(),
            clicks,
            (clicks > 0).then(Utc::now),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_reserved_paths_skip_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_code().times(0);
        mock_repo.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        for segment in ["api", "API", "healthz", "Assets", "css", "js", "images", "code"] {
            assert_eq!(
                service.resolve(segment).await.unwrap(),
                Resolution::Reserved,
                "{segment}"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_codes_skip_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_code().times(0);
        mock_repo.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        for segment in ["abc", "toolongcode", "abc-123", "favicon.ico", ""] {
            assert_eq!(
                service.resolve(segment).await.unwrap(),
                Resolution::Malformed,
                "{segment}"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_code_does_not_increment() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        assert_eq!(service.resolve("AbC123").await.unwrap(), Resolution::Unknown);
    }

    #[tokio::test]
    async fn test_resolved_code_records_click() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(link(code, 0))));
        mock_repo
            .expect_increment_clicks()
            .withf(|code| code == "AbC123")
            .times(1)
            .returning(|code| Ok(Some(link(code, 1))));

        let service = RedirectService::new(Arc::new(mock_repo));

        match service.resolve("AbC123").await.unwrap() {
            Resolution::Redirect(link) => {
                assert_eq!(link.target_url, "https://example.com");
                assert_eq!(link.total_clicks, 1);
                assert!(link.last_clicked_at.is_some());
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deleted_between_lookup_and_increment_is_unknown() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(link(code, 4))));
        mock_repo
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(None));

        let service = RedirectService::new(Arc::new(mock_repo));

        assert_eq!(service.resolve("AbC123").await.unwrap(), Resolution::Unknown);
    }

    #[tokio::test]
    async fn test_storage_error_on_lookup_propagates() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Err(AppError::storage("timeout")));
        mock_repo.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.resolve("AbC123").await,
            Err(AppError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_storage_error_on_increment_is_not_retried() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(link(code, 0))));
        mock_repo
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Err(AppError::storage("connection reset")));

        let service = RedirectService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.resolve("AbC123").await,
            Err(AppError::Storage(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_resolutions_count_every_click() {
        let repo = Arc::new(MemoryLinkRepository::new());
        repo.create(NewLink {
            code: "AbC123".to_string(),
            target_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

        let service = Arc::new(RedirectService::new(repo.clone()));
        let handles: Vec<_> = (0..100)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.resolve("AbC123").await })
            })
            .collect();

        let mut latest = None;
        for handle in handles {
            match handle.await.unwrap().unwrap() {
                Resolution::Redirect(link) => latest = latest.max(link.last_clicked_at),
                other => panic!("expected redirect, got {other:?}"),
            }
        }

        let stored = repo.find_by_code("AbC123").await.unwrap().unwrap();
        assert_eq!(stored.total_clicks, 100);
        assert_eq!(stored.last_clicked_at, latest);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Resolution::Reserved.outcome(), "reserved");
        assert_eq!(Resolution::Malformed.outcome(), "malformed");
        assert_eq!(Resolution::Unknown.outcome(), "unknown");
        assert_eq!(Resolution::Redirect(link("AbC123", 1)).outcome(), "redirect");
    }
}
