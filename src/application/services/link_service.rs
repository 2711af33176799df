//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::validation::{is_valid_code, is_valid_url};
use serde_json::json;
use tracing::{debug, info, warn};

/// Default number of generated candidates tried before giving up.
///
/// With 62^6 possible codes, ten consecutive collisions only happen when the
/// keyspace is close to full.
pub const DEFAULT_MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for creating, listing, reading and deleting links.
///
/// Input is validated before the store is touched. Code uniqueness is decided by
/// the store: the existence checks done here are advisory.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    max_generate_attempts: usize,
}

impl LinkService {
    /// Creates a new link service with the default retry budget.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self::with_max_attempts(link_repository, DEFAULT_MAX_GENERATE_ATTEMPTS)
    }

    /// Creates a new link service with an explicit retry budget for generated codes.
    pub fn with_max_attempts(
        link_repository: Arc<dyn LinkRepository>,
        max_generate_attempts: usize,
    ) -> Self {
        Self {
            link_repository,
            max_generate_attempts: max_generate_attempts.max(1),
        }
    }

    /// Creates a link for `target_url`, using `custom_code` when given.
    ///
    /// # Code Selection
    ///
    /// - With `custom_code`: the code is validated, checked, and inserted. A taken
    ///   code is reported as a conflict so the caller can pick another one.
    /// - Without: random codes are generated until one is inserted, up to the
    ///   retry budget. Collisions, including inserts that lose a race, consume an
    ///   attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is malformed
    /// (no store access happens in that case).
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::ExhaustedRetries`] if no free code was found.
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if !is_valid_url(&target_url) {
            return Err(AppError::bad_request(
                "Invalid URL provided",
                json!({ "targetUrl": target_url }),
            ));
        }

        let link = match custom_code {
            Some(code) => self.create_with_custom_code(target_url, code).await?,
            None => self.create_with_generated_code(target_url).await?,
        };

        info!(code = %link.code, target_url = %link.target_url, "Link created");
        Ok(link)
    }

    async fn create_with_custom_code(
        &self,
        target_url: String,
        code: String,
    ) -> Result<Link, AppError> {
        if !is_valid_code(&code) {
            return Err(AppError::bad_request(
                "Custom code must be 6-8 alphanumeric characters",
                json!({ "customCode": code }),
            ));
        }

        if self.link_repository.exists_by_code(&code).await? {
            return Err(AppError::code_taken(&code));
        }

        self.link_repository
            .create(NewLink { code, target_url })
            .await
    }

    async fn create_with_generated_code(&self, target_url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.max_generate_attempts {
            let code = generate_code();

            if self.link_repository.exists_by_code(&code).await? {
                debug!(attempt, %code, "Generated code already taken");
                continue;
            }

            let new_link = NewLink {
                code,
                target_url: target_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Generated code was taken before insert");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.max_generate_attempts,
            "Could not find a free short code"
        );
        Err(AppError::exhausted_retries(self.max_generate_attempts))
    }

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.find_all().await
    }

    /// Retrieves a link by code. A miss is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn get_link(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_code(code).await
    }

    /// Deletes a link by code, returning the removed record. A miss is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store failures.
    pub async fn delete_link(&self, code: &str) -> Result<Option<Link>, AppError> {
        let deleted = self.link_repository.delete(code).await?;

        if deleted.is_some() {
            info!(code, "Link deleted");
        }

        Ok(deleted)
    }

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store does not answer.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Builds the public short URL for `code` under `base_url`.
    pub fn short_url(base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
