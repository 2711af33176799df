//! Link entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to its target URL, with click accounting.
///
/// `code`, `target_url` and `created_at` never change after creation.
/// `total_clicks` and `last_clicked_at` only change together, through a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        total_clicks: i64,
        last_clicked_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            total_clicks,
            last_clicked_at,
            created_at,
        }
    }

    /// Applies one click at `at`.
    ///
    /// The click timestamp never moves backwards, even if `at` is older than the
    /// recorded one.
    pub fn record_click(&mut self, at: DateTime<Utc>) {
        self.total_clicks += 1;
        self.last_clicked_at = Some(match self.last_clicked_at {
            Some(previous) if previous > at => previous,
            _ => at,
        });
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
