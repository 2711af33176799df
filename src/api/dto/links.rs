//! DTOs for the link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::LinkService;
use crate::domain::entities::Link;

/// Request to create a short link.
///
/// A missing `targetUrl` deserializes to an empty string and is then rejected by
/// URL validation, so both cases produce the same 400 response.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub target_url: String,

    /// Optional custom code. An empty string means "generate one".
    pub custom_code: Option<String>,
}

impl CreateLinkRequest {
    /// Returns the custom code, treating an empty value as absent.
    pub fn custom_code(&self) -> Option<String> {
        self.custom_code.clone().filter(|code| !code.is_empty())
    }
}

/// Response for a newly created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl CreateLinkResponse {
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            short_url: LinkService::short_url(base_url, &link.code),
            code: link.code,
            target_url: link.target_url,
            created_at: link.created_at,
        }
    }
}

/// Summary of a link with its click counters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    /// `null` until the first redirect.
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

impl LinkSummary {
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            short_url: LinkService::short_url(base_url, &link.code),
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked_at,
            created_at: link.created_at,
        }
    }
}

/// Response for a deleted link.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_link() -> Link {
        Link::new(
            1,
            "AbC123".to_string(),
            "https://example.com".to_string(),
            3,
            None,
            Utc::now(),
        )
    }

    #[test]
    fn test_create_request_camel_case() {
        let request: CreateLinkRequest = serde_json::from_value(json!({
            "targetUrl": "https://example.com",
            "customCode": "AbC123"
        }))
        .unwrap();

        assert_eq!(request.target_url, "https://example.com");
        assert_eq!(request.custom_code(), Some("AbC123".to_string()));
    }

    #[test]
    fn test_create_request_empty_custom_code_is_absent() {
        let request: CreateLinkRequest = serde_json::from_value(json!({
            "targetUrl": "https://example.com",
            "customCode": ""
        }))
        .unwrap();

        assert_eq!(request.custom_code(), None);
    }

    #[test]
    fn test_create_request_missing_target_url_defaults_to_empty() {
        let request: CreateLinkRequest = serde_json::from_value(json!({})).unwrap();

        assert!(request.target_url.is_empty());
        assert!(request.custom_code().is_none());
    }

    #[test]
    fn test_create_request_rejects_overlong_url() {
        let request = CreateLinkRequest {
            target_url: format!("https://example.com/{}", "a".repeat(2100)),
            custom_code: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_link_summary_serialization() {
        let value =
            serde_json::to_value(LinkSummary::from_link(sample_link(), "https://s.test/")).unwrap();

        assert_eq!(value["code"], "AbC123");
        assert_eq!(value["targetUrl"], "https://example.com");
        assert_eq!(value["totalClicks"], 3);
        assert!(value["lastClicked"].is_null());
        assert_eq!(value["shortUrl"], "https://s.test/AbC123");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_create_response_serialization() {
        let value =
            serde_json::to_value(CreateLinkResponse::from_link(sample_link(), "https://s.test"))
                .unwrap();

        assert_eq!(value["code"], "AbC123");
        assert_eq!(value["shortUrl"], "https://s.test/AbC123");
        assert!(value.get("totalClicks").is_none());
    }
}
