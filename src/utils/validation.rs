//! Syntax checks for target URLs and short codes.
//!
//! Both checks are pure and run before any store access.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Schemes accepted for target URLs.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Short codes: 6 to 8 ASCII letters or digits, case-sensitive.
static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Returns `true` if `candidate` is an absolute `http`/`https` URL with a host.
///
/// Surrounding whitespace makes the URL invalid; it is not trimmed away.
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.trim() != candidate {
        return false;
    }

    match Url::parse(candidate) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()) && url.has_host(),
        Err(_) => false,
    }
}

/// Returns `true` if `candidate` is 6 to 8 characters from `[A-Za-z0-9]`.
pub fn is_valid_code(candidate: &str) -> bool {
    CODE_REGEX.is_match(candidate)
}
