//! Pure validation and normalization of submission fields.
//!
//! Rejection messages are the exact client-facing strings; the HTTP layer
//! forwards them verbatim in 400 responses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ServiceError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Check the email shape and normalize to lowercase. The input is matched
/// as-is (no trimming); leading or trailing whitespace fails the pattern.
pub fn normalize_email(raw: &str) -> Result<String, ServiceError> {
    if !EMAIL_RE.is_match(raw) {
        return Err(ServiceError::Validation("Valid email is required".into()));
    }
    Ok(raw.to_lowercase())
}

/// Require a trimmed name of at least 2 characters.
pub fn normalize_name(raw: &str) -> Result<String, ServiceError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        return Err(ServiceError::Validation(
            "Name is required (minimum 2 characters)".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field; whitespace-only input collapses to `None`.
pub fn normalize_optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
