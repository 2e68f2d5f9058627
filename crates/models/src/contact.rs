use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submission flavor for the contact form. Demo requests require a company.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    #[default]
    Contact,
    Demo,
}

/// A contact/demo submission. Immutable once appended; duplicates are
/// allowed, unlike the waitlist.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: SubmissionType,
    pub timestamp: DateTime<Utc>,
}

impl ContactRecord {
    /// Build a record from already-validated, normalized fields.
    pub fn new(
        name: String,
        email: String,
        company: Option<String>,
        message: Option<String>,
        kind: SubmissionType,
    ) -> Self {
        Self {
            name,
            email,
            company,
            message,
            kind,
            timestamp: Utc::now(),
        }
    }
}
