use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single waitlist signup. Immutable once appended; `email` is stored
/// lowercased and must be unique within the collection (case-insensitive).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WaitlistRecord {
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl WaitlistRecord {
    /// Build a record for an already-validated, lowercased email.
    pub fn new(email: String) -> Self {
        Self {
            email,
            timestamp: Utc::now(),
            source: "waitlist".to_string(),
        }
    }
}
