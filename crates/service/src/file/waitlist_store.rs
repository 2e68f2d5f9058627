use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;
use crate::validation;
use models::WaitlistRecord;

/// Incoming waitlist signup payload. A missing email deserializes to the
/// empty string and fails validation like any other malformed address.
#[derive(Clone, Debug, Deserialize)]
pub struct WaitlistSignup {
    #[serde(default)]
    pub email: String,
}

/// File-backed waitlist collection. Emails are stored lowercased and are
/// unique case-insensitively; duplicate signups are rejected with a
/// conflict before anything is written.
#[derive(Clone)]
pub struct WaitlistStore {
    store: Arc<JsonArrayStore<WaitlistRecord>>,
}

impl WaitlistStore {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<WaitlistRecord>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Validate, normalize and append a signup. Returns the stored record.
    pub async fn signup(&self, input: WaitlistSignup) -> Result<WaitlistRecord, ServiceError> {
        let email = validation::normalize_email(&input.email)?;
        let record = WaitlistRecord::new(email);
        let candidate = record.email.clone();
        self.store
            .append_with(record.clone(), move |entries| {
                if entries.iter().any(|e| e.email.to_lowercase() == candidate) {
                    return Err(ServiceError::Conflict("Email already registered".into()));
                }
                Ok(())
            })
            .await?;
        Ok(record)
    }

    /// All signups in insertion order.
    pub async fn list(&self) -> Vec<WaitlistRecord> {
        self.store.list().await
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }
}
