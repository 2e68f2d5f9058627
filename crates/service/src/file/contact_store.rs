use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;
use crate::validation;
use models::{ContactRecord, SubmissionType};

/// Incoming contact-form payload. `type` defaults to a plain contact
/// message; demo requests additionally require a company.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub company: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: SubmissionType,
}

/// File-backed contact collection. Unlike the waitlist, duplicates are
/// allowed; every valid submission is appended.
#[derive(Clone)]
pub struct ContactStore {
    store: Arc<JsonArrayStore<ContactRecord>>,
}

impl ContactStore {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<ContactRecord>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Validate, normalize and append a submission. Returns the stored record.
    pub async fn submit(&self, input: ContactSubmission) -> Result<ContactRecord, ServiceError> {
        let email = validation::normalize_email(&input.email)?;
        let name = validation::normalize_name(&input.name)?;
        let company = validation::normalize_optional(input.company.as_deref());
        if input.kind == SubmissionType::Demo && company.is_none() {
            return Err(ServiceError::Validation(
                "Company name is required for demo requests".into(),
            ));
        }
        let message = validation::normalize_optional(input.message.as_deref());

        let record = ContactRecord::new(name, email, company, message, input.kind);
        self.store.append(record.clone()).await?;
        Ok(record)
    }

    /// All submissions in insertion order.
    pub async fn list(&self) -> Vec<ContactRecord> {
        self.store.list().await
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }
}
