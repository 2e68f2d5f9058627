//! Service layer for the landing-page submission endpoints.
//! - Validates and normalizes incoming submissions.
//! - Persists accepted records to append-only JSON array files.
//! - Exposes the notification hook invoked after each successful append.

pub mod errors;
pub mod validation;
pub mod storage;
pub mod file;
pub mod notify;
pub mod runtime;
