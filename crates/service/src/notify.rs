//! Notification hook fired after each successful append.
//!
//! Actual delivery (email, CRM, webhook) belongs to an external
//! collaborator; this crate only defines the seam and a logging default.
//! A notifier must never fail the request that triggered it.

use models::{ContactRecord, WaitlistRecord};

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_waitlist(&self, record: &WaitlistRecord);
    async fn notify_contact(&self, record: &ContactRecord);
}

/// Default notifier: emits a tracing event and nothing else.
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify_waitlist(&self, record: &WaitlistRecord) {
        tracing::info!(email = %record.email, "waitlist signup recorded");
    }

    async fn notify_contact(&self, record: &ContactRecord) {
        tracing::info!(email = %record.email, kind = ?record.kind, "contact submission recorded");
    }
}
