use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::error;

use models::SubmissionType;
use service::errors::ServiceError;
use service::file::contact_store::ContactSubmission;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// `POST /contact`: validate all fields, append the submission, fire the
/// notification hook and return the stored record. The success message
/// differs for demo requests.
pub async fn submit(
    State(state): State<ServerState>,
    Json(input): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    match state.contacts.submit(input).await {
        Ok(record) => {
            state.notifier.notify_contact(&record).await;
            let message = match record.kind {
                SubmissionType::Demo => "Demo request submitted successfully. We'll be in touch soon!",
                SubmissionType::Contact => "Message sent successfully. We'll get back to you soon!",
            };
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": message,
                    "data": record,
                })),
            ))
        }
        Err(ServiceError::Validation(msg)) => Err(ApiError::message(StatusCode::BAD_REQUEST, &msg)),
        Err(e) => {
            error!(error = %e, "contact submission failed");
            Err(ApiError::message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to submit message. Please try again.",
            ))
        }
    }
}

/// `GET /contact`: full collection in insertion order. Gated by the
/// operator key middleware.
pub async fn list(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(json!({ "contacts": state.contacts.list().await }))
}
