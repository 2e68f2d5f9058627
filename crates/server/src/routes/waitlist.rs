use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::error;

use service::errors::ServiceError;
use service::file::waitlist_store::WaitlistSignup;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// `POST /waitlist`: validate the email, append the signup, fire the
/// notification hook and return the stored record.
pub async fn signup(
    State(state): State<ServerState>,
    Json(input): Json<WaitlistSignup>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    match state.waitlist.signup(input).await {
        Ok(record) => {
            state.notifier.notify_waitlist(&record).await;
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "Successfully added to waitlist",
                    "data": record,
                })),
            ))
        }
        Err(ServiceError::Validation(msg)) => Err(ApiError::message(StatusCode::BAD_REQUEST, &msg)),
        Err(ServiceError::Conflict(msg)) => Err(ApiError::new(
            StatusCode::CONFLICT,
            json!({ "error": msg, "alreadyExists": true }),
        )),
        Err(e) => {
            error!(error = %e, "waitlist signup failed");
            Err(ApiError::message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process signup. Please try again.",
            ))
        }
    }
}

/// `GET /waitlist`: full collection in insertion order. Gated by the
/// operator key middleware.
pub async fn list(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(json!({ "waitlist": state.waitlist.list().await }))
}
