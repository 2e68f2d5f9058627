use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::routes::ServerState;

/// Middleware: require a valid `X-API-Key` for the read endpoints.
/// With no key configured the gated routes always answer 401.
pub async fn require_api_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let expected = match state.admin_api_key.as_deref() {
        Some(k) if !k.trim().is_empty() => k.to_string(),
        _ => return Err(StatusCode::UNAUTHORIZED),
    };

    let provided = req
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    match provided {
        Some(k) if k == expected => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
