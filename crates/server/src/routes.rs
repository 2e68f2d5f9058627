use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{
    file::{contact_store::ContactStore, waitlist_store::WaitlistStore},
    notify::Notifier,
};

use crate::routes::admin::require_api_key;

pub mod admin;
pub mod contact;
pub mod waitlist;

/// Shared handler state: one store per record kind, the notification hook,
/// and the operator key guarding the read endpoints.
#[derive(Clone)]
pub struct ServerState {
    pub waitlist: Arc<WaitlistStore>,
    pub contacts: Arc<ContactStore>,
    pub notifier: Arc<dyn Notifier>,
    pub admin_api_key: Option<String>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public submission routes plus the
/// key-gated read routes for operator inspection.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/waitlist", post(waitlist::signup))
        .route("/contact", post(contact::submit));

    // Read accessors stay locked unless an operator key is configured and
    // presented via X-API-Key.
    let reads = Router::new()
        .route("/waitlist", get(waitlist::list))
        .route("/contact", get(contact::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    public
        .merge(reads)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
