//! Router assembly.
//!
//! [`build_router`] wires the two routes with CORS and tracing middleware.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router.
///
/// CORS is permissive: the service is called from arbitrary browser-hosted
/// front-ends. TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status::server_version))
        .route("/parse", post(handlers::parse::parse_motif))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
