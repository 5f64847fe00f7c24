//! Root status handler.

use axum::extract::State;
use axum::Json;

use crate::schema::VersionResponse;
use crate::state::AppState;

/// Reports the service version.
///
/// `GET /`
pub async fn server_version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        server_version: state.version.to_string(),
    })
}
