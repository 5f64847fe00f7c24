//! Motif parse handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use motif_core::{node_link_data, Motif};

use crate::error::ApiError;
use crate::sanitize::sanitize;
use crate::schema::ParseResponse;

/// Parses motif text into node-link JSON.
///
/// `POST /parse` with body `{"motif": "<motif text>"}`.
///
/// An undecodable body, a missing `motif` key, and a non-string `motif`
/// value all collapse into the same missing-input error. Grammar failures
/// come back as structured 422 responses via [`ApiError`].
pub async fn parse_motif(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::MissingMotif)?;
    let motif_text = payload
        .get("motif")
        .and_then(serde_json::Value::as_str)
        .ok_or(ApiError::MissingMotif)?;

    let motif = Motif::from_source(&sanitize(motif_text))?;

    Ok(Json(ParseResponse {
        motif: node_link_data(&motif),
    }))
}
