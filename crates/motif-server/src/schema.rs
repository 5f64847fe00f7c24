//! API response types.
//!
//! Request bodies are read as raw JSON values in the parse handler (so that
//! undecodable bodies and missing keys share one error path); responses are
//! typed here.

use serde::Serialize;

use motif_core::NodeLinkData;

/// Response for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionResponse {
    /// The service's semver version string.
    pub server_version: String,
}

/// Response for `POST /parse`.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    /// The parsed motif in node-link form.
    pub motif: NodeLinkData,
}
