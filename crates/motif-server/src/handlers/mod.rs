//! HTTP handler modules.
//!
//! Handlers are thin: validate the request, apply the sanitize transform,
//! delegate to `motif-core`, and shape the JSON response. No parsing logic
//! lives here.

pub mod parse;
pub mod status;
