//! The safety transform applied to every motif before parsing.
//!
//! The parser has a first-line sensitivity: a source that is a single line
//! naming an existing file is loaded from disk (see
//! [`motif_core::Motif::from_source`]). Prepending a fixed comment line
//! guarantees the first line of parser input is always this service's own
//! inert text, never caller-controlled, so a caller can never coerce the
//! parser into reading a local file. Every parse path must go through
//! [`sanitize`]; there is no other route to the parser from a handler.

/// Inert comment line prepended to every submitted motif.
pub const SAFE_HEADER: &str = "# Generated by motif-server.\n";

/// Prefixes motif text with [`SAFE_HEADER`].
pub fn sanitize(motif: &str) -> String {
    format!("{}{}", SAFE_HEADER, motif)
}
