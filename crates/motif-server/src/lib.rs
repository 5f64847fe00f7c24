//! HTTP/JSON API server for motif parsing.
//!
//! A single-route glue layer over [`motif_core`]: accepts motif text in a
//! JSON body, sanitizes it, delegates to the parser, and returns the graph
//! as node-link JSON. This crate contains the server framework, API schema
//! types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod sanitize;
pub mod schema;
pub mod state;
