//! Motif grammar parsing and graph construction.
//!
//! A motif is a small text description of a graph pattern: named nodes,
//! directed edges (required or forbidden), and attribute constraints on
//! either. [`Motif::from_source`] parses motif text into a petgraph-backed
//! graph; [`node_link::node_link_data`] serializes that graph into the
//! node-link JSON convention used by graph front-ends.

pub mod constraint;
pub mod error;
pub mod motif;
pub mod node_link;
mod parse;

// Re-export commonly used types
pub use constraint::{AttrValue, Constraint, ConstraintOp};
pub use error::MotifError;
pub use motif::{EdgeSpec, Motif, NodeSpec};
pub use node_link::{node_link_data, LinkEntry, NodeEntry, NodeLinkData};
