//! Error types for motif parsing.
//!
//! Uses `thiserror` for structured, matchable error variants. Syntax errors
//! carry the 1-based source line so callers can point at the offending rule.

use thiserror::Error;

/// Errors produced while turning motif text into a graph.
#[derive(Debug, Error)]
pub enum MotifError {
    /// A line of motif text could not be parsed.
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Two edge rules between the same pair of nodes disagree on whether
    /// the edge must exist.
    ///
    /// The field is named `source_node` rather than `source` because
    /// `thiserror` reserves `source` for the error chain.
    #[error("conflicting edge rules between '{source_node}' and '{target}'")]
    ConflictingEdge { source_node: String, target: String },

    /// A motif file could not be read from disk.
    #[error("failed to read motif file: {0}")]
    Io(#[from] std::io::Error),
}

impl MotifError {
    /// Shorthand for a syntax error at the given line.
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        MotifError::Syntax {
            line,
            message: message.into(),
        }
    }
}
