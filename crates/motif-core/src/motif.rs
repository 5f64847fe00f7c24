//! The parsed motif graph.
//!
//! [`Motif`] is a directed petgraph of [`NodeSpec`] weights connected by
//! [`EdgeSpec`] weights. Node identity is by name: the first mention of a
//! name creates the node, later mentions resolve to it. An insertion-ordered
//! name index keeps node ordering deterministic, so serializing the same
//! motif twice produces identical output.
//!
//! The graph itself is private. All mutations go through `Motif` methods so
//! the name index and the petgraph stay consistent.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::constraint::Constraint;
use crate::error::MotifError;
use crate::parse;

/// A node in the motif pattern: a name plus zero or more attribute
/// constraints (`A.size > 10` style rules).
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    /// Node name as written in the motif text.
    pub name: String,
    /// Attribute constraints, in source order.
    pub constraints: Vec<Constraint>,
}

/// An edge in the motif pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    /// `true` for `->` (edge must exist), `false` for `!>` (edge must not).
    pub exists: bool,
    /// Attribute constraints from the bracketed list, in source order.
    pub constraints: Vec<Constraint>,
}

/// A parsed motif: named nodes, directed edge rules, attribute constraints.
#[derive(Debug, Clone, Default)]
pub struct Motif {
    graph: DiGraph<NodeSpec, EdgeSpec, u32>,
    nodes_by_name: IndexMap<String, NodeIndex<u32>>,
}

impl Motif {
    /// Creates an empty motif.
    pub fn new() -> Self {
        Motif::default()
    }

    /// Parses motif text into a graph.
    ///
    /// Quirk kept for compatibility with existing motif tooling: when
    /// the entire source is a single line naming an existing file, the file
    /// is read and parsed in place of the text. Callers exposing this to
    /// untrusted input must guarantee the first line is their own (see the
    /// server's sanitize step), otherwise a caller can make the parser read
    /// arbitrary local files.
    pub fn from_source(source: &str) -> Result<Motif, MotifError> {
        let trimmed = source.trim();
        if !trimmed.is_empty() && !trimmed.contains('\n') && Path::new(trimmed).is_file() {
            return Motif::from_file(Path::new(trimmed));
        }
        parse::parse_source(source)
    }

    /// Reads and parses a motif file.
    pub fn from_file(path: &Path) -> Result<Motif, MotifError> {
        let text = fs::read_to_string(path)?;
        parse::parse_source(&text)
    }

    /// Returns the node for `name`, creating it if unseen.
    pub(crate) fn ensure_node(&mut self, name: &str) -> NodeIndex<u32> {
        if let Some(&idx) = self.nodes_by_name.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(NodeSpec {
            name: name.to_string(),
            constraints: Vec::new(),
        });
        self.nodes_by_name.insert(name.to_string(), idx);
        idx
    }

    /// Records an edge rule between `source` and `target`.
    ///
    /// A repeated rule for the same pair merges its constraints onto the
    /// existing edge; the graph is never a multigraph. Rules that disagree
    /// on existence (`->` vs `!>`) are rejected.
    pub(crate) fn add_edge_rule(
        &mut self,
        source: &str,
        target: &str,
        exists: bool,
        constraints: Vec<Constraint>,
    ) -> Result<(), MotifError> {
        let src = self.ensure_node(source);
        let dst = self.ensure_node(target);

        if let Some(edge) = self.graph.find_edge(src, dst) {
            let spec = &mut self.graph[edge];
            if spec.exists != exists {
                return Err(MotifError::ConflictingEdge {
                    source_node: source.to_string(),
                    target: target.to_string(),
                });
            }
            spec.constraints.extend(constraints);
        } else {
            self.graph.add_edge(src, dst, EdgeSpec { exists, constraints });
        }
        Ok(())
    }

    /// Attaches an attribute constraint to a node, creating it if unseen.
    pub(crate) fn add_node_constraint(&mut self, node: &str, constraint: Constraint) {
        let idx = self.ensure_node(node);
        self.graph[idx].constraints.push(constraint);
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Returns a read-only reference to the underlying graph.
    pub fn graph(&self) -> &DiGraph<NodeSpec, EdgeSpec, u32> {
        &self.graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edge rules.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up a node by name.
    pub fn node(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes_by_name.get(name).map(|&idx| &self.graph[idx])
    }

    /// Iterates nodes in insertion (source) order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeSpec> {
        self.nodes_by_name.values().map(|&idx| &self.graph[idx])
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::constraint::{AttrValue, ConstraintOp};

    #[test]
    fn ensure_node_deduplicates_by_name() {
        let mut motif = Motif::new();
        let a1 = motif.ensure_node("A");
        let a2 = motif.ensure_node("A");
        assert_eq!(a1, a2);
        assert_eq!(motif.node_count(), 1);
    }

    #[test]
    fn duplicate_edge_rules_merge_constraints() {
        let mut motif = Motif::new();
        let c = |attr: &str| Constraint {
            attr: attr.into(),
            op: ConstraintOp::Gt,
            value: AttrValue::Number(1.0),
        };
        motif.add_edge_rule("A", "B", true, vec![c("weight")]).unwrap();
        motif.add_edge_rule("A", "B", true, vec![c("area")]).unwrap();
        assert_eq!(motif.edge_count(), 1);
        let edge = motif.graph().edge_indices().next().unwrap();
        assert_eq!(motif.graph()[edge].constraints.len(), 2);
    }

    #[test]
    fn conflicting_edge_rules_are_rejected() {
        let mut motif = Motif::new();
        motif.add_edge_rule("A", "B", true, vec![]).unwrap();
        let err = motif.add_edge_rule("A", "B", false, vec![]).unwrap_err();
        assert!(matches!(err, MotifError::ConflictingEdge { .. }));
    }

    #[test]
    fn single_line_path_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "X -> Y").unwrap();

        let path = file.path().to_str().unwrap();
        let motif = Motif::from_source(path).unwrap();
        assert_eq!(motif.node_count(), 2);
        assert!(motif.node("X").is_some());
        assert!(motif.node("Y").is_some());
    }

    #[test]
    fn multi_line_source_never_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "X -> Y").unwrap();

        // Same path, but behind a comment line: must be parsed as text,
        // which fails because a bare path is not a motif rule.
        let source = format!("# header\n{}", file.path().display());
        let err = Motif::from_source(&source).unwrap_err();
        assert!(matches!(err, MotifError::Syntax { line: 2, .. }));
    }

    #[test]
    fn from_file_reads_and_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A -> B\nB -> C").unwrap();
        let motif = Motif::from_file(file.path()).unwrap();
        assert_eq!(motif.node_count(), 3);
        assert_eq!(motif.edge_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Motif::from_file(Path::new("/nonexistent/motif.txt")).unwrap_err();
        assert!(matches!(err, MotifError::Io(_)));
    }
}
