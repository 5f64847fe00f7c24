//! Node-link JSON serialization.
//!
//! Converts a [`Motif`] into the portable node-link convention used by graph
//! front-ends: separate `nodes` and `links` sequences instead of nested
//! adjacency. The conversion is total (never fails) and deterministic --
//! nodes appear in source order, links in edge-rule order -- so serializing
//! the same motif twice yields byte-identical JSON.

use indexmap::IndexMap;
use serde::Serialize;

use crate::constraint::{AttrValue, Constraint, ConstraintOp};
use crate::motif::Motif;

/// A node-link document: `{directed, multigraph, graph, nodes, links}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeLinkData {
    pub directed: bool,
    pub multigraph: bool,
    /// Top-level graph attributes. Motifs carry none; always `{}`.
    pub graph: IndexMap<String, AttrValue>,
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

/// One node object: its identifier plus attribute constraints.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeEntry {
    pub id: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub constraints: ConstraintMap,
}

/// One link object: endpoint identifiers plus edge attributes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub constraints: ConstraintMap,
}

/// Constraints grouped by attribute name, in first-mention order.
pub type ConstraintMap = IndexMap<String, Vec<ConstraintEntry>>;

/// One predicate on the wire: operator and right-hand value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConstraintEntry {
    pub op: ConstraintOp,
    pub value: AttrValue,
}

/// Converts a motif into its node-link representation.
pub fn node_link_data(motif: &Motif) -> NodeLinkData {
    let nodes = motif
        .nodes()
        .map(|node| NodeEntry {
            id: node.name.clone(),
            constraints: group_constraints(&node.constraints),
        })
        .collect();

    // Edge indices are assigned in insertion order; iterating them keeps
    // link order stable across identical parses.
    let graph = motif.graph();
    let links = graph
        .edge_indices()
        .map(|edge| {
            let (src, dst) = graph
                .edge_endpoints(edge)
                .expect("edge index came from this graph");
            let spec = &graph[edge];
            LinkEntry {
                source: graph[src].name.clone(),
                target: graph[dst].name.clone(),
                exists: spec.exists,
                constraints: group_constraints(&spec.constraints),
            }
        })
        .collect();

    NodeLinkData {
        directed: true,
        multigraph: false,
        graph: IndexMap::new(),
        nodes,
        links,
    }
}

fn group_constraints(constraints: &[Constraint]) -> ConstraintMap {
    let mut map = ConstraintMap::new();
    for c in constraints {
        map.entry(c.attr.clone()).or_default().push(ConstraintEntry {
            op: c.op,
            value: c.value.clone(),
        });
    }
    map
}
