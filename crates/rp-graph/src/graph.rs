//! Core graph data structures.

use std::collections::HashMap;

use rp_core::Weight;

/// A node in the graph.
///
/// Nodes are minimal: an identifier, unique within the owning graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: String,
}

/// A directed, weighted edge between two node identifiers.
///
/// Several edges may share the same `(from, to)` pair; each one is a
/// separate relaxation candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// The graph: a node map plus an ordered edge sequence.
///
/// Edge order is significant. It drives dense index assignment and the
/// order in which candidates are relaxed, which decides ties.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: HashMap<String, Node>,
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. An existing node with the same identifier is replaced.
    pub fn add_node(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.nodes.insert(id.clone(), Node { id });
    }

    /// Append a directed edge `from -> to`.
    ///
    /// If either endpoint is not a known node the edge is dropped without
    /// error. Returns whether the edge was stored.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> bool {
        let (Some(from), Some(to)) = (self.nodes.get(from), self.nodes.get(to)) else {
            tracing::trace!(from, to, "edge dropped: unknown endpoint");
            return false;
        };
        let edge = Edge {
            from: from.id.clone(),
            to: to.id.clone(),
            weight,
        };
        self.edges.push(edge);
        true
    }

    /// Get a node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all nodes (unordered).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph holds no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
