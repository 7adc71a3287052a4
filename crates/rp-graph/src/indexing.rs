//! Dense indexing for solver integration.
//!
//! Provides a bidirectional mapping between node identifiers that appear
//! in the edge list and contiguous solver indices (0..k).

use std::collections::HashMap;

use rp_core::Idx;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph};

/// Index map assigning dense indices in first-seen edge order.
///
/// Built by one forward scan of the edges, visiting the `from` endpoint
/// before the `to` endpoint. Node insertion order plays no part, and a
/// node with no incident edge never receives an index.
#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    /// Contiguous list of identifiers (index -> id).
    ids: Vec<String>,

    /// Reverse lookup: id -> index.
    id_to_idx: HashMap<String, Idx>,
}

impl IndexMap {
    /// Build an index map from an edge sequence.
    ///
    /// Fails with [`GraphError::IndexOob`] once more distinct endpoints
    /// appear than [`Idx`] can address.
    pub fn from_edges(edges: &[Edge]) -> GraphResult<Self> {
        let mut map = Self::default();
        for edge in edges {
            map.intern(&edge.from)?;
            map.intern(&edge.to)?;
        }
        Ok(map)
    }

    /// Build an index map from a graph's current edges.
    pub fn from_graph(graph: &Graph) -> GraphResult<Self> {
        Self::from_edges(graph.edges())
    }

    fn intern(&mut self, id: &str) -> GraphResult<Idx> {
        if let Some(&idx) = self.id_to_idx.get(id) {
            return Ok(idx);
        }
        let next = self.ids.len();
        let idx = Idx::from_index(next).ok_or(GraphError::IndexOob { index: next })?;
        self.ids.push(id.to_owned());
        self.id_to_idx.insert(id.to_owned(), idx);
        Ok(idx)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Dense index for an identifier, if it appears in any edge.
    pub fn idx(&self, id: &str) -> Option<Idx> {
        self.id_to_idx.get(id).copied()
    }

    /// Dense index for an identifier, as an error when unindexed.
    pub fn try_idx(&self, id: &str) -> GraphResult<Idx> {
        self.idx(id).ok_or_else(|| GraphError::IdNotFound { id: id.to_owned() })
    }

    /// Identifier for a dense index (panics if out of bounds).
    pub fn id(&self, idx: Idx) -> &str {
        &self.ids[idx.index()]
    }

    /// All identifiers in index order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
        let mut graph = Graph::new();
        for n in nodes {
            graph.add_node(*n);
        }
        for (from, to, w) in edges {
            graph.add_edge(from, to, *w);
        }
        graph
    }

    #[test]
    fn index_follows_edge_order_not_node_order() {
        let graph = graph_with(&["A", "B", "C"], &[("C", "B", 1), ("B", "A", 1)]);
        let idx_map = IndexMap::from_graph(&graph).unwrap();

        assert_eq!(idx_map.len(), 3);
        assert_eq!(idx_map.idx("C").unwrap().index(), 0);
        assert_eq!(idx_map.idx("B").unwrap().index(), 1);
        assert_eq!(idx_map.idx("A").unwrap().index(), 2);
        assert_eq!(idx_map.ids(), &["C", "B", "A"]);
    }

    #[test]
    fn isolated_node_has_no_index() {
        let graph = graph_with(&["A", "B", "Lonely"], &[("A", "B", 1)]);
        let idx_map = IndexMap::from_graph(&graph).unwrap();

        assert_eq!(idx_map.idx("Lonely"), None);
        assert_eq!(
            idx_map.try_idx("Lonely"),
            Err(GraphError::IdNotFound {
                id: "Lonely".into()
            })
        );
    }

    #[test]
    fn round_trip_and_bound() {
        let graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 1), ("A", "B", 3), ("B", "C", 1), ("C", "A", 1)],
        );
        let idx_map = IndexMap::from_graph(&graph).unwrap();

        assert!(idx_map.len() <= 2 * graph.edge_count());
        for id in ["A", "B", "C"] {
            let idx = idx_map.try_idx(id).unwrap();
            assert_eq!(idx_map.id(idx), id);
        }
    }

    #[test]
    fn empty_edges_empty_map() {
        let idx_map = IndexMap::from_edges(&[]).unwrap();
        assert!(idx_map.is_empty());
        assert_eq!(idx_map.len(), 0);
    }
}
