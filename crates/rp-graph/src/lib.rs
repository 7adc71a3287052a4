//! rp-graph: in-memory directed graph with single-pair shortest paths.
//!
//! Provides:
//! - Graph store (nodes keyed by identifier, ordered weighted edges)
//! - Dense edge-order indexing for solver integration
//! - Shortest-path solver (edge relaxation to a fixed point)
//!
//! # Example
//!
//! ```
//! use rp_graph::Graph;
//!
//! let mut graph = Graph::new();
//! for id in ["A", "B", "C", "D", "E"] {
//!     graph.add_node(id);
//! }
//! graph.add_edge("A", "B", 1);
//! graph.add_edge("B", "C", 2);
//! graph.add_edge("A", "D", 4);
//! graph.add_edge("D", "E", 5);
//! graph.add_edge("B", "E", 6);
//!
//! let sp = graph.find_shortest_path("A", "E").unwrap();
//! assert_eq!(sp.path, vec!["A", "B", "E"]);
//! assert_eq!(sp.distance, 7);
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub mod solver;

// Re-exports for ergonomics
pub use error::{Endpoint, GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use indexing::IndexMap;
pub use solver::{PassLimit, RelaxConfig, ShortestPath};
