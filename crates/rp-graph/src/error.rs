//! Graph-specific error types.

use core::fmt;

use rp_core::{DistanceOverflow, Idx, RpError};
use thiserror::Error;

/// Which end of a query an identifier was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Shortest-path query and indexing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The start or end identifier was never added as a node.
    #[error("{role} node not found: {id}")]
    NodeNotFound { role: Endpoint, id: String },

    /// No finite-distance edge reaches the end node.
    #[error("No path found from {start} to {end}")]
    NoPathFound { start: String, end: String },

    /// Distances were still improving after one pass per indexed node.
    #[error("Negative-weight cycle reachable from start (still relaxing after {passes} passes)")]
    NegativeCycle { passes: usize },

    /// A caller-supplied pass cap below the node count ran out before
    /// the distances settled. Says nothing about cycles.
    #[error("Pass limit of {passes} reached before distances settled")]
    PassLimitExceeded { passes: usize },

    /// Relaxing an edge left the representable distance range.
    #[error("Distance overflow relaxing edge {edge}: {source}")]
    Overflow {
        edge: usize,
        #[source]
        source: DistanceOverflow,
    },

    /// More distinct endpoints than a dense index can address.
    #[error("Dense index out of range: {index} (max {max})", max = Idx::MAX_INDEX)]
    IndexOob { index: usize },

    /// Identifier has no dense index (it appears in no edge).
    #[error("{id} not found in index map")]
    IdNotFound { id: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for RpError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::Invariant { what } => RpError::Invariant { what },
            other => RpError::Query {
                what: other.to_string(),
            },
        }
    }
}
