//! Shortest-path solver: edge relaxation to a fixed point.
//!
//! Every query rebuilds the dense [`IndexMap`] and a fresh relaxation table,
//! repeats full passes over the edge list until a pass improves nothing,
//! then walks predecessor edges backward from the end node.

use rp_core::{Distance, Idx, Weight, improves, relax_candidate};
use tracing::{debug, trace, warn};

use crate::error::{Endpoint, GraphError, GraphResult};
use crate::graph::{Edge, Graph};
use crate::indexing::IndexMap;

/// How many full relaxation passes a solve may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassLimit {
    /// One pass per indexed node. Enough for any graph without a
    /// negative cycle reachable from the start.
    #[default]
    NodeCount,
    /// Explicit cap (at least one pass always runs).
    Fixed(usize),
    /// Relax until a pass improves nothing. On a reachable negative cycle
    /// this only stops once distances overflow.
    Unbounded,
}

/// Solver configuration.
#[derive(Debug, Clone, Default)]
pub struct RelaxConfig {
    pub pass_limit: PassLimit,
}

impl RelaxConfig {
    fn resolve_limit(&self, node_count: usize) -> Option<usize> {
        match self.pass_limit {
            PassLimit::NodeCount => Some(node_count.max(1)),
            PassLimit::Fixed(n) => Some(n.max(1)),
            PassLimit::Unbounded => None,
        }
    }
}

/// A found path with its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Node identifiers from start to end, inclusive.
    pub path: Vec<String>,
    pub distance: Distance,
}

impl ShortestPath {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn into_parts(self) -> (Vec<String>, Distance) {
        (self.path, self.distance)
    }
}

/// Work counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SolveStats {
    /// Full passes over the edge list, including the final quiet pass.
    pub passes: usize,
    /// Improving relaxation steps.
    pub relaxations: usize,
}

#[derive(Debug, Clone, Copy)]
struct EdgeRecord {
    src: Idx,
    dst: Idx,
    weight: Weight,
}

/// Per-query relaxation bookkeeping.
#[derive(Debug)]
pub(crate) struct RelaxTable {
    records: Vec<EdgeRecord>,
    /// Best known distance per node index; `None` is unreached.
    dist: Vec<Option<Distance>>,
    /// Position of the edge that last improved each node.
    pred: Vec<Option<usize>>,
}

impl RelaxTable {
    pub(crate) fn new(index: &IndexMap, edges: &[Edge], start: Idx) -> GraphResult<Self> {
        let records = edges
            .iter()
            .map(|e| -> GraphResult<EdgeRecord> {
                Ok(EdgeRecord {
                    src: index.try_idx(&e.from)?,
                    dst: index.try_idx(&e.to)?,
                    weight: e.weight,
                })
            })
            .collect::<GraphResult<Vec<_>>>()?;

        let mut dist = vec![None; index.len()];
        dist[start.index()] = Some(0);

        Ok(Self {
            records,
            dist,
            pred: vec![None; index.len()],
        })
    }

    /// One full pass in edge order. Returns the number of improvements.
    fn relax_pass(&mut self) -> GraphResult<usize> {
        let mut improved = 0;
        for (i, rec) in self.records.iter().enumerate() {
            let candidate = relax_candidate(self.dist[rec.src.index()], rec.weight)
                .map_err(|source| GraphError::Overflow { edge: i, source })?;
            let Some(candidate) = candidate else {
                continue;
            };
            if improves(candidate, self.dist[rec.dst.index()]) {
                trace!(edge = i, src = %rec.src, dst = %rec.dst, candidate, "relaxed");
                self.dist[rec.dst.index()] = Some(candidate);
                self.pred[rec.dst.index()] = Some(i);
                improved += 1;
            }
        }
        Ok(improved)
    }

    /// Repeat passes until one improves nothing, or the limit runs out.
    ///
    /// Running out at or beyond one pass per indexed node proves a
    /// reachable negative cycle; a smaller cap only means it was too small.
    pub(crate) fn relax_to_fixed_point(
        &mut self,
        limit: Option<usize>,
    ) -> GraphResult<SolveStats> {
        let cycle_bound = self.dist.len().max(1);
        let mut stats = SolveStats::default();
        loop {
            if let Some(limit) = limit {
                if stats.passes >= limit {
                    let passes = stats.passes;
                    if passes >= cycle_bound {
                        warn!(passes, "still relaxing after one pass per node");
                        return Err(GraphError::NegativeCycle { passes });
                    }
                    warn!(passes, cycle_bound, "pass limit reached while still relaxing");
                    return Err(GraphError::PassLimitExceeded { passes });
                }
            }
            let improved = self.relax_pass()?;
            stats.passes += 1;
            stats.relaxations += improved;
            if improved == 0 {
                return Ok(stats);
            }
        }
    }

    pub(crate) fn distance(&self, idx: Idx) -> Option<Distance> {
        self.dist[idx.index()]
    }

    /// Edge landing on `end` with the smallest accumulated distance.
    ///
    /// Ties go to the recorded predecessor of `end`, then to the first
    /// edge in edge order.
    fn best_edge_into(&self, end: Idx) -> GraphResult<Option<(usize, Distance)>> {
        let settled = self.pred[end.index()];
        let mut best: Option<(usize, Distance)> = None;
        for (i, rec) in self.records.iter().enumerate() {
            if rec.dst != end {
                continue;
            }
            let candidate = relax_candidate(self.dist[rec.src.index()], rec.weight)
                .map_err(|source| GraphError::Overflow { edge: i, source })?;
            let Some(candidate) = candidate else {
                continue;
            };
            best = match best {
                None => Some((i, candidate)),
                Some((_, d)) if candidate < d => Some((i, candidate)),
                Some((_, d)) if candidate == d && Some(i) == settled => Some((i, candidate)),
                keep => keep,
            };
        }
        Ok(best)
    }

    /// Walk predecessor edges from the chosen edge's source back to `start`.
    fn reconstruct(
        &self,
        index: &IndexMap,
        start: Idx,
        end: Idx,
        chosen: usize,
    ) -> GraphResult<Vec<String>> {
        let mut current = self.records[chosen].src;
        let mut reversed = vec![index.id(end).to_owned(), index.id(current).to_owned()];

        let mut steps = 0;
        while current != start {
            steps += 1;
            if steps > index.len() {
                return Err(GraphError::Invariant {
                    what: "predecessor chain does not reach start",
                });
            }
            let edge = self.pred[current.index()].ok_or(GraphError::Invariant {
                what: "reached node has no predecessor edge",
            })?;
            current = self.records[edge].src;
            reversed.push(index.id(current).to_owned());
        }

        reversed.reverse();
        Ok(reversed)
    }
}

impl Graph {
    /// Find the shortest path from `start` to `end` with the default
    /// [`RelaxConfig`].
    pub fn find_shortest_path(&self, start: &str, end: &str) -> GraphResult<ShortestPath> {
        self.find_shortest_path_with(start, end, &RelaxConfig::default())
    }

    /// Find the shortest path from `start` to `end`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either identifier was
    /// never added, [`GraphError::NoPathFound`] if `end` is unreachable,
    /// and [`GraphError::NegativeCycle`] if the pass limit runs out.
    pub fn find_shortest_path_with(
        &self,
        start: &str,
        end: &str,
        config: &RelaxConfig,
    ) -> GraphResult<ShortestPath> {
        if !self.contains_node(start) {
            return Err(GraphError::NodeNotFound {
                role: Endpoint::Start,
                id: start.to_owned(),
            });
        }
        if !self.contains_node(end) {
            return Err(GraphError::NodeNotFound {
                role: Endpoint::End,
                id: end.to_owned(),
            });
        }

        if start == end {
            return Ok(ShortestPath {
                path: vec![start.to_owned()],
                distance: 0,
            });
        }

        let no_path = || GraphError::NoPathFound {
            start: start.to_owned(),
            end: end.to_owned(),
        };

        let index = IndexMap::from_graph(self)?;
        let (Some(start_idx), Some(end_idx)) = (index.idx(start), index.idx(end)) else {
            debug!(start, end, "endpoint appears in no edge");
            return Err(no_path());
        };

        debug!(
            start,
            end,
            nodes = index.len(),
            edges = self.edge_count(),
            "solving shortest path"
        );

        let mut table = RelaxTable::new(&index, self.edges(), start_idx)?;
        let stats = table.relax_to_fixed_point(config.resolve_limit(index.len()))?;
        debug!(
            passes = stats.passes,
            relaxations = stats.relaxations,
            "relaxation converged"
        );

        if table.distance(end_idx).is_none() {
            return Err(no_path());
        }
        let (chosen, distance) = table.best_edge_into(end_idx)?.ok_or_else(no_path)?;
        let path = table.reconstruct(&index, start_idx, end_idx, chosen)?;

        Ok(ShortestPath { path, distance })
    }
}
