use std::fmt;
use std::time::Instant;

use crate::error::{GraphError, GraphResult};
use crate::frontier::Frontier;
use crate::graph::{Graph, NodeId, Weight};

/// Tentative or final distance from the query source.
///
/// Every finite distance orders below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    /// Extend by one edge. `Infinite` stays `Infinite`.
    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(weight))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => f.write_str("INFINITY"),
        }
    }
}

/// Result of one single-source query: a distance and a predecessor per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: NodeId,
    distance: Vec<Distance>,
    predecessor: Vec<Option<NodeId>>,
    settled: usize,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`; `Infinite` for unreachable or out-of-range nodes.
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distance.get(node).copied().unwrap_or(Distance::Infinite)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessor.get(node).copied().flatten()
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distance
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessor
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Number of nodes finalized by the query (reachable nodes, source included).
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Path `source -> ... -> target`, or empty if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        reconstruct_path(&self.predecessor, self.source, target)
    }
}

/// Single-source shortest paths over positive edge weights (Dijkstra).
///
/// Fails with `InvalidNode` when `source` is not a node of `graph`; no
/// distances are computed in that case.
///
/// Relaxed nodes are re-pushed onto the frontier rather than decreased in
/// place. Entries for nodes that were already settled are skipped when
/// popped, which leaves the output unchanged.
pub fn run_shortest_path(graph: &Graph, source: NodeId) -> GraphResult<ShortestPaths> {
    let n = graph.node_count();
    if source >= n {
        return Err(GraphError::InvalidNode {
            node: source,
            node_count: n,
        });
    }

    let started = Instant::now();
    let mut distance = vec![Distance::Infinite; n];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut settled_count = 0usize;
    let mut peak_frontier = 0usize;

    let mut frontier = Frontier::with_capacity(n);
    distance[source] = Distance::Finite(0);
    frontier.push(source, 0);

    while let Some((u, cost)) = frontier.pop() {
        if settled[u] || Distance::Finite(cost) > distance[u] {
            continue;
        }
        settled[u] = true;
        settled_count += 1;

        for edge in graph.neighbors_out(u) {
            let v = edge.target;
            let candidate = distance[u].add(edge.weight);
            if candidate < distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
                if let Distance::Finite(d) = candidate {
                    frontier.push(v, d);
                }
            }
        }
        peak_frontier = peak_frontier.max(frontier.len());
    }

    tracing::debug!(
        source,
        nodes = n,
        settled = settled_count,
        peak_frontier,
        elapsed_us = started.elapsed().as_micros() as u64,
        "shortest path query complete"
    );

    Ok(ShortestPaths {
        source,
        distance,
        predecessor,
        settled: settled_count,
    })
}

/// Walk predecessor links from `target` back to `source`.
///
/// Returns the nodes in `source -> target` order: `[source]` when the two
/// are equal, empty when `target` is unreachable or out of range. The walk
/// is bounded by the table size, so a malformed table cannot loop forever.
pub fn reconstruct_path(
    predecessor: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    if target >= predecessor.len() {
        return Vec::new();
    }
    if target == source {
        return vec![source];
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = predecessor.get(current).copied().flatten() {
        path.push(prev);
        if prev == source {
            path.reverse();
            return path;
        }
        if path.len() > predecessor.len() {
            break;
        }
        current = prev;
    }

    Vec::new()
}
