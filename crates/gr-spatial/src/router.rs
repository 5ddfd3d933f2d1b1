//! Shortest-path trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The routing crate calls the search through the [`ShortestPath`] trait, so
//! applications can swap in A* or a contraction hierarchy without touching
//! the alternative-route logic.  The default [`DijkstraRouter`] is enough for
//! the city-scale networks fetched per request.
//!
//! # Output
//!
//! A search returns the node sequence only.  Which of several parallel edges
//! a hop used is decided later by the caller against its own weight table,
//! so the search and the statistics can never disagree about it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gr_core::{EdgeId, NodeId};

use crate::{EdgeWeights, RoadNetwork, SpatialError, SpatialResult};

// ── NodePath ──────────────────────────────────────────────────────────────────

/// The result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePath {
    /// Nodes to visit in order, origin first, destination last.
    pub nodes: Vec<NodeId>,
    /// Sum of the weights the search minimised.
    pub total_weight: f64,
}

impl NodePath {
    /// `true` if origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Number of hops (edges) on the path.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

// ── ShortestPath trait ────────────────────────────────────────────────────────

/// Pluggable single-source shortest-path primitive.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// request-handling threads.
pub trait ShortestPath: Send + Sync {
    /// Compute a minimum-weight path from `from` to `to`.
    ///
    /// `from == to` yields a single-node path rather than an error.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NodeNotFound`] if either node is outside `network`,
    /// [`SpatialError::WeightMismatch`] if `weights` belongs to another
    /// network, [`SpatialError::NoRoute`] if `to` is unreachable.
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        weights: &EdgeWeights,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<NodePath>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph.
///
/// When parallel edges tie, the first in `edge_key` order wins (relaxation
/// only accepts strict improvements and scans a node's edges in CSR order).
pub struct DijkstraRouter;

impl ShortestPath for DijkstraRouter {
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        weights: &EdgeWeights,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<NodePath> {
        dijkstra(network, weights, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so `BinaryHeap` (a max-heap) pops the cheapest node
/// first.  The node id is a secondary key for deterministic tie-breaking.
#[derive(Copy, Clone, PartialEq)]
struct Frontier {
    cost: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(
    network: &RoadNetwork,
    weights: &EdgeWeights,
    from: NodeId,
    to: NodeId,
) -> SpatialResult<NodePath> {
    for node in [from, to] {
        if !network.contains_node(node) {
            return Err(SpatialError::NodeNotFound(node));
        }
    }
    if !weights.matches(network) {
        return Err(SpatialError::WeightMismatch {
            weights: weights.len(),
            edges:   network.edge_count(),
        });
    }
    if from == to {
        return Ok(NodePath { nodes: vec![from], total_weight: 0.0 });
    }

    let n = network.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(Frontier { cost: 0.0, node: from });

    while let Some(Frontier { cost, node }) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + weights.get(edge);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Frontier { cost: new_cost, node: neighbor });
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(
    network: &RoadNetwork,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
    total_weight: f64,
) -> NodePath {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    NodePath { nodes, total_weight }
}
