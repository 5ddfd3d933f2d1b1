//! Multi-edge resolution.
//!
//! Every place that turns a `(u, v)` hop into one concrete edge goes through
//! [`best_edge`]: penalisation, total-weight scoring, and statistics.

use gr_core::{EdgeId, NodeId};
use gr_spatial::{EdgeWeights, RoadNetwork};

/// The `from → to` instance with the lowest weight in `weights`.
///
/// Ties go to the lowest `edge_key` (first in CSR order).  `None` if the pair
/// is not connected.
pub fn best_edge(
    network: &RoadNetwork,
    weights: &EdgeWeights,
    from:    NodeId,
    to:      NodeId,
) -> Option<EdgeId> {
    network.edges_between(from, to).fold(None, |best, e| match best {
        Some(b) if weights.get(b) <= weights.get(e) => Some(b),
        _ => Some(e),
    })
}

/// Resolve every hop of a node path.  Unconnected hops yield `None`.
pub fn path_edges<'a>(
    network: &'a RoadNetwork,
    weights: &'a EdgeWeights,
    nodes:   &'a [NodeId],
) -> impl Iterator<Item = Option<EdgeId>> + 'a {
    nodes
        .windows(2)
        .map(move |w| best_edge(network, weights, w[0], w[1]))
}
