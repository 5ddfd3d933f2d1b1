//! Alternative-route generation by iterative edge penalisation.
//!
//! # Algorithm
//!
//! ```text
//! working = clone(weights)
//! repeat until k candidates:
//!   ① path = shortest_path(working)               none → stop
//!   ② path seen before → penalise(path), retry once
//!                        still seen / none → stop
//!   ③ record path; penalise(path)
//! sort candidates by total weight on the original weights (stable)
//! ```
//!
//! Penalising multiplies the working weight of each edge the path used by
//! `penalty_factor`, pushing the next search away from that corridor.  This
//! is a heuristic: it is cheap and bounded (at most `2k` searches) but gives
//! no k-shortest-paths guarantee and may return fewer than `k` routes on
//! sparse networks.
//!
//! Candidates are distinct by node sequence.  Two candidates may share most
//! of their edges; only the exact same sequence counts as a duplicate.

use rustc_hash::FxHashSet;
use tracing::debug;

use gr_core::NodeId;
use gr_spatial::{EdgeWeights, NodePath, RoadNetwork, ShortestPath, SpatialError, SpatialResult};

use crate::resolver::path_edges;

/// One route found by the search.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Node sequence, origin first.  Also the candidate's identity.
    pub nodes: Vec<NodeId>,
    /// Total green weight on the unpenalised weights.
    pub weight: f64,
}

/// Multiply the weight of every edge `nodes` traverses by `factor`.
///
/// Hops resolve against `working` itself, i.e. to the parallel instance the
/// search just chose.
pub fn penalize(network: &RoadNetwork, working: &mut EdgeWeights, nodes: &[NodeId], factor: f64) {
    let used: Vec<_> = path_edges(network, working, nodes).flatten().collect();
    for e in used {
        working.scale(e, factor);
    }
}

/// Sum of `weights` along `nodes`, skipping unconnected hops.
pub fn path_weight(network: &RoadNetwork, weights: &EdgeWeights, nodes: &[NodeId]) -> f64 {
    path_edges(network, weights, nodes)
        .flatten()
        .map(|e| weights.get(e))
        .sum()
}

/// Generates up to `k` distinct candidates between two nodes.
pub struct AlternativeSearch<'a, R: ShortestPath + ?Sized> {
    pub network:        &'a RoadNetwork,
    /// Original green weights.  Never modified.
    pub weights:        &'a EdgeWeights,
    pub router:         &'a R,
    pub penalty_factor: f64,
}

impl<R: ShortestPath + ?Sized> AlternativeSearch<'_, R> {
    /// Run the search.  Returns at most `k` candidates, best first; an empty
    /// vector means no path exists.
    ///
    /// # Errors
    ///
    /// Propagates any router error other than [`SpatialError::NoRoute`]
    /// (unknown node, mismatched weight table).
    pub fn run(&self, from: NodeId, to: NodeId, k: usize) -> SpatialResult<Vec<Candidate>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        if from == to {
            return Ok(vec![Candidate { nodes: vec![from], weight: 0.0 }]);
        }

        let mut working = self.weights.clone();
        let mut seen: FxHashSet<Vec<NodeId>> = FxHashSet::default();
        // `k` comes off the wire; only what the search finds is allocated.
        let mut found: Vec<Candidate> = Vec::new();

        while found.len() < k {
            let Some(mut path) = self.search(&working, from, to)? else {
                debug!(found = found.len(), "no further path");
                break;
            };

            if seen.contains(&path.nodes) {
                penalize(self.network, &mut working, &path.nodes, self.penalty_factor);
                match self.search(&working, from, to)? {
                    Some(retry) if !seen.contains(&retry.nodes) => path = retry,
                    _ => {
                        debug!(found = found.len(), "no further distinct path");
                        break;
                    }
                }
            }

            penalize(self.network, &mut working, &path.nodes, self.penalty_factor);
            let weight = path_weight(self.network, self.weights, &path.nodes);
            debug!(rank = found.len() + 1, hops = path.hop_count(), weight, "candidate route");
            seen.insert(path.nodes.clone());
            found.push(Candidate { nodes: path.nodes, weight });
        }

        found.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        Ok(found)
    }

    /// One shortest-path query; `NoRoute` becomes `None`.
    fn search(&self, working: &EdgeWeights, from: NodeId, to: NodeId) -> SpatialResult<Option<NodePath>> {
        match self.router.shortest_path(self.network, working, from, to) {
            Ok(path) => Ok(Some(path)),
            Err(SpatialError::NoRoute { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
