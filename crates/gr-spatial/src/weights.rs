//! Per-edge routing cost table.
//!
//! Kept apart from [`RoadNetwork`] so the topology stays immutable while a
//! search penalises its own copy of the costs.  Cloning is one `Vec<f64>`
//! copy.

use gr_core::EdgeId;

use crate::{RoadNetwork, SpatialError, SpatialResult};

/// Non-negative cost of every edge in one network, indexed by `EdgeId`.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeWeights {
    values: Vec<f64>,
}

impl EdgeWeights {
    /// Wrap a table for `network`.  Fails if the lengths disagree; negative
    /// entries are clamped to 0.
    pub fn new(network: &RoadNetwork, values: Vec<f64>) -> SpatialResult<Self> {
        if values.len() != network.edge_count() {
            return Err(SpatialError::WeightMismatch {
                weights: values.len(),
                edges:   network.edge_count(),
            });
        }
        Ok(Self { values: values.into_iter().map(sanitize).collect() })
    }

    /// Build a table by evaluating `f` on every edge of `network`.
    pub fn from_fn(network: &RoadNetwork, mut f: impl FnMut(EdgeId) -> f64) -> Self {
        let values = (0..network.edge_count())
            .map(|i| sanitize(f(EdgeId(i as u32))))
            .collect();
        Self { values }
    }

    /// `true` if this table can index every edge of `network`.
    #[inline]
    pub fn matches(&self, network: &RoadNetwork) -> bool {
        self.values.len() == network.edge_count()
    }

    #[inline]
    pub fn get(&self, edge: EdgeId) -> f64 {
        self.values[edge.index()]
    }

    /// Multiply one edge's weight by `factor` (>= 1 keeps the weight
    /// non-decreasing).
    #[inline]
    pub fn scale(&mut self, edge: EdgeId, factor: f64) {
        let w = &mut self.values[edge.index()];
        *w = sanitize(*w * factor);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Clamp to a finite non-negative cost.  An overflowing weight saturates to
/// `f64::MAX` instead of turning into infinity.
#[inline]
fn sanitize(w: f64) -> f64 {
    if w.is_nan() {
        0.0
    } else {
        w.clamp(0.0, f64::MAX)
    }
}
