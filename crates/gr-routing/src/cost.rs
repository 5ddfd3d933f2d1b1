//! Green-weight edge cost model.
//!
//! ```text
//! base_time    = free_flow_travel_s            (or length_m / assumed_speed)
//! green_weight = base_time * (1 + exposure / K)
//! ```
//!
//! Exposure is clamped to >= 0, so `green_weight >= base_time` for every
//! edge.  A route 10 % slower that halves exposure wins whenever the product
//! favours it.

use gr_core::{EdgeId, RoutingConfig};
use gr_exposure::Exposure;
use gr_spatial::{EdgeWeights, RoadNetwork};

use crate::sampling::EdgeExposure;
use crate::{RoutingError, RoutingResult};

/// Converts raw edge attributes plus an exposure sample into a green weight.
#[derive(Clone, Debug, PartialEq)]
pub struct GreenCostModel {
    /// Normalisation constant `K`.
    pub exposure_norm:     f64,
    /// Used for missing or non-finite exposure values.
    pub fallback_exposure: f64,
    /// Speed for edges without a free-flow travel time, m/s.
    pub assumed_speed_mps: f64,
}

impl GreenCostModel {
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self {
            exposure_norm:     config.exposure_norm,
            fallback_exposure: config.fallback_exposure,
            assumed_speed_mps: config.assumed_speed_mps,
        }
    }

    /// Travel time in seconds: the free-flow time when known, otherwise
    /// `length_m / assumed_speed_mps`.
    #[inline]
    pub fn base_time_s(&self, length_m: f64, travel_s: Option<f64>) -> f64 {
        travel_s.unwrap_or(length_m / self.assumed_speed_mps)
    }

    /// [`base_time_s`](Self::base_time_s) for one edge of `network`.
    #[inline]
    pub fn edge_base_time_s(&self, network: &RoadNetwork, edge: EdgeId) -> f64 {
        self.base_time_s(network.edge_length_m[edge.index()], network.edge_travel_s[edge.index()])
    }

    /// Exposure value fed into the weight: non-negative, never NaN.
    #[inline]
    pub fn effective_exposure(&self, exposure: Exposure) -> f64 {
        let v = exposure.value();
        if v.is_finite() { v.max(0.0) } else { self.fallback_exposure }
    }

    #[inline]
    pub fn green_weight(&self, base_time_s: f64, exposure: Exposure) -> f64 {
        base_time_s * (1.0 + self.effective_exposure(exposure) / self.exposure_norm)
    }

    /// Green weights for every edge of `network`.
    ///
    /// # Errors
    ///
    /// [`RoutingError::Spatial`] if `exposures` was sampled from another
    /// network.
    pub fn weigh(&self, network: &RoadNetwork, exposures: &EdgeExposure) -> RoutingResult<EdgeWeights> {
        if exposures.len() != network.edge_count() {
            return Err(RoutingError::Spatial(gr_spatial::SpatialError::WeightMismatch {
                weights: exposures.len(),
                edges:   network.edge_count(),
            }));
        }
        Ok(EdgeWeights::from_fn(network, |e| {
            self.green_weight(self.edge_base_time_s(network, e), exposures.get(e))
        }))
    }
}
