//! Route statistics.

use serde::Serialize;

use gr_core::NodeId;
use gr_spatial::{EdgeWeights, RoadNetwork};

use crate::cost::GreenCostModel;
use crate::resolver::path_edges;
use crate::sampling::EdgeExposure;

/// Aggregated figures for one route.  Created once, never modified.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RouteSummary {
    distance_km:  f64,
    duration_min: f64,
    avg_exposure: f64,
}

impl RouteSummary {
    /// Total length, km, rounded to 2 decimals.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total travel time, minutes, rounded to 1 decimal.
    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Mean exposure over edges that had a real estimate; 0 if none did.
    pub fn avg_exposure(&self) -> f64 {
        self.avg_exposure
    }
}

/// Computes [`RouteSummary`]s against one request's unpenalised state.
pub struct RouteStats<'a> {
    pub network:   &'a RoadNetwork,
    /// Original green weights, used only to resolve parallel edges.
    pub weights:   &'a EdgeWeights,
    pub exposures: &'a EdgeExposure,
    pub cost:      &'a GreenCostModel,
}

impl RouteStats<'_> {
    /// Walk `nodes` and sum length, time, and exposure.  Hops with no
    /// connecting edge contribute nothing.
    pub fn summarize(&self, nodes: &[NodeId]) -> RouteSummary {
        let mut length_m = 0.0;
        let mut time_s = 0.0;
        let mut exposure_sum = 0.0;
        let mut exposure_n = 0usize;

        for e in path_edges(self.network, self.weights, nodes).flatten() {
            length_m += self.network.edge_length_m[e.index()];
            time_s += self.cost.edge_base_time_s(self.network, e);
            let exposure = self.exposures.get(e);
            if exposure.is_estimate() {
                exposure_sum += self.cost.effective_exposure(exposure);
                exposure_n += 1;
            }
        }

        RouteSummary {
            distance_km:  round_to(length_m / 1_000.0, 2),
            duration_min: round_to(time_s / 60.0, 1),
            avg_exposure: if exposure_n == 0 { 0.0 } else { exposure_sum / exposure_n as f64 },
        }
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}
