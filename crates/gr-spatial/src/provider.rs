//! Road network providers.
//!
//! A provider hands each request a fresh [`RoadNetwork`] covering a circle
//! around a point.  The request owns that network outright, so concurrent
//! requests never share graph state.

use tracing::debug;

use gr_core::GeoPoint;

use crate::{RoadNetwork, SpatialResult};

/// Source of per-request road networks.
pub trait NetworkProvider: Send + Sync {
    /// Return the network of nodes within `radius_m` metres of `center` and
    /// the edges joining them.
    fn fetch_network(&self, center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork>;
}

/// Serves crops of a network held in memory.
///
/// Useful when the whole study area fits in memory (tests, demos, a city
/// extract loaded at start-up).
pub struct StaticNetworkProvider {
    network: RoadNetwork,
}

impl StaticNetworkProvider {
    pub fn new(network: RoadNetwork) -> Self {
        Self { network }
    }

    /// The full network crops are taken from.
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }
}

impl NetworkProvider for StaticNetworkProvider {
    fn fetch_network(&self, center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork> {
        let cropped = self.network.crop(center, radius_m);
        debug!(
            %center,
            radius_m,
            nodes = cropped.node_count(),
            edges = cropped.edge_count(),
            "cropped static network"
        );
        Ok(cropped)
    }
}
