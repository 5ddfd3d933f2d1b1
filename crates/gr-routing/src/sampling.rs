//! Pollution sampling adapter.
//!
//! Collects the midpoint of every edge, queries the estimator once for the
//! whole batch, and stores one [`Exposure`] per edge.  Estimator calls are
//! therefore O(1) per request regardless of network size.

use tracing::{debug, warn};

use gr_core::{EdgeId, GeoPoint, RoutingConfig};
use gr_exposure::{Exposure, ExposureError, SensorSet, SpatialEstimator};
use gr_spatial::RoadNetwork;

/// How the exposures of a request were obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SamplingMode {
    /// The estimator produced the batch (individual points may still be
    /// fallbacks).
    Estimated,
    /// No surface was available; every edge holds the fallback value.
    Fallback,
}

/// One exposure value per edge of a network, indexed by `EdgeId`.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeExposure {
    values: Vec<Exposure>,
    mode:   SamplingMode,
}

impl EdgeExposure {
    /// Every edge of `network` gets `Exposure::Fallback(fallback)`.
    pub fn uniform(network: &RoadNetwork, fallback: f64) -> Self {
        Self {
            values: vec![Exposure::Fallback(fallback); network.edge_count()],
            mode:   SamplingMode::Fallback,
        }
    }

    #[inline]
    pub fn get(&self, edge: EdgeId) -> Exposure {
        self.values[edge.index()]
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Exposure] {
        &self.values
    }

    /// Number of edges carrying a real estimate.
    pub fn estimated_count(&self) -> usize {
        self.values.iter().filter(|e| e.is_estimate()).count()
    }
}

/// Sample exposure at every edge midpoint of `network`.
///
/// Never fails: too few sensors, an estimator error, or a malformed batch
/// all degrade to [`EdgeExposure::uniform`] with a warning.
pub fn sample_edges<E: SpatialEstimator + ?Sized>(
    network:   &RoadNetwork,
    samples:   &SensorSet,
    estimator: &E,
    config:    &RoutingConfig,
) -> EdgeExposure {
    let fallback = config.fallback_exposure;

    if let Err(e) = samples.require(config.min_sensor_samples) {
        warn!(error = %e, fallback, "no pollution surface, using fallback exposure");
        return EdgeExposure::uniform(network, fallback);
    }

    let midpoints: Vec<GeoPoint> = (0..network.edge_count())
        .map(|i| network.edge_midpoint(EdgeId(i as u32)))
        .collect();

    let batch = estimator
        .estimate(samples, &midpoints, fallback)
        .and_then(|values| {
            if values.len() == midpoints.len() {
                Ok(values)
            } else {
                Err(ExposureError::WrongBatchSize { expected: midpoints.len(), got: values.len() })
            }
        });

    match batch {
        Ok(values) => {
            let out = EdgeExposure { values, mode: SamplingMode::Estimated };
            debug!(
                edges = out.len(),
                estimated = out.estimated_count(),
                sensors = samples.len(),
                "sampled edge exposure"
            );
            out
        }
        Err(e) => {
            warn!(error = %e, fallback, "estimator failed, using fallback exposure");
            EdgeExposure::uniform(network, fallback)
        }
    }
}
