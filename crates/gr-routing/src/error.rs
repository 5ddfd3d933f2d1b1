use std::fmt;

use thiserror::Error;

use gr_core::{GeoPoint, GrError, NodeId};
use gr_exposure::ExposureError;
use gr_spatial::SpatialError;

/// Which end of a trip an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Origin      => "origin",
            Endpoint::Destination => "destination",
        })
    }
}

/// Request-level failures.  Per-edge and per-sample problems never appear
/// here; they degrade to fallback values instead.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("{endpoint} {point} could not be matched to a road node")]
    NodeNotFound { endpoint: Endpoint, point: GeoPoint },

    #[error("no route from {from} to {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Config(#[from] GrError),

    #[error("routing failure: {0}")]
    Spatial(#[from] SpatialError),

    #[error("sensor data error: {0}")]
    Exposure(#[from] ExposureError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
