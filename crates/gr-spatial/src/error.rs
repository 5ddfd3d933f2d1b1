//! Spatial-subsystem error type.

use thiserror::Error;

use gr_core::NodeId;

/// Errors produced by `gr-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("weight table has {weights} entries but the network has {edges} edges")]
    WeightMismatch { weights: usize, edges: usize },

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
