//! Typed request and response records.
//!
//! Wire payloads are parsed into [`RawRouteRequest`] and validated once by
//! [`RouteRequest::from_raw`]; everything downstream works on checked values.
//!
//! ```json
//! {
//!   "from": { "lat": 9.9816, "lon": 76.2999 },
//!   "to":   { "lat": 9.9312, "lon": 76.2673 },
//!   "sensor_data": { "lats": [..], "lons": [..], "pm25": [..] },
//!   "k": 3
//! }
//! ```

use serde::{Deserialize, Serialize};

use gr_core::{GeoPoint, NodeId};
use gr_exposure::SensorSet;

use crate::stats::RouteSummary;
use crate::{RoutingError, RoutingResult};

// ── Wire request ──────────────────────────────────────────────────────────────

/// Sensor readings as parallel columns.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SensorColumns {
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    #[serde(alias = "values")]
    pub pm25: Vec<f64>,
}

/// Unvalidated routing request as received.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRouteRequest {
    pub from: GeoPoint,
    pub to:   GeoPoint,
    #[serde(default)]
    pub sensor_data: SensorColumns,
    #[serde(default)]
    pub k: Option<usize>,
}

// ── Validated request ─────────────────────────────────────────────────────────

/// A checked routing request.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
    pub sensors:     SensorSet,
    /// Maximum number of candidates to return (>= 1).
    pub k:           usize,
}

impl RouteRequest {
    /// Validate `raw`, using `default_k` when it does not ask for a count.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidRequest`] for out-of-range coordinates or
    /// `k == 0`; [`RoutingError::Exposure`] for sensor columns of different
    /// lengths.
    pub fn from_raw(raw: RawRouteRequest, default_k: usize) -> RoutingResult<Self> {
        check_point("from", raw.from)?;
        check_point("to", raw.to)?;

        let k = raw.k.unwrap_or(default_k);
        if k == 0 {
            return Err(RoutingError::InvalidRequest("k must be at least 1".into()));
        }

        let cols = raw.sensor_data;
        let sensors = SensorSet::from_columns(&cols.lats, &cols.lons, &cols.pm25)?;

        Ok(Self { origin: raw.from, destination: raw.to, sensors, k })
    }
}

fn check_point(field: &str, p: GeoPoint) -> RoutingResult<()> {
    if p.is_finite() && (-90.0..=90.0).contains(&p.lat) && (-180.0..=180.0).contains(&p.lon) {
        Ok(())
    } else {
        Err(RoutingError::InvalidRequest(format!("{field} {p} is not a valid coordinate")))
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// One ranked route returned to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteCandidate {
    /// `"Best"`, `"Alternative 2"`, `"Alternative 3"`, …
    pub label:    String,
    /// Node coordinates in travel order.
    pub geometry: Vec<GeoPoint>,
    /// Node ids in the request's network.
    pub nodes:    Vec<NodeId>,
    pub summary:  RouteSummary,
}

/// Display label for the candidate at 0-based `rank`.
pub fn rank_label(rank: usize) -> String {
    if rank == 0 {
        "Best".to_owned()
    } else {
        format!("Alternative {}", rank + 1)
    }
}
