//! Routing configuration.
//!
//! One `RoutingConfig` is shared by every request a planner serves.  It is
//! never mutated during a request.

use crate::{GrError, GrResult};

/// Tunables for the green-weight cost model and the alternative-route search.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the planner builder.  Missing fields fall
/// back to [`RoutingConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// Exposure normalisation constant `K` in
    /// `green_weight = base_time * (1 + exposure / K)`.  Larger values weigh
    /// pollution more lightly relative to time.  Must be > 0.
    pub exposure_norm: f64,

    /// Exposure assigned to an edge whose sample is missing or failed, and to
    /// every edge when no pollution surface is available.  Must be >= 0.
    pub fallback_exposure: f64,

    /// Speed (m/s) used to derive travel time for edges without a free-flow
    /// travel time.  Must be > 0.
    pub assumed_speed_mps: f64,

    /// Multiplier applied to an edge's working weight each time a chosen
    /// path uses it.  Must be > 1.
    pub penalty_factor: f64,

    /// Minimum sensor samples needed to query the estimator.
    pub min_sensor_samples: usize,

    /// Number of candidates requested when a request does not say.
    pub default_alternatives: usize,

    /// Floor for the network fetch radius, metres.
    pub min_radius_m: f64,

    /// Added to the fetch radius so the destination is not on the boundary.
    pub radius_padding_m: f64,

    /// Reject endpoints whose nearest node is further than this, metres.
    /// `None` accepts any nearest node.
    pub max_snap_distance_m: Option<f64>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            exposure_norm:        100.0,
            fallback_exposure:    1.0,
            assumed_speed_mps:    8.9,
            penalty_factor:       5.0,
            min_sensor_samples:   3,
            default_alternatives: 3,
            min_radius_m:         2_000.0,
            radius_padding_m:     500.0,
            max_snap_distance_m:  None,
        }
    }
}

impl RoutingConfig {
    /// Check every numeric bound.  Called once by the planner builder.
    pub fn validate(&self) -> GrResult<()> {
        fn require(ok: bool, msg: &str) -> GrResult<()> {
            if ok { Ok(()) } else { Err(GrError::Config(msg.to_owned())) }
        }

        require(
            self.exposure_norm.is_finite() && self.exposure_norm > 0.0,
            "exposure_norm must be a positive finite number",
        )?;
        require(
            self.fallback_exposure.is_finite() && self.fallback_exposure >= 0.0,
            "fallback_exposure must be a non-negative finite number",
        )?;
        require(
            self.assumed_speed_mps.is_finite() && self.assumed_speed_mps > 0.0,
            "assumed_speed_mps must be a positive finite number",
        )?;
        require(
            self.penalty_factor.is_finite() && self.penalty_factor > 1.0,
            "penalty_factor must be greater than 1",
        )?;
        require(self.min_sensor_samples >= 1, "min_sensor_samples must be at least 1")?;
        require(self.default_alternatives >= 1, "default_alternatives must be at least 1")?;
        require(
            self.min_radius_m.is_finite() && self.min_radius_m >= 0.0,
            "min_radius_m must be a non-negative finite number",
        )?;
        require(
            self.radius_padding_m.is_finite() && self.radius_padding_m >= 0.0,
            "radius_padding_m must be a non-negative finite number",
        )?;
        if let Some(max) = self.max_snap_distance_m {
            require(
                max.is_finite() && max >= 0.0,
                "max_snap_distance_m must be a non-negative finite number",
            )?;
        }
        Ok(())
    }

    /// Radius (metres) of the network fetched around the origin for a trip
    /// whose endpoints are `trip_m` apart.
    #[inline]
    pub fn fetch_radius_m(&self, trip_m: f64) -> f64 {
        trip_m.max(self.min_radius_m) + self.radius_padding_m
    }
}
