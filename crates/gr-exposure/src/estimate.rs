//! Exposure values and spatial estimators.
//!
//! # Degradation
//!
//! Estimation degrades per point, never per batch: an estimator that cannot
//! evaluate one query point reports [`Exposure::Fallback`] for it and keeps
//! going.  A batch-level `Err` is reserved for an estimator that cannot run
//! at all; callers treat it as "no surface available".

use gr_core::GeoPoint;

use crate::{ExposureError, ExposureResult, SensorSet};

// ── Exposure ──────────────────────────────────────────────────────────────────

/// Pollution exposure (PM2.5-equivalent) at one point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Exposure {
    /// Value produced by a pollution surface.
    Estimate(f64),
    /// Default used because no estimate could be produced.
    Fallback(f64),
}

impl Exposure {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Exposure::Estimate(v) | Exposure::Fallback(v) => v,
        }
    }

    #[inline]
    pub fn is_estimate(self) -> bool {
        matches!(self, Exposure::Estimate(_))
    }

    /// Wrap a raw estimator output, degrading non-finite values to
    /// `fallback`.
    #[inline]
    pub fn from_raw(raw: f64, fallback: f64) -> Self {
        if raw.is_finite() { Exposure::Estimate(raw) } else { Exposure::Fallback(fallback) }
    }
}

// ── SpatialEstimator trait ────────────────────────────────────────────────────

/// Pluggable pollution surface.
///
/// Implementations receive the request's sensor readings and every query
/// point in a single call, and must return exactly one [`Exposure`] per
/// point, in order.  Points that cannot be evaluated get
/// `Exposure::Fallback(fallback)`.
///
/// Callers guarantee `samples` meets their own minimum size before calling.
pub trait SpatialEstimator: Send + Sync {
    fn estimate(
        &self,
        samples:  &SensorSet,
        points:   &[GeoPoint],
        fallback: f64,
    ) -> ExposureResult<Vec<Exposure>>;
}

// ── ConstantEstimator ─────────────────────────────────────────────────────────

/// A flat surface: every point gets the same estimate, whatever the samples.
pub struct ConstantEstimator {
    pub value: f64,
}

impl SpatialEstimator for ConstantEstimator {
    fn estimate(&self, _samples: &SensorSet, points: &[GeoPoint], fallback: f64) -> ExposureResult<Vec<Exposure>> {
        Ok(points.iter().map(|_| Exposure::from_raw(self.value, fallback)).collect())
    }
}

// ── IdwEstimator ──────────────────────────────────────────────────────────────

/// Inverse-distance-weighted interpolation over the sensor readings.
///
/// `value(p) = Σ wᵢ·vᵢ / Σ wᵢ` with `wᵢ = 1 / dᵢ^power` and `dᵢ` the
/// great-circle distance in metres.  A query within `snap_m` of a sensor
/// takes that sensor's reading directly.
///
/// No model is fitted; the surface is evaluated directly from the readings,
/// so cost is O(points × samples).
pub struct IdwEstimator {
    pub power:  f64,
    pub snap_m: f64,
}

impl Default for IdwEstimator {
    fn default() -> Self {
        Self { power: 2.0, snap_m: 1.0 }
    }
}

impl IdwEstimator {
    fn evaluate(&self, samples: &SensorSet, p: GeoPoint) -> Option<f64> {
        if !p.is_finite() || samples.is_empty() {
            return None;
        }
        let mut num = 0.0;
        let mut den = 0.0;
        for s in samples.samples() {
            let d = p.distance_m(s.position());
            if d <= self.snap_m {
                return Some(s.pm25);
            }
            let w = d.powf(-self.power);
            num += w * s.pm25;
            den += w;
        }
        (den > 0.0).then(|| num / den)
    }
}

impl SpatialEstimator for IdwEstimator {
    fn estimate(&self, samples: &SensorSet, points: &[GeoPoint], fallback: f64) -> ExposureResult<Vec<Exposure>> {
        if !(self.power.is_finite() && self.power > 0.0) {
            return Err(ExposureError::Estimator(format!("invalid IDW power {}", self.power)));
        }
        Ok(points
            .iter()
            .map(|&p| match self.evaluate(samples, p) {
                Some(v) => Exposure::from_raw(v, fallback),
                None => Exposure::Fallback(fallback),
            })
            .collect())
    }
}
