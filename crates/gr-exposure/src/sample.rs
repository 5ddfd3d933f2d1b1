//! Sensor samples and CSV loading.
//!
//! # CSV format
//!
//! One row per reading.  Order is kept; duplicate locations are allowed.
//!
//! ```csv
//! lat,lon,pm25
//! 9.9816,76.2999,42.0
//! 9.9312,76.2673,88.5
//! 10.0159,76.3419,17.2
//! ```
//!
//! Rows with a non-finite coordinate or value are dropped when the set is
//! built; they never reach an estimator.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gr_core::GeoPoint;

use crate::{ExposureError, ExposureResult};

/// One PM2.5 reading at a location.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    pub lat:  f64,
    pub lon:  f64,
    pub pm25: f64,
}

impl SensorSample {
    pub fn new(lat: f64, lon: f64, pm25: f64) -> Self {
        Self { lat, lon, pm25 }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.pm25.is_finite()
    }
}

/// Ordered collection of readings used for one request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorSet {
    samples: Vec<SensorSample>,
}

impl SensorSet {
    /// Build a set, dropping readings with non-finite fields.
    pub fn new(samples: Vec<SensorSample>) -> Self {
        let before = samples.len();
        let samples: Vec<SensorSample> = samples.into_iter().filter(SensorSample::is_finite).collect();
        if samples.len() < before {
            debug!(dropped = before - samples.len(), "dropped non-finite sensor samples");
        }
        Self { samples }
    }

    /// Build a set from the parallel `lats` / `lons` / `values` columns of a
    /// request payload.
    ///
    /// # Errors
    ///
    /// [`ExposureError::MismatchedColumns`] if the columns differ in length.
    pub fn from_columns(lats: &[f64], lons: &[f64], values: &[f64]) -> ExposureResult<Self> {
        if lats.len() != lons.len() || lats.len() != values.len() {
            return Err(ExposureError::MismatchedColumns {
                lats:   lats.len(),
                lons:   lons.len(),
                values: values.len(),
            });
        }
        let samples = lats
            .iter()
            .zip(lons)
            .zip(values)
            .map(|((&lat, &lon), &pm25)| SensorSample { lat, lon, pm25 })
            .collect();
        Ok(Self::new(samples))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[SensorSample] {
        &self.samples
    }

    /// Succeeds if the set has at least `required` samples.
    ///
    /// # Errors
    ///
    /// [`ExposureError::InsufficientSensorData`] otherwise.
    pub fn require(&self, required: usize) -> ExposureResult<()> {
        if self.samples.len() >= required {
            Ok(())
        } else {
            Err(ExposureError::InsufficientSensorData { got: self.samples.len(), required })
        }
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

/// Load a [`SensorSet`] from a CSV file.
pub fn load_samples_csv(path: &Path) -> ExposureResult<SensorSet> {
    let file = std::fs::File::open(path)?;
    load_samples_reader(file)
}

/// Like [`load_samples_csv`] but accepts any `Read` source.
pub fn load_samples_reader<R: Read>(reader: R) -> ExposureResult<SensorSet> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let samples = csv_reader
        .deserialize::<SensorSample>()
        .map(|row| row.map_err(|e| ExposureError::Parse(e.to_string())))
        .collect::<ExposureResult<Vec<_>>>()?;
    Ok(SensorSet::new(samples))
}
