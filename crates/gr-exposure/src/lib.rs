//! `gr-exposure` — sensor samples and spatial pollution estimation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`sample`]   | `SensorSample`, `SensorSet`, CSV loading                  |
//! | [`estimate`] | `Exposure`, `SpatialEstimator` trait, `ConstantEstimator`, `IdwEstimator` |
//! | [`error`]    | `ExposureError`, `ExposureResult<T>`                      |
//!
//! Estimators are queried in one batch per request.  A point the estimator
//! cannot evaluate comes back as [`Exposure::Fallback`] instead of failing the
//! whole batch.

pub mod error;
pub mod estimate;
pub mod sample;

#[cfg(test)]
mod tests;

pub use error::{ExposureError, ExposureResult};
pub use estimate::{ConstantEstimator, Exposure, IdwEstimator, SpatialEstimator};
pub use sample::{SensorSample, SensorSet, load_samples_csv, load_samples_reader};
