//! `gr-core` — foundational types for the `green_route` routing engine.
//!
//! This crate is a dependency of every other `gr-*` crate.  It intentionally
//! has no `gr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`geo`]         | `GeoPoint`, haversine distance, midpoint              |
//! | [`config`]      | `RoutingConfig` (cost model and search tunables)      |
//! | [`error`]       | `GrError`, `GrResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RoutingConfig;
pub use error::{GrError, GrResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
