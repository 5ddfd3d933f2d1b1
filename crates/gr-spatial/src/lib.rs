//! `gr-spatial` — road multigraph, spatial indexing, and shortest paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR multigraph + R-tree), `RoadNetworkBuilder` |
//! | [`weights`]  | `EdgeWeights` — per-edge routing cost, cloned per search      |
//! | [`router`]   | `ShortestPath` trait, `NodePath`, `DijkstraRouter`            |
//! | [`provider`] | `NetworkProvider` trait, `StaticNetworkProvider`              |
//! | [`osm`]      | `PbfNetworkProvider` (feature = `"osm"` only)                 |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on `gr-core` types.        |

pub mod error;
pub mod network;
pub mod provider;
pub mod router;
pub mod weights;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{SpatialError, SpatialResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use provider::{NetworkProvider, StaticNetworkProvider};
pub use router::{DijkstraRouter, NodePath, ShortestPath};
pub use weights::EdgeWeights;
