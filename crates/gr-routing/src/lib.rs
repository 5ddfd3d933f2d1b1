//! `gr-routing` — pollution-aware routing.
//!
//! # Pipeline
//!
//! ```text
//! network + sensor samples
//!   ① sampling      — one batched estimator call for all edge midpoints
//!   ② cost          — green_weight = base_time * (1 + exposure / K)
//!   ③ alternatives  — up to k distinct paths via iterative penalisation
//!   ④ stats         — distance / duration / exposure on unpenalised weights
//! ```
//!
//! Parallel edges are resolved in one place, [`resolver::best_edge`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gr_exposure::IdwEstimator;
//! use gr_routing::{PlannerBuilder, RouteRequest};
//! use gr_spatial::{DijkstraRouter, StaticNetworkProvider};
//!
//! let planner = PlannerBuilder::new(StaticNetworkProvider::new(network), IdwEstimator::default(), DijkstraRouter)
//!     .build()?;
//! let request = RouteRequest::from_raw(serde_json::from_str(body)?, planner.config().default_alternatives)?;
//! for route in planner.plan(&request)? {
//!     println!("{}: {:.2} km", route.label, route.summary.distance_km());
//! }
//! ```

pub mod alternatives;
pub mod cost;
pub mod error;
pub mod planner;
pub mod request;
pub mod resolver;
pub mod sampling;
pub mod stats;


pub use alternatives::{AlternativeSearch, Candidate};
pub use cost::GreenCostModel;
pub use error::{Endpoint, RoutingError, RoutingResult};
pub use planner::{GreenRoutePlanner, PlannerBuilder};
pub use request::{RawRouteRequest, RouteCandidate, RouteRequest, SensorColumns, rank_label};
pub use sampling::{EdgeExposure, SamplingMode, sample_edges};
pub use stats::{RouteStats, RouteSummary};
