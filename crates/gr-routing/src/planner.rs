//! Request planner: the full pipeline for one routing request.
//!
//! ```text
//! fetch network around origin
//!   → snap origin / destination        (NodeNotFound)
//!   → sample edge exposure             (fallback on failure)
//!   → green weights
//!   → alternative-route search         (empty → NoPathFound)
//!   → per-candidate statistics + labels
//! ```
//!
//! Each call builds its own network, weight table, and working copy, so one
//! planner can serve concurrent requests from several threads.

use tracing::{debug, info, info_span};

use gr_core::RoutingConfig;
use gr_exposure::SpatialEstimator;
use gr_spatial::{NetworkProvider, RoadNetwork, ShortestPath};

use crate::alternatives::AlternativeSearch;
use crate::cost::GreenCostModel;
use crate::error::Endpoint;
use crate::request::{RouteCandidate, RouteRequest, rank_label};
use crate::sampling::sample_edges;
use crate::stats::RouteStats;
use crate::{RoutingError, RoutingResult};

/// Pollution-aware route planner.
///
/// Build with [`PlannerBuilder`].
pub struct GreenRoutePlanner<P, E, R> {
    config:    RoutingConfig,
    cost:      GreenCostModel,
    provider:  P,
    estimator: E,
    router:    R,
}

impl<P, E, R> GreenRoutePlanner<P, E, R>
where
    P: NetworkProvider,
    E: SpatialEstimator,
    R: ShortestPath,
{
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Fetch the network around the request's origin and plan on it.
    ///
    /// The fetch radius is the trip's great-circle length, floored at
    /// `min_radius_m`, plus `radius_padding_m`.
    pub fn plan(&self, request: &RouteRequest) -> RoutingResult<Vec<RouteCandidate>> {
        let trip_m = request.origin.distance_m(request.destination);
        let radius_m = self.config.fetch_radius_m(trip_m);
        let network = self.provider.fetch_network(request.origin, radius_m)?;
        debug!(
            radius_m,
            nodes = network.node_count(),
            edges = network.edge_count(),
            "fetched road network"
        );
        self.plan_on(&network, request)
    }

    /// Plan on an already-fetched network.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::NodeNotFound`] if an endpoint cannot be snapped.
    /// - [`RoutingError::NoPathFound`] if not a single route exists.
    /// - [`RoutingError::Spatial`] on internal graph inconsistencies.
    pub fn plan_on(&self, network: &RoadNetwork, request: &RouteRequest) -> RoutingResult<Vec<RouteCandidate>> {
        let _span = info_span!("plan", k = request.k).entered();

        let max_snap = self.config.max_snap_distance_m;
        let from = network
            .snap_within(request.origin, max_snap)
            .ok_or(RoutingError::NodeNotFound { endpoint: Endpoint::Origin, point: request.origin })?;
        let to = network
            .snap_within(request.destination, max_snap)
            .ok_or(RoutingError::NodeNotFound {
                endpoint: Endpoint::Destination,
                point:    request.destination,
            })?;
        debug!(%from, %to, "snapped endpoints");

        let exposures = sample_edges(network, &request.sensors, &self.estimator, &self.config);
        let weights = self.cost.weigh(network, &exposures)?;

        let candidates = AlternativeSearch {
            network,
            weights: &weights,
            router: &self.router,
            penalty_factor: self.config.penalty_factor,
        }
        .run(from, to, request.k)?;

        if candidates.is_empty() {
            return Err(RoutingError::NoPathFound { from, to });
        }

        let stats = RouteStats { network, weights: &weights, exposures: &exposures, cost: &self.cost };
        let routes: Vec<RouteCandidate> = candidates
            .into_iter()
            .enumerate()
            .map(|(rank, c)| RouteCandidate {
                label:    rank_label(rank),
                geometry: c.nodes.iter().map(|n| network.node_pos[n.index()]).collect(),
                summary:  stats.summarize(&c.nodes),
                nodes:    c.nodes,
            })
            .collect();

        info!(
            requested = request.k,
            returned = routes.len(),
            sampling = ?exposures.mode(),
            "planned green routes"
        );
        Ok(routes)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`GreenRoutePlanner`].
///
/// # Required inputs
///
/// - `P: NetworkProvider` — where per-request networks come from
/// - `E: SpatialEstimator` — the pollution surface
/// - `R: ShortestPath` — the search primitive (e.g. [`gr_spatial::DijkstraRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.config(c)`    | `RoutingConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(provider, IdwEstimator::default(), DijkstraRouter)
///     .config(config)
///     .build()?;
/// let routes = planner.plan(&request)?;
/// ```
pub struct PlannerBuilder<P, E, R> {
    config:    Option<RoutingConfig>,
    provider:  P,
    estimator: E,
    router:    R,
}

impl<P, E, R> PlannerBuilder<P, E, R>
where
    P: NetworkProvider,
    E: SpatialEstimator,
    R: ShortestPath,
{
    pub fn new(provider: P, estimator: E, router: R) -> Self {
        Self { config: None, provider, estimator, router }
    }

    pub fn config(mut self, config: RoutingConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration and return a ready planner.
    pub fn build(self) -> RoutingResult<GreenRoutePlanner<P, E, R>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(GreenRoutePlanner {
            cost: GreenCostModel::from_config(&config),
            config,
            provider:  self.provider,
            estimator: self.estimator,
            router:    self.router,
        })
    }
}
