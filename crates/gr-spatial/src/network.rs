//! Road multigraph representation and builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored CSR-style: the out-edges of node `n` are the
//! contiguous `EdgeId` range
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`.
//!
//! # Parallel edges
//!
//! Several directed edges may join the same `(u, v)` pair (divided roadways,
//! a slip road beside a main carriageway).  Each instance keeps its own
//! `EdgeId` and an `edge_key` counting from 0 among its siblings.  The CSR
//! sort is stable, so siblings appear in insertion order and in ascending
//! `edge_key` order inside a node's slice.  Anything that needs a
//! deterministic "first" instance relies on this.
//!
//! # Spatial index
//!
//! Nodes are bulk-loaded into an `rstar` R-tree keyed on `[lat, lon]`; origin
//! and destination coordinates snap to their nearest road node through it.

use std::collections::HashMap;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use gr_core::{EdgeId, GeoPoint, NodeId};

// ── Snapping index ────────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough to rank
    /// candidates inside one city; callers needing metres use
    /// [`GeoPoint::distance_m`] on the winner.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let [dy, dx] = [self.point[0] - point[0], self.point[1] - point[1]];
        dy * dy + dx * dx
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Directed road multigraph in CSR format plus a spatial index for snapping.
///
/// Immutable once built.  Routing costs are not stored here; they live in a
/// separate [`EdgeWeights`](crate::EdgeWeights) table so a search can work on
/// its own copy.  Do not construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    /// Node coordinates, by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// Offsets into the edge arrays; `node_count + 1` entries.
    pub node_out_start: Vec<u32>,

    // Edge arrays below are all indexed by `EdgeId`.
    pub edge_from: Vec<NodeId>,
    pub edge_to: Vec<NodeId>,

    /// Instance key among edges sharing the same `(from, to)` pair.
    pub edge_key: Vec<u32>,

    /// Length of each edge in metres.  Always finite and >= 0.
    pub edge_length_m: Vec<f64>,

    /// Free-flow travel time in seconds, when the source data has one.
    pub edge_travel_s: Vec<Option<f64>>,

    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// A network without nodes; every snap on it fails.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    #[inline]
    fn out_range(&self, node: NodeId) -> std::ops::Range<usize> {
        self.node_out_start[node.index()] as usize..self.node_out_start[node.index() + 1] as usize
    }

    /// Outgoing edge instances of `node`, parallel siblings adjacent.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_range(node).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_range(node).len()
    }

    /// All edge instances from `from` to `to`, in ascending `edge_key` order.
    ///
    /// Empty if either node is outside the network or the pair is not
    /// connected.
    pub fn edges_between(&self, from: NodeId, to: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let range = if self.contains_node(from) { self.out_range(from) } else { 0..0 };
        range
            .map(|i| EdgeId(i as u32))
            .filter(move |e| self.edge_to[e.index()] == to)
    }

    /// Geometric midpoint of an edge: the mean of its endpoint coordinates.
    #[inline]
    pub fn edge_midpoint(&self, edge: EdgeId) -> GeoPoint {
        let a = self.node_pos[self.edge_from[edge.index()].index()];
        let b = self.node_pos[self.edge_to[edge.index()].index()];
        a.midpoint(b)
    }

    // ── Snapping ──────────────────────────────────────────────────────────

    /// Nearest road node to `pos`; `None` on an empty network.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Like [`snap_to_node`](Self::snap_to_node) but rejects a nearest node
    /// further than `max_m` metres (great-circle) from `pos`.
    pub fn snap_within(&self, pos: GeoPoint, max_m: Option<f64>) -> Option<NodeId> {
        let node = self.snap_to_node(pos)?;
        match max_m {
            Some(max) if self.node_pos[node.index()].distance_m(pos) > max => None,
            _ => Some(node),
        }
    }

    // ── Sub-networks ──────────────────────────────────────────────────────

    /// Extract the sub-network of nodes within `radius_m` metres of `center`
    /// and the edges joining them.
    ///
    /// Node and edge ids are renumbered; sibling order among parallel edges
    /// is preserved.
    pub fn crop(&self, center: GeoPoint, radius_m: f64) -> RoadNetwork {
        let mut remap = vec![NodeId::INVALID; self.node_count()];
        let mut b = RoadNetworkBuilder::new();

        for (i, &pos) in self.node_pos.iter().enumerate() {
            if pos.distance_m(center) <= radius_m {
                remap[i] = b.add_node(pos);
            }
        }

        for e in 0..self.edge_count() {
            let from = remap[self.edge_from[e].index()];
            let to   = remap[self.edge_to[e].index()];
            if from != NodeId::INVALID && to != NodeId::INVALID {
                b.add_directed_edge(from, to, self.edge_length_m[e], self.edge_travel_s[e]);
            }
        }

        b.build()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Accumulates nodes and directed edge instances in any order;
/// [`build`](Self::build) sorts them into CSR form.
///
/// # Example
///
/// ```
/// use gr_core::GeoPoint;
/// use gr_spatial::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(9.93, 76.26));
/// let c = b.add_node(GeoPoint::new(9.94, 76.27));
/// b.add_road(a, c, 1_200.0, Some(90.0));
/// b.add_directed_edge(a, c, 1_350.0, None); // parallel service road
/// let net = b.build();
/// assert_eq!(net.edge_count(), 3);
/// assert_eq!(net.edges_between(a, c).count(), 2);
/// ```
pub struct RoadNetworkBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    length_m: f64,
    travel_s: Option<f64>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Ids are handed out densely in insertion order.
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// One directed edge instance `from → to`.
    ///
    /// - `length_m`: physical length in metres; negative or non-finite
    ///   values are stored as 0.
    /// - `travel_s`: free-flow travel time in seconds, if known.  Negative or
    ///   non-finite values are treated as unknown.
    ///
    /// Adding a second edge between the same pair creates a parallel
    /// instance rather than replacing the first.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: f64, travel_s: Option<f64>) {
        let length_m = if length_m.is_finite() { length_m.max(0.0) } else { 0.0 };
        let travel_s = travel_s.filter(|t| t.is_finite() && *t >= 0.0);
        self.raw_edges.push(RawEdge { from, to, length_m, travel_s });
    }

    /// Two-way road: one instance in each direction.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f64, travel_s: Option<f64>) {
        self.add_directed_edge(a, b, length_m, travel_s);
        self.add_directed_edge(b, a, length_m, travel_s);
    }

    /// Look up the position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Freeze into a [`RoadNetwork`]: O(E log E) sort plus an R-tree bulk
    /// load.
    pub fn build(self) -> RoadNetwork {
        let RoadNetworkBuilder { nodes, raw_edges: mut raw } = self;
        let (node_count, edge_count) = (nodes.len(), raw.len());

        // Stable: parallel siblings keep insertion order.
        raw.sort_by_key(|e| e.from.0);

        let edge_from:      Vec<NodeId>      = raw.iter().map(|e| e.from).collect();
        let edge_to:        Vec<NodeId>      = raw.iter().map(|e| e.to).collect();
        let edge_length_m:  Vec<f64>         = raw.iter().map(|e| e.length_m).collect();
        let edge_travel_s:  Vec<Option<f64>> = raw.iter().map(|e| e.travel_s).collect();

        // Degree counts, then prefix sums.
        let mut node_out_start = vec![0u32; node_count + 1];
        for from in &edge_from {
            node_out_start[from.index() + 1] += 1;
        }
        let mut acc = 0;
        for slot in node_out_start.iter_mut() {
            acc += *slot;
            *slot = acc;
        }
        debug_assert_eq!(acc as usize, edge_count);

        // Instance keys: count siblings within each source node's slice.
        let mut edge_key = Vec::with_capacity(edge_count);
        let mut seen: HashMap<NodeId, u32> = HashMap::new();
        for n in 0..node_count {
            seen.clear();
            for e in node_out_start[n] as usize..node_out_start[n + 1] as usize {
                let slot = seen.entry(edge_to[e]).or_insert(0);
                edge_key.push(*slot);
                *slot += 1;
            }
        }

        let spatial_idx = RTree::bulk_load(
            nodes
                .iter()
                .enumerate()
                .map(|(i, p)| NodeEntry { point: [p.lat, p.lon], id: NodeId(i as u32) })
                .collect(),
        );

        RoadNetwork {
            node_pos: nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_key,
            edge_length_m,
            edge_travel_s,
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
