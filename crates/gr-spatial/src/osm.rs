//! OSM PBF network provider — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use gr_spatial::osm::PbfNetworkProvider;
//!
//! let provider = PbfNetworkProvider::open(Path::new("kochi.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! Only drivable `highway=*` ways are included (see [`is_drivable`]).
//! One-way roads add a single directed edge; two-way roads add both
//! directions.  Free-flow travel time comes from the way's `maxspeed` tag;
//! untagged ways get no travel time and the cost model derives one from its
//! assumed speed.
//!
//! The file is parsed once by [`PbfNetworkProvider::open`]; each request then
//! receives a crop of the in-memory network.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use osmpbf::{Element, ElementReader};
use tracing::info;

use gr_core::{GeoPoint, NodeId};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::{NetworkProvider, SpatialError, SpatialResult};

// ── Provider ──────────────────────────────────────────────────────────────────

/// Serves crops of a road network loaded from an OSM PBF extract.
pub struct PbfNetworkProvider {
    network: RoadNetwork,
}

impl PbfNetworkProvider {
    /// Parse `path` and keep its drivable network in memory.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Osm`] on file or parse errors.
    pub fn open(path: &Path) -> SpatialResult<Self> {
        let network = load_from_pbf(path)?;
        info!(
            path = %path.display(),
            nodes = network.node_count(),
            edges = network.edge_count(),
            "loaded OSM road network"
        );
        Ok(Self { network })
    }
}

impl NetworkProvider for PbfNetworkProvider {
    fn fetch_network(&self, center: GeoPoint, radius_m: f64) -> SpatialResult<RoadNetwork> {
        Ok(self.network.crop(center, radius_m))
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Load the full drivable road network from an OSM PBF file.
pub fn load_from_pbf(path: &Path) -> SpatialResult<RoadNetwork> {
    // Single pass: every node position, plus the drivable ways.
    let reader = ElementReader::from_path(path).map_err(|e| SpatialError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::Way(w) => {
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if let Some(highway) = highway.filter(|h| is_drivable(h)) {
                    let speed_mps = tags
                        .iter()
                        .find(|(k, _)| *k == "maxspeed")
                        .and_then(|(_, v)| parse_maxspeed_mps(v));
                    let oneway = is_oneway(highway, &tags);
                    let refs: Vec<i64> = w.refs().collect();
                    road_ways.push(OsmWay { refs, speed_mps, oneway });
                }
            }
            _ => {}
        })
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    // Only nodes some drivable way references become graph nodes, numbered
    // in first-reference order.
    let ref_count: usize = road_ways.iter().map(|w| w.refs.len()).sum();
    let mut builder = RoadNetworkBuilder::with_capacity(ref_count, ref_count * 2);
    let mut osm_to_gr: HashMap<i64, NodeId> = HashMap::new();
    for &osm_id in road_ways.iter().flat_map(|w| w.refs.iter()) {
        if let Entry::Vacant(slot) = osm_to_gr.entry(osm_id) {
            if let Some(&pos) = all_nodes.get(&osm_id) {
                slot.insert(builder.add_node(pos));
            }
        }
    }
    drop(all_nodes);

    // One edge instance per consecutive ref pair, per direction.
    for way in &road_ways {
        for window in way.refs.windows(2) {
            if let (Some(&from), Some(&to)) = (osm_to_gr.get(&window[0]), osm_to_gr.get(&window[1])) {
                let len_m = builder.node_pos(from).distance_m(builder.node_pos(to));
                let travel_s = way.speed_mps.map(|v| len_m / v);

                builder.add_directed_edge(from, to, len_m, travel_s);
                if !way.oneway {
                    builder.add_directed_edge(to, from, len_m, travel_s);
                }
            }
        }
    }

    Ok(builder.build())
}

// ── Parsed ways ────────────────────────────────────────────────────────────────

struct OsmWay {
    refs:      Vec<i64>,
    speed_mps: Option<f64>,
    oneway:    bool,
}

// ── Tags ──────────────────────────────────────────────────────────────────────

/// `false` for `highway` values cars cannot use.
fn is_drivable(highway: &str) -> bool {
    !matches!(
        highway,
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track"
            | "bridleway" | "corridor" | "proposed" | "construction"
    )
}

/// Parse an OSM `maxspeed` value (`"50"`, `"50 km/h"`, `"30 mph"`) into m/s.
/// Symbolic values such as `"walk"` or `"IN:urban"` yield `None`.
fn parse_maxspeed_mps(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let (number, to_mps) = match raw.strip_suffix("mph") {
        Some(n) => (n, 0.447_04),
        None => (raw.trim_end_matches("km/h").trim_end_matches("kmh"), 1.0 / 3.6),
    };
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v * to_mps)
}

/// `oneway=yes/1/true`, or a motorway class, which OSM treats as one-way.
fn is_oneway(highway: &str, tags: &[(&str, &str)]) -> bool {
    let explicit = tags.iter().any(|(k, v)| {
        *k == "oneway" && matches!(*v, "yes" | "1" | "true")
    });
    let implicit = matches!(highway, "motorway" | "motorway_link");
    explicit || implicit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maxspeed_units() {
        assert!((parse_maxspeed_mps("36").unwrap() - 10.0).abs() < 1e-9);
        assert!((parse_maxspeed_mps("36 km/h").unwrap() - 10.0).abs() < 1e-9);
        assert!((parse_maxspeed_mps("10 mph").unwrap() - 4.4704).abs() < 1e-9);
        assert_eq!(parse_maxspeed_mps("walk"), None);
        assert_eq!(parse_maxspeed_mps("0"), None);
    }

    #[test]
    fn footways_not_drivable() {
        assert!(is_drivable("residential"));
        assert!(!is_drivable("footway"));
    }

    #[test]
    fn motorway_implicitly_oneway() {
        assert!(is_oneway("motorway", &[]));
        assert!(is_oneway("primary", &[("oneway", "yes")]));
        assert!(!is_oneway("primary", &[]));
    }
}
