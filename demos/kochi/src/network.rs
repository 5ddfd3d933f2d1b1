//! Synthetic Kochi road network.
//!
//! Eight junctions loosely placed on the geography of Kochi, Kerala.  The
//! NH 66 bypass between Edappally and Vyttila is divided: each direction has
//! a fast carriageway and a slower parallel service road, so those node
//! pairs carry two directed edges each.

use gr_core::{GeoPoint, NodeId};
use gr_spatial::{RoadNetwork, RoadNetworkBuilder};

/// Named junctions, in node-id order.
pub const JUNCTIONS: [&str; 8] = [
    "Edappally",
    "Palarivattom",
    "Vyttila",
    "Kadavanthra",
    "Kaloor",
    "MG Road",
    "Marine Drive",
    "Fort Kochi",
];

/// Build the network.  Returns `(network, junction ids in JUNCTIONS order)`.
pub fn build_network() -> (RoadNetwork, [NodeId; 8]) {
    let mut b = RoadNetworkBuilder::with_capacity(8, 40);

    let edappally    = b.add_node(GeoPoint::new(10.0251, 76.3083));
    let palarivattom = b.add_node(GeoPoint::new(10.0036, 76.3076));
    let vyttila      = b.add_node(GeoPoint::new(9.9673, 76.3185));
    let kadavanthra  = b.add_node(GeoPoint::new(9.9663, 76.2996));
    let kaloor       = b.add_node(GeoPoint::new(9.9975, 76.2996));
    let mg_road      = b.add_node(GeoPoint::new(9.9754, 76.2826));
    let marine_drive = b.add_node(GeoPoint::new(9.9816, 76.2760));
    let fort_kochi   = b.add_node(GeoPoint::new(9.9658, 76.2421));

    // NH 66 bypass: carriageway (~60 km/h) plus service road (~25 km/h).
    for (a, z, len) in [(edappally, palarivattom, 2_450.0), (palarivattom, vyttila, 4_300.0)] {
        b.add_road(a, z, len, Some(len / 16.7));
        b.add_road(a, z, len + 150.0, Some((len + 150.0) / 7.0));
    }

    // City roads, free-flow times from posted limits where known.
    b.add_road(edappally, kaloor, 3_300.0, Some(330.0));
    b.add_road(palarivattom, kaloor, 1_200.0, Some(130.0));
    b.add_road(kaloor, mg_road, 3_100.0, Some(340.0));
    b.add_road(kaloor, marine_drive, 2_900.0, Some(300.0));
    b.add_road(marine_drive, mg_road, 1_000.0, Some(110.0));
    b.add_road(mg_road, kadavanthra, 2_000.0, Some(210.0));
    b.add_road(kadavanthra, vyttila, 2_200.0, Some(240.0));
    // Ferry approach, no posted limit.
    b.add_road(marine_drive, fort_kochi, 4_200.0, None);
    b.add_road(mg_road, fort_kochi, 5_200.0, None);

    let net = b.build();
    (
        net,
        [edappally, palarivattom, vyttila, kadavanthra, kaloor, mg_road, marine_drive, fort_kochi],
    )
}
