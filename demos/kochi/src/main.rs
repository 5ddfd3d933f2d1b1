//! kochi — green_route demo on a synthetic Kochi, Kerala road network.
//!
//! Plans a handful of trips in parallel against an embedded set of PM2.5
//! readings and prints the ranked candidates.  The last trip carries only
//! two readings of its own, so it falls back to fastest-route behaviour.
//!
//! ```text
//! cargo run -p kochi                      # default RoutingConfig
//! cargo run -p kochi -- config.json       # RoutingConfig overrides as JSON
//! ```

mod network;

use std::io::{self, Cursor};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use gr_core::{GeoPoint, RoutingConfig};
use gr_exposure::{IdwEstimator, load_samples_reader};
use gr_routing::{PlannerBuilder, RawRouteRequest, RouteRequest};
use gr_spatial::{DijkstraRouter, StaticNetworkProvider};

use network::{JUNCTIONS, build_network};

// ── Embedded data ─────────────────────────────────────────────────────────────

// Afternoon PM2.5 (µg/m³).  The bypass corridor is the dirtiest.
const SENSOR_CSV: &str = "\
lat,lon,pm25\n\
10.0240,76.3080,96.0\n\
10.0040,76.3090,88.0\n\
9.9850,76.3130,91.5\n\
9.9680,76.3170,84.0\n\
9.9980,76.2990,47.0\n\
9.9760,76.2830,38.5\n\
9.9810,76.2750,22.0\n\
9.9660,76.2420,18.0\n\
";

const REQUESTS_JSON: &str = r#"[
    { "from": { "lat": 10.0251, "lon": 76.3083 }, "to": { "lat": 9.9673, "lon": 76.3185 } },
    { "from": { "lat": 10.0251, "lon": 76.3083 }, "to": { "lat": 9.9658, "lon": 76.2421 }, "k": 2 },
    { "from": { "lat": 9.9816,  "lon": 76.2760 }, "to": { "lat": 9.9663, "lon": 76.2996 }, "k": 1 },
    { "from": { "lat": 10.0036, "lon": 76.3076 }, "to": { "lat": 9.9673, "lon": 76.3185 },
      "sensor_data": { "lats": [10.0, 9.97], "lons": [76.31, 76.32], "pm25": [90.0, 85.0] } }
]"#;

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(LevelFilter::INFO),
        )
        .init();
}

fn load_config() -> Result<RoutingConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(RoutingConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    info!(%path, "loaded routing config");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let config = load_config()?;

    let (network, ids) = build_network();
    // Providers crop and renumber, so junctions are named by position.
    let names: Vec<(GeoPoint, &str)> = ids
        .iter()
        .zip(JUNCTIONS)
        .map(|(id, name)| (network.node_pos[id.index()], name))
        .collect();
    info!(nodes = network.node_count(), edges = network.edge_count(), "built Kochi network");

    let sensors = load_samples_reader(Cursor::new(SENSOR_CSV))?;
    info!(readings = sensors.len(), "loaded sensor readings");

    let planner = PlannerBuilder::new(StaticNetworkProvider::new(network), IdwEstimator::default(), DijkstraRouter)
        .config(config)
        .build()?;

    // Trips without their own readings use the embedded CSV.
    let raw: Vec<RawRouteRequest> = serde_json::from_str(REQUESTS_JSON)?;
    let requests = raw
        .into_iter()
        .map(|r| -> Result<RouteRequest> {
            let mut req = RouteRequest::from_raw(r, planner.config().default_alternatives)?;
            if req.sensors.is_empty() {
                req.sensors = sensors.clone();
            }
            Ok(req)
        })
        .collect::<Result<Vec<_>>>()?;

    let t0 = Instant::now();
    let results: Vec<_> = requests.par_iter().map(|req| planner.plan(req)).collect();
    info!(trips = requests.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "planned all trips");

    for (i, result) in results.iter().enumerate() {
        println!();
        println!("Trip {}: {} → {}", i + 1, requests[i].origin, requests[i].destination);
        let routes = match result {
            Ok(routes) => routes,
            Err(e) => {
                warn!(trip = i + 1, error = %e, "trip failed");
                continue;
            }
        };
        println!("{:<15} {:>9} {:>9} {:>9}  Via", "Route", "km", "min", "PM2.5");
        println!("{}", "-".repeat(72));
        for route in routes {
            let via: Vec<&str> = route
                .geometry
                .iter()
                .map(|p| names.iter().find(|(pos, _)| pos == p).map_or("?", |&(_, name)| name))
                .collect();
            println!(
                "{:<15} {:>9.2} {:>9.1} {:>9.1}  {}",
                route.label,
                route.summary.distance_km(),
                route.summary.duration_min(),
                route.summary.avg_exposure(),
                via.join(" → "),
            );
        }
    }

    if let Some(Ok(routes)) = results.first() {
        println!();
        println!("Trip 1 as JSON:");
        println!("{}", serde_json::to_string_pretty(routes)?);
    }

    Ok(())
}
