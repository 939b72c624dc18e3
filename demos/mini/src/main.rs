//! mini — smallest end-to-end demonstration of the roam map engine.
//!
//! Builds a synthetic eight-node harbor town from an inline event stream,
//! then runs each of the four query types once and prints the results.
//! Swap the event stream for `MapEngine::from_osm_file` (feature `xml`) to
//! run against a real extract.

use anyhow::Result;

use roam_core::{NodeId, WayId};
use roam_engine::{EngineConfig, MapEngine};
use roam_graph::OsmEvent;
use roam_tiles::{BBox, RasterConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const KD_SEED: u64 = 42;
const TILE_PX: u32 = 256;
const MAX_DEPTH: u32 = 3;

// ── Synthetic town ────────────────────────────────────────────────────────────

fn node(events: &mut Vec<OsmEvent>, id: i64, lon: f64, lat: f64, name: Option<&str>) {
    events.push(OsmEvent::NodeOpen { id: NodeId(id), lon, lat });
    if let Some(name) = name {
        events.push(OsmEvent::Tag { key: "name".into(), value: name.into() });
    }
    events.push(OsmEvent::NodeClose);
}

fn way(events: &mut Vec<OsmEvent>, id: i64, refs: &[i64], highway: &str, name: &str) {
    events.push(OsmEvent::WayOpen { id: WayId(id) });
    events.extend(refs.iter().map(|&r| OsmEvent::NodeRef(NodeId(r))));
    events.push(OsmEvent::Tag { key: "highway".into(), value: highway.into() });
    events.push(OsmEvent::Tag { key: "name".into(), value: name.into() });
    events.push(OsmEvent::WayClose);
}

/// Port Ellery: a waterfront grid with two named stops and one footpath
/// that contributes no routable edges.
fn town_events() -> Vec<OsmEvent> {
    let mut events = Vec::new();
    node(&mut events, 1, 0.20, 0.20, None);
    node(&mut events, 2, 0.40, 0.20, Some("Market Hall"));
    node(&mut events, 3, 0.60, 0.20, None);
    node(&mut events, 4, 0.20, 0.45, None);
    node(&mut events, 5, 0.40, 0.45, None);
    node(&mut events, 6, 0.60, 0.45, Some("Maritime Museum"));
    node(&mut events, 7, 0.75, 0.70, Some("Ellery Lighthouse"));
    node(&mut events, 8, 0.60, 0.70, None);
    way(&mut events, 10, &[1, 2, 3], "residential", "Quay Street");
    way(&mut events, 11, &[4, 5, 6], "residential", "Hillside Avenue");
    way(&mut events, 12, &[2, 5], "tertiary", "Cannery Row");
    way(&mut events, 13, &[6, 8], "unclassified", "North Spur");
    // Scenic boardwalk to the lighthouse: not an accepted road type, so the
    // lighthouse stays searchable but unreachable by routing.
    way(&mut events, 14, &[8, 7], "footway", "Boardwalk");
    events
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== mini — roam map engine ===");
    println!();

    // 1. Build the engine from the inline extract.
    let config = EngineConfig {
        raster: RasterConfig {
            root: BBox::new(0.0, 1.0, 1.0, 0.0),
            tile_px: TILE_PX,
            max_depth: MAX_DEPTH,
        },
        kd_seed: KD_SEED,
    };
    let engine = MapEngine::from_events(town_events(), config)?;
    println!(
        "Engine ready: {} routable nodes, {} named locations",
        engine.graph().node_count(),
        engine.graph().locations().len()
    );

    // 2. Nearest-node snap.
    let near = engine.nearest(0.41, 0.19)?;
    println!("Nearest node to (0.41, 0.19): {near}");

    // 3. Shortest route across the grid.
    match engine.shortest_path(0.20, 0.20, 0.60, 0.70)? {
        Some(route) => {
            println!(
                "Route (1) → (8): {} hops, {:.0} m",
                route.nodes.len() - 1,
                route.distance_m
            );
            for pair in route.nodes.windows(2) {
                let bearing = engine.graph().bearing_deg(pair[0], pair[1])?;
                println!("  {} → {}  ({bearing:.0}°)", pair[0], pair[1]);
            }
        }
        None => println!("Route (1) → (8): no path"),
    }

    // The lighthouse sits past the footway: searchable, not routable.
    match engine.shortest_path(0.20, 0.20, 0.75, 0.70)? {
        Some(route) => println!(
            "Route to lighthouse snaps to {} instead",
            route.nodes.last().map(|n| n.to_string()).unwrap_or_default()
        ),
        None => println!("Route to lighthouse: no path"),
    }

    // 4. Prefix search.
    let hits = engine.prefix_search("ma");
    println!("Names matching 'ma': {hits:?}");

    // 5. Tile selection for a mid-zoom viewport.
    let grid = engine.rasterize(0.15, 0.80, 0.70, 0.10, 512, 512)?;
    println!(
        "Raster: depth {}, {}×{} tiles, bounds ({:.3}, {:.3})–({:.3}, {:.3})",
        grid.depth,
        grid.tiles[0].len(),
        grid.tiles.len(),
        grid.bounds.ullon,
        grid.bounds.ullat,
        grid.bounds.lrlon,
        grid.bounds.lrlat
    );
    for row in &grid.tiles {
        println!("  {}", row.join(" "));
    }

    Ok(())
}
