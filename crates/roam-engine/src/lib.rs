//! `roam-engine` — the assembled map engine and its outward query surface.
//!
//! Wires a finished [`RoadGraph`] to the read-only indexes and exposes the
//! four query operations:
//!
//! | Query              | Backed by                                  |
//! |--------------------|--------------------------------------------|
//! | [`MapEngine::nearest`]       | `KdTree` over the routable nodes |
//! | [`MapEngine::shortest_path`] | `AStarRouter` + KdTree snapping  |
//! | [`MapEngine::prefix_search`] | `PrefixTrie` over location names |
//! | [`MapEngine::rasterize`]     | `Rasterizer` partition cache     |
//!
//! # Concurrency
//!
//! Construction is a one-time, single-threaded pass.  Afterward every owned
//! structure is immutable: all queries take `&self` and allocate their own
//! transient state, so one engine may serve arbitrarily many threads with no
//! locking.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `xml`   | OSM XML construction (`from_osm_file` and friends).  |
//! | `serde` | Derives on `EngineConfig` and re-exported types.     |

pub mod error;


use rand::SeedableRng;
use rand::rngs::SmallRng;

use roam_core::{GeoPoint, NodeId, normalize};
use roam_graph::{GraphBuilder, Location, OsmEvent, RoadGraph};
use roam_index::{KdTree, PrefixTrie};
use roam_route::{AStarRouter, Route, RouteError, Router};
use roam_tiles::{BBox, RasterConfig, Rasterizer, TileGrid};

pub use error::{EngineError, EngineResult};

// ── Config ────────────────────────────────────────────────────────────────────

/// Engine construction parameters.
///
/// Loading these from a file is the caller's concern; the struct derives
/// serde under the `serde` feature for callers that want that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub raster: RasterConfig,
    /// Seed for the spatial index's randomized build order.  Fixed seed →
    /// reproducible tree shape.
    pub kd_seed: u64,
}

// ── MapEngine ─────────────────────────────────────────────────────────────────

/// The frozen engine: road graph, spatial index, name index, tile cache.
pub struct MapEngine {
    graph: RoadGraph,
    spatial: KdTree,
    names: PrefixTrie,
    rasterizer: Rasterizer,
    router: AStarRouter,
}

impl MapEngine {
    /// Assemble the engine from an already-built graph.
    pub fn from_graph(graph: RoadGraph, cfg: EngineConfig) -> EngineResult<Self> {
        let rasterizer = Rasterizer::new(cfg.raster)?;

        let mut rng = SmallRng::seed_from_u64(cfg.kd_seed);
        let spatial = KdTree::build(graph.points().collect(), &mut rng);

        let mut names = PrefixTrie::new();
        for location in graph.locations() {
            names.add(&location.name);
        }

        log::info!(
            "engine ready: {} routable nodes indexed, {} name keys",
            spatial.len(),
            names.len()
        );

        Ok(Self {
            graph,
            spatial,
            names,
            rasterizer,
            router: AStarRouter,
        })
    }

    /// Build the graph from an event stream, then assemble the engine.
    ///
    /// Ingestion errors are fatal: no partial engine is published.
    pub fn from_events<I>(events: I, cfg: EngineConfig) -> EngineResult<Self>
    where
        I: IntoIterator<Item = OsmEvent>,
    {
        Self::from_graph(GraphBuilder::from_events(events)?, cfg)
    }

    /// Build from an OSM XML file on disk.
    #[cfg(feature = "xml")]
    pub fn from_osm_file(path: &std::path::Path, cfg: EngineConfig) -> EngineResult<Self> {
        Self::from_graph(roam_graph::xml::load_from_path(path)?, cfg)
    }

    /// Build from any buffered OSM XML source.
    #[cfg(feature = "xml")]
    pub fn from_xml_reader<R: std::io::BufRead>(source: R, cfg: EngineConfig) -> EngineResult<Self> {
        Self::from_graph(roam_graph::xml::load_from_reader(source)?, cfg)
    }

    /// The underlying graph, for callers that need way names, bearings, or
    /// adjacency directly (e.g. to build direction text from a route).
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Id of the routable node nearest to the coordinates.
    ///
    /// Any finite coordinates resolve to *some* node; only an engine with
    /// zero routable nodes errors.
    pub fn nearest(&self, lon: f64, lat: f64) -> EngineResult<NodeId> {
        self.spatial
            .nearest(GeoPoint::new(lon, lat))
            .ok_or(EngineError::EmptyGraph)
    }

    /// Shortest route between the nodes nearest each endpoint.
    ///
    /// `Ok(None)` means the snapped endpoints sit in disjoint components —
    /// a normal outcome, distinct from an error.
    pub fn shortest_path(
        &self,
        origin_lon: f64,
        origin_lat: f64,
        dest_lon: f64,
        dest_lat: f64,
    ) -> EngineResult<Option<Route>> {
        let from = self.nearest(origin_lon, origin_lat)?;
        let to = self.nearest(dest_lon, dest_lat)?;
        match self.router.route(&self.graph, from, to) {
            Ok(route) => Ok(Some(route)),
            Err(RouteError::NoRoute { .. }) => Ok(None),
            Err(RouteError::Graph(e)) => Err(EngineError::Graph(e)),
        }
    }

    /// Every display name whose normalized key starts with `prefix`.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        self.names.keys_with_prefix(prefix)
    }

    /// Full location records whose key matches `name` exactly after
    /// normalization.  Includes named nodes the adjacency prune removed
    /// from the routable graph.
    pub fn locations(&self, name: &str) -> Vec<&Location> {
        let key = normalize(name);
        self.graph
            .locations()
            .iter()
            .filter(|l| l.key == key)
            .collect()
    }

    /// Tile grid for a viewport request.
    ///
    /// Failures (inverted box, box outside the root) come back as
    /// [`EngineError::Raster`]; they are recoverable per-query results.
    pub fn rasterize(
        &self,
        ullon: f64,
        ullat: f64,
        lrlon: f64,
        lrlat: f64,
        viewport_w: u32,
        viewport_h: u32,
    ) -> EngineResult<TileGrid> {
        Ok(self
            .rasterizer
            .raster(BBox::new(ullon, ullat, lrlon, lrlat), viewport_w, viewport_h)?)
    }
}
