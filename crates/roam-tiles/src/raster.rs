//! Tile-grid selection over a precomputed quad-partition cache.
//!
//! # Partition cache
//!
//! At construction, each zoom depth `0..=max_depth` gets two ordered boundary
//! sequences: ascending longitude cuts and descending latitude cuts, slicing
//! the root box into `2^depth` equal intervals per axis.  The cache is built
//! once and read-only afterward; queries binary-search it.
//!
//! # Resolution selection
//!
//! A query asks for a box at a viewport width.  The rasterizer picks the
//! smallest depth whose per-tile longitude-per-pixel is at or below the
//! request's, halving from the coarsest depth and capping at `max_depth`,
//! then emits the rectangular grid of tile names covering the (root-clamped)
//! box together with the tile-aligned bounds actually achieved.

use crate::error::{RasterError, RasterResult};

// ── BBox ──────────────────────────────────────────────────────────────────────

/// An upper-left / lower-right bounding box in lon/lat degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
}

impl BBox {
    pub fn new(ullon: f64, ullat: f64, lrlon: f64, lrlat: f64) -> Self {
        Self { ullon, ullat, lrlon, lrlat }
    }

    /// `true` if the box has no positive extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.ullon >= self.lrlon || self.ullat <= self.lrlat
    }

    /// Strict overlap — boxes that merely touch along an edge do not count.
    pub fn intersects(&self, other: &BBox) -> bool {
        self.ullon < other.lrlon
            && other.ullon < self.lrlon
            && self.lrlat < other.ullat
            && other.lrlat < self.ullat
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

/// Rasterizer construction constants: the root bounding box, the pixel size
/// of one tile image, and the deepest cached zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterConfig {
    pub root: BBox,
    pub tile_px: u32,
    pub max_depth: u32,
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// A successful raster result: the tile-name grid in row-major order
/// (top row first), the tile-aligned bounds it covers, and the chosen depth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    pub tiles: Vec<Vec<String>>,
    pub bounds: BBox,
    pub depth: u32,
}

// ── Rasterizer ────────────────────────────────────────────────────────────────

/// Depth-indexed boundary cache plus the selection logic over it.
pub struct Rasterizer {
    cfg: RasterConfig,
    /// Ascending longitude cuts per depth; `lon_cuts[d].len() == 2^d + 1`.
    lon_cuts: Vec<Vec<f64>>,
    /// Descending latitude cuts per depth (row 0 is the top of the map).
    lat_cuts: Vec<Vec<f64>>,
}

impl Rasterizer {
    /// Build the partition cache.  Fails on a degenerate root box or a
    /// zero-pixel tile size.
    pub fn new(cfg: RasterConfig) -> RasterResult<Self> {
        if cfg.root.is_degenerate() {
            return Err(RasterError::Config(format!(
                "degenerate root bounding box {:?}",
                cfg.root
            )));
        }
        if cfg.tile_px == 0 {
            return Err(RasterError::Config("tile size of zero pixels".into()));
        }

        let lon_span = cfg.root.lrlon - cfg.root.ullon;
        let lat_span = cfg.root.ullat - cfg.root.lrlat;

        let mut lon_cuts = Vec::with_capacity(cfg.max_depth as usize + 1);
        let mut lat_cuts = Vec::with_capacity(cfg.max_depth as usize + 1);
        for depth in 0..=cfg.max_depth {
            let n = 1usize << depth;
            lon_cuts.push(
                (0..=n)
                    .map(|i| cfg.root.ullon + lon_span * i as f64 / n as f64)
                    .collect(),
            );
            lat_cuts.push(
                (0..=n)
                    .map(|i| cfg.root.ullat - lat_span * i as f64 / n as f64)
                    .collect(),
            );
        }

        Ok(Self { cfg, lon_cuts, lat_cuts })
    }

    pub fn config(&self) -> &RasterConfig {
        &self.cfg
    }

    /// Bounds of one cached tile, or `None` if the address is off the cache.
    ///
    /// The values come from the same boundary arrays queries are resolved
    /// against, so a box built from them round-trips exactly.
    pub fn tile_bounds(&self, depth: u32, x: usize, y: usize) -> Option<BBox> {
        let lon = self.lon_cuts.get(depth as usize)?;
        let lat = self.lat_cuts.get(depth as usize)?;
        if x + 1 >= lon.len() || y + 1 >= lat.len() {
            return None;
        }
        Some(BBox::new(lon[x], lat[y], lon[x + 1], lat[y + 1]))
    }

    /// Select the tile grid covering `query` at the resolution a
    /// `viewport_w`-pixel-wide display needs.
    ///
    /// `viewport_h` is validated but does not influence depth selection —
    /// resolution is driven by longitude-per-pixel alone.
    pub fn raster(&self, query: BBox, viewport_w: u32, viewport_h: u32) -> RasterResult<TileGrid> {
        if query.is_degenerate() {
            return Err(RasterError::Degenerate(format!(
                "inverted or empty query box {query:?}"
            )));
        }
        if viewport_w == 0 || viewport_h == 0 {
            return Err(RasterError::Degenerate("empty viewport".into()));
        }
        if !query.intersects(&self.cfg.root) {
            return Err(RasterError::OutOfBounds);
        }

        let depth = self.select_depth(query, viewport_w);
        let lon = &self.lon_cuts[depth as usize];
        let lat = &self.lat_cuts[depth as usize];
        let n = lon.len() - 1;

        // Clamp to the root box; the intersection test above guarantees a
        // non-empty remainder.
        let clamped = BBox::new(
            query.ullon.max(self.cfg.root.ullon),
            query.ullat.min(self.cfg.root.ullat),
            query.lrlon.min(self.cfg.root.lrlon),
            query.lrlat.max(self.cfg.root.lrlat),
        );

        // First/last intersecting column and row, by binary search over the
        // monotone cut sequences.  A query edge exactly on a tile boundary
        // selects only the tiles with interior overlap.
        let x0 = lon[1..].partition_point(|&right| right <= clamped.ullon);
        let x1 = lon[..n].partition_point(|&left| left < clamped.lrlon) - 1;
        let y0 = lat[1..].partition_point(|&bottom| bottom >= clamped.ullat);
        let y1 = lat[..n].partition_point(|&top| top > clamped.lrlat) - 1;

        let tiles = (y0..=y1)
            .map(|y| {
                (x0..=x1)
                    .map(|x| format!("d{depth}_x{x}_y{y}.png"))
                    .collect()
            })
            .collect();

        Ok(TileGrid {
            tiles,
            bounds: BBox::new(lon[x0], lat[y0], lon[x1 + 1], lat[y1 + 1]),
            depth,
        })
    }

    /// Smallest depth whose per-tile longitude-per-pixel is at or below the
    /// request's, capped at the deepest cached level.
    fn select_depth(&self, query: BBox, viewport_w: u32) -> u32 {
        let required = (query.lrlon - query.ullon) / viewport_w as f64;
        let mut depth = 0;
        let mut tile_dpp =
            (self.cfg.root.lrlon - self.cfg.root.ullon) / self.cfg.tile_px as f64;
        while tile_dpp > required && depth < self.cfg.max_depth {
            depth += 1;
            tile_dpp /= 2.0;
        }
        depth
    }
}
