//! 2-D nearest-neighbor index over the routable node set.
//!
//! # Structure
//!
//! A classic k-d tree: an owned binary tree whose split axis alternates with
//! depth — even depths split on longitude, odd on latitude.  Children are
//! `Option<Box<KdNode>>`; search is purely top-down recursive, so no parent
//! or back references exist.
//!
//! # Build order
//!
//! Points are inserted one at a time after a shuffle with the caller's RNG.
//! Random insertion keeps the expected height near 4.3·ln N and avoids the
//! degenerate chain a coordinate-sorted insert would produce.  The RNG is
//! injected rather than global, so a fixed seed reproduces the tree exactly.

use rand::Rng;
use rand::seq::SliceRandom;

use roam_core::{GeoPoint, NodeId};

// ── Axis ──────────────────────────────────────────────────────────────────────

/// Which coordinate a tree level compares on.
#[derive(Copy, Clone)]
enum Axis {
    Lon,
    Lat,
}

impl Axis {
    fn next(self) -> Axis {
        match self {
            Axis::Lon => Axis::Lat,
            Axis::Lat => Axis::Lon,
        }
    }

    fn coord(self, p: GeoPoint) -> f64 {
        match self {
            Axis::Lon => p.lon,
            Axis::Lat => p.lat,
        }
    }

    /// The query's projection onto the splitting plane through `pivot`: the
    /// split coordinate is replaced, the other kept.
    fn project(self, query: GeoPoint, pivot: GeoPoint) -> GeoPoint {
        match self {
            Axis::Lon => GeoPoint::new(pivot.lon, query.lat),
            Axis::Lat => GeoPoint::new(query.lon, pivot.lat),
        }
    }
}

// ── Tree ──────────────────────────────────────────────────────────────────────

struct KdNode {
    point: GeoPoint,
    id: NodeId,
    left: Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

/// Nearest-neighbor index over `(NodeId, GeoPoint)` entries.
pub struct KdTree {
    root: Option<Box<KdNode>>,
    len: usize,
}

impl KdTree {
    /// Build from the full candidate pool in one shot.
    pub fn build<R: Rng>(mut entries: Vec<(NodeId, GeoPoint)>, rng: &mut R) -> Self {
        entries.shuffle(rng);
        let len = entries.len();
        let mut root = None;
        for (id, point) in entries {
            insert(&mut root, Axis::Lon, id, point);
        }
        KdTree { root, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nearest entry to `query` by great-circle distance, or `None` on an
    /// empty index — never a default id.
    ///
    /// Coincident candidates tie-break toward the smaller id, so the winner
    /// does not depend on insertion order.
    pub fn nearest(&self, query: GeoPoint) -> Option<NodeId> {
        let root = self.root.as_deref()?;
        let mut best = Best {
            id: root.id,
            dist: query.distance_m(root.point),
        };
        search(root, Axis::Lon, query, &mut best);
        Some(best.id)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

struct Best {
    id: NodeId,
    dist: f64,
}

impl Best {
    fn offer(&mut self, id: NodeId, dist: f64) {
        if dist < self.dist || (dist == self.dist && id < self.id) {
            self.id = id;
            self.dist = dist;
        }
    }
}

fn insert(slot: &mut Option<Box<KdNode>>, axis: Axis, id: NodeId, point: GeoPoint) {
    match slot {
        None => {
            *slot = Some(Box::new(KdNode {
                point,
                id,
                left: None,
                right: None,
            }))
        }
        Some(node) => {
            let child = if axis.coord(point) < axis.coord(node.point) {
                &mut node.left
            } else {
                &mut node.right
            };
            insert(child, axis.next(), id, point);
        }
    }
}

fn search(node: &KdNode, axis: Axis, query: GeoPoint, best: &mut Best) {
    best.offer(node.id, query.distance_m(node.point));

    let (same, opposite) = if axis.coord(query) < axis.coord(node.point) {
        (&node.left, &node.right)
    } else {
        (&node.right, &node.left)
    };

    if let Some(child) = same.as_deref() {
        search(child, axis.next(), query, best);
    }

    // The opposite side can only hold a closer point if the splitting plane
    // itself is closer than the current best: the distance to the query's
    // projection on the plane is a lower bound on every distance beyond it.
    if let Some(child) = opposite.as_deref() {
        let plane = query.distance_m(axis.project(query, node.point));
        if plane < best.dist {
            search(child, axis.next(), query, best);
        }
    }
}
