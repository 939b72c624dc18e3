//! The frozen road graph.
//!
//! # Data layout
//!
//! Extract node ids are sparse 64-bit values, so the graph is a
//! `FxHashMap<NodeId, Node>` with each node owning its ordered neighbor set
//! (a `BTreeSet`, so adjacency enumerates deterministically).  Edges are
//! undirected and stored symmetrically: the builder inserts both directions
//! at commit time.
//!
//! Built once by [`GraphBuilder`](crate::GraphBuilder); read-only afterward,
//! so arbitrarily many query threads may share it without locking.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use roam_core::{GeoPoint, NodeId, WayId};

use crate::error::{GraphError, GraphResult};
use crate::location::Location;

// ── Node ──────────────────────────────────────────────────────────────────────

/// A road-network point.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub point: GeoPoint,
    /// Display name, if the extract tagged one.  A named node is a
    /// "location": it stays findable by name even when the adjacency prune
    /// drops it from the routable graph.
    pub name: Option<String>,
    pub(crate) neighbors: BTreeSet<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, point: GeoPoint) -> Self {
        Self { id, point, name: None, neighbors: BTreeSet::new() }
    }

    /// `true` if this node carries a display name.
    pub fn is_location(&self) -> bool {
        self.name.is_some()
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Immutable road graph: adjacency, geometry, the `{way → name}` map, and
/// the pruning-independent location records.
pub struct RoadGraph {
    pub(crate) nodes: FxHashMap<NodeId, Node>,
    pub(crate) way_names: FxHashMap<WayId, String>,
    pub(crate) locations: Vec<Location>,
}

impl RoadGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over all retained (routable) node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterator over `(id, point)` of every routable node — the spatial
    /// index's candidate pool.
    pub fn points(&self) -> impl Iterator<Item = (NodeId, GeoPoint)> + '_ {
        self.nodes.values().map(|n| (n.id, n.point))
    }

    fn node(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Neighbors of `id`, in ascending id order.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        Ok(self.node(id)?.neighbors.iter().copied())
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Coordinates of `id`.
    pub fn point(&self, id: NodeId) -> GraphResult<GeoPoint> {
        Ok(self.node(id)?.point)
    }

    /// Great-circle distance between two nodes, in metres.
    ///
    /// The coordinate-only form is [`GeoPoint::distance_m`].
    pub fn distance_m(&self, a: NodeId, b: NodeId) -> GraphResult<f64> {
        Ok(self.point(a)?.distance_m(self.point(b)?))
    }

    /// Initial bearing from `a` toward `b`, degrees clockwise from north.
    ///
    /// The coordinate-only form is [`GeoPoint::bearing_deg`].
    pub fn bearing_deg(&self, a: NodeId, b: NodeId) -> GraphResult<f64> {
        Ok(self.point(a)?.bearing_deg(self.point(b)?))
    }

    // ── Names ─────────────────────────────────────────────────────────────

    /// Display name of a way, if one was recorded.  Kept for every way that
    /// carried a name tag, routed or not, so callers can label route legs.
    pub fn way_name(&self, id: WayId) -> Option<&str> {
        self.way_names.get(&id).map(String::as_str)
    }

    /// Every named location in the extract, including nodes the adjacency
    /// prune removed from the routable graph.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}
