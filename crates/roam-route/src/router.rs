//! Routing trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The engine calls routing via the [`Router`] trait so applications can
//! swap in custom implementations (bidirectional search, contraction
//! hierarchies) without touching the facade.  The default [`AStarRouter`]
//! is sufficient for city-scale graphs.
//!
//! # Heuristic note
//!
//! The fringe priority is `g + h` with `h` the great-circle distance to the
//! destination node.  Edge weights are themselves great-circle distances, so
//! `h` behaves admissibly in practice, but no formal optimality bound is
//! claimed for this coordinate system — treat it as an engineering
//! approximation, checked empirically by the cost tests.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use roam_core::NodeId;
use roam_graph::RoadGraph;

use crate::error::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: node ids in origin→destination order and
/// the total traveled distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    /// Sum of traversed edge distances, metres.
    pub distance_m: f64,
}

impl Route {
    /// `true` if origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() < 2
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  Every call allocates its own
/// working state, so one router instance serves concurrent queries.
pub trait Router: Send + Sync {
    /// Compute a route between two graph nodes.
    ///
    /// `from == to` yields the trivial single-node route.  Disconnected
    /// endpoints yield [`RouteError::NoRoute`].
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> RouteResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the undirected road graph with great-circle edge weights.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
        astar(graph, from, to)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Fringe entry ordered as a min-heap on `f`, node id as deterministic
/// tie-break.  `g` rides along to detect stale entries on pop.
struct Fringe {
    f: f64,
    g: f64,
    node: NodeId,
}

impl PartialEq for Fringe {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fringe {}

impl Ord for Fringe {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the smallest f must win.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Fringe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn astar(graph: &RoadGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
    let start = graph.point(from)?;
    let goal = graph.point(to)?;

    if from == to {
        return Ok(Route { nodes: vec![from], distance_m: 0.0 });
    }

    // Fresh per-call working state: best-known g, backward predecessors.
    let mut g_score: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut prev: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut fringe: BinaryHeap<Fringe> = BinaryHeap::new();

    g_score.insert(from, 0.0);
    fringe.push(Fringe { f: start.distance_m(goal), g: 0.0, node: from });

    while let Some(Fringe { g, node, .. }) = fringe.pop() {
        // Goal-pop termination: g is final for a popped node under
        // nonnegative weights.
        if node == to {
            return Ok(reconstruct(&prev, from, to, g));
        }

        // Skip entries superseded by a later relaxation.
        if g > g_score.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        let p = graph.point(node)?;
        for neighbor in graph.neighbors(node)? {
            let q = graph.point(neighbor)?;
            let tentative = g + p.distance_m(q);
            if tentative < g_score.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                g_score.insert(neighbor, tentative);
                prev.insert(neighbor, node);
                fringe.push(Fringe {
                    f: tentative + q.distance_m(goal),
                    g: tentative,
                    node: neighbor,
                });
            }
        }
    }

    Err(RouteError::NoRoute { from, to })
}

/// Walk the backward predecessor chain destination→origin, then reverse.
fn reconstruct(prev: &FxHashMap<NodeId, NodeId>, from: NodeId, to: NodeId, total: f64) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        // Every relaxed node recorded a predecessor; a popped goal always
        // chains back to the origin.
        let Some(&parent) = prev.get(&cur) else { break };
        nodes.push(parent);
        cur = parent;
    }
    nodes.reverse();
    Route { nodes, distance_m: total }
}
