//! Streaming graph construction with two-phase way staging.
//!
//! # Why staging
//!
//! The event stream offers no look-ahead: a way's member refs usually arrive
//! before the `highway` tag that decides whether the way is routable at all.
//! The builder therefore stages refs in an ordered buffer and commits them to
//! adjacency only when an accepted `highway` tag arrives (the *commit
//! point*).  Way-close always clears the buffer, so an unaccepted way leaks
//! nothing into the next one.
//!
//! # Lifecycle
//!
//! Feed every event through [`GraphBuilder::handle`], then call
//! [`GraphBuilder::finish`].  Any error is ingestion-fatal: discard the
//! builder, no partial graph is published.

use rustc_hash::FxHashMap;

use roam_core::{GeoPoint, NodeId, WayId};

use crate::error::{GraphError, GraphResult};
use crate::event::OsmEvent;
use crate::graph::{Node, RoadGraph};
use crate::location::Location;

// ── Accepted road classifications ─────────────────────────────────────────────

/// Highway classifications that carry routable edges.  Everything else
/// (footways, service roads, cycleways, …) contributes no adjacency.
pub const ACCEPTED_HIGHWAYS: [&str; 16] = [
    "motorway",
    "motorway_link",
    "trunk",
    "trunk_link",
    "primary",
    "primary_link",
    "secondary",
    "secondary_link",
    "tertiary",
    "tertiary_link",
    "unclassified",
    "unclassified_link",
    "residential",
    "residential_link",
    "living_street",
    "living_street_link",
];

/// `true` if `value` names a road type accepted for routing.
pub fn is_accepted_highway(value: &str) -> bool {
    ACCEPTED_HIGHWAYS.contains(&value)
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Which element block the stream is currently inside of.
enum Block {
    None,
    Node(NodeId),
    Way,
}

/// Consumes the ordered event stream and produces a [`RoadGraph`].
pub struct GraphBuilder {
    nodes: FxHashMap<NodeId, Node>,
    way_names: FxHashMap<WayId, String>,
    block: Block,
    /// Ordered member refs of the open way, awaiting a commit.  Duplicates
    /// and revisits are preserved in order.
    staged: Vec<NodeId>,
    current_way: Option<WayId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            way_names: FxHashMap::default(),
            block: Block::None,
            staged: Vec::new(),
            current_way: None,
        }
    }

    /// Build a graph from a complete event sequence in one call.
    pub fn from_events<I>(events: I) -> GraphResult<RoadGraph>
    where
        I: IntoIterator<Item = OsmEvent>,
    {
        let mut builder = Self::new();
        for event in events {
            builder.handle(event)?;
        }
        builder.finish()
    }

    /// Feed one event.
    pub fn handle(&mut self, event: OsmEvent) -> GraphResult<()> {
        match event {
            OsmEvent::NodeOpen { id, lon, lat } => {
                if !matches!(self.block, Block::None) {
                    return Err(GraphError::Malformed(format!(
                        "node-open for {id} inside another block"
                    )));
                }
                self.nodes.insert(id, Node::new(id, GeoPoint::new(lon, lat)));
                self.block = Block::Node(id);
                Ok(())
            }
            OsmEvent::NodeClose => match self.block {
                Block::Node(_) => {
                    self.block = Block::None;
                    Ok(())
                }
                _ => Err(GraphError::Malformed(
                    "node-close outside a node block".into(),
                )),
            },
            OsmEvent::WayOpen { id } => {
                if !matches!(self.block, Block::None) {
                    return Err(GraphError::Malformed(format!(
                        "way-open for {id} inside another block"
                    )));
                }
                self.staged.clear();
                self.current_way = Some(id);
                self.block = Block::Way;
                Ok(())
            }
            OsmEvent::NodeRef(id) => match self.block {
                Block::Way => {
                    self.staged.push(id);
                    Ok(())
                }
                _ => Err(GraphError::Malformed(format!(
                    "node-ref {id} outside a way block"
                ))),
            },
            OsmEvent::Tag { key, value } => self.tag(&key, value),
            OsmEvent::WayClose => match self.block {
                Block::Way => {
                    // A way that never saw an accepted highway tag leaves
                    // its refs here; clearing keeps them out of the next way.
                    self.staged.clear();
                    self.current_way = None;
                    self.block = Block::None;
                    Ok(())
                }
                _ => Err(GraphError::Malformed(
                    "way-close outside a way block".into(),
                )),
            },
        }
    }

    fn tag(&mut self, key: &str, value: String) -> GraphResult<()> {
        match self.block {
            Block::Node(id) => {
                if key == "name" {
                    if let Some(node) = self.nodes.get_mut(&id) {
                        node.name = Some(value);
                    }
                }
                Ok(())
            }
            Block::Way => {
                match key {
                    "highway" if is_accepted_highway(&value) => self.commit_staged(),
                    // Recorded whether or not the way turns out routable.
                    "name" => {
                        if let Some(way) = self.current_way {
                            self.way_names.insert(way, value);
                        }
                    }
                    _ => {}
                }
                Ok(())
            }
            Block::None => Err(GraphError::Malformed(format!(
                "tag '{key}' outside any block"
            ))),
        }
    }

    /// The commit point: drain the staged refs pairwise into undirected
    /// edges, both adjacency sets at once.
    ///
    /// Pairs touching an undeclared node are skipped (partial extracts
    /// reference geometry outside their bounds), as are self-pairs from an
    /// immediately repeated ref.
    fn commit_staged(&mut self) {
        let staged = std::mem::take(&mut self.staged);
        for pair in staged.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
                continue;
            }
            if let Some(node) = self.nodes.get_mut(&a) {
                node.neighbors.insert(b);
            }
            if let Some(node) = self.nodes.get_mut(&b) {
                node.neighbors.insert(a);
            }
        }
    }

    /// Finish ingestion: collect location records, prune isolated nodes,
    /// and freeze the graph.
    ///
    /// Location collection runs before the prune — a named node with no road
    /// edges must remain findable by name.
    pub fn finish(mut self) -> GraphResult<RoadGraph> {
        if !matches!(self.block, Block::None) {
            return Err(GraphError::Malformed(
                "extract ended inside an open element".into(),
            ));
        }

        let total = self.nodes.len();

        let locations: Vec<Location> = self
            .nodes
            .values()
            .filter_map(|n| {
                n.name
                    .as_deref()
                    .map(|name| Location::from_named_node(name, n.id, n.point))
            })
            .collect();

        self.nodes.retain(|_, n| !n.neighbors.is_empty());

        log::info!(
            "graph built: {} routable nodes ({} pruned), {} locations, {} way names",
            self.nodes.len(),
            total - self.nodes.len(),
            locations.len(),
            self.way_names.len()
        );

        Ok(RoadGraph {
            nodes: self.nodes,
            way_names: self.way_names,
            locations,
        })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
