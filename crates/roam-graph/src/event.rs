//! The typed ingestion event stream.
//!
//! The engine consumes a strictly ordered sequence of element events, not a
//! parser: how a concrete format (XML, PBF, …) turns into events is an
//! adapter concern (see [`crate::xml`] for the bundled one).  There is no
//! look-ahead — in particular, a way's classifying `highway` tag may arrive
//! after the member refs it classifies, which is why [`crate::GraphBuilder`]
//! stages refs until the tag shows up.

use roam_core::{NodeId, WayId};

/// One element event from a street-map extract.
#[derive(Debug, Clone, PartialEq)]
pub enum OsmEvent {
    /// A point declaration with its coordinates.
    NodeOpen { id: NodeId, lon: f64, lat: f64 },
    /// End of the current node block.
    NodeClose,
    /// Start of a way (road segment) block.
    WayOpen { id: WayId },
    /// A member-node reference; only valid inside a way block.
    NodeRef(NodeId),
    /// A key/value tag; valid inside either a node or a way block.
    Tag { key: String, value: String },
    /// End of the current way block.
    WayClose,
}
