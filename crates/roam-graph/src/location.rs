//! Named-location records derived from named extract nodes.

use roam_core::{GeoPoint, NodeId, normalize};

/// A named point, derived from a named node at build time.
///
/// Records are collected **before** adjacency pruning, so a named node
/// disconnected from the road network is still present here — searchable by
/// name, just not routable.  Distinct display names that normalize to the
/// same key each get their own record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Original display name from the extract.
    pub name: String,
    /// Normalized lookup key; many records may share one key.
    pub key: String,
    /// The extract node this record came from.
    pub node: NodeId,
    pub point: GeoPoint,
}

impl Location {
    pub(crate) fn from_named_node(name: &str, node: NodeId, point: GeoPoint) -> Self {
        Self {
            name: name.to_string(),
            key: normalize(name),
            node,
            point,
        }
    }
}
