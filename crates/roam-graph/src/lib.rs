//! `roam-graph` — street-map ingestion and the in-memory road graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`event`]    | `OsmEvent` — the typed ingestion stream                  |
//! | [`builder`]  | `GraphBuilder` (two-phase way staging), accepted roads   |
//! | [`graph`]    | `RoadGraph`, `Node`                                      |
//! | [`location`] | `Location` — named-point records                         |
//! | [`xml`]      | OSM XML adapter (feature = `"xml"` only)                 |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `xml`   | Enables OSM XML loading via the `quick-xml` crate.  |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod builder;
pub mod error;
pub mod event;
pub mod graph;
pub mod location;

#[cfg(feature = "xml")]
pub mod xml;


pub use builder::{GraphBuilder, is_accepted_highway};
pub use error::{GraphError, GraphResult};
pub use event::OsmEvent;
pub use graph::{Node, RoadGraph};
pub use location::Location;
