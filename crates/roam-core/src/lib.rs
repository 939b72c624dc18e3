//! `roam-core` — foundational types for the `roam` map engine.
//!
//! This crate is a dependency of every other `roam-*` crate.  It intentionally
//! has no `roam-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                      |
//! |----------|-----------------------------------------------|
//! | [`ids`]  | `NodeId`, `WayId`                             |
//! | [`geo`]  | `GeoPoint`, haversine distance, bearing       |
//! | [`name`] | `normalize` — display-name canonicalization   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod name;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{NodeId, WayId};
pub use name::normalize;
