//! `roam-route` — shortest-route search over the road graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`router`] | `Router` trait, `Route`, `AStarRouter`    |
//! | [`error`]  | `RouteError`, `RouteResult<T>`            |

pub mod error;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use router::{AStarRouter, Route, Router};
