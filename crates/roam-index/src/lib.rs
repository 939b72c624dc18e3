//! `roam-index` — the read-only query indexes built over a finished graph.
//!
//! # Crate layout
//!
//! | Module   | Contents                                        |
//! |----------|-------------------------------------------------|
//! | [`kd`]   | `KdTree` — 2-D nearest-neighbor spatial index   |
//! | [`trie`] | `PrefixTrie` — normalized-name prefix index     |
//!
//! Both structures are built once during startup and never mutated again, so
//! they can be read concurrently without locking.

pub mod kd;
pub mod trie;

#[cfg(test)]
mod tests;

pub use kd::KdTree;
pub use trie::PrefixTrie;
