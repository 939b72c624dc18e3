//! `roam-tiles` — tile-grid selection for a requested viewport.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`raster`] | `BBox`, `RasterConfig`, `Rasterizer`, `TileGrid`      |
//! | [`error`]  | `RasterError`, `RasterResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod raster;


pub use error::{RasterError, RasterResult};
pub use raster::{BBox, RasterConfig, Rasterizer, TileGrid};
