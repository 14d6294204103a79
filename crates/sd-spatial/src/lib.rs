//! `sd-spatial` — raster geometry and spiral search order.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `RasterMeta`, 1-based source-pixel index mapping            |
//! | [`raster`]  | `SourceRaster` (per-species presence, `Option<u32>` pixels) |
//! | [`spiral`]  | `SpiralOffsets`, `Offset`                                   |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod raster;
pub mod spiral;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{GridCell, PixelIndex, RasterMeta};
pub use raster::SourceRaster;
pub use spiral::{Offset, SpiralOffsets};
