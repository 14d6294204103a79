//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `sd-spatial`.
///
/// All of these are raised while validating inputs; mapping an offset that
/// falls off the raster is not an error (see [`RasterMeta::pixel_index`]).
///
/// [`RasterMeta::pixel_index`]: crate::RasterMeta::pixel_index
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid raster metadata: {0}")]
    InvalidRaster(String),

    #[error("source raster has {got} pixels, raster metadata says {expected}")]
    RasterLength { expected: usize, got: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
