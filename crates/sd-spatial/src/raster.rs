//! Per-species source-population rasters.
//!
//! A pixel is either `None` (no reproducing population) or `Some(code)`,
//! where `code` is any non-negative population identifier the caller uses
//! (cohort, pixel group, …).  The kernel only tests presence.
//!
//! Integer rasters exported by GIS tools usually mark missing values with a
//! negative sentinel such as `i32::MIN`; [`SourceRaster::from_signed`] maps
//! every negative value to `None` so no particular bit pattern leaks past
//! the loader.

use crate::{PixelIndex, RasterMeta, SpatialError, SpatialResult};

/// Presence raster for one species.  Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRaster {
    pixels: Vec<Option<u32>>,
}

impl SourceRaster {
    pub fn new(pixels: Vec<Option<u32>>) -> Self {
        Self { pixels }
    }

    /// All-absent raster of `num_cells` pixels.
    pub fn empty(num_cells: usize) -> Self {
        Self { pixels: vec![None; num_cells] }
    }

    /// Convert a signed-integer raster; negative values mean "absent".
    pub fn from_signed(values: &[i32]) -> Self {
        let pixels = values
            .iter()
            .map(|&v| u32::try_from(v).ok())
            .collect();
        Self { pixels }
    }

    /// Mark `pixel` as hosting population `code`.
    ///
    /// # Panics
    /// Panics if `pixel` is outside the raster.
    pub fn set(&mut self, pixel: PixelIndex, code: u32) {
        self.pixels[pixel.position()] = Some(code);
    }

    /// Population code at `pixel`, or `None` if absent or out of range
    /// (including the invalid index 0).
    #[inline]
    pub fn get(&self, pixel: PixelIndex) -> Option<u32> {
        let pos = pixel.0.checked_sub(1)?;
        self.pixels.get(pos).copied().flatten()
    }

    #[inline]
    pub fn is_present(&self, pixel: PixelIndex) -> bool {
        self.get(pixel).is_some()
    }

    /// Number of pixels hosting a population.
    pub fn occupied(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The raster must cover exactly `meta.num_cells` pixels.
    pub fn check_len(&self, meta: &RasterMeta) -> SpatialResult<()> {
        if self.pixels.len() != meta.num_cells {
            return Err(SpatialError::RasterLength {
                expected: meta.num_cells,
                got:      self.pixels.len(),
            });
        }
        Ok(())
    }
}
