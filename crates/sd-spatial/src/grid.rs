//! Raster metadata and the source-pixel index mapper.
//!
//! # Pixel numbering
//!
//! Pixels are numbered 1-based, row-major from the top-left corner, the
//! same order used by the source raster vectors:
//!
//! ```text
//!   ymax ┌────┬────┬────┐
//!        │ 1  │ 2  │ 3  │
//!        ├────┼────┼────┤
//!        │ 4  │ 5  │ 6  │
//!   ymin └────┴────┴────┘
//!      xmin            xmax
//! ```
//!
//! A map coordinate `(x, y)` first resolves to the [`GridCell`] containing
//! it, with `row` counted down from the top (0-based) and `col` from the
//! left (1-based):
//!
//! ```text
//! row   = num_rows - 1 - floor((y - ymin) / cell_size)
//! col   = floor((x - xmin) / cell_size) + 1
//! index = row · num_cols + col
//! ```
//!
//! Spiral offsets are then applied in whole cells (`col + dx`, `row - dy`),
//! never by adding `dx · cell_size` to a coordinate, so float rounding
//! cannot move a far offset into the wrong column.
//!
//! The index is valid iff `0 < index <= num_cells`.  Only the linear index is
//! range-checked, so an offset that runs off the east or west edge lands in
//! the neighbouring row rather than being rejected.

use sd_core::CellCoord;

use crate::{SpatialError, SpatialResult};

/// A 1-based linear pixel index into a source raster.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PixelIndex(pub usize);

impl PixelIndex {
    /// Zero-based position in a raster vector.
    #[inline(always)]
    pub fn position(self) -> usize {
        self.0 - 1
    }
}

/// Whole-cell position of a map coordinate, which may lie off the raster.
///
/// `row` is 0-based from the top; `col` is 1-based from the left, so the
/// linear index is simply `row · num_cols + col`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct GridCell {
    pub row: i64,
    pub col: i64,
}

impl GridCell {
    /// The cell `(dx, dy)` whole cells away; `dy` is positive northward.
    #[inline]
    pub fn offset_by(self, dx: i32, dy: i32) -> Self {
        Self { row: self.row - i64::from(dy), col: self.col + i64::from(dx) }
    }
}

/// Geometry of the landscape raster.
///
/// Derived by the caller from the raster itself (resolution, origin,
/// dimensions); the kernel only validates it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterMeta {
    pub num_cols:  usize,
    /// Total pixels in the raster, not the number of receiving cells.
    pub num_cells: usize,
    /// Cell width in map units.  Cells are square.
    pub cell_size: f64,
    pub xmin:      f64,
    pub ymin:      f64,
}

impl RasterMeta {
    /// Build and validate.
    pub fn new(
        num_cols:  usize,
        num_cells: usize,
        cell_size: f64,
        xmin:      f64,
        ymin:      f64,
    ) -> SpatialResult<Self> {
        let meta = Self { num_cols, num_cells, cell_size, xmin, ymin };
        meta.validate()?;
        Ok(meta)
    }

    pub fn validate(&self) -> SpatialResult<()> {
        if self.num_cols == 0 || self.num_cells == 0 {
            return Err(SpatialError::InvalidRaster(format!(
                "num_cols ({}) and num_cells ({}) must be > 0",
                self.num_cols, self.num_cells
            )));
        }
        if self.num_cells % self.num_cols != 0 {
            return Err(SpatialError::InvalidRaster(format!(
                "num_cells ({}) is not a whole number of rows of {} columns",
                self.num_cells, self.num_cols
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SpatialError::InvalidRaster(format!(
                "cell_size must be finite and > 0, got {}",
                self.cell_size
            )));
        }
        if !(self.xmin.is_finite() && self.ymin.is_finite()) {
            return Err(SpatialError::InvalidRaster("origin must be finite".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_cells / self.num_cols
    }

    /// Grid cell containing `at`.
    ///
    /// A coordinate exactly on a cell boundary belongs to the cell east or
    /// south of it.  Receiving cells are normally pixel centres, which sit
    /// half a cell from any boundary, so rounding noise in their coordinates
    /// never changes the result.
    pub fn grid_cell(&self, at: CellCoord) -> GridCell {
        let col = ((at.x - self.xmin) / self.cell_size).floor() as i64 + 1;
        let from_bottom = ((at.y - self.ymin) / self.cell_size).floor() as i64;
        GridCell { row: self.num_rows() as i64 - 1 - from_bottom, col }
    }

    /// Linear pixel index of a grid cell, or `None` outside `1..=num_cells`.
    ///
    /// Columns are not range-checked on their own: a cell just past the east
    /// edge is the first pixel of the next row.
    pub fn cell_index(&self, cell: GridCell) -> Option<PixelIndex> {
        let index = cell
            .row
            .checked_mul(self.num_cols as i64)?
            .checked_add(cell.col)?;
        if index > 0 && index <= self.num_cells as i64 {
            Some(PixelIndex(index as usize))
        } else {
            None
        }
    }

    /// Map an absolute coordinate to its 1-based pixel index.
    ///
    /// Returns `None` when the coordinate falls outside the raster; callers
    /// treat that as "nothing there", not as an error.  Rows are counted as
    /// `num_cells / num_cols`, which the `rectangular_raster` test pins for
    /// a raster with more columns than rows.
    #[inline]
    pub fn pixel_index(&self, at: CellCoord) -> Option<PixelIndex> {
        self.cell_index(self.grid_cell(at))
    }

    /// Pixel index of the cell `(dx, dy)` whole cells away from `origin`.
    ///
    /// The offset is applied in integer cell units, so the result does not
    /// depend on how exactly `dx · cell_size` is representable.
    #[inline]
    pub fn offset_index(&self, origin: GridCell, dx: i32, dy: i32) -> Option<PixelIndex> {
        self.cell_index(origin.offset_by(dx, dy))
    }

    /// Centre coordinate of a pixel; the inverse of [`pixel_index`](Self::pixel_index).
    pub fn cell_center(&self, pixel: PixelIndex) -> CellCoord {
        let pos = pixel.position();
        let row = pos / self.num_cols;
        let col = pos % self.num_cols;
        CellCoord {
            x: self.xmin + (col as f64 + 0.5) * self.cell_size,
            y: self.ymin + ((self.num_rows() - row) as f64 - 0.5) * self.cell_size,
        }
    }
}
