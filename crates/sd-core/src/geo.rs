//! Projected map coordinates.
//!
//! Rasters handed to the kernel use a projected CRS with square cells, so
//! coordinates are plain Cartesian `f64` map units (usually metres) and
//! distances are Euclidean.

/// Absolute position of a cell centre in map units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    pub x: f64,
    pub y: f64,
}

impl CellCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in map units.
    #[inline]
    pub fn distance(self, other: CellCoord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
