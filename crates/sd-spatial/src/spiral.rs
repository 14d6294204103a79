//! Outward square-spiral enumeration of lattice offsets.
//!
//! ```text
//!   (-1, 1) ← (0, 1) ← (1, 1)
//!      ↓                  ↑
//!   (-1, 0)    (0, 0) → (1, 0)
//!      ↓
//!   (-1,-1) → (0,-1) → (1,-1) → (2,-1) …
//! ```
//!
//! Starting at `(0, 0)` with step `(0, -1)`, the walker turns left
//! (`(dx, dy) → (-dy, dx)`) whenever the position it just emitted sits on a
//! turning corner:
//!
//! - `x == y`
//! - `x < 0 && x == -y`
//! - `x > 0 && x == 1 - y`
//!
//! Every lattice point is visited exactly once, and Chebyshev ring `r` is
//! complete before any point of ring `r + 1`.

/// A displacement in whole grid cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev radius (the square ring the offset belongs to).
    #[inline]
    pub fn ring(self) -> u32 {
        self.x.unsigned_abs().max(self.y.unsigned_abs())
    }

    /// Euclidean length in cells.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }
}

/// Lazy, infinite spiral iterator.  Restart by constructing a new one.
#[derive(Clone, Debug)]
pub struct SpiralOffsets {
    x:    i32,
    y:    i32,
    dx:   i32,
    dy:   i32,
    step: u64,
}

impl SpiralOffsets {
    pub fn new() -> Self {
        Self { x: 0, y: 0, dx: 0, dy: -1, step: 0 }
    }

    /// Number of offsets emitted so far.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }
}

impl Default for SpiralOffsets {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SpiralOffsets {
    type Item = Offset;

    fn next(&mut self) -> Option<Offset> {
        let current = Offset::new(self.x, self.y);
        let (x, y) = (self.x, self.y);

        if x == y || (x < 0 && x == -y) || (x > 0 && x == 1 - y) {
            let dx = self.dx;
            self.dx = -self.dy;
            self.dy = dx;
        }
        self.x += self.dx;
        self.y += self.dy;
        self.step += 1;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for SpiralOffsets {}
