//! Uniform-draw sources for the dispersal engine.
//!
//! # Determinism strategy
//!
//! The engine never seeds anything.  It takes one [`UniformDraw`] per
//! receiving cell and pulls that cell's draws only from its own source, in
//! spiral order and then species-pool order.  With seeded [`CellRng`]s:
//!
//!   seed = global_seed XOR (cell_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive cell IDs uniformly across the seed space.
//! This means:
//!
//! - Cells never share RNG state, so the parallel sweep needs no locking.
//! - The draw sequence seen by a cell does not depend on thread scheduling;
//!   serial and parallel runs produce identical arrival matrices.
//! - Reseeding is the caller's decision: build a fresh [`CellRngs`] with the
//!   seed of the succession step being simulated.
//!
//! [`ScriptedDraws`] replays a fixed sequence, for tests and for reproducing
//! a recorded run exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CellId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UniformDraw ───────────────────────────────────────────────────────────────

/// A source of independent uniform draws in `[0, 1)`.
pub trait UniformDraw {
    fn draw(&mut self) -> f64;
}

impl<T: UniformDraw + ?Sized> UniformDraw for &mut T {
    #[inline]
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

// ── CellRng ───────────────────────────────────────────────────────────────────

/// Per-receiving-cell deterministic RNG.
///
/// The type is `Send` but not meant to be shared: each Rayon worker gets the
/// `&mut CellRng` of the cells it sweeps.
pub struct CellRng(SmallRng);

impl CellRng {
    /// Seed deterministically from the run's global seed and a cell ID.
    pub fn new(global_seed: u64, cell: CellId) -> Self {
        let seed = global_seed ^ (cell.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CellRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl UniformDraw for CellRng {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── CellRngs ──────────────────────────────────────────────────────────────────

/// One [`CellRng`] per receiving cell, indexed by [`CellId`].
pub struct CellRngs {
    pub inner: Vec<CellRng>,
}

impl CellRngs {
    /// Allocate and seed `count` per-cell RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| CellRng::new(global_seed, CellId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, cell: CellId) -> &mut CellRng {
        &mut self.inner[cell.index()]
    }

    pub fn as_mut_slice(&mut self) -> &mut [CellRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for global operations (synthetic landscapes, per-step
/// seeds, …).
///
/// Used only in single-threaded contexts.  Derive per-step seeds with
/// [`next_seed`](Self::next_seed) and build a [`CellRngs`] from each.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A fresh seed for one succession step's [`CellRngs`].
    pub fn next_seed(&mut self, step: u64) -> u64 {
        self.0.r#gen::<u64>() ^ step.wrapping_mul(MIXING_CONSTANT)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl UniformDraw for SimRng {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedDraws ─────────────────────────────────────────────────────────────

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// An empty script behaves like a constant `0.0`, which makes every strictly
/// positive probability succeed.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    values: Vec<f64>,
    pos:    usize,
}

impl ScriptedDraws {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }

    /// Always draws `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl UniformDraw for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        let v = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.pos % self.values.len()]
        };
        self.pos += 1;
        v
    }
}
