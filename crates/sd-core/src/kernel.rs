//! Ward two-regime dispersal kernel.
//!
//! # Model
//!
//! Seed rain from a source falls off exponentially with distance in two
//! regimes: a near-field decay governed by `k` over the species' effective
//! distance `e`, and a far-field decay governed by `b` over its maximum
//! distance `M`.  For a source `d` map units away and cells of width `c`, the
//! one-step probability `p` is the kernel mass falling in the annulus
//! `[d - c, d]`:
//!
//! ```text
//! c <= e, d <= e : exp((d-c)·ln(1-k)/e)      - exp(d·ln(1-k)/e)
//! c <= e, d >  e : (1-k)·exp((d-c-e)·ln(b)/M) - (1-k)·exp((d-e)·ln(b)/M)
//! c >  e, d <= c : exp((d-c)·ln(1-k)/e)      - (1-k)·exp((d-e)·ln(b)/M)
//! c >  e, d >  c : (1-k)·exp((d-c-e)·ln(b)/M) - (1-k)·exp((d-e)·ln(b)/M)
//! ```
//!
//! A succession timestep of `ts` years is `ts` independent trials, so the
//! aggregated probability is `1 - (1-p)^ts`.
//!
//! # Range
//!
//! Near branch boundaries the piecewise algebra can produce values a hair
//! outside `[0, 1]`.  They are returned unclamped: a negative probability
//! never beats a draw from `[0, 1)` and a value above 1 always does.

use crate::{SdError, SdResult};

/// Shape parameters of the two-regime kernel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelParams {
    /// Near-field decay rate, in `(0, 1)`.
    pub k: f64,
    /// Far-field decay rate, in `(0, 1)`.
    pub b: f64,
}

impl KernelParams {
    pub fn new(k: f64, b: f64) -> Self {
        Self { k, b }
    }

    /// Both parameters must lie strictly inside `(0, 1)`; either bound makes
    /// one of the logarithms undefined.
    pub fn validate(&self) -> SdResult<()> {
        for (name, v) in [("k", self.k), ("b", self.b)] {
            if !(v > 0.0 && v < 1.0) {
                return Err(SdError::Config(format!(
                    "kernel parameter {name} must be in (0, 1), got {v}"
                )));
            }
        }
        Ok(())
    }

    /// One-step probability mass in the annulus `[distance - cell_size, distance]`.
    ///
    /// `distance == 0` is not special-cased here; see
    /// [`arrival_probability`](Self::arrival_probability).
    pub fn step_density(
        &self,
        distance:           f64,
        cell_size:          f64,
        effective_distance: f64,
        max_distance:       f64,
    ) -> f64 {
        let (d, c, e, m) = (distance, cell_size, effective_distance, max_distance);
        let near = (1.0 - self.k).ln() / e;
        let far = self.b.ln() / m;
        let tail = 1.0 - self.k;

        if c <= e {
            if d <= e {
                ((d - c) * near).exp() - (d * near).exp()
            } else {
                tail * ((d - c - e) * far).exp() - tail * ((d - e) * far).exp()
            }
        } else if d <= c {
            ((d - c) * near).exp() - tail * ((d - e) * far).exp()
        } else {
            tail * ((d - c - e) * far).exp() - tail * ((d - e) * far).exp()
        }
    }

    /// Probability that seed from a source `distance` map units away arrives
    /// within a `timestep`-year succession step.
    ///
    /// A source in the receiving cell's own pixel (`distance == 0`) always
    /// arrives.  The result is not clamped to `[0, 1]`; compared against a
    /// uniform draw, values above 1 always arrive and values below 0 never do.
    pub fn arrival_probability(
        &self,
        distance:           f64,
        cell_size:          f64,
        effective_distance: f64,
        max_distance:       f64,
        timestep:           u32,
    ) -> f64 {
        if distance == 0.0 {
            return 1.0;
        }
        let p = self.step_density(distance, cell_size, effective_distance, max_distance);
        1.0 - (1.0 - p).powi(timestep as i32)
    }
}
