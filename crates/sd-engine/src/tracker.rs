//! Active-species tracking and the shrinking search bound.
//!
//! # Pruning rule
//!
//! During each swept offset the engine counts, per species, how many
//! `(cell, species)` pairs it tested.  A species that no receiving cell
//! tested at all has left every eligibility pool; nothing further out can
//! change its column, so it is marked done for the rest of the run and its
//! working maximum distance drops to zero.
//!
//! The search bound follows the live species:
//!
//! ```text
//! max_distance    = max(live max distances)    (0 when none are live)
//! corner_distance = max_distance · √2
//! ```
//!
//! The spiral walks square rings, so the loop must reach the ring corner at
//! `max_distance · √2` before the whole circle of radius `max_distance` has
//! been covered.  Both values only ever decrease.

use std::f64::consts::SQRT_2;

use sd_core::SpeciesCode;
use sd_species::SpeciesTable;

// ── SearchBound ───────────────────────────────────────────────────────────────

/// Current search radius, in map units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchBound {
    /// Offsets farther than this are not swept.
    pub max_distance:    f64,
    /// The run stops at the first offset farther than this.
    pub corner_distance: f64,
}

impl SearchBound {
    pub fn from_max(max_distance: f64) -> Self {
        Self { max_distance, corner_distance: max_distance * SQRT_2 }
    }
}

// ── AttemptCounts ─────────────────────────────────────────────────────────────

/// Per-species attempt tally for one offset.
///
/// Merging is a plain element-wise sum, so partial tallies from parallel
/// workers can be combined in any order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptCounts(Vec<u32>);

impl AttemptCounts {
    pub fn new(species: usize) -> Self {
        Self(vec![0; species])
    }

    #[inline]
    pub fn note(&mut self, species: SpeciesCode) {
        self.0[species.index()] += 1;
    }

    #[inline]
    pub fn get(&self, species: SpeciesCode) -> u32 {
        self.0[species.index()]
    }

    pub fn merge(mut self, other: AttemptCounts) -> AttemptCounts {
        for (a, b) in self.0.iter_mut().zip(other.0) {
            *a += b;
        }
        self
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| c as u64).sum()
    }

    fn clear(&mut self) {
        self.0.fill(0);
    }
}

// ── ActiveSpecies ─────────────────────────────────────────────────────────────

/// Single-writer pruning state, updated once per swept offset.
#[derive(Clone, Debug)]
pub struct ActiveSpecies {
    done:     Vec<bool>,
    /// Working copy of `max_distance`; zero once a species is done.
    live_max: Vec<f64>,
    bound:    SearchBound,
    attempts: AttemptCounts,
}

impl ActiveSpecies {
    /// Every species starts live, with the bound set by the full table.
    pub fn new(species: &SpeciesTable) -> Self {
        let live_max: Vec<f64> = species.iter().map(|t| t.max_distance).collect();
        Self {
            done:     vec![false; live_max.len()],
            bound:    SearchBound::from_max(species.overall_max_distance()),
            attempts: AttemptCounts::new(live_max.len()),
            live_max,
        }
    }

    #[inline]
    pub fn is_live(&self, species: SpeciesCode) -> bool {
        !self.done[species.index()]
    }

    pub fn live_count(&self) -> usize {
        self.done.iter().filter(|&&d| !d).count()
    }

    /// Working max distance: the trait value while live, `0.0` once done.
    #[inline]
    pub fn live_max_distance(&self, species: SpeciesCode) -> f64 {
        self.live_max[species.index()]
    }

    /// Working max distances indexed by `SpeciesCode::index()`.
    pub fn live_max_distances(&self) -> &[f64] {
        &self.live_max
    }

    #[inline]
    pub fn current_bound(&self) -> SearchBound {
        self.bound
    }

    /// Count one attempt for the offset in progress.
    #[inline]
    pub fn note_attempt(&mut self, species: SpeciesCode) {
        self.attempts.note(species);
    }

    /// Add a tally collected outside the tracker (one per sweep, or one per
    /// worker).
    pub fn absorb(&mut self, counts: &AttemptCounts) {
        for (a, b) in self.attempts.0.iter_mut().zip(&counts.0) {
            *a += b;
        }
    }

    /// Close the offset: retire every live species with zero attempts,
    /// shrink the bound, and reset the tally.
    ///
    /// Returns the species retired by this call, in code order.
    pub fn sweep_complete(&mut self) -> Vec<SpeciesCode> {
        let mut retired = Vec::new();
        for (i, done) in self.done.iter_mut().enumerate() {
            if !*done && self.attempts.0[i] == 0 {
                *done = true;
                self.live_max[i] = 0.0;
                retired.push(SpeciesCode::from_index(i));
            }
        }
        if !retired.is_empty() {
            let max = self.live_max.iter().copied().fold(0.0, f64::max);
            self.bound = SearchBound::from_max(max.min(self.bound.max_distance));
        }
        self.attempts.clear();
        retired
    }
}
