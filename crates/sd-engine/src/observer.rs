//! Run observer trait for progress reporting and data collection.

use sd_core::SpeciesCode;
use sd_spatial::Offset;

use crate::{RunSummary, SearchBound};

/// Callbacks invoked by [`Dispersal::run`][crate::Dispersal::run] at key
/// points in the spiral loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: ring counter
///
/// ```rust,ignore
/// struct RingCounter { rings: u32 }
///
/// impl DispersalObserver for RingCounter {
///     fn on_offset(&mut self, _step: u64, offset: Offset, _d: f64, _swept: bool) {
///         self.rings = self.rings.max(offset.ring());
///     }
/// }
/// ```
pub trait DispersalObserver {
    /// Called once before the first offset with the initial bound.
    fn on_run_start(&mut self, _bound: SearchBound, _cells: usize, _species: usize) {}

    /// Called for every spiral offset visited.
    ///
    /// `swept` is `false` for offsets beyond `bound.max_distance` (square-ring
    /// corners outside the search circle).
    fn on_offset(&mut self, _step: u64, _offset: Offset, _distance: f64, _swept: bool) {}

    /// Called when one or more species are retired after an offset sweep.
    ///
    /// `bound` is the bound after shrinking.
    fn on_species_complete(
        &mut self,
        _step:     u64,
        _distance: f64,
        _retired:  &[SpeciesCode],
        _bound:    SearchBound,
    ) {}

    /// Called once after the loop stops.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`DispersalObserver`] that does nothing.
pub struct NoopObserver;

impl DispersalObserver for NoopObserver {}

impl<O: DispersalObserver + ?Sized> DispersalObserver for &mut O {
    fn on_run_start(&mut self, bound: SearchBound, cells: usize, species: usize) {
        (**self).on_run_start(bound, cells, species)
    }
    fn on_offset(&mut self, step: u64, offset: Offset, distance: f64, swept: bool) {
        (**self).on_offset(step, offset, distance, swept)
    }
    fn on_species_complete(&mut self, step: u64, distance: f64, retired: &[SpeciesCode], bound: SearchBound) {
        (**self).on_species_complete(step, distance, retired, bound)
    }
    fn on_run_end(&mut self, summary: &RunSummary) {
        (**self).on_run_end(summary)
    }
}

// ── ProgressReporter ──────────────────────────────────────────────────────────

/// Logs search progress through the `log` facade.
///
/// Distance milestones are reported at `info` level every
/// `max(cell_size, floor(max_distance / 10))` map units of completed radius
/// (the radius inscribed in the current square ring, `d / √2`).  Species
/// retirements are logged with the new bound.
pub struct ProgressReporter {
    cell_size:     f64,
    interval:      f64,
    initial_max:   f64,
    last_reported: f64,
}

impl ProgressReporter {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            interval:      cell_size,
            initial_max:   0.0,
            last_reported: 0.0,
        }
    }
}

impl DispersalObserver for ProgressReporter {
    fn on_run_start(&mut self, bound: SearchBound, cells: usize, species: usize) {
        self.initial_max = bound.max_distance;
        self.interval = self.cell_size.max((bound.max_distance / 10.0).floor());
        self.last_reported = 0.0;
        log::info!(
            "dispersal: {cells} receiving cells, {species} species, search radius {}",
            bound.max_distance
        );
    }

    fn on_offset(&mut self, _step: u64, _offset: Offset, distance: f64, _swept: bool) {
        let completed = (distance / std::f64::consts::SQRT_2).floor();
        let milestone = (completed / self.interval).floor() * self.interval;
        if milestone > self.last_reported {
            self.last_reported = milestone;
            log::info!("Dispersal distance completed: {milestone} of {}", self.initial_max);
        }
    }

    fn on_species_complete(&mut self, step: u64, _distance: f64, retired: &[SpeciesCode], bound: SearchBound) {
        log::debug!("offset step {step} retired {} species", retired.len());
        let codes: Vec<u16> = retired.iter().map(|s| s.get()).collect();
        log::info!(
            "Species {codes:?} complete. New max dispersal distance: {}",
            bound.max_distance
        );
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if summary.hit_step_limit {
            log::warn!("dispersal stopped at the step limit ({} offsets)", summary.steps);
        }
        log::debug!(
            "dispersal finished: {} offsets, final distance {}, {} arrivals",
            summary.steps, summary.final_distance, summary.arrivals
        );
    }
}
