//! The spiral search loop.

use sd_core::{CellCoord, DispersalConfig, KernelParams, UniformDraw};
use sd_spatial::{GridCell, Offset, RasterMeta, SourceRaster, SpiralOffsets};
use sd_species::SpeciesTable;

use crate::{
    ActiveSpecies, ArrivalMatrix, AttemptCounts, DispersalError, DispersalObserver,
    DispersalResult, EligibilityPool, SearchBound,
};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// What the loop did, handed to [`DispersalObserver::on_run_end`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Spiral offsets visited (swept or not).
    pub steps:          u64,
    /// Distance of the last offset visited.
    pub final_distance: f64,
    /// Bound in force when the loop stopped.
    pub final_bound:    SearchBound,
    /// `true` entries in the returned matrix.
    pub arrivals:       usize,
    /// The loop stopped on `max_spiral_steps` rather than on the bound.
    pub hit_step_limit: bool,
}

// ── Dispersal ─────────────────────────────────────────────────────────────────

/// A validated dispersal problem, ready to run.
///
/// `Dispersal` owns its inputs and never mutates them: every call to
/// [`run`](Self::run) starts from the initial eligibility pools, so the same
/// problem can be rerun with fresh draw sources (one per succession step,
/// say).
///
/// Create via [`DispersalBuilder`][crate::DispersalBuilder].
#[derive(Clone, Debug)]
pub struct Dispersal {
    pub(crate) config:  DispersalConfig,
    pub(crate) meta:    RasterMeta,
    pub(crate) species: SpeciesTable,
    /// Receiving-cell centres, indexed by `CellId`.
    pub(crate) cells:   Vec<CellCoord>,
    /// Grid cell under each receiving cell, resolved once at build time.
    pub(crate) grid:    Vec<GridCell>,
    /// Source rasters, indexed by `SpeciesCode::index()`.
    pub(crate) rasters: Vec<SourceRaster>,
    /// Initial eligibility pools, indexed by `CellId`.
    pub(crate) pools:   Vec<EligibilityPool>,
}

impl Dispersal {
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn config(&self) -> &DispersalConfig {
        &self.config
    }

    pub fn meta(&self) -> &RasterMeta {
        &self.meta
    }

    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    pub fn pools(&self) -> &[EligibilityPool] {
        &self.pools
    }

    /// Run the spiral search and return the arrival matrix.
    ///
    /// `draws` must hold one uniform source per receiving cell, in `CellId`
    /// order.  Cell `i` only ever draws from `draws[i]`, in spiral order and
    /// then pool order, which makes the result independent of the
    /// `parallel` feature.  A source in the cell's own pixel arrives without
    /// consuming a draw.
    ///
    /// # Errors
    ///
    /// [`DispersalError::CountMismatch`] if `draws.len()` differs from the
    /// receiving cell count.  Nothing fails once the loop has started.
    pub fn run<D, O>(&self, draws: &mut [D], observer: &mut O) -> DispersalResult<ArrivalMatrix>
    where
        D: UniformDraw + Send,
        O: DispersalObserver,
    {
        if draws.len() != self.cells.len() {
            return Err(DispersalError::CountMismatch {
                expected: self.cells.len(),
                got:      draws.len(),
                what:     "draw sources",
                against:  "receiving cell",
            });
        }

        let mut arrivals = ArrivalMatrix::new(self.cells.len(), self.species.len());
        let mut pools = self.pools.clone();
        let mut tracker = ActiveSpecies::new(&self.species);

        observer.on_run_start(tracker.current_bound(), self.cells.len(), self.species.len());

        let mut steps = 0u64;
        let mut final_distance = 0.0;
        let mut hit_step_limit = false;

        for offset in SpiralOffsets::new() {
            if steps >= self.config.max_spiral_steps {
                hit_step_limit = true;
                break;
            }
            let step = steps;
            steps += 1;

            let distance = self.meta.cell_size * offset.norm();
            final_distance = distance;

            let swept = distance <= tracker.current_bound().max_distance;
            observer.on_offset(step, offset, distance, swept);

            if swept {
                let sweep = Sweep {
                    meta:     &self.meta,
                    species:  &self.species,
                    rasters:  &self.rasters,
                    live_max: tracker.live_max_distances(),
                    kernel:   self.config.kernel,
                    timestep: self.config.succession_timestep,
                    offset,
                    distance,
                };
                let counts = sweep.run(&self.grid, &mut pools, &mut arrivals, draws);

                tracker.absorb(&counts);
                let retired = tracker.sweep_complete();
                if !retired.is_empty() {
                    observer.on_species_complete(step, distance, &retired, tracker.current_bound());
                }
            }

            if distance > tracker.current_bound().corner_distance {
                break;
            }
        }

        observer.on_run_end(&RunSummary {
            steps,
            final_distance,
            final_bound: tracker.current_bound(),
            arrivals: arrivals.count(),
            hit_step_limit,
        });
        Ok(arrivals)
    }
}

// ── Per-offset sweep ──────────────────────────────────────────────────────────

/// Read-only context for sweeping every receiving cell at one offset.
struct Sweep<'a> {
    meta:     &'a RasterMeta,
    species:  &'a SpeciesTable,
    rasters:  &'a [SourceRaster],
    live_max: &'a [f64],
    kernel:   KernelParams,
    timestep: u32,
    offset:   Offset,
    distance: f64,
}

impl Sweep<'_> {
    /// Visit every receiving cell and return the offset's attempt tally.
    ///
    /// With the `parallel` Cargo feature cells are visited on Rayon's thread
    /// pool; each worker touches only its own cells' pools, matrix rows and
    /// draw sources, and the partial tallies are summed afterwards.
    fn run<D: UniformDraw + Send>(
        &self,
        cells:    &[GridCell],
        pools:    &mut [EligibilityPool],
        arrivals: &mut ArrivalMatrix,
        draws:    &mut [D],
    ) -> AttemptCounts {
        let n_species = self.species.len();

        #[cfg(not(feature = "parallel"))]
        {
            let mut counts = AttemptCounts::new(n_species);
            for (((&origin, pool), row), draw) in cells
                .iter()
                .zip(pools.iter_mut())
                .zip(arrivals.rows_mut())
                .zip(draws.iter_mut())
            {
                self.visit_cell(origin, pool, row, draw, &mut counts);
            }
            counts
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            cells
                .par_iter()
                .zip(pools.par_iter_mut())
                .zip(arrivals.par_rows_mut())
                .zip(draws.par_iter_mut())
                .fold(
                    || AttemptCounts::new(n_species),
                    |mut counts, (((&origin, pool), row), draw)| {
                        self.visit_cell(origin, pool, row, draw, &mut counts);
                        counts
                    },
                )
                .reduce(|| AttemptCounts::new(n_species), AttemptCounts::merge)
        }
    }

    /// Test every species in one cell's pool against the source pixel at
    /// `origin + offset`.
    fn visit_cell<D: UniformDraw>(
        &self,
        origin: GridCell,
        pool:   &mut EligibilityPool,
        row:    &mut [bool],
        draw:   &mut D,
        counts: &mut AttemptCounts,
    ) {
        if pool.is_empty() {
            return;
        }
        // Same pixel for every species at this cell.
        let pixel = self.meta.offset_index(origin, self.offset.x, self.offset.y);
        let mut any_arrived = false;

        for species in pool.iter() {
            counts.note(species);

            let Some(pixel) = pixel else { continue };
            if !self.rasters[species.index()].is_present(pixel) {
                continue;
            }
            if self.distance > self.live_max[species.index()] {
                continue;
            }

            let arrived = if self.distance == 0.0 {
                true
            } else {
                let traits = self.species.get(species);
                let p = self.kernel.arrival_probability(
                    self.distance,
                    self.meta.cell_size,
                    traits.effective_distance,
                    traits.max_distance,
                    self.timestep,
                );
                draw.draw() < p
            };

            if arrived {
                row[species.index()] = true;
                any_arrived = true;
            }
        }

        if any_arrived {
            pool.remove_arrived(row);
        }
    }
}
