//! Fluent builder for constructing a [`Dispersal`].

use sd_core::{CellCoord, DispersalConfig, SpeciesCode};
use sd_spatial::{RasterMeta, SourceRaster};
use sd_species::SpeciesTable;

use crate::{Dispersal, DispersalError, DispersalResult, EligibilityPool};

/// Fluent builder for [`Dispersal`].
///
/// # Required inputs
///
/// - [`DispersalConfig`]: kernel parameters, succession timestep, step cap
/// - [`RasterMeta`]: the grid shared by every source raster
/// - [`SpeciesTable`]: trait rows for codes `1..=n`
/// - receiving-cell centres, one [`CellCoord`] per receiving cell
/// - one [`SourceRaster`] per species, in code order
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.eligibility(v)`   | Every species eligible at every cell     |
///
/// # Example
///
/// ```rust,ignore
/// let dispersal = DispersalBuilder::new(config, meta, species, cells, rasters)
///     .eligibility(vec![vec![1, 2], vec![2]])
///     .build()?;
/// ```
pub struct DispersalBuilder {
    config:      DispersalConfig,
    meta:        RasterMeta,
    species:     SpeciesTable,
    cells:       Vec<CellCoord>,
    rasters:     Vec<SourceRaster>,
    eligibility: Option<Vec<Vec<u32>>>,
}

impl DispersalBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config:  DispersalConfig,
        meta:    RasterMeta,
        species: SpeciesTable,
        cells:   Vec<CellCoord>,
        rasters: Vec<SourceRaster>,
    ) -> Self {
        Self { config, meta, species, cells, rasters, eligibility: None }
    }

    /// Supply the species codes eligible at each receiving cell (must be
    /// length `cell_count`).
    ///
    /// Codes must lie in `1..=n`.  Duplicates within one cell are dropped;
    /// an empty list means the cell can receive nothing.
    pub fn eligibility(mut self, pools: Vec<Vec<u32>>) -> Self {
        self.eligibility = Some(pools);
        self
    }

    /// Validate every input and return a ready-to-run [`Dispersal`].
    ///
    /// Fails fast on the first problem found; nothing is partially built.
    pub fn build(self) -> DispersalResult<Dispersal> {
        self.config.validate()?;
        self.meta.validate()?;

        let n_cells = self.cells.len();
        let n_species = self.species.len();

        // ── Source rasters ────────────────────────────────────────────────
        if self.rasters.len() != n_species {
            return Err(DispersalError::CountMismatch {
                expected: n_species,
                got:      self.rasters.len(),
                what:     "source rasters",
                against:  "species",
            });
        }
        for raster in &self.rasters {
            raster.check_len(&self.meta)?;
        }

        // ── Receiving cells ───────────────────────────────────────────────
        if let Some((i, c)) = self.cells.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(DispersalError::Config(format!(
                "receiving cell {i} has a non-finite coordinate {c}"
            )));
        }

        // ── Eligibility pools ─────────────────────────────────────────────
        let pools = match self.eligibility {
            Some(raw) => {
                if raw.len() != n_cells {
                    return Err(DispersalError::CountMismatch {
                        expected: n_cells,
                        got:      raw.len(),
                        what:     "eligibility pools",
                        against:  "receiving cell",
                    });
                }
                raw.into_iter()
                    .map(|codes| {
                        let codes = codes
                            .into_iter()
                            .map(|c| self.species.code(c))
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(EligibilityPool::new(codes))
                    })
                    .collect::<DispersalResult<Vec<_>>>()?
            }
            None => vec![EligibilityPool::new(SpeciesCode::all(n_species)); n_cells],
        };

        log::debug!(
            "dispersal built: {n_cells} receiving cells, {n_species} species, {} raster cells",
            self.meta.num_cells
        );

        let grid = self.cells.iter().map(|&c| self.meta.grid_cell(c)).collect();

        Ok(Dispersal {
            config:  self.config,
            meta:    self.meta,
            species: self.species,
            cells:   self.cells,
            grid,
            rasters: self.rasters,
            pools,
        })
    }
}
