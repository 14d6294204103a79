//! The arrival matrix, the only output of a run.

use sd_core::{CellId, SpeciesCode};

/// `cells × species` booleans, row-major by receiving cell.
///
/// Entries only ever go from `false` to `true`; nothing in the engine clears
/// one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrivalMatrix {
    cells:   usize,
    species: usize,
    data:    Vec<bool>,
}

impl ArrivalMatrix {
    /// All-false matrix.
    pub fn new(cells: usize, species: usize) -> Self {
        Self { cells, species, data: vec![false; cells * species] }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    #[inline]
    pub fn species_count(&self) -> usize {
        self.species
    }

    #[inline]
    pub fn get(&self, cell: CellId, species: SpeciesCode) -> bool {
        self.data[cell.index() * self.species + species.index()]
    }

    /// One receiving cell's row, indexed by `SpeciesCode::index()`.
    pub fn row(&self, cell: CellId) -> &[bool] {
        let start = cell.index() * self.species;
        &self.data[start..start + self.species]
    }

    /// Number of `true` entries.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&a| a).count()
    }

    /// Number of receiving cells reached by `species`.
    pub fn count_for(&self, species: SpeciesCode) -> usize {
        (0..self.cells)
            .filter(|&c| self.data[c * self.species + species.index()])
            .count()
    }

    /// Every `(cell, species)` pair that received seed, in row-major order.
    pub fn iter_arrivals(&self) -> impl Iterator<Item = (CellId, SpeciesCode)> + '_ {
        let width = self.species;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(move |(i, _)| (CellId((i / width) as u32), SpeciesCode::from_index(i % width)))
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, bool> {
        self.data.chunks_mut(self.species.max(1))
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, bool> {
        use rayon::slice::ParallelSliceMut;
        self.data.par_chunks_mut(self.species.max(1))
    }
}
