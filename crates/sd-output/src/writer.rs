//! The `ArrivalWriter` trait implemented by all backend writers.

use sd_core::SpeciesCode;
use sd_engine::ArrivalMatrix;

use crate::{ArrivalRow, CompletionRow, OutputResult, SpeciesSummaryRow};

/// Trait implemented by output backends.
///
/// Errors raised while observing a run are stored by
/// [`SweepLogObserver`][crate::SweepLogObserver] and retrieved with
/// `take_error`.
pub trait ArrivalWriter {
    /// Write a batch of arrivals.
    fn write_arrivals(&mut self, rows: &[ArrivalRow]) -> OutputResult<()>;

    /// Write one per-species summary row.
    fn write_species_summary(&mut self, row: &SpeciesSummaryRow) -> OutputResult<()>;

    /// Write species completion events.
    fn write_completions(&mut self, rows: &[CompletionRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every `true` entry of `matrix`, then one summary row per species.
pub fn write_matrix<W: ArrivalWriter + ?Sized>(writer: &mut W, matrix: &ArrivalMatrix) -> OutputResult<()> {
    let rows: Vec<ArrivalRow> = matrix
        .iter_arrivals()
        .map(|(cell, species)| ArrivalRow { cell_index: cell.0, species_code: species.get() })
        .collect();
    if !rows.is_empty() {
        writer.write_arrivals(&rows)?;
    }

    for species in SpeciesCode::all(matrix.species_count()) {
        writer.write_species_summary(&SpeciesSummaryRow {
            species_code: species.get(),
            arrivals:     matrix.count_for(species) as u64,
        })?;
    }
    log::debug!("wrote {} arrivals for {} species", rows.len(), matrix.species_count());
    Ok(())
}
