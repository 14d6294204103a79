//! `SweepLogObserver<W>`: records species completions and streams them to
//! an `ArrivalWriter`.

use sd_core::SpeciesCode;
use sd_engine::{DispersalObserver, RunSummary, SearchBound};

use crate::row::CompletionRow;
use crate::writer::ArrivalWriter;
use crate::{OutputError, OutputResult};

/// A [`DispersalObserver`] that keeps a log of every species retirement and
/// writes it to any [`ArrivalWriter`] backend as the run progresses.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SweepLogObserver<W: ArrivalWriter> {
    writer:     W,
    events:     Vec<CompletionRow>,
    summary:    Option<RunSummary>,
    last_error: Option<OutputError>,
}

impl<W: ArrivalWriter> SweepLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            events:     Vec::new(),
            summary:    None,
            last_error: None,
        }
    }

    /// Completion events so far, in the order they happened.
    pub fn events(&self) -> &[CompletionRow] {
        &self.events
    }

    /// The summary of the last finished run, if any.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Take the stored write error (if any) after `run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to write the arrival matrix).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ArrivalWriter> DispersalObserver for SweepLogObserver<W> {
    fn on_run_start(&mut self, _bound: SearchBound, _cells: usize, _species: usize) {
        self.events.clear();
        self.summary = None;
    }

    fn on_species_complete(&mut self, step: u64, distance: f64, retired: &[SpeciesCode], bound: SearchBound) {
        let start = self.events.len();
        self.events.extend(retired.iter().map(|s| CompletionRow {
            species_code:     s.get(),
            step,
            distance,
            new_max_distance: bound.max_distance,
        }));
        let result = self.writer.write_completions(&self.events[start..]);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}
