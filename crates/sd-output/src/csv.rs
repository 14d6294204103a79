//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `arrivals.csv`
//! - `species_summary.csv`
//! - `species_completion.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ArrivalWriter;
use crate::{ArrivalRow, CompletionRow, OutputResult, SpeciesSummaryRow};

/// Writes dispersal output to three CSV files.
pub struct CsvWriter {
    arrivals:    Writer<File>,
    summaries:   Writer<File>,
    completions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut arrivals = Writer::from_path(dir.join("arrivals.csv"))?;
        arrivals.write_record(["cell_index", "species_code"])?;

        let mut summaries = Writer::from_path(dir.join("species_summary.csv"))?;
        summaries.write_record(["species_code", "arrivals"])?;

        let mut completions = Writer::from_path(dir.join("species_completion.csv"))?;
        completions.write_record(["species_code", "step", "distance", "new_max_distance"])?;

        log::debug!("CSV output opened in {}", dir.display());
        Ok(Self {
            arrivals,
            summaries,
            completions,
            finished: false,
        })
    }
}

impl ArrivalWriter for CsvWriter {
    fn write_arrivals(&mut self, rows: &[ArrivalRow]) -> OutputResult<()> {
        for row in rows {
            self.arrivals.write_record(&[
                row.cell_index.to_string(),
                row.species_code.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_species_summary(&mut self, row: &SpeciesSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.species_code.to_string(),
            row.arrivals.to_string(),
        ])?;
        Ok(())
    }

    fn write_completions(&mut self, rows: &[CompletionRow]) -> OutputResult<()> {
        for row in rows {
            self.completions.write_record(&[
                row.species_code.to_string(),
                row.step.to_string(),
                row.distance.to_string(),
                row.new_max_distance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.arrivals.flush()?;
        self.summaries.flush()?;
        self.completions.flush()?;
        Ok(())
    }
}
