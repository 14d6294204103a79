//! `sd-output` — writers for dispersal results.
//!
//! | Backend | Files created                                                     |
//! |---------|-------------------------------------------------------------------|
//! | CSV     | `arrivals.csv`, `species_summary.csv`, `species_completion.csv`   |
//!
//! Backends implement [`ArrivalWriter`].  The arrival matrix is written after
//! the run with [`write_matrix`]; species completion events are streamed
//! during the run by [`SweepLogObserver`], which implements
//! `sd_engine::DispersalObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sd_output::{CsvWriter, SweepLogObserver, write_matrix};
//!
//! let mut obs = SweepLogObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let arrivals = dispersal.run(rngs.as_mut_slice(), &mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! let mut writer = obs.into_writer();
//! write_matrix(&mut writer, &arrivals)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SweepLogObserver;
pub use row::{ArrivalRow, CompletionRow, SpeciesSummaryRow};
pub use writer::{ArrivalWriter, write_matrix};
