//! `sd-species` — species dispersal traits.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`table`]   | `SpeciesTrait`, `SpeciesTable` (dense, validated)         |
//! | [`loader`]  | `load_species_csv`, `load_species_reader`                 |
//! | [`error`]   | `SpeciesError`, `SpeciesResult<T>`                        |
//!
//! # Code model (summary)
//!
//! A table with `n` rows carries exactly the codes `1..=n` in ascending
//! order, so a species' code is also its row number, its column in the
//! arrival matrix (`code - 1`), and its position in the source raster list.

pub mod error;
pub mod loader;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{SpeciesError, SpeciesResult};
pub use loader::{load_species_csv, load_species_reader};
pub use table::{SpeciesTable, SpeciesTrait};
