//! CSV species-trait loader.
//!
//! # CSV format
//!
//! One row per species.  Rows may appear in any order; they are sorted by
//! code before validation, so the codes must still form `1..=n`.
//!
//! ```csv
//! species_code,effective_distance,max_distance
//! 1,100,303
//! 2,30,200
//! 3,75,300
//! ```
//!
//! Camel-case trait-table headers (`speciesCode`, `seeddistance_eff`,
//! `seeddistance_max`) are accepted as aliases.  Any other columns (species
//! names, longevity, …) are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{SpeciesError, SpeciesResult, SpeciesTable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TraitRecord {
    #[serde(alias = "speciesCode")]
    species_code:       u32,
    #[serde(alias = "seeddistance_eff")]
    effective_distance: f64,
    #[serde(alias = "seeddistance_max")]
    max_distance:       f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`SpeciesTable`] from a CSV file.
pub fn load_species_csv(path: &Path) -> SpeciesResult<SpeciesTable> {
    let file = std::fs::File::open(path)
        .map_err(SpeciesError::Io)?;
    load_species_reader(file)
}

/// Like [`load_species_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the binary.
pub fn load_species_reader<R: Read>(reader: R) -> SpeciesResult<SpeciesTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records: Vec<TraitRecord> = csv_reader
        .deserialize::<TraitRecord>()
        .map(|r| r.map_err(|e| SpeciesError::Parse(e.to_string())))
        .collect::<Result<_, _>>()?;

    records.sort_by_key(|r| r.species_code);

    SpeciesTable::from_rows(
        records
            .into_iter()
            .map(|r| (r.species_code, r.effective_distance, r.max_distance)),
    )
}
