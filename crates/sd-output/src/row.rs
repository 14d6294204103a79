//! Plain data row types written by output backends.

/// One receiving cell that received seed of one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalRow {
    /// Zero-based receiving-cell index, in input order.
    pub cell_index:   u32,
    pub species_code: u16,
}

/// Number of receiving cells reached by one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesSummaryRow {
    pub species_code: u16,
    pub arrivals:     u64,
}

/// A species retired from the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionRow {
    pub species_code:     u16,
    /// Spiral offset index at which the species was retired.
    pub step:             u64,
    /// Distance of that offset, in map units.
    pub distance:         f64,
    /// Search radius after the retirement.
    pub new_max_distance: f64,
}
