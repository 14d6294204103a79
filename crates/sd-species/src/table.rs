//! Validated species trait table.

use sd_core::{SdError, SpeciesCode};

use crate::{SpeciesError, SpeciesResult};

/// Dispersal traits of one species, in map units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesTrait {
    pub code:               SpeciesCode,
    /// Distance over which the near-field kernel decays (`seeddistance_eff`).
    pub effective_distance: f64,
    /// Farthest distance seed can travel in one step (`seeddistance_max`).
    pub max_distance:       f64,
}

/// Trait rows for codes `1..=n`, in code order.
///
/// Immutable once built; the engine keeps its own working copy of the
/// maximum distances for pruning.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesTable {
    rows: Vec<SpeciesTrait>,
}

impl SpeciesTable {
    /// Validate rows that are already sorted by code.
    ///
    /// Fails if the table is empty, the codes are not exactly `1..=n` in
    /// ascending order, or any distance is non-finite or `<= 0`.
    pub fn from_rows<I>(rows: I) -> SpeciesResult<Self>
    where
        I: IntoIterator<Item = (u32, f64, f64)>,
    {
        let mut out = Vec::new();
        for (row, (code, effective_distance, max_distance)) in rows.into_iter().enumerate() {
            let expected = row as u32 + 1;
            if code != expected {
                return Err(SpeciesError::NotDense { row, expected, found: code });
            }
            let code = SpeciesCode::new(code)
                .ok_or(SdError::SpeciesOutOfRange(code, u16::MAX as usize))?;

            check_distance(code, "effective_distance", effective_distance)?;
            check_distance(code, "max_distance", max_distance)?;

            out.push(SpeciesTrait { code, effective_distance, max_distance });
        }
        if out.is_empty() {
            return Err(SpeciesError::Empty);
        }
        Ok(Self { rows: out })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a validated table; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Traits for `code`.
    ///
    /// # Panics
    /// Panics if `code` is beyond the table; use [`code`](Self::code) to
    /// check untrusted input first.
    #[inline]
    pub fn get(&self, code: SpeciesCode) -> &SpeciesTrait {
        &self.rows[code.index()]
    }

    /// Resolve a raw code against this table.
    pub fn code(&self, raw: u32) -> Result<SpeciesCode, SdError> {
        SpeciesCode::new(raw)
            .filter(|c| c.index() < self.rows.len())
            .ok_or(SdError::SpeciesOutOfRange(raw, self.rows.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesTrait> {
        self.rows.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = SpeciesCode> + '_ {
        self.rows.iter().map(|t| t.code)
    }

    /// Largest `max_distance` over all species.
    pub fn overall_max_distance(&self) -> f64 {
        self.rows.iter().map(|t| t.max_distance).fold(0.0, f64::max)
    }
}

fn check_distance(species: SpeciesCode, what: &'static str, got: f64) -> Result<(), SdError> {
    if got.is_finite() && got > 0.0 {
        Ok(())
    } else {
        Err(SdError::InvalidTrait { species, what, got })
    }
}
