//! Per-receiving-cell eligibility pools.

use sd_core::SpeciesCode;

/// Species still allowed to colonize one receiving cell.
///
/// Built once from caller input (duplicates dropped, first occurrence wins)
/// and only ever shrinks: a species leaves the pool when it arrives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EligibilityPool {
    species: Vec<SpeciesCode>,
}

impl EligibilityPool {
    pub fn new<I: IntoIterator<Item = SpeciesCode>>(codes: I) -> Self {
        let mut species: Vec<SpeciesCode> = Vec::new();
        for code in codes {
            if !species.contains(&code) {
                species.push(code);
            }
        }
        Self { species }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    #[inline]
    pub fn contains(&self, species: SpeciesCode) -> bool {
        self.species.contains(&species)
    }

    pub fn iter(&self) -> impl Iterator<Item = SpeciesCode> + '_ {
        self.species.iter().copied()
    }

    /// Drop every species already marked in this cell's arrival row.
    ///
    /// Applied after the cell's sweep for an offset, never mid-iteration.
    pub(crate) fn remove_arrived(&mut self, row: &[bool]) {
        self.species.retain(|s| !row[s.index()]);
    }
}
