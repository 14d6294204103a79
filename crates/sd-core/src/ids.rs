//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Always go through `.index()` when
//! indexing a `Vec`: a `CellId` is zero-based, but a `SpeciesCode` is the
//! 1-based code used by trait tables and raster lists, so its `index()` is
//! `code - 1`.

use std::fmt;

/// Generate a typed, zero-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Row of a receiving cell in the caller's coordinate list and in the
    /// arrival matrix.
    pub struct CellId(u32);
}

// ── SpeciesCode ───────────────────────────────────────────────────────────────

/// Dense 1-based species code.
///
/// Codes index trait-table rows and the per-species source raster list; a run
/// with `n` species uses exactly the codes `1..=n`.  `u16` keeps eligibility
/// pools compact (max 65,535 species).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesCode(u16);

impl SpeciesCode {
    /// Wrap a 1-based code.  Returns `None` for `0` or values above `u16::MAX`.
    #[inline]
    pub fn new(code: u32) -> Option<Self> {
        match u16::try_from(code) {
            Ok(0) | Err(_) => None,
            Ok(c) => Some(SpeciesCode(c)),
        }
    }

    /// The code for zero-based column `index` (i.e. `index + 1`).
    ///
    /// # Panics
    /// Panics if `index + 1` does not fit in a `u16`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        let code = u16::try_from(index + 1).expect("species index exceeds u16 code space");
        SpeciesCode(code)
    }

    /// The raw 1-based code.
    #[inline(always)]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Zero-based column index (`code - 1`).
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over the dense code range `1..=count`.
    pub fn all(count: usize) -> impl Iterator<Item = SpeciesCode> {
        (0..count).map(SpeciesCode::from_index)
    }
}

impl fmt::Display for SpeciesCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "species {}", self.0)
    }
}
