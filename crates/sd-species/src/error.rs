use sd_core::SdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeciesError {
    #[error("species table is empty")]
    Empty,

    #[error("row {row}: expected species code {expected}, found {found} (codes must be 1..=n, ascending)")]
    NotDense { row: usize, expected: u32, found: u32 },

    #[error(transparent)]
    Core(#[from] SdError),

    #[error("species table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpeciesResult<T> = Result<T, SpeciesError>;
