use sd_core::SdError;
use sd_spatial::SpatialError;
use sd_species::SpeciesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispersalError {
    #[error("dispersal configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match {against} count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
        against:  &'static str,
    },

    #[error(transparent)]
    Core(#[from] SdError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Species(#[from] SpeciesError),
}

pub type DispersalResult<T> = Result<T, DispersalError>;
