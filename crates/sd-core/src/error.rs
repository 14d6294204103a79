//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `SdError` into them
//! via `From` impls, so validation helpers here can be called with `?` from
//! any builder.

use thiserror::Error;

use crate::SpeciesCode;

/// The top-level error type for `sd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SdError {
    #[error("species code {0} is outside the valid range 1..={1}")]
    SpeciesOutOfRange(u32, usize),

    #[error("{species}: {what} must be finite and > 0 (got {got})")]
    InvalidTrait {
        species: SpeciesCode,
        what:    &'static str,
        got:     f64,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sd-*` crates.
pub type SdResult<T> = Result<T, SdError>;
