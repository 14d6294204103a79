//! Run configuration.

use crate::{KernelParams, SdError, SdResult};

/// Default cap on spiral offsets visited in one run.  Far beyond any
/// realistic search radius; it only matters if a caller passes absurd
/// distances.
pub const DEFAULT_MAX_SPIRAL_STEPS: u64 = 10_000_000;

/// Top-level dispersal configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the engine builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispersalConfig {
    /// Ward kernel shape parameters.
    pub kernel: KernelParams,

    /// Length of the succession step in years.  Each year is one independent
    /// dispersal trial.  Must be >= 1.
    pub succession_timestep: u32,

    /// Safety valve: stop after this many spiral offsets even if the search
    /// bound has not been exceeded.
    pub max_spiral_steps: u64,

    /// Master seed for the per-cell RNGs.  The engine itself never reads it;
    /// it is carried here for the application that builds the `CellRngs`.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl Default for DispersalConfig {
    fn default() -> Self {
        Self {
            kernel:              KernelParams::new(0.5, 0.3),
            succession_timestep: 10,
            max_spiral_steps:    DEFAULT_MAX_SPIRAL_STEPS,
            seed:                0,
            num_threads:         None,
        }
    }
}

impl DispersalConfig {
    /// Check everything that does not depend on the landscape.
    pub fn validate(&self) -> SdResult<()> {
        self.kernel.validate()?;
        if self.succession_timestep == 0 || self.succession_timestep > i32::MAX as u32 {
            return Err(SdError::Config(format!(
                "succession_timestep must be in 1..={}, got {}",
                i32::MAX,
                self.succession_timestep
            )));
        }
        if self.max_spiral_steps == 0 {
            return Err(SdError::Config("max_spiral_steps must be > 0".into()));
        }
        if self.num_threads == Some(0) {
            return Err(SdError::Config("num_threads must be > 0 when set".into()));
        }
        Ok(())
    }
}
