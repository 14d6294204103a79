//! `sd-core` — foundational types for the `rust_sd` seed dispersal kernel.
//!
//! This crate is a dependency of every other `sd-*` crate.  It intentionally
//! has no `sd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`ids`]         | `CellId`, `SpeciesCode`                                 |
//! | [`geo`]         | `CellCoord` (projected map units)                       |
//! | [`kernel`]      | `KernelParams`, Ward two-regime arrival probability     |
//! | [`rng`]         | `UniformDraw`, `CellRng`, `CellRngs`, `SimRng`, `ScriptedDraws` |
//! | [`config`]      | `DispersalConfig`                                       |
//! | [`error`]       | `SdError`, `SdResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to read `DispersalConfig` from JSON.              |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kernel;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispersalConfig;
pub use error::{SdError, SdResult};
pub use geo::CellCoord;
pub use ids::{CellId, SpeciesCode};
pub use kernel::KernelParams;
pub use rng::{CellRng, CellRngs, ScriptedDraws, SimRng, UniformDraw};
