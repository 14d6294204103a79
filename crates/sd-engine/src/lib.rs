//! `sd-engine` — the spiral seed-dispersal search loop.
//!
//! # One run
//!
//! ```text
//! for offset in spiral (0,0), (1,0), (1,1), …:
//!   d = cell_size · ‖offset‖            one distance for every receiving cell
//!   if d <= bound.max_distance:
//!     ① Sweep:    for each receiving cell, for each species in its pool:
//!                   note an attempt; find the source pixel at cell + offset;
//!                   if present and d <= species max, draw against the kernel;
//!                   on success mark the arrival and drop it from the pool
//!                   (parallel over cells with the `parallel` feature).
//!     ② Prune:    species with no attempts this offset are done; the bound
//!                   shrinks to the largest live max distance.
//!   stop once d > bound.corner_distance (= max · √2)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-offset cell sweep on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sd_core::{CellRngs, DispersalConfig};
//! use sd_engine::{DispersalBuilder, NoopObserver};
//!
//! let dispersal = DispersalBuilder::new(config, meta, species, cells, rasters)
//!     .eligibility(pools)
//!     .build()?;
//! let mut rngs = CellRngs::new(dispersal.cell_count(), seed);
//! let arrivals = dispersal.run(rngs.as_mut_slice(), &mut NoopObserver)?;
//! ```

pub mod arrivals;
pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod pool;
pub mod tracker;


pub use arrivals::ArrivalMatrix;
pub use builder::DispersalBuilder;
pub use engine::{Dispersal, RunSummary};
pub use error::{DispersalError, DispersalResult};
pub use observer::{DispersalObserver, NoopObserver, ProgressReporter};
pub use pool::EligibilityPool;
pub use tracker::{ActiveSpecies, AttemptCounts, SearchBound};
