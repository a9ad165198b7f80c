//! `tl-sim` — tick loop orchestrator for the rust_tl simulator.
//!
//! # Tick loop
//!
//! ```text
//! INIT:  validate config; draw (or accept) the initial lattice
//! for tick in 0..config.total_ticks:
//!   ① Update   — TickEngine::step(&lattice) → next   (tl-dynamics)
//!   ② Commit   — lattice = next, replaced wholesale
//!   ③ Measure  — if tick ≥ warmup_ticks: accumulate per-site occupancy
//! DONE:  DensityProfile = counts / (total_ticks − warmup_ticks)
//! ```
//!
//! There are no retries.  An error (invalid parameters before the first tick,
//! an exhausted variate stream during it) aborts the run without a result.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_batch`] / [`run_batch_with`] run configs on Rayon. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tl_core::{Rates, SimConfig};
//! use tl_sim::run_simulation;
//!
//! let profile = run_simulation(&config)?;
//! println!("rho_A(0) = {}", profile.lane(Lane::A)[0]);
//! ```

pub mod batch;
pub mod builder;
pub mod density;
pub mod error;
pub mod observer;
pub mod run;
pub mod sim;


pub use batch::{run_batch, run_batch_with};
pub use builder::SimBuilder;
pub use density::{DensityAccumulator, DensityProfile};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ProgressObserver, SimObserver};
pub use run::run_simulation;
pub use sim::Sim;
