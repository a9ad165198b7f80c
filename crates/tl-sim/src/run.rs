//! `run_simulation` — the single-call entry point used by sweep drivers.

use tl_core::SimConfig;

use crate::{DensityProfile, NoopObserver, SimBuilder, SimResult};

/// Validate `config`, place `config.particles` particles at random, run
/// `config.total_ticks` ticks and return the densities averaged over the last
/// `total_ticks − warmup_ticks` committed states.
///
/// Deterministic: the same config (including `seed`) always yields the same
/// profile.  On error nothing is returned; there is no partial profile.
pub fn run_simulation(config: &SimConfig) -> SimResult<DensityProfile> {
    SimBuilder::new(config.clone()).build()?.run(&mut NoopObserver)
}
