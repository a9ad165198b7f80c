//! Batches of independent runs.
//!
//! Runs share nothing: each builds its own lattice, engine and `SimRng` from
//! its own config.  With the `parallel` feature the batch is spread across
//! Rayon's thread pool; results always come back in input order.

use tl_core::SimConfig;

use crate::{DensityProfile, NoopObserver, SimBuilder, SimObserver, SimResult};

/// Run every config to completion.  One failing config does not affect the
/// others.
pub fn run_batch(configs: &[SimConfig]) -> Vec<SimResult<DensityProfile>> {
    run_batch_with(configs, |_, _| NoopObserver, |_, _| {})
}

/// Like [`run_batch`], with per-run hooks.
///
/// `observe(i, &configs[i])` builds the observer for run `i` just before it
/// starts.  `finished(i, &result)` is called as soon as run `i` ends, from the
/// thread that ran it, so completion order is arbitrary under `parallel`.
/// The returned vector is still in input order.
pub fn run_batch_with<O, M, F>(
    configs:  &[SimConfig],
    observe:  M,
    finished: F,
) -> Vec<SimResult<DensityProfile>>
where
    O: SimObserver,
    M: Fn(usize, &SimConfig) -> O + Sync,
    F: Fn(usize, &SimResult<DensityProfile>) + Sync,
{
    let run_one = |(index, config): (usize, &SimConfig)| {
        let mut observer = observe(index, config);
        let result = SimBuilder::new(config.clone())
            .build()
            .and_then(|mut sim| sim.run(&mut observer));
        finished(index, &result);
        result
    };

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().enumerate().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().enumerate().map(run_one).collect()
    }
}
