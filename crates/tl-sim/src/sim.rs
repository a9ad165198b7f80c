//! The `Sim` struct and its tick loop.

use tl_core::{Lane, SimConfig, SimRng, Tick, UniformSource};
use tl_dynamics::{TickEngine, TickReport};
use tl_lattice::Lattice;
use tracing::debug;

use crate::{DensityAccumulator, DensityProfile, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<S>` owns the lattice, the update engine, the variate stream and the
/// density counters of one run, and drives the tick loop:
///
/// 1. **Update**: [`TickEngine::step`] computes the next state from the
///    current one without touching it.
/// 2. **Commit**: the next state replaces the current one in a single move.
/// 3. **Measure**: from `config.warmup_ticks` on, the committed state is
///    added to the [`DensityAccumulator`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: UniformSource = SimRng> {
    /// Run configuration (lattice size, rates, run length, seed).
    pub config: SimConfig,

    /// Index of the next tick to run.
    pub clock: Tick,

    pub(crate) lattice: Lattice,
    pub(crate) engine:  TickEngine,
    pub(crate) density: DensityAccumulator,
    pub(crate) source:  S,
}

impl<S: UniformSource> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` and return the
    /// averaged densities.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DensityProfile> {
        debug!(
            length = self.config.length,
            particles = self.lattice.total(),
            total_ticks = self.config.total_ticks,
            warmup_ticks = self.config.warmup_ticks,
            seed = self.config.seed,
            "simulation start",
        );

        while self.clock < self.config.end_tick() {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.clock, &self.lattice);

        let profile = self.density.profile();
        debug!(
            samples = profile.samples(),
            mean_a = profile.mean(Lane::A),
            mean_b = profile.mean(Lane::B),
            "simulation done",
        );
        Ok(profile)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// The committed state after the last completed tick.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Density counters accumulated so far.
    pub fn density(&self) -> &DensityAccumulator {
        &self.density
    }

    /// The variate stream, e.g. to inspect how much of a replay was consumed.
    pub fn source(&self) -> &S {
        &self.source
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.clock;
        observer.on_tick_start(now);

        let (next, report) = self.engine.step(&self.lattice, &mut self.source)?;
        self.commit(next);

        if now >= self.config.first_measured_tick() {
            self.density.record(&self.lattice);
        }

        observer.on_tick_end(now, &self.lattice, &report);
        self.clock = now.next();
        Ok(report)
    }

    /// Replace the current state with `next` as a whole.
    ///
    /// Nothing observes the lattice between the old value and the new one.
    #[inline]
    fn commit(&mut self, next: Lattice) {
        self.lattice = next;
    }
}
