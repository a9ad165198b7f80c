//! Fluent builder for constructing a [`Sim`].

use tl_core::{SimConfig, SimRng, Tick, UniformSource};
use tl_dynamics::TickEngine;
use tl_lattice::Lattice;

use crate::{DensityAccumulator, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: lattice size, particle count, rates, run length, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                          |
/// |------------------------|--------------------------------------------------|
/// | `.source(s)`           | `SimRng::new(config.seed)`                       |
/// | `.initial_lattice(l)`  | `config.particles` placed at random from `source`|
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .initial_lattice(lattice)
///     .build()?;
/// let profile = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: UniformSource = SimRng> {
    config:  SimConfig,
    source:  S,
    initial: Option<Lattice>,
}

impl SimBuilder<SimRng> {
    /// Create a builder whose variate stream is seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let source = SimRng::new(config.seed);
        Self { config, source, initial: None }
    }
}

impl<S: UniformSource> SimBuilder<S> {
    /// Replace the variate stream (e.g. with a finite `ReplaySource`).
    ///
    /// `config.seed` is ignored once a source is supplied.
    pub fn source<T: UniformSource>(self, source: T) -> SimBuilder<T> {
        SimBuilder { config: self.config, source, initial: self.initial }
    }

    /// Start from an explicit state instead of a random placement.
    ///
    /// Its length must equal `config.length`.  `config.particles` is not
    /// checked against it.
    pub fn initial_lattice(mut self, lattice: Lattice) -> Self {
        self.initial = Some(lattice);
        self
    }

    /// Validate inputs, draw the initial state if needed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        let length = self.config.length;

        let lattice = match self.initial {
            Some(l) => {
                if l.len() != length {
                    return Err(SimError::LengthMismatch {
                        expected: length,
                        got:      l.len(),
                        what:     "initial lattice",
                    });
                }
                l
            }
            None => Lattice::random(length, self.config.particles, &mut self.source)?,
        };

        Ok(Sim {
            engine:  TickEngine::new(self.config.rates, length),
            density: DensityAccumulator::new(length),
            clock:   Tick::ZERO,
            config:  self.config,
            lattice,
            source:  self.source,
        })
    }
}
