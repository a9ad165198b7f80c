//! Uniform variate streams consumed by the update engine.
//!
//! # Determinism strategy
//!
//! The engine never touches `rand` directly.  It pulls `f64` variates in
//! `[0, 1)` from a [`UniformSource`] in a fixed traversal order, so a run is a
//! pure function of its configuration and the stream.  Two sources exist:
//!
//! - [`SimRng`]: an unbounded `SmallRng` stream seeded from `u64`.
//! - [`ReplaySource`]: a finite, pre-generated list of variates.  Running out
//!   is reported as [`TlError::ExhaustedRandomness`].
//!
//! Independent runs of a sweep each get their own `SimRng`, derived from a
//! root seed by mixing in the run index with the 64-bit fractional part of the
//! golden ratio, so consecutive run indices land far apart in seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{TlError, TlResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A stream of uniform variates in `[0, 1)`.
pub trait UniformSource {
    /// Next variate, or `ExhaustedRandomness` if the stream is finite and empty.
    fn next_uniform(&mut self) -> TlResult<f64>;

    /// Bernoulli trial: draw one variate and report whether it falls below `p`.
    ///
    /// Always consumes exactly one variate, so `p = 0` and `p = 1` still
    /// advance the stream.
    #[inline]
    fn trial(&mut self, p: f64) -> TlResult<bool> {
        Ok(self.next_uniform()? < p)
    }

    /// Index in `0..n` (`n > 0`) from a single variate, as `⌊u·n⌋`.
    ///
    /// Slightly biased: the 2^53 possible values of `u` do not split evenly
    /// into `n` buckets, so some indices are favoured by a relative margin of
    /// order `n / 2^53`.  Negligible for lattice sizes; in exchange placement
    /// consumes exactly one variate per particle from any `UniformSource`,
    /// replays included, which `Rng::gen_range` cannot offer.
    #[inline]
    fn index_below(&mut self, n: usize) -> TlResult<usize> {
        let u = self.next_uniform()?;
        // `u < 1` so the product is below `n`; the `min` guards rounding.
        Ok(((u * n as f64) as usize).min(n - 1))
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> TlResult<f64> {
        (**self).next_uniform()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG: the default, unbounded variate stream.
///
/// One `SimRng` belongs to exactly one run.  Concurrent runs each hold their
/// own instance (see [`SimRng::for_run`]); nothing is shared.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Deterministic per-run stream derived from a sweep's root seed.
    pub fn for_run(root_seed: u64, run_index: u64) -> Self {
        Self::new(Self::run_seed(root_seed, run_index))
    }

    /// The seed [`for_run`](Self::for_run) would use.
    #[inline]
    pub fn run_seed(root_seed: u64, run_index: u64) -> u64 {
        root_seed ^ run_index.wrapping_add(1).wrapping_mul(MIXING_CONSTANT)
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_uniform(&mut self) -> TlResult<f64> {
        Ok(self.0.r#gen::<f64>())
    }
}

// ── ReplaySource ──────────────────────────────────────────────────────────────

/// A finite, pre-generated variate stream.
///
/// Used to script exact event sequences in tests and to replay a recorded
/// stream.  Values are handed out in order; once they run out every further
/// draw fails with [`TlError::ExhaustedRandomness`].
#[derive(Clone, Debug, Default)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    /// Wrap `values`.  Each must lie in `[0, 1)`.
    pub fn new(values: Vec<f64>) -> TlResult<Self> {
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..1.0).contains(*v))
        {
            return Err(TlError::invalid(
                "replay values",
                format!("variate #{i} = {v} is outside [0, 1)"),
            ));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Record `count` variates from `rng` for later replay.
    pub fn record(rng: &mut SimRng, count: usize) -> Self {
        let values = (0..count).map(|_| rng.0.r#gen::<f64>()).collect();
        Self { values, cursor: 0 }
    }

    /// Variates handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Variates still available.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl UniformSource for ReplaySource {
    #[inline]
    fn next_uniform(&mut self) -> TlResult<f64> {
        let v = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(TlError::ExhaustedRandomness { consumed: self.cursor })?;
        self.cursor += 1;
        Ok(v)
    }
}
