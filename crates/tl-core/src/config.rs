//! Run configuration and its validation.
//!
//! Every option the engine reads is a field here; the engine has no hidden
//! defaults.  The sweep driver builds one `SimConfig` per run and varies only
//! the two boundary rates.

use crate::{Tick, TlError, TlResult};

// ── Rates ─────────────────────────────────────────────────────────────────────

/// Per-tick event probabilities.  Every field must lie in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rates {
    /// Forward hop `A[i] → A[i+1]`.
    pub move_a: f64,
    /// Backward hop `B[i] → B[i-1]`.
    pub move_b: f64,
    /// Lane switch `A[i] → B[i]`.
    pub a_to_b: f64,
    /// Lane switch `B[i] → A[i]`.
    pub b_to_a: f64,
    /// Injection into `A[0]` (α).
    pub entry: f64,
    /// Ejection from `B[0]` (β).
    pub exit_b: f64,
}

impl Rates {
    /// All events disabled.  The lattice is frozen under these rates.
    pub const ZERO: Rates = Rates {
        move_a: 0.0,
        move_b: 0.0,
        a_to_b: 0.0,
        b_to_a: 0.0,
        entry:  0.0,
        exit_b: 0.0,
    };

    /// Copy of `self` with the two boundary rates replaced.
    pub fn with_boundary(self, entry: f64, exit_b: f64) -> Rates {
        Rates { entry, exit_b, ..self }
    }

    /// Check every rate lies in `[0, 1]`.  NaN is rejected.
    pub fn validate(&self) -> TlResult<()> {
        let fields: [(&'static str, f64); 6] = [
            ("move_a", self.move_a),
            ("move_b", self.move_b),
            ("a_to_b", self.a_to_b),
            ("b_to_a", self.b_to_a),
            ("entry", self.entry),
            ("exit_b", self.exit_b),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(TlError::invalid(name, format!("rate {value} is outside [0, 1]")));
            }
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration of one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Lattice length L (sites per lane).  Must be at least 1.
    pub length: usize,

    /// Initial particle count N, placed across both lanes.  `0 ≤ N ≤ 2L`.
    pub particles: usize,

    /// Event probabilities.
    pub rates: Rates,

    /// Total ticks T to simulate.
    pub total_ticks: u64,

    /// Burn-in ticks W excluded from density averaging.  `W < T`.
    pub warmup_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Validate every precondition of a run.
    pub fn validate(&self) -> TlResult<()> {
        if self.length == 0 {
            return Err(TlError::invalid("length", "lattice must have at least one site"));
        }
        let capacity = self.length.saturating_mul(2);
        if self.particles > capacity {
            return Err(TlError::invalid(
                "particles",
                format!("{} particles do not fit in 2 × {} cells", self.particles, self.length),
            ));
        }
        self.rates.validate()?;
        if self.warmup_ticks >= self.total_ticks {
            return Err(TlError::invalid(
                "warmup_ticks",
                format!(
                    "warm-up of {} ticks leaves nothing to average in a {}-tick run",
                    self.warmup_ticks, self.total_ticks,
                ),
            ));
        }
        Ok(())
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// First tick whose committed state is counted by the density accumulator.
    #[inline]
    pub fn first_measured_tick(&self) -> Tick {
        Tick(self.warmup_ticks)
    }

    /// Number of ticks contributing to the density average, `T − W`.
    #[inline]
    pub fn measured_ticks(&self) -> u64 {
        self.total_ticks.saturating_sub(self.warmup_ticks)
    }

    /// Copy of `self` with new boundary rates and seed: one point of a sweep.
    pub fn sweep_point(&self, entry: f64, exit_b: f64, seed: u64) -> SimConfig {
        SimConfig {
            rates: self.rates.with_boundary(entry, exit_b),
            seed,
            ..self.clone()
        }
    }
}
