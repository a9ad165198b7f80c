//! Sweep file format and its expansion into one `SimConfig` per run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tl_core::{Rates, SimConfig, SimRng};
use tl_output::{ProfileKey, SweepParameter};

// ── File format ───────────────────────────────────────────────────────────────

/// A whole sweep: base parameters shared by every run plus the case list.
///
/// Every field is optional in the JSON file; missing ones take the values of
/// [`SweepFile::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepFile {
    pub length:            usize,
    pub particles:         usize,
    pub move_a:            f64,
    pub move_b:            f64,
    pub a_to_b:            f64,
    pub b_to_a:            f64,
    pub total_ticks:       u64,
    pub warmup_ticks:      u64,
    /// Root seed; run `k` of the expanded plan uses `SimRng::run_seed(seed, k)`.
    pub seed:              u64,
    pub output_dir:        PathBuf,
    /// Ticks between progress events of each run.
    pub progress_interval: u64,
    pub cases:             Vec<CaseSpec>,
}

/// One case: a fixed value for one boundary rate, a list for the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSpec {
    pub name:      String,
    /// The rate that varies across `values`.
    pub parameter: SweepParameter,
    /// Value of the rate that does not vary.
    pub fixed:     f64,
    pub values:    Vec<f64>,
}

impl CaseSpec {
    fn new(name: &str, parameter: SweepParameter, fixed: f64, values: &[f64]) -> Self {
        Self { name: name.to_owned(), parameter, fixed, values: values.to_vec() }
    }

    /// `(entry, exit_b)` for one swept value.
    fn boundary(&self, value: f64) -> (f64, f64) {
        match self.parameter {
            SweepParameter::Alpha => (value, self.fixed),
            SweepParameter::Beta => (self.fixed, value),
        }
    }
}

impl Default for SweepFile {
    fn default() -> Self {
        use SweepParameter::{Alpha, Beta};
        Self {
            length:            500,
            particles:         250,
            move_a:            0.8,
            move_b:            0.8,
            a_to_b:            0.01,
            b_to_a:            0.01,
            total_ticks:       5_000_000,
            warmup_ticks:      1_000_000,
            seed:              42,
            output_dir:        PathBuf::from("results"),
            progress_interval: 500_000,
            cases: vec![
                CaseSpec::new("a", Alpha, 0.05, &[0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]),
                CaseSpec::new("b", Beta, 0.35, &[0.20, 0.30, 0.32, 0.34, 0.36, 0.38, 0.40, 0.50]),
                CaseSpec::new("c", Beta, 0.7, &[0.3, 0.4, 0.5, 0.6, 0.65, 0.7, 0.75, 0.8, 0.85, 0.9]),
                CaseSpec::new("d", Alpha, 0.4, &[0.0, 0.15, 0.30, 0.45, 0.50, 0.53, 0.56, 0.60, 0.75, 0.90]),
            ],
        }
    }
}

// ── Expansion ─────────────────────────────────────────────────────────────────

/// One planned run.
#[derive(Debug, Clone)]
pub struct PlannedRun {
    pub key:    ProfileKey,
    pub config: SimConfig,
}

impl PlannedRun {
    /// Short label used in log events, e.g. `a/alpha=0.30`.
    pub fn label(&self) -> String {
        format!("{}/{}={:.2}", self.key.case, self.key.parameter, self.key.value())
    }
}

impl SweepFile {
    /// Interior rates shared by every run; boundary rates are filled per run.
    fn interior_rates(&self) -> Rates {
        Rates {
            move_a: self.move_a,
            move_b: self.move_b,
            a_to_b: self.a_to_b,
            b_to_a: self.b_to_a,
            ..Rates::ZERO
        }
    }

    /// Expand every case into its runs, in file order.
    pub fn plan(&self) -> Vec<PlannedRun> {
        let base = SimConfig {
            length:       self.length,
            particles:    self.particles,
            rates:        self.interior_rates(),
            total_ticks:  self.total_ticks,
            warmup_ticks: self.warmup_ticks,
            seed:         self.seed,
        };

        self.cases
            .iter()
            .flat_map(|case| case.values.iter().map(move |&v| (case, v)))
            .enumerate()
            .map(|(k, (case, value))| {
                let (entry, exit_b) = case.boundary(value);
                let seed = SimRng::run_seed(self.seed, k as u64);
                PlannedRun {
                    key:    ProfileKey::new(case.name.clone(), case.parameter, entry, exit_b),
                    config: base.sweep_point(entry, exit_b, seed),
                }
            })
            .collect()
    }
}
