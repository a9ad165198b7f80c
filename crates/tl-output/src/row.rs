//! Plain data row types written by output backends.

use std::fmt;

use tl_core::Lane;
use tl_lattice::Lattice;

/// Which boundary rate a sweep case varies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepParameter {
    /// Injection rate into `A[0]`.
    Alpha,
    /// Ejection rate from `B[0]`.
    Beta,
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepParameter::Alpha => f.write_str("alpha"),
            SweepParameter::Beta => f.write_str("beta"),
        }
    }
}

/// Identifies one run of a sweep: the case label, the varied parameter, and
/// the boundary rates actually used.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileKey {
    pub case:      String,
    pub parameter: SweepParameter,
    pub entry:     f64,
    pub exit_b:    f64,
}

impl ProfileKey {
    pub fn new(case: impl Into<String>, parameter: SweepParameter, entry: f64, exit_b: f64) -> Self {
        Self { case: case.into(), parameter, entry, exit_b }
    }

    /// Value of the varied parameter.
    pub fn value(&self) -> f64 {
        match self.parameter {
            SweepParameter::Alpha => self.entry,
            SweepParameter::Beta => self.exit_b,
        }
    }

    /// `case_<case>__lane<lane>__param_<parameter>_<value:.2>.csv`
    pub fn file_name(&self, lane: Lane) -> String {
        format!(
            "case_{}__lane{}__param_{}_{:.2}.csv",
            self.case,
            lane,
            self.parameter,
            self.value(),
        )
    }
}

/// One line of a density profile file.  `site` is 1-based.
///
/// `rho` is written with six significant digits in `%g` form (`0.123457`,
/// `1`, `1.5e-05`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityRow {
    pub site: usize,
    pub rho:  f64,
}

impl DensityRow {
    /// Rows for a whole lane, numbering sites from 1.
    pub fn from_lane(densities: &[f64]) -> Vec<DensityRow> {
        densities
            .iter()
            .enumerate()
            .map(|(i, &rho)| DensityRow { site: i + 1, rho })
            .collect()
    }

    /// `rho` as text, six significant digits, trailing zeros dropped.
    pub fn rho_field(&self) -> String {
        significant6(self.rho)
    }
}

fn significant6(x: f64) -> String {
    if x == 0.0 || !x.is_finite() {
        return x.to_string();
    }
    // Round first so that e.g. 0.99999996 is classified as 1.
    let sci = format!("{x:.5e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..6).contains(&exp) {
        let decimals = (5 - exp).max(0) as usize;
        trim_zeros(format!("{x:.decimals$}"))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa.to_owned()), exp.abs())
    }
}

fn trim_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// A sampled lattice state, both lanes rendered as `#`/`.` strings.
///
/// `tick` is the number of ticks completed when the state was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub tick:   u64,
    pub lane_a: String,
    pub lane_b: String,
    pub total:  usize,
}

impl SnapshotRow {
    pub fn capture(tick: u64, lattice: &Lattice) -> Self {
        let render = |lane: Lane| -> String {
            lattice.lane(lane).iter().map(|&o| if o { '#' } else { '.' }).collect()
        };
        Self {
            tick,
            lane_a: render(Lane::A),
            lane_b: render(Lane::B),
            total:  lattice.total(),
        }
    }
}
