//! Time-averaged occupation densities.

use tl_core::Lane;
use tl_lattice::Lattice;

/// Per-site occupancy counters for both lanes.
///
/// Created empty at simulation start and fed one committed lattice per
/// measured tick.  Counters are never reset mid-run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensityAccumulator {
    counts:  [Vec<u64>; 2],
    samples: u64,
}

impl DensityAccumulator {
    pub fn new(length: usize) -> Self {
        Self { counts: [vec![0; length], vec![0; length]], samples: 0 }
    }

    /// Add one committed state to the running totals.
    pub fn record(&mut self, lattice: &Lattice) {
        debug_assert_eq!(lattice.len(), self.counts[0].len());
        for lane in Lane::ALL {
            for (count, &occupied) in self.counts[lane.index()].iter_mut().zip(lattice.lane(lane)) {
                *count += occupied as u64;
            }
        }
        self.samples += 1;
    }

    /// Number of states recorded so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Raw occupancy totals of one lane.
    pub fn counts(&self, lane: Lane) -> &[u64] {
        &self.counts[lane.index()]
    }

    /// Divide every total by `samples`.  All-zero if nothing was recorded.
    pub fn profile(&self) -> DensityProfile {
        let average = |counts: &[u64]| -> Vec<f64> {
            if self.samples == 0 {
                return vec![0.0; counts.len()];
            }
            counts.iter().map(|&c| c as f64 / self.samples as f64).collect()
        };
        DensityProfile {
            lanes:   [average(&self.counts[0]), average(&self.counts[1])],
            samples: self.samples,
        }
    }
}

/// Per-site density in `[0, 1]` for each lane, indexed by site.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityProfile {
    lanes:   [Vec<f64>; 2],
    samples: u64,
}

impl DensityProfile {
    pub fn lane(&self, lane: Lane) -> &[f64] {
        &self.lanes[lane.index()]
    }

    /// Number of lattice states averaged, `T − W` for a complete run.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.lanes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Site-averaged density of one lane.
    pub fn mean(&self, lane: Lane) -> f64 {
        let values = self.lane(lane);
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Consume into `(density_A, density_B)`.
    pub fn into_lanes(self) -> (Vec<f64>, Vec<f64>) {
        let [a, b] = self.lanes;
        (a, b)
    }
}
