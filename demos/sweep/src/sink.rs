//! Writes each finished run's profile while the rest of the sweep continues.

use std::sync::{Mutex, PoisonError};

use tracing::{error, info};

use tl_output::{CsvWriter, OutputError, OutputResult, OutputWriter};
use tl_sim::{DensityProfile, SimResult};

use crate::plan::PlannedRun;

struct SinkState {
    writer:    CsvWriter,
    failed:    usize,
    first_err: Option<OutputError>,
}

/// Shared by every worker of a batch; one run's files are written under the
/// lock so the summary rows never interleave.
pub struct ProfileSink<'a> {
    plan:  &'a [PlannedRun],
    state: Mutex<SinkState>,
}

/// What the sink saw once the batch is over.
#[derive(Debug)]
pub struct SinkReport {
    pub files:  usize,
    pub failed: usize,
}

impl<'a> ProfileSink<'a> {
    pub fn new(plan: &'a [PlannedRun], writer: CsvWriter) -> Self {
        Self {
            plan,
            state: Mutex::new(SinkState { writer, failed: 0, first_err: None }),
        }
    }

    /// Record the outcome of run `index`.  Write errors are kept and reported
    /// by [`finish`](Self::finish).
    pub fn record(&self, index: usize, result: &SimResult<DensityProfile>) {
        let run = &self.plan[index];
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok(profile) => match state.writer.write_profile(&run.key, profile) {
                Ok(()) => info!(run = %run.label(), "profile written"),
                Err(e) => {
                    error!(run = %run.label(), error = %e, "writing profile failed");
                    if state.first_err.is_none() {
                        state.first_err = Some(e);
                    }
                }
            },
            Err(e) => {
                error!(run = %run.label(), error = %e, "run failed");
                state.failed += 1;
            }
        }
    }

    /// Flush the writer and return the first write error, if any.
    pub fn finish(self) -> OutputResult<SinkReport> {
        let mut state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        if let Some(e) = state.first_err.take() {
            return Err(e);
        }
        state.writer.finish()?;
        Ok(SinkReport { files: state.writer.written().len(), failed: state.failed })
    }
}

#[cfg(test)]
mod tests {
    use tl_core::Lane;
    use tl_sim::{run_batch_with, run_simulation, NoopObserver};

    use super::*;
    use crate::plan::{CaseSpec, SweepFile};
    use tl_output::SweepParameter;

    fn small_sweep() -> SweepFile {
        SweepFile {
            length:       12,
            particles:    6,
            total_ticks:  60,
            warmup_ticks: 10,
            cases: vec![CaseSpec {
                name:      "t".to_owned(),
                parameter: SweepParameter::Alpha,
                fixed:     0.3,
                values:    vec![0.2, 0.4, 0.6, 0.8],
            }],
            ..SweepFile::default()
        }
    }

    #[test]
    fn every_finished_run_is_written_during_the_batch() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let plan = small_sweep().plan();
        let configs: Vec<_> = plan.iter().map(|r| r.config.clone()).collect();
        let sink = ProfileSink::new(&plan, CsvWriter::new(dir.path()).unwrap());

        let results = run_batch_with(&configs, |_, _| NoopObserver, |i, r| sink.record(i, r));
        let report = sink.finish().unwrap();

        assert_eq!(report.failed, 0);
        assert_eq!(report.files, 2 * plan.len());
        for (run, result) in plan.iter().zip(&results) {
            assert_eq!(result, &run_simulation(&run.config));
            assert!(dir.path().join(run.key.file_name(Lane::A)).exists());
            assert!(dir.path().join(run.key.file_name(Lane::B)).exists());
        }
        assert!(!dir.path().join("snapshots.csv").exists());
    }

    #[test]
    fn failed_runs_are_counted_not_written() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut plan = small_sweep().plan();
        plan[1].config.particles = 1000;
        let configs: Vec<_> = plan.iter().map(|r| r.config.clone()).collect();
        let sink = ProfileSink::new(&plan, CsvWriter::new(dir.path()).unwrap());

        run_batch_with(&configs, |_, _| NoopObserver, |i, r| sink.record(i, r));
        let report = sink.finish().unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.files, 2 * (plan.len() - 1));
        assert!(!dir.path().join(plan[1].key.file_name(Lane::A)).exists());
    }
}
