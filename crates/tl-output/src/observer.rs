//! `SnapshotObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tl_core::Tick;
use tl_dynamics::TickReport;
use tl_lattice::Lattice;
use tl_sim::SimObserver;

use crate::row::SnapshotRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that samples the lattice every `interval` ticks and
/// writes it to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SnapshotObserver<W: OutputWriter> {
    writer:     W,
    interval:   u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotObserver<W> {
    /// Sample whenever the number of completed ticks is a multiple of
    /// `interval`.  An interval of 0 disables periodic sampling; the final
    /// state is always written.
    pub fn new(writer: W, interval: u64) -> Self {
        Self { writer, interval, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn samples(&self, completed: Tick) -> bool {
        self.interval != 0 && completed.0.is_multiple_of(self.interval)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, lattice: &Lattice, _report: &TickReport) {
        let completed = tick.next();
        if !self.samples(completed) {
            return;
        }
        let result = self.writer.write_snapshot(&SnapshotRow::capture(completed.0, lattice));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, lattice: &Lattice) {
        // Already written by `on_tick_end` when the last tick hit the interval.
        if final_tick == Tick::ZERO || !self.samples(final_tick) {
            let result = self.writer.write_snapshot(&SnapshotRow::capture(final_tick.0, lattice));
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
