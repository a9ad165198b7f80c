//! Simulation observer trait for progress reporting and data collection.

use tl_core::{Lane, Tick};
use tl_dynamics::TickReport;
use tl_lattice::Lattice;
use tracing::info;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see committed states.
///
/// # Example: trajectory recorder
///
/// ```rust,ignore
/// struct Trajectory(Vec<Lattice>);
///
/// impl SimObserver for Trajectory {
///     fn on_tick_end(&mut self, _tick: Tick, lattice: &Lattice, _report: &TickReport) {
///         self.0.push(lattice.clone());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's new state has been committed.
    fn on_tick_end(&mut self, _tick: Tick, _lattice: &Lattice, _report: &TickReport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _lattice: &Lattice) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Emits an `info` event every `interval` ticks with the lane populations and
/// the tick's acceptance counts.
pub struct ProgressObserver {
    label:    String,
    interval: u64,
    total:    u64,
}

impl ProgressObserver {
    /// `label` tags every event (e.g. the sweep point); `total` is the run
    /// length used for the percentage.
    pub fn new(label: impl Into<String>, interval: u64, total: u64) -> Self {
        Self { label: label.into(), interval: interval.max(1), total }
    }
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, lattice: &Lattice, report: &TickReport) {
        let done = tick.0 + 1;
        if !done.is_multiple_of(self.interval) {
            return;
        }
        info!(
            run = %self.label,
            tick = done,
            percent = 100.0 * done as f64 / self.total.max(1) as f64,
            lane_a = lattice.count(Lane::A),
            lane_b = lattice.count(Lane::B),
            accepted = report.accepted,
            rejected = report.rejected(),
            "progress",
        );
    }

    fn on_sim_end(&mut self, final_tick: Tick, lattice: &Lattice) {
        info!(
            run = %self.label,
            ticks = final_tick.0,
            particles = lattice.total(),
            "run complete",
        );
    }
}
