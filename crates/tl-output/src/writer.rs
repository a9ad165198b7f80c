//! The `OutputWriter` trait implemented by backend writers.

use tl_sim::DensityProfile;

use crate::{OutputResult, ProfileKey, SnapshotRow};

/// Trait implemented by output backends.
///
/// Errors raised from inside an observer are stored rather than returned; see
/// [`SnapshotObserver::take_error`][crate::SnapshotObserver::take_error].
pub trait OutputWriter {
    /// Write both lanes of one run's density profile.
    fn write_profile(&mut self, key: &ProfileKey, profile: &DensityProfile) -> OutputResult<()>;

    /// Write one sampled lattice state.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
