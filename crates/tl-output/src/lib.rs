//! `tl-output` — simulation output writers for the rust_tl simulator.
//!
//! The CSV backend writes three kinds of file into one output directory:
//!
//! | File                                              | Contents                          |
//! |---------------------------------------------------|-----------------------------------|
//! | `case_<c>__lane<L>__param_<p>_<v>.csv`            | `i,rho` — one density profile     |
//! | `sweep_summary.csv`                               | one row per profile pair          |
//! | `snapshots.csv`                                   | sampled lattice states            |
//!
//! Profiles are written by the sweep driver through [`OutputWriter`];
//! snapshots come from [`SnapshotObserver`], which implements
//! `tl_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tl_output::{CsvWriter, OutputWriter, ProfileKey, SweepParameter};
//!
//! let mut writer = CsvWriter::new(Path::new("results"))?;
//! let key = ProfileKey::new("a", SweepParameter::Alpha, 0.3, 0.05);
//! writer.write_profile(&key, &profile)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotObserver;
pub use row::{DensityRow, ProfileKey, SnapshotRow, SweepParameter};
pub use writer::OutputWriter;
