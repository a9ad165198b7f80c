//! CSV output backend.
//!
//! Creates the output directory if needed and `sweep_summary.csv` inside it.
//! `snapshots.csv` is opened on the first snapshot, so runs without a
//! snapshot observer leave no empty file behind.
//!
//! Each profile passed to `write_profile` adds two more files, one per lane,
//! named by [`ProfileKey::file_name`].

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::Writer;
use tl_core::Lane;
use tl_sim::DensityProfile;

use crate::row::DensityRow;
use crate::writer::OutputWriter;
use crate::{OutputResult, ProfileKey, SnapshotRow};

/// Writes density profiles, a sweep summary and lattice snapshots as CSV.
pub struct CsvWriter {
    dir:       PathBuf,
    summary:   Writer<File>,
    snapshots: Option<Writer<File>>,
    written:   Vec<PathBuf>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` (and parents) if missing, open the summary file and write
    /// its header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut summary = Writer::from_path(dir.join("sweep_summary.csv"))?;
        summary.write_record(["case", "parameter", "entry", "exit_b", "mean_rho_a", "mean_rho_b", "samples"])?;

        Ok(Self {
            dir: dir.to_path_buf(),
            summary,
            snapshots: None,
            written: Vec::new(),
            finished: false,
        })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Profile files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_lane(&mut self, key: &ProfileKey, lane: Lane, densities: &[f64]) -> OutputResult<()> {
        let path = self.dir.join(key.file_name(lane));
        let mut out = Writer::from_path(&path)?;
        out.write_record(["i", "rho"])?;
        for row in DensityRow::from_lane(densities) {
            out.write_record(&[row.site.to_string(), row.rho_field()])?;
        }
        out.flush()?;
        self.written.push(path);
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_profile(&mut self, key: &ProfileKey, profile: &DensityProfile) -> OutputResult<()> {
        for lane in Lane::ALL {
            self.write_lane(key, lane, profile.lane(lane))?;
        }
        self.summary.write_record(&[
            key.case.clone(),
            key.parameter.to_string(),
            key.entry.to_string(),
            key.exit_b.to_string(),
            profile.mean(Lane::A).to_string(),
            profile.mean(Lane::B).to_string(),
            profile.samples().to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        let writer = match self.snapshots.take() {
            Some(w) => w,
            None => {
                let mut w = Writer::from_path(self.dir.join("snapshots.csv"))?;
                w.write_record(["tick", "lane_a", "lane_b", "total"])?;
                w
            }
        };
        let snapshots = self.snapshots.insert(writer);
        snapshots.write_record(&[
            row.tick.to_string(),
            row.lane_a.clone(),
            row.lane_b.clone(),
            row.total.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summary.flush()?;
        if let Some(w) = &mut self.snapshots {
            w.flush()?;
        }
        Ok(())
    }
}
