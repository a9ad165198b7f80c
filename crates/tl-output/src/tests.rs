//! Integration tests for tl-output.

#[cfg(test)]
mod row_tests {
    use tl_core::Lane;
    use tl_lattice::Lattice;

    use crate::row::{DensityRow, ProfileKey, SnapshotRow, SweepParameter};

    #[test]
    fn file_name_alpha_case() {
        let key = ProfileKey::new("a", SweepParameter::Alpha, 0.3, 0.05);
        assert_eq!(key.file_name(Lane::A), "case_a__laneA__param_alpha_0.30.csv");
        assert_eq!(key.file_name(Lane::B), "case_a__laneB__param_alpha_0.30.csv");
    }

    #[test]
    fn file_name_uses_swept_value() {
        let key = ProfileKey::new("d", SweepParameter::Beta, 0.1, 0.75);
        assert_eq!(key.value(), 0.75);
        assert_eq!(key.file_name(Lane::B), "case_d__laneB__param_beta_0.75.csv");
    }

    #[test]
    fn file_name_rounds_to_two_decimals() {
        let key = ProfileKey::new("c", SweepParameter::Beta, 0.05, 0.125_000_1);
        assert_eq!(key.file_name(Lane::A), "case_c__laneA__param_beta_0.13.csv");
    }

    #[test]
    fn density_rows_are_one_based() {
        let rows = DensityRow::from_lane(&[0.1, 0.2, 0.3]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], DensityRow { site: 1, rho: 0.1 });
        assert_eq!(rows[2].site, 3);
    }

    #[test]
    fn rho_field_matches_printf_g() {
        let field = |rho: f64| DensityRow { site: 1, rho }.rho_field();
        assert_eq!(field(0.0), "0");
        assert_eq!(field(1.0), "1");
        assert_eq!(field(0.5), "0.5");
        assert_eq!(field(0.123456789), "0.123457");
        assert_eq!(field(0.000123456789), "0.000123457");
        assert_eq!(field(0.99999996), "1");
        assert_eq!(field(0.000015), "1.5e-05");
    }

    #[test]
    fn snapshot_renders_lanes() {
        let lattice = Lattice::from_bits(&[1, 0, 1], &[0, 0, 1]).unwrap();
        let row = SnapshotRow::capture(9, &lattice);
        assert_eq!(row.tick, 9);
        assert_eq!(row.lane_a, "#.#");
        assert_eq!(row.lane_b, "..#");
        assert_eq!(row.total, 3);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use tl_core::Lane;
    use tl_lattice::Lattice;
    use tl_sim::{DensityAccumulator, DensityProfile};

    use crate::csv::CsvWriter;
    use crate::row::{ProfileKey, SnapshotRow, SweepParameter};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Two samples of a 4-site lattice: A = [1, .5, 0, 0], B = [0, 0, .5, 1].
    fn sample_profile() -> DensityProfile {
        let mut acc = DensityAccumulator::new(4);
        acc.record(&Lattice::from_bits(&[1, 1, 0, 0], &[0, 0, 1, 1]).unwrap());
        acc.record(&Lattice::from_bits(&[1, 0, 0, 0], &[0, 0, 0, 1]).unwrap());
        acc.profile()
    }

    fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let out = dir.path().join("nested").join("results");
        let w = CsvWriter::new(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(w.dir(), out.as_path());
        assert!(out.join("sweep_summary.csv").exists());
    }

    #[test]
    fn no_snapshot_file_without_snapshots() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let key = ProfileKey::new("a", SweepParameter::Alpha, 0.3, 0.05);
        w.write_profile(&key, &sample_profile()).unwrap();
        w.finish().unwrap();
        assert!(!dir.path().join("snapshots.csv").exists());
    }

    #[test]
    fn rho_written_with_six_significant_digits() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        // Three samples of one site: 1/3 occupancy in lane A.
        let mut acc = DensityAccumulator::new(1);
        acc.record(&Lattice::from_bits(&[1], &[0]).unwrap());
        acc.record(&Lattice::from_bits(&[0], &[0]).unwrap());
        acc.record(&Lattice::from_bits(&[0], &[0]).unwrap());
        let key = ProfileKey::new("b", SweepParameter::Beta, 0.35, 0.2);
        w.write_profile(&key, &acc.profile()).unwrap();

        let (_, rows) = read_rows(&dir.path().join(key.file_name(Lane::A)));
        assert_eq!(rows, [["1", "0.333333"]]);
    }

    #[test]
    fn profile_writes_one_file_per_lane() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let key = ProfileKey::new("b", SweepParameter::Alpha, 0.5, 0.05);
        w.write_profile(&key, &sample_profile()).unwrap();
        w.finish().unwrap();

        assert_eq!(w.written().len(), 2);
        let a = dir.path().join("case_b__laneA__param_alpha_0.50.csv");
        let b = dir.path().join("case_b__laneB__param_alpha_0.50.csv");
        assert!(a.exists());
        assert!(b.exists());

        let (headers, rows) = read_rows(&a);
        assert_eq!(headers, ["i", "rho"]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ["1", "1"]);
        assert_eq!(rows[1], ["2", "0.5"]);
        assert_eq!(rows[3], ["4", "0"]);

        let (_, rows_b) = read_rows(&b);
        let rho: Vec<f64> = rows_b.iter().map(|r| r[1].parse().unwrap()).collect();
        assert_eq!(rho, [0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn summary_row_per_profile() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let profile = sample_profile();
        w.write_profile(&ProfileKey::new("c", SweepParameter::Beta, 0.05, 0.2), &profile).unwrap();
        w.write_profile(&ProfileKey::new("c", SweepParameter::Beta, 0.05, 0.4), &profile).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_rows(&dir.path().join("sweep_summary.csv"));
        assert_eq!(
            headers,
            ["case", "parameter", "entry", "exit_b", "mean_rho_a", "mean_rho_b", "samples"],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "c");
        assert_eq!(rows[0][1], "beta");
        assert_eq!(rows[1][3], "0.4");
        let mean_a: f64 = rows[0][4].parse().unwrap();
        assert!((mean_a - profile.mean(Lane::A)).abs() < 1e-12);
        assert_eq!(rows[0][6], "2");
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let lattice = Lattice::from_bits(&[0, 1], &[1, 0]).unwrap();
        w.write_snapshot(&SnapshotRow::capture(0, &lattice)).unwrap();
        w.write_snapshot(&SnapshotRow::capture(5, &lattice)).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_rows(&dir.path().join("snapshots.csv"));
        assert_eq!(headers, ["tick", "lane_a", "lane_b", "total"]);
        assert_eq!(rows, [["0", ".#", "#.", "2"], ["5", ".#", "#.", "2"]]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tl_core::{Cell, Rates, SimConfig};
    use tl_lattice::LatticeBuilder;
    use tl_sim::SimBuilder;

    use crate::error::OutputResult;
    use crate::observer::SnapshotObserver;
    use crate::row::{ProfileKey, SnapshotRow};
    use crate::writer::OutputWriter;
    use tl_sim::DensityProfile;

    /// In-memory writer recording everything it is handed.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<SnapshotRow>,
        finished:  usize,
    }

    impl OutputWriter for MemWriter {
        fn write_profile(&mut self, _key: &ProfileKey, _profile: &DensityProfile) -> OutputResult<()> {
            Ok(())
        }
        fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
            self.snapshots.push(row.clone());
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// One particle on A[0] of a 5-site lattice stepping right every tick.
    fn walker_config(total_ticks: u64) -> SimConfig {
        SimConfig {
            length: 5,
            particles: 1,
            rates: Rates { move_a: 1.0, ..Rates::ZERO },
            total_ticks,
            warmup_ticks: 0,
            seed: 1,
        }
    }

    fn run(total_ticks: u64, interval: u64) -> MemWriter {
        let start = LatticeBuilder::new(5).occupy(Cell::a(0)).build().unwrap();
        let mut sim = SimBuilder::new(walker_config(total_ticks))
            .initial_lattice(start)
            .build()
            .unwrap();
        let mut obs = SnapshotObserver::new(MemWriter::default(), interval);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        obs.into_writer()
    }

    #[test]
    fn samples_on_interval() {
        let w = run(4, 2);
        let ticks: Vec<u64> = w.snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [2, 4]);
        assert_eq!(w.snapshots[0].lane_a, "..#..");
        assert_eq!(w.snapshots[1].lane_a, "....#");
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn final_state_written_off_interval() {
        let w = run(3, 2);
        let ticks: Vec<u64> = w.snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [2, 3]);
        assert_eq!(w.snapshots[1].lane_a, "...#.");
    }

    #[test]
    fn zero_interval_writes_only_final_state() {
        let w = run(3, 0);
        assert_eq!(w.snapshots.len(), 1);
        assert_eq!(w.snapshots[0].tick, 3);
        assert_eq!(w.snapshots[0].total, 1);
    }
}
