//! `sweep` — boundary-rate sweeps of the two-lane exclusion process.
//!
//! Runs every point of four cases (two varying the injection rate α, two the
//! ejection rate β) on a 500-site lattice with 250 particles, 5 M ticks each
//! of which the first 1 M are warm-up, and writes one `i,rho` CSV per lane and
//! point into `results/`, plus `sweep_summary.csv`.
//!
//! Run with:
//!   cargo run -p sweep --profile fast
//!   cargo run -p sweep --release -- my_sweep.json
//!   cargo run -p sweep -- --print-default > my_sweep.json
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod plan;
mod sink;

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tl_output::CsvWriter;
use tl_sim::{run_batch_with, ProgressObserver};

use plan::SweepFile;
use sink::ProfileSink;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ── Sweep definition ──────────────────────────────────────────────────────
    let arg = std::env::args().nth(1);
    let sweep = match arg.as_deref() {
        Some("--print-default") => {
            println!("{}", serde_json::to_string_pretty(&SweepFile::default())?);
            return Ok(());
        }
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str::<SweepFile>(&text).with_context(|| format!("parsing {path}"))?
        }
        None => SweepFile::default(),
    };

    let plan = sweep.plan();
    info!(
        runs = plan.len(),
        cases = sweep.cases.len(),
        length = sweep.length,
        particles = sweep.particles,
        total_ticks = sweep.total_ticks,
        warmup_ticks = sweep.warmup_ticks,
        "sweep planned",
    );

    // Reject bad parameters before spending minutes on the valid runs.
    for run in &plan {
        run.config
            .validate()
            .with_context(|| format!("invalid parameters for run {}", run.label()))?;
    }

    // ── Runs ──────────────────────────────────────────────────────────────────
    // Each profile is written as soon as its run ends, so an interrupted sweep
    // keeps every finished point.
    let writer = CsvWriter::new(&sweep.output_dir)
        .with_context(|| format!("creating {}", sweep.output_dir.display()))?;
    let sink = ProfileSink::new(&plan, writer);
    let configs: Vec<_> = plan.iter().map(|run| run.config.clone()).collect();

    let t0 = Instant::now();
    run_batch_with(
        &configs,
        |i, config| {
            let run = &plan[i];
            info!(run = %run.label(), seed = config.seed, "run start");
            ProgressObserver::new(run.label(), sweep.progress_interval, config.total_ticks)
        },
        |i, result| sink.record(i, result),
    );
    let report = sink.finish().context("writing profiles")?;

    info!(
        elapsed_s = t0.elapsed().as_secs_f64(),
        files = report.files,
        dir = %sweep.output_dir.display(),
        failed = report.failed,
        "sweep finished",
    );
    if report.failed > 0 {
        anyhow::bail!("{} of {} runs failed", report.failed, plan.len());
    }
    Ok(())
}
