//! Sweep command implementation
//!
//! Runs live-versus-frozen comparisons over a range of time steps (at the
//! configured sample count) and over a range of sample counts (at the
//! configured time steps), writing one CSV file per range.

use std::path::{Path, PathBuf};

use pricer_pricing::comparison::{ComparativeTimedPricer, TimedResult};
use pricer_pricing::engine::PricedInstrument;
use tracing::info;

use super::{live_and_frozen, simulation_config};
use crate::config::CliConfig;
use crate::market::{build_instrument, build_process, OptionKind};
use crate::report::{write_sweep, SweepRow, SAMPLES_SWEEP_FILE, TIME_SWEEP_FILE};
use crate::Result;

/// Run the sweep command
pub fn run(config: &CliConfig, kinds: &[OptionKind]) -> Result<()> {
    info!("Running sweeps...");
    info!("  Time steps: {:?}", config.sweep.time_steps);
    info!("  Samples: {:?}", config.sweep.samples);
    info!("  Output directory: {}", config.sweep.output_dir);

    let (time_path, samples_path) = execute(config, kinds)?;

    println!("Wrote {}", time_path.display());
    println!("Wrote {}", samples_path.display());
    info!("Sweep complete");
    Ok(())
}

/// Runs both sweeps and writes the two report files.
pub fn execute(config: &CliConfig, kinds: &[OptionKind]) -> Result<(PathBuf, PathBuf)> {
    config.ensure_valid()?;
    let output_dir = Path::new(&config.sweep.output_dir);
    std::fs::create_dir_all(output_dir)?;

    let samples = config.simulation.samples;
    let steps = config.simulation.time_steps;
    let settings = &config.sweep;
    let by_steps: Vec<_> = settings.time_steps.iter().map(|&n| (n, samples)).collect();
    let by_samples: Vec<_> = settings.samples.iter().map(|&n| (steps, n)).collect();

    let time_path = output_dir.join(TIME_SWEEP_FILE);
    write_sweep(&time_path, &sweep(config, kinds, &by_steps)?)?;
    let samples_path = output_dir.join(SAMPLES_SWEEP_FILE);
    write_sweep(&samples_path, &sweep(config, kinds, &by_samples)?)?;
    Ok((time_path, samples_path))
}

/// One row per `(time_steps, samples)` point and option kind.
pub fn sweep(
    config: &CliConfig,
    kinds: &[OptionKind],
    points: &[(usize, usize)],
) -> Result<Vec<SweepRow>> {
    let process = build_process(&config.market)?;
    let today = config.market.evaluation_date;
    let mut pricer = ComparativeTimedPricer::new();
    let mut rows = Vec::with_capacity(points.len() * kinds.len());

    for &(time_steps, samples) in points {
        let sim = simulation_config(&config.simulation, time_steps, samples)?;
        for &kind in kinds {
            let mut instrument = PricedInstrument::new(build_instrument(kind, &config.options)?);
            let (live, frozen) = live_and_frozen(&process, today, &sim);
            let (error, elapsed_seconds) = match pricer.two_way(&mut instrument, live, frozen)? {
                TimedResult::TwoWay {
                    error_magnitude,
                    elapsed_seconds,
                } => (error_magnitude, elapsed_seconds),
                TimedResult::ThreeWay {
                    frozen_error,
                    elapsed_seconds,
                    ..
                } => (frozen_error, elapsed_seconds),
            };
            rows.push(SweepRow {
                option_type: kind.report_label().to_string(),
                time_steps,
                samples,
                error,
                elapsed_seconds,
            });
        }
    }
    Ok(rows)
}
