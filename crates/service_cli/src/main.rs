//! frozen-mc - Live versus frozen-parameter Monte Carlo comparisons
//!
//! # Commands
//!
//! - `frozen-mc table` - Price the European, Asian and barrier options with
//!   the legacy, live and frozen engines and print the timings
//! - `frozen-mc sweep` - Compare live and frozen engines over ranges of time
//!   steps and sample counts, writing `results_time.csv` and
//!   `results_samples.csv`
//! - `frozen-mc check` - Validate the configuration
//!
//! Settings are read from `frozen_mc.toml` (or `--config`), overridden by
//! `FROZEN_MC_*` environment variables and finally by command-line flags.
//! Logging honours `RUST_LOG`; `--verbose` raises the default level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod market;
mod report;

pub use error::{CliError, Result};

use commands::OutputFormat;
use config::CliConfig;
use market::OptionKind;

/// Frozen-parameter Monte Carlo comparison CLI
#[derive(Parser)]
#[command(name = "frozen-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "frozen_mc.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Three-way comparison table (legacy, live, frozen)
    Table {
        /// Options to price
        #[arg(
            short,
            long,
            value_enum,
            value_delimiter = ',',
            default_values_t = OptionKind::ALL
        )]
        kinds: Vec<OptionKind>,

        /// Number of time steps
        #[arg(long)]
        steps: Option<usize>,

        /// Number of Monte Carlo samples
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Add the closed-form European price on frozen parameters
        #[arg(long)]
        analytic: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Live against frozen over time-step and sample ranges
    Sweep {
        /// Options to price
        #[arg(
            short,
            long,
            value_enum,
            value_delimiter = ',',
            default_values_t = [OptionKind::European, OptionKind::Barrier]
        )]
        kinds: Vec<OptionKind>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Validate the configuration
    Check {
        /// Print the effective configuration as TOML
        #[arg(short, long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Table {
            kinds,
            steps,
            samples,
            seed,
            analytic,
            format,
        } => {
            if let Some(steps) = steps {
                config.simulation.time_steps = steps;
            }
            if let Some(samples) = samples {
                config.simulation.samples = samples;
            }
            if let Some(seed) = seed {
                config.simulation.seed = seed;
            }
            commands::table::run(&config, &kinds, analytic, format)
        }
        Commands::Sweep { kinds, output_dir } => {
            if let Some(dir) = output_dir {
                config.sweep.output_dir = dir;
            }
            commands::sweep::run(&config, &kinds)
        }
        Commands::Check { print } => commands::check::run(&config, print),
    }
}
