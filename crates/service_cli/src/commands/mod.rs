//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod sweep;
pub mod table;

use std::sync::Arc;

use clap::ValueEnum;
use pricer_core::types::Date;
use pricer_models::models::GeneralizedBlackScholesProcess;
use pricer_pricing::engine::McEngine;
use pricer_pricing::mc::SimulationConfiguration;

use crate::config::SimulationSettings;
use crate::Result;

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Simulation configuration with the step and sample counts overridden.
pub(crate) fn simulation_config(
    settings: &SimulationSettings,
    time_steps: usize,
    samples: usize,
) -> Result<SimulationConfiguration> {
    let config = SimulationConfiguration::builder()
        .time_steps(time_steps)
        .samples(samples)
        .seed(settings.seed)
        .brownian_bridge(settings.brownian_bridge)
        .antithetic(settings.antithetic)
        .build()?;
    Ok(config)
}

/// Selecting engines on the live process, parameters live then frozen.
pub(crate) fn live_and_frozen(
    process: &Arc<GeneralizedBlackScholesProcess>,
    evaluation_date: Date,
    config: &SimulationConfiguration,
) -> (McEngine, McEngine) {
    let engine = |frozen: bool| {
        McEngine::new(
            Arc::clone(process),
            evaluation_date,
            config.with_frozen_parameters(frozen),
        )
    };
    (engine(false), engine(true))
}
