//! CLI error type.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::DateError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_pricing::frozen::FreezeError;
use pricer_pricing::mc::EngineError;
use thiserror::Error;

/// Errors surfaced by the `frozen-mc` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration file error: {0}")]
    Config(String),

    #[error("Environment variable {name}: cannot parse {value:?}")]
    EnvOverride { name: &'static str, value: String },

    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    #[error("Pricing error: {0}")]
    Engine(#[from] EngineError),

    #[error("Parameter extraction error: {0}")]
    Freeze(#[from] FreezeError),

    #[error("Analytical pricing error: {0}")]
    Analytical(#[from] AnalyticalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
