//! Error types for the Monte Carlo engines.

use pricer_core::market_data::MarketDataError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use crate::frozen::FreezeError;

/// Monte Carlo engine errors.
///
/// # Examples
/// ```
/// use pricer_pricing::mc::EngineError;
///
/// let err = EngineError::InvalidConfiguration("both samples and tolerance set".to_string());
/// assert!(err.to_string().contains("tolerance"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Simulation settings are contradictory or out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Barrier engines need a positive underlying.
    #[error("Positive underlying value required: x0 = {spot}")]
    NonPositiveUnderlying {
        /// Initial value of the process
        spot: f64,
    },

    /// The barrier is already crossed at the evaluation date.
    #[error("Barrier touched")]
    BarrierTouched,

    /// The tolerance loop ran out of samples.
    #[error("Max samples ({max_samples}) reached with error {error} above tolerance {tolerance}")]
    MaxSamplesReached {
        /// Sample cap
        max_samples: usize,
        /// Error estimate when the cap was hit
        error: f64,
        /// Requested tolerance
        tolerance: f64,
    },

    /// `npv` called before an engine was attached.
    #[error("No pricing engine set")]
    EngineNotSet,

    /// Instrument has no path pricer.
    #[error("Unsupported payoff: {0}")]
    UnsupportedPayoff(String),

    /// Frozen-parameter construction failed.
    #[error(transparent)]
    Freeze(#[from] FreezeError),

    /// Term-structure lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Instrument data is invalid.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}
