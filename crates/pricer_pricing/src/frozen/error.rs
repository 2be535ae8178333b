//! Error types for frozen-parameter construction.

use pricer_core::market_data::MarketDataError;
use thiserror::Error;

/// Failures while freezing a process.
///
/// # Examples
/// ```
/// use pricer_pricing::frozen::FreezeError;
///
/// let err = FreezeError::UnsupportedProcessKind { kind: "ConstantProcess" };
/// assert!(err.to_string().contains("ConstantProcess"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FreezeError {
    /// The process carries no term structures to sample.
    #[error("Cannot extract constant parameters from a {kind}")]
    UnsupportedProcessKind {
        /// Process type name
        kind: &'static str,
    },

    /// No strike available and the strike policy forbids a proxy.
    #[error("No strike available for the volatility lookup")]
    MissingStrikeInformation,

    /// Extracted volatility is negative under a rejecting policy.
    #[error("Negative volatility extracted: σ = {volatility}")]
    NegativeVolatility {
        /// The extracted volatility
        volatility: f64,
    },

    /// Term-structure lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}
