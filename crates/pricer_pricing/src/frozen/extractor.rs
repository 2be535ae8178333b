//! Sampling representative constants from term structures.

use pricer_core::types::Date;
use pricer_models::models::{ProcessEnum, StochasticProcess1D};
use tracing::{debug, warn};

use super::error::FreezeError;

/// What to use as the volatility lookup strike when the instrument has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikePolicy {
    /// Use the initial value of the process.
    #[default]
    SpotProxy,
    /// Fail with `MissingStrikeInformation`.
    Strict,
}

/// Dates and strike a pricing call freezes parameters for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionContext {
    /// Date the process time is measured from.
    pub evaluation_date: Date,
    /// Date the parameters are sampled at.
    pub maturity_date: Date,
    /// Payoff strike, if the instrument has a fixed one.
    pub strike: Option<f64>,
}

impl ExtractionContext {
    /// Creates a context.
    pub fn new(evaluation_date: Date, maturity_date: Date, strike: Option<f64>) -> Self {
        Self {
            evaluation_date,
            maturity_date,
            strike,
        }
    }
}

/// Constants valid over `[0, maturity]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedParameters {
    /// Continuously compounded risk-free zero rate to maturity.
    pub risk_free_rate: f64,
    /// Continuously compounded dividend zero rate to maturity.
    pub dividend_yield: f64,
    /// Black volatility at (maturity, strike).
    pub volatility: f64,
    /// Initial value of the process.
    pub initial_value: f64,
}

/// Reads zero rates and Black volatility off a live process.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use pricer_core::market_data::curves::CurveEnum;
/// use pricer_core::market_data::surfaces::VolatilityEnum;
/// use pricer_core::types::{Date, DayCountConvention};
/// use pricer_models::models::{GeneralizedBlackScholesProcess, ProcessEnum};
/// use pricer_pricing::frozen::{ExtractionContext, ParameterExtractor};
///
/// let process = ProcessEnum::from(Arc::new(GeneralizedBlackScholesProcess::new(
///     36.0,
///     Arc::new(CurveEnum::flat(0.01)),
///     Arc::new(CurveEnum::flat(0.0)),
///     Arc::new(VolatilityEnum::flat(0.2)),
///     DayCountConvention::ActualActual365,
/// )));
/// let context = ExtractionContext::new(
///     Date::from_ymd(2022, 2, 24).unwrap(),
///     Date::from_ymd(2022, 5, 24).unwrap(),
///     Some(40.0),
/// );
///
/// let params = ParameterExtractor::new().extract(&process, &context).unwrap();
/// assert!((params.risk_free_rate - 0.01).abs() < 1e-12);
/// assert!((params.volatility - 0.2).abs() < 1e-12);
/// assert_eq!(params.initial_value, 36.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterExtractor {
    strike_policy: StrikePolicy,
}

impl ParameterExtractor {
    /// Extractor with [`StrikePolicy::SpotProxy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the strike policy.
    pub fn with_strike_policy(mut self, policy: StrikePolicy) -> Self {
        self.strike_policy = policy;
        self
    }

    /// Current strike policy.
    pub fn strike_policy(&self) -> StrikePolicy {
        self.strike_policy
    }

    /// Samples the process term structures at the context maturity.
    ///
    /// # Errors
    ///
    /// - `UnsupportedProcessKind` for processes without term structures
    /// - `MissingStrikeInformation` under [`StrikePolicy::Strict`]
    /// - `MarketData` when the maturity precedes the evaluation date or a
    ///   lookup fails
    pub fn extract(
        &self,
        process: &ProcessEnum,
        context: &ExtractionContext,
    ) -> Result<ExtractedParameters, FreezeError> {
        let live = process
            .as_black_scholes()
            .ok_or(FreezeError::UnsupportedProcessKind {
                kind: process.process_name(),
            })?;

        let t = live
            .day_count()
            .year_fraction_dates(context.evaluation_date, context.maturity_date);
        let initial_value = live.x0();

        let strike = match (context.strike, self.strike_policy) {
            (Some(strike), _) => strike,
            (None, StrikePolicy::SpotProxy) => {
                warn!(
                    spot = initial_value,
                    "No strike available, using spot for the volatility lookup"
                );
                initial_value
            }
            (None, StrikePolicy::Strict) => return Err(FreezeError::MissingStrikeInformation),
        };

        let params = ExtractedParameters {
            risk_free_rate: live.risk_free_zero_rate(t)?,
            dividend_yield: live.dividend_zero_rate(t)?,
            volatility: live.black_volatility(t, strike)?,
            initial_value,
        };
        debug!(
            t,
            strike,
            risk_free_rate = params.risk_free_rate,
            dividend_yield = params.dividend_yield,
            volatility = params.volatility,
            "Extracted constant parameters"
        );
        Ok(params)
    }
}
