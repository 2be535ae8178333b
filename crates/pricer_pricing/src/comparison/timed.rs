//! Comparative timed pricer.

use std::time::Instant;

use tracing::{debug, info};

use crate::engine::{McEngine, PricedInstrument};
use crate::mc::EngineError;

/// Progress of a comparison run.
///
/// ```text
/// Idle -> EngineAttached -> Pricing -> ResultRecorded -> EngineAttached | Done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricerState {
    /// No comparison running.
    Idle,
    /// An engine has been set on the instrument.
    EngineAttached,
    /// The NPV call is in progress.
    Pricing,
    /// The measurement of the current engine is stored.
    ResultRecorded,
    /// All engines have been measured.
    Done,
}

/// One timed NPV measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimedNpv {
    /// Engine label (`legacy`, `live` or `frozen`).
    pub engine: &'static str,
    /// Net present value.
    pub npv: f64,
    /// Standard error of the NPV.
    pub error_estimate: f64,
    /// Wall-clock seconds spent in the NPV call.
    pub elapsed_seconds: f64,
}

/// Reduced comparison.
///
/// `elapsed_seconds` is always live minus frozen time; it may be negative
/// and is diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TimedResult {
    /// Live against frozen.
    TwoWay {
        /// `|NPV_live - NPV_frozen|`
        error_magnitude: f64,
        /// Live minus frozen seconds
        elapsed_seconds: f64,
    },
    /// Live and frozen, each against the legacy baseline.
    ThreeWay {
        /// `|NPV_legacy - NPV_live|`
        live_error: f64,
        /// `|NPV_legacy - NPV_frozen|`
        frozen_error: f64,
        /// Live minus frozen seconds
        elapsed_seconds: f64,
    },
}

impl TimedResult {
    /// Timing difference, live minus frozen.
    pub fn elapsed_seconds(&self) -> f64 {
        match self {
            TimedResult::TwoWay { elapsed_seconds, .. } => *elapsed_seconds,
            TimedResult::ThreeWay { elapsed_seconds, .. } => *elapsed_seconds,
        }
    }
}

/// Runs engines one after the other on the same instrument.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use pricer_core::market_data::curves::CurveEnum;
/// use pricer_core::market_data::surfaces::VolatilityEnum;
/// use pricer_core::types::{Date, DayCountConvention};
/// use pricer_models::instruments::{
///     EuropeanExercise, EuropeanOption, OptionType, PlainVanillaPayoff,
/// };
/// use pricer_models::models::GeneralizedBlackScholesProcess;
/// use pricer_pricing::comparison::{ComparativeTimedPricer, PricerState, TimedResult};
/// use pricer_pricing::engine::{McEngine, PricedInstrument};
/// use pricer_pricing::mc::SimulationConfiguration;
///
/// let today = Date::from_ymd(2022, 2, 24).unwrap();
/// let process = Arc::new(GeneralizedBlackScholesProcess::new(
///     36.0,
///     Arc::new(CurveEnum::flat(0.01)),
///     Arc::new(CurveEnum::flat(0.0)),
///     Arc::new(VolatilityEnum::flat(0.2)),
///     DayCountConvention::ActualActual365,
/// ));
/// let option = EuropeanOption::new(
///     PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap(),
///     EuropeanExercise::new(Date::from_ymd(2022, 5, 24).unwrap()),
/// );
/// let config = SimulationConfiguration::builder()
///     .time_steps(10)
///     .samples(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut instrument = PricedInstrument::new(option.into());
/// let mut pricer = ComparativeTimedPricer::new();
/// let result = pricer
///     .two_way(
///         &mut instrument,
///         McEngine::new(Arc::clone(&process), today, config.clone()),
///         McEngine::new(process, today, config.with_frozen_parameters(true)),
///     )
///     .unwrap();
///
/// assert_eq!(pricer.state(), PricerState::Done);
/// if let TimedResult::TwoWay { error_magnitude, .. } = result {
///     assert!(error_magnitude < 0.05);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ComparativeTimedPricer {
    state: PricerState,
}

impl Default for ComparativeTimedPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparativeTimedPricer {
    /// Idle pricer.
    pub fn new() -> Self {
        Self {
            state: PricerState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> PricerState {
        self.state
    }

    fn transition(&mut self, next: PricerState) {
        debug!(from = ?self.state, to = ?next, "Comparison state change");
        self.state = next;
    }

    /// Prices `instrument` with each engine in order.
    ///
    /// # Errors
    ///
    /// The first engine failure; the pricer returns to `Idle` and no
    /// measurement is returned.
    pub fn compare(
        &mut self,
        instrument: &mut PricedInstrument,
        engines: Vec<McEngine>,
    ) -> Result<Vec<TimedNpv>, EngineError> {
        let mut measurements = Vec::with_capacity(engines.len());
        for engine in engines {
            let label = engine.label();
            instrument.set_pricing_engine(engine);
            self.transition(PricerState::EngineAttached);

            self.transition(PricerState::Pricing);
            let start = Instant::now();
            let results = instrument.results();
            let elapsed_seconds = start.elapsed().as_secs_f64();

            let results = match results {
                Ok(results) => results,
                Err(err) => {
                    self.transition(PricerState::Idle);
                    return Err(err);
                }
            };
            measurements.push(TimedNpv {
                engine: label,
                npv: results.npv,
                error_estimate: results.error_estimate,
                elapsed_seconds,
            });
            self.transition(PricerState::ResultRecorded);
        }
        self.transition(PricerState::Done);
        Ok(measurements)
    }

    /// Live against frozen.
    ///
    /// # Errors
    ///
    /// Engine failures, see [`compare`](Self::compare).
    pub fn two_way(
        &mut self,
        instrument: &mut PricedInstrument,
        live: McEngine,
        frozen: McEngine,
    ) -> Result<TimedResult, EngineError> {
        let m = self.compare(instrument, vec![live, frozen])?;
        let result = TimedResult::TwoWay {
            error_magnitude: (m[0].npv - m[1].npv).abs(),
            elapsed_seconds: m[0].elapsed_seconds - m[1].elapsed_seconds,
        };
        info!(
            instrument = instrument.instrument().kind_name(),
            live_npv = m[0].npv,
            frozen_npv = m[1].npv,
            ?result,
            "Two-way comparison"
        );
        Ok(result)
    }

    /// Live and frozen against a legacy baseline.
    ///
    /// # Errors
    ///
    /// Engine failures, see [`compare`](Self::compare).
    pub fn three_way(
        &mut self,
        instrument: &mut PricedInstrument,
        legacy: McEngine,
        live: McEngine,
        frozen: McEngine,
    ) -> Result<TimedResult, EngineError> {
        let m = self.compare(instrument, vec![legacy, live, frozen])?;
        let result = TimedResult::ThreeWay {
            live_error: (m[0].npv - m[1].npv).abs(),
            frozen_error: (m[0].npv - m[2].npv).abs(),
            elapsed_seconds: m[1].elapsed_seconds - m[2].elapsed_seconds,
        };
        info!(
            instrument = instrument.instrument().kind_name(),
            legacy_npv = m[0].npv,
            live_npv = m[1].npv,
            frozen_npv = m[2].npv,
            ?result,
            "Three-way comparison"
        );
        Ok(result)
    }
}
