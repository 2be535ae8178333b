//! Monte Carlo engines for European, Asian and barrier options.
//!
//! An [`McEngine`] owns a shared live process, the evaluation date and a
//! [`SimulationConfiguration`]. Two flavours exist:
//!
//! - [`EngineFlavour::Legacy`]: always generates paths from the live
//!   process, ignoring `frozen_parameters`
//! - [`EngineFlavour::Selecting`]: routes path generation through a
//!   [`PathGeneratorSelector`], so `frozen_parameters` takes effect
//!
//! Engines attach to a [`PricedInstrument`], which forwards `npv` calls to
//! whichever engine is currently set.

use std::sync::Arc;

use pricer_core::market_data::curves::YieldCurve;
use pricer_core::types::Date;
use pricer_models::instruments::{
    AveragingKind, BarrierOption, DiscreteAsianOption, EuropeanOption, Instrument,
    PlainVanillaPayoff,
};
use pricer_models::models::{GeneralizedBlackScholesProcess, ProcessEnum, StochasticProcess1D};
use tracing::debug;

use crate::frozen::{ExtractionContext, PathGeneratorSelector};
use crate::mc::{
    AveragePricePathPricer, AverageStrikePathPricer, BiasedBarrierPathPricer,
    BridgedBarrierPathPricer, EngineError, EuropeanPathPricer, McResults, McSimulation,
    PathGenerator, PathPricer, SimulationConfiguration, TimeGrid, BARRIER_CORRECTION_SEED,
};
use crate::rng::{GaussianSequenceGenerator, UniformSequenceGenerator};

/// How an engine builds its path generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineFlavour {
    /// Live process only.
    Legacy,
    /// Live or frozen process, per configuration.
    Selecting,
}

/// Monte Carlo pricing engine.
#[derive(Debug, Clone)]
pub struct McEngine {
    process: Arc<GeneralizedBlackScholesProcess>,
    evaluation_date: Date,
    config: SimulationConfiguration,
    flavour: EngineFlavour,
    selector: PathGeneratorSelector,
}

impl McEngine {
    /// Selecting engine.
    pub fn new(
        process: Arc<GeneralizedBlackScholesProcess>,
        evaluation_date: Date,
        config: SimulationConfiguration,
    ) -> Self {
        Self {
            process,
            evaluation_date,
            config,
            flavour: EngineFlavour::Selecting,
            selector: PathGeneratorSelector::new(),
        }
    }

    /// Legacy engine, always simulating the live process.
    pub fn legacy(
        process: Arc<GeneralizedBlackScholesProcess>,
        evaluation_date: Date,
        config: SimulationConfiguration,
    ) -> Self {
        Self {
            flavour: EngineFlavour::Legacy,
            ..Self::new(process, evaluation_date, config)
        }
    }

    /// Replaces the selector (extraction and factory policies).
    pub fn with_selector(mut self, selector: PathGeneratorSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Live process.
    pub fn process(&self) -> &Arc<GeneralizedBlackScholesProcess> {
        &self.process
    }

    /// Date process time is measured from.
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date
    }

    /// Simulation settings.
    pub fn config(&self) -> &SimulationConfiguration {
        &self.config
    }

    /// Engine flavour.
    pub fn flavour(&self) -> EngineFlavour {
        self.flavour
    }

    /// Short label for logs: `legacy`, `live` or `frozen`.
    pub fn label(&self) -> &'static str {
        match (self.flavour, self.config.frozen_parameters()) {
            (EngineFlavour::Legacy, _) => "legacy",
            (EngineFlavour::Selecting, false) => "live",
            (EngineFlavour::Selecting, true) => "frozen",
        }
    }

    /// Prices `instrument`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for missing step settings or an empty grid
    /// - `NonPositiveUnderlying` and `BarrierTouched` for barrier options
    /// - wrapped market data, instrument and freeze failures
    pub fn calculate(&self, instrument: &Instrument) -> Result<McResults, EngineError> {
        debug!(
            instrument = instrument.kind_name(),
            engine = self.label(),
            seed = self.config.seed(),
            "Running Monte Carlo simulation"
        );
        let context = ExtractionContext::new(
            self.evaluation_date,
            instrument.maturity_date(),
            instrument.strike(),
        );
        let (grid, pricer) = match instrument {
            Instrument::European(option) => self.european_setup(option)?,
            Instrument::Asian(option) => self.asian_setup(option)?,
            Instrument::Barrier(option) => self.barrier_setup(option)?,
        };
        self.simulate(grid, pricer, &context)
    }

    fn time_to(&self, date: Date) -> f64 {
        self.process
            .day_count()
            .year_fraction_dates(self.evaluation_date, date)
    }

    fn step_grid(&self, maturity: Date) -> Result<TimeGrid, EngineError> {
        let t = self.time_to(maturity);
        TimeGrid::uniform(t, self.config.steps_for(t)?)
    }

    fn european_setup(
        &self,
        option: &EuropeanOption,
    ) -> Result<(TimeGrid, PathPricer), EngineError> {
        let grid = self.step_grid(option.exercise().last_date())?;
        let discount = self.process.risk_free_curve().discount_factor(grid.back())?;
        let pricer = PathPricer::European(EuropeanPathPricer::new(*option.payoff(), discount));
        Ok((grid, pricer))
    }

    fn asian_setup(
        &self,
        option: &DiscreteAsianOption,
    ) -> Result<(TimeGrid, PathPricer), EngineError> {
        let fixing_times: Vec<f64> = option
            .fixing_dates()
            .iter()
            .map(|&date| self.time_to(date))
            .filter(|&t| t >= 0.0)
            .collect();
        if fixing_times.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "no fixing dates on or after the evaluation date".to_string(),
            ));
        }
        let grid = TimeGrid::from_mandatory_times(&fixing_times)?;

        let maturity = self.time_to(option.exercise().last_date());
        let discount = self.process.risk_free_curve().discount_factor(maturity)?;
        let pricer = match (option.averaging(), option.strike()) {
            (AveragingKind::AveragePrice, Some(strike)) => {
                let payoff = PlainVanillaPayoff::new(option.option_type(), strike)?;
                PathPricer::AveragePrice(AveragePricePathPricer::new(
                    payoff,
                    discount,
                    option.running_sum(),
                    option.past_fixings(),
                ))
            }
            (AveragingKind::AveragePrice, None) => {
                return Err(EngineError::UnsupportedPayoff(
                    "average-price option without a strike".to_string(),
                ))
            }
            (AveragingKind::AverageStrike, _) => {
                PathPricer::AverageStrike(AverageStrikePathPricer::new(
                    option.option_type(),
                    discount,
                    option.running_sum(),
                    option.past_fixings(),
                ))
            }
        };
        Ok((grid, pricer))
    }

    fn barrier_setup(&self, option: &BarrierOption) -> Result<(TimeGrid, PathPricer), EngineError> {
        let spot = self.process.x0();
        if spot.is_nan() || spot <= 0.0 {
            return Err(EngineError::NonPositiveUnderlying { spot });
        }
        if option.is_triggered(spot) {
            return Err(EngineError::BarrierTouched);
        }

        let grid = self.step_grid(option.exercise().last_date())?;
        let curve = self.process.risk_free_curve();
        let discounts = grid
            .times()
            .iter()
            .map(|&t| curve.discount_factor(t))
            .collect::<Result<Vec<f64>, _>>()?;

        let pricer = if self.config.biased_barrier() {
            PathPricer::BiasedBarrier(BiasedBarrierPathPricer::new(
                option.barrier_type(),
                option.barrier(),
                option.rebate(),
                *option.payoff(),
                discounts,
            ))
        } else {
            PathPricer::BridgedBarrier(BridgedBarrierPathPricer::new(
                option.barrier_type(),
                option.barrier(),
                option.rebate(),
                *option.payoff(),
                discounts,
                ProcessEnum::BlackScholes(Arc::clone(&self.process)),
                UniformSequenceGenerator::new(grid.size() - 1, BARRIER_CORRECTION_SEED),
            ))
        };
        Ok((grid, pricer))
    }

    fn simulate(
        &self,
        grid: TimeGrid,
        pricer: PathPricer,
        context: &ExtractionContext,
    ) -> Result<McResults, EngineError> {
        let generator = GaussianSequenceGenerator::new(grid.size() - 1, self.config.seed());
        let source = ProcessEnum::BlackScholes(Arc::clone(&self.process));
        let paths = match self.flavour {
            EngineFlavour::Legacy => {
                PathGenerator::new(source, grid, generator, self.config.brownian_bridge())
            }
            EngineFlavour::Selecting => {
                self.selector
                    .select(&self.config, &source, grid, generator, context)?
            }
        };

        let mut simulation = McSimulation::new(paths, pricer, self.config.antithetic());
        let results = simulation.run(&self.config)?;
        debug!(
            npv = results.npv,
            error_estimate = results.error_estimate,
            samples = results.samples,
            "Simulation finished"
        );
        Ok(results)
    }
}

/// Instrument with an attachable pricing engine.
///
/// The engine can be swapped between pricing calls; each call to
/// [`npv`](Self::npv) runs a fresh simulation.
#[derive(Debug, Clone)]
pub struct PricedInstrument {
    instrument: Instrument,
    engine: Option<McEngine>,
}

impl PricedInstrument {
    /// Wraps `instrument` with no engine attached.
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            engine: None,
        }
    }

    /// Underlying contract.
    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// Attached engine, if any.
    pub fn engine(&self) -> Option<&McEngine> {
        self.engine.as_ref()
    }

    /// Attaches `engine`, replacing the previous one.
    pub fn set_pricing_engine(&mut self, engine: McEngine) {
        debug!(
            instrument = self.instrument.kind_name(),
            engine = engine.label(),
            "Pricing engine attached"
        );
        self.engine = Some(engine);
    }

    /// Full simulation results.
    ///
    /// # Errors
    ///
    /// `EngineNotSet` without an engine, otherwise engine failures.
    pub fn results(&self) -> Result<McResults, EngineError> {
        self.engine
            .as_ref()
            .ok_or(EngineError::EngineNotSet)?
            .calculate(&self.instrument)
    }

    /// Net present value.
    ///
    /// # Errors
    ///
    /// Same as [`results`](Self::results).
    pub fn npv(&self) -> Result<f64, EngineError> {
        Ok(self.results()?.npv)
    }
}
