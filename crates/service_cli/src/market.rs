//! Builds the live process and the option set from configuration.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use pricer_core::market_data::curves::{CurveEnum, CurveInterpolation, InterpolatedCurve};
use pricer_core::market_data::surfaces::BlackVarianceCurve;
use pricer_core::types::Date;
use pricer_models::instruments::{
    AveragingKind, BarrierOption, DiscreteAsianOption, EuropeanExercise, EuropeanOption, Instrument,
    PlainVanillaPayoff,
};
use pricer_models::models::GeneralizedBlackScholesProcess;
use serde::Serialize;
use tracing::debug;

use crate::config::{MarketConfig, OptionsConfig};
use crate::Result;

/// Option families priced by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    European,
    Asian,
    Barrier,
}

impl OptionKind {
    /// All kinds in table order.
    pub const ALL: [OptionKind; 3] = [OptionKind::European, OptionKind::Asian, OptionKind::Barrier];

    /// Label written to the `Option Type` report column.
    pub fn report_label(&self) -> &'static str {
        match self {
            OptionKind::European => "European Option",
            OptionKind::Asian => "Asian Option",
            OptionKind::Barrier => "Barrier Option",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::European => "European",
            OptionKind::Asian => "Asian",
            OptionKind::Barrier => "Barrier",
        };
        f.write_str(name)
    }
}

fn pillar_dates(evaluation_date: Date, months: &[i32]) -> Result<Vec<Date>> {
    months
        .iter()
        .map(|&m| evaluation_date.add_months(m).map_err(Into::into))
        .collect()
}

/// Live process: linear zero curve, flat dividend yield, Black variance curve.
pub fn build_process(market: &MarketConfig) -> Result<Arc<GeneralizedBlackScholesProcess>> {
    let today = market.evaluation_date;
    let rates = InterpolatedCurve::from_dates(
        today,
        &pillar_dates(today, &market.rate_pillar_months)?,
        &market.zero_rates,
        market.day_count,
        CurveInterpolation::Linear,
        true,
    )?;
    let vols = BlackVarianceCurve::from_dates(
        today,
        &pillar_dates(today, &market.volatility_pillar_months)?,
        &market.black_volatilities,
        market.day_count,
    )?;
    debug!(spot = market.spot, %today, "Built live Black-Scholes process");

    Ok(Arc::new(GeneralizedBlackScholesProcess::new(
        market.spot,
        Arc::new(rates.into()),
        Arc::new(CurveEnum::flat(market.dividend_yield)),
        Arc::new(vols.into()),
        market.day_count,
    )))
}

/// Builds one option from the shared contract terms.
pub fn build_instrument(kind: OptionKind, options: &OptionsConfig) -> Result<Instrument> {
    let payoff = PlainVanillaPayoff::new(options.option_type, options.strike)?;
    let exercise = EuropeanExercise::new(options.maturity);
    let instrument = match kind {
        OptionKind::European => EuropeanOption::new(payoff, exercise).into(),
        OptionKind::Asian => {
            let (option_type, strike) = (options.option_type, options.strike);
            let fixings = options.asian_fixings.clone();
            match options.asian_averaging {
                AveragingKind::AveragePrice => {
                    DiscreteAsianOption::average_price(option_type, strike, fixings, exercise)?
                }
                AveragingKind::AverageStrike => {
                    DiscreteAsianOption::average_strike(option_type, fixings, exercise)?
                }
            }
            .into()
        }
        OptionKind::Barrier => BarrierOption::new(
            options.barrier_type,
            options.barrier,
            options.rebate,
            payoff,
            exercise,
        )?
        .into(),
    };
    Ok(instrument)
}
