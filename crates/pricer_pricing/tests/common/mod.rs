//! Reference market shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pricer_core::market_data::curves::{CurveEnum, CurveInterpolation, InterpolatedCurve};
use pricer_core::market_data::surfaces::{BlackVarianceCurve, VolatilityEnum};
use pricer_core::types::{Date, DayCountConvention};
use pricer_models::instruments::{
    BarrierOption, BarrierType, DiscreteAsianOption, EuropeanExercise, EuropeanOption, OptionType,
    PlainVanillaPayoff,
};
use pricer_models::models::GeneralizedBlackScholesProcess;

pub const SPOT: f64 = 36.0;
pub const STRIKE: f64 = 40.0;

pub fn today() -> Date {
    Date::from_ymd(2022, 2, 24).unwrap()
}

pub fn maturity() -> Date {
    Date::from_ymd(2022, 5, 24).unwrap()
}

/// Flat 1% rate, no dividends, flat 20% volatility.
pub fn flat_process() -> Arc<GeneralizedBlackScholesProcess> {
    Arc::new(GeneralizedBlackScholesProcess::new(
        SPOT,
        Arc::new(CurveEnum::flat(0.01)),
        Arc::new(CurveEnum::flat(0.0)),
        Arc::new(VolatilityEnum::flat(0.2)),
        DayCountConvention::ActualActual365,
    ))
}

/// Zero curve 1% -> 1.5% over six months, variance curve 20%/25% at 3M/6M.
pub fn term_structure_process() -> Arc<GeneralizedBlackScholesProcess> {
    let dc = DayCountConvention::ActualActual365;
    let six_months = today().add_months(6).unwrap();
    let rates = InterpolatedCurve::from_dates(
        today(),
        &[today(), six_months],
        &[0.01, 0.015],
        dc,
        CurveInterpolation::Linear,
        true,
    )
    .unwrap();
    let vols = BlackVarianceCurve::from_dates(
        today(),
        &[today().add_months(3).unwrap(), six_months],
        &[0.20, 0.25],
        dc,
    )
    .unwrap();
    Arc::new(GeneralizedBlackScholesProcess::new(
        SPOT,
        Arc::new(rates.into()),
        Arc::new(CurveEnum::flat(0.0)),
        Arc::new(vols.into()),
        dc,
    ))
}

pub fn put_payoff() -> PlainVanillaPayoff {
    PlainVanillaPayoff::new(OptionType::Put, STRIKE).unwrap()
}

pub fn european_put() -> EuropeanOption {
    EuropeanOption::new(put_payoff(), EuropeanExercise::new(maturity()))
}

/// Average-strike put fixed monthly, the last fixing on the exercise date.
pub fn asian_put() -> DiscreteAsianOption {
    let fixings = (1..=3)
        .map(|i| today().add_months(i).unwrap())
        .collect::<Vec<_>>();
    DiscreteAsianOption::average_strike(OptionType::Put, fixings, EuropeanExercise::new(maturity()))
        .unwrap()
}

pub fn up_in_put() -> BarrierOption {
    BarrierOption::new(
        BarrierType::UpIn,
        STRIKE,
        0.0,
        put_payoff(),
        EuropeanExercise::new(maturity()),
    )
    .unwrap()
}
