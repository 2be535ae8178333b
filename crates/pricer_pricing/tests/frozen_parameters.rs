//! End-to-end checks of frozen-parameter pricing.

mod common;

use approx::assert_relative_eq;
use common::*;
use pricer_models::analytical::BlackScholesMerton;
use pricer_models::instruments::OptionType;
use pricer_models::models::ProcessEnum;
use pricer_pricing::engine::{McEngine, PricedInstrument};
use pricer_pricing::frozen::{
    ConstantProcessFactory, ExtractionContext, ParameterExtractor, PathGeneratorSelector,
    StrikePolicy,
};
use pricer_pricing::mc::{EngineError, SimulationConfiguration};

fn config(frozen: bool) -> SimulationConfiguration {
    SimulationConfiguration::builder()
        .time_steps(10)
        .samples(20_000)
        .seed(42)
        .frozen_parameters(frozen)
        .build()
        .unwrap()
}

// ============================================================================
// European against the closed form
// ============================================================================

#[test]
fn test_frozen_european_close_to_black_scholes() {
    let process = term_structure_process();
    let context = ExtractionContext::new(today(), maturity(), Some(STRIKE));
    let params = ParameterExtractor::new()
        .extract(&ProcessEnum::from(process.clone()), &context)
        .unwrap();
    let frozen = ConstantProcessFactory::new().build(&params).unwrap();
    let t = process.day_count().year_fraction_dates(today(), maturity());
    let reference = BlackScholesMerton::from_process(&frozen)
        .unwrap()
        .price(OptionType::Put, STRIKE, t);

    let mut option = PricedInstrument::new(european_put().into());
    option.set_pricing_engine(McEngine::new(process, today(), config(true)));
    let results = option.results().unwrap();

    assert!((results.npv - reference).abs() < 4.0 * results.error_estimate);
}

#[test]
fn test_live_and_frozen_agree_on_term_structures() {
    let process = term_structure_process();
    let mut option = PricedInstrument::new(european_put().into());

    option.set_pricing_engine(McEngine::new(process.clone(), today(), config(false)));
    let live = option.npv().unwrap();
    option.set_pricing_engine(McEngine::new(process, today(), config(true)));
    let frozen = option.npv().unwrap();

    // same random numbers; only the coefficients differ
    assert!((live - frozen).abs() < 0.05);
}

// ============================================================================
// Asian and barrier
// ============================================================================

#[test]
fn test_asian_fixings_end_on_exercise_date() {
    let option = asian_put();
    let fixings = option.fixing_dates();
    assert_eq!(fixings.len(), 3);
    assert!(fixings.windows(2).all(|w| w[0] < w[1]));
    assert!(fixings[0] > today());
    assert_eq!(fixings.last().copied(), Some(maturity()));
    assert_eq!(option.exercise().last_date(), maturity());
}

#[test]
fn test_asian_average_strike_frozen() {
    let process = term_structure_process();
    let mut option = PricedInstrument::new(asian_put().into());

    option.set_pricing_engine(McEngine::new(process.clone(), today(), config(false)));
    let live = option.npv().unwrap();
    option.set_pricing_engine(McEngine::new(process, today(), config(true)));
    let frozen = option.npv().unwrap();

    assert!(live > 0.0 && frozen > 0.0);
    assert!((live - frozen).abs() < 0.05);
}

#[test]
fn test_asian_strict_policy_rejects_missing_strike() {
    let selector = PathGeneratorSelector::with_policies(
        ParameterExtractor::new().with_strike_policy(StrikePolicy::Strict),
        ConstantProcessFactory::new(),
    );
    let engine =
        McEngine::new(term_structure_process(), today(), config(true)).with_selector(selector);
    let mut option = PricedInstrument::new(asian_put().into());
    option.set_pricing_engine(engine);
    assert!(matches!(option.npv(), Err(EngineError::Freeze(_))));
}

#[test]
fn test_barrier_up_in_frozen() {
    let process = term_structure_process();
    let mut option = PricedInstrument::new(up_in_put().into());

    option.set_pricing_engine(McEngine::new(process.clone(), today(), config(false)));
    let live = option.results().unwrap();
    option.set_pricing_engine(McEngine::new(process, today(), config(true)));
    let frozen = option.results().unwrap();

    assert!(live.npv >= 0.0 && frozen.npv >= 0.0);
    let tolerance = 4.0 * (live.error_estimate + frozen.error_estimate) + 0.05;
    assert!((live.npv - frozen.npv).abs() < tolerance);
}

#[test]
fn test_flat_market_frozen_matches_live_closely() {
    let process = flat_process();
    let mut option = PricedInstrument::new(european_put().into());

    option.set_pricing_engine(McEngine::new(process.clone(), today(), config(false)));
    let live = option.npv().unwrap();
    option.set_pricing_engine(McEngine::new(process, today(), config(true)));
    let frozen = option.npv().unwrap();

    assert_relative_eq!(live, frozen, max_relative = 1e-8);
}
