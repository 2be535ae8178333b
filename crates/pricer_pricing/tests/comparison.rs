//! Timed comparisons on the reference scenario.

mod common;

use common::*;
use pricer_models::instruments::Instrument;
use pricer_pricing::comparison::{ComparativeTimedPricer, PricerState, TimedResult};
use pricer_pricing::engine::{McEngine, PricedInstrument};
use pricer_pricing::mc::SimulationConfiguration;

fn config() -> SimulationConfiguration {
    config_with_samples(10_000)
}

fn config_with_samples(samples: usize) -> SimulationConfiguration {
    SimulationConfiguration::builder()
        .time_steps(10)
        .samples(samples)
        .seed(42)
        .build()
        .unwrap()
}

fn two_way(instrument: Instrument) -> TimedResult {
    two_way_with(instrument, config())
}

fn two_way_with(instrument: Instrument, config: SimulationConfiguration) -> TimedResult {
    let process = flat_process();
    let mut option = PricedInstrument::new(instrument);
    let mut pricer = ComparativeTimedPricer::new();
    let result = pricer
        .two_way(
            &mut option,
            McEngine::new(process.clone(), today(), config.clone()),
            McEngine::new(process, today(), config.with_frozen_parameters(true)),
        )
        .unwrap();
    assert_eq!(pricer.state(), PricerState::Done);
    result
}

#[test]
fn test_two_way_european_reference_scenario() {
    match two_way(european_put().into()) {
        TimedResult::TwoWay {
            error_magnitude,
            elapsed_seconds,
        } => {
            assert!(error_magnitude >= 0.0 && error_magnitude < 0.05);
            assert!(elapsed_seconds.is_finite());
        }
        other => panic!("unexpected result {other:?}"),
    }
}

// Reference scenario sample count; slow in debug builds.
#[test]
#[ignore]
fn test_two_way_european_million_samples() {
    match two_way_with(european_put().into(), config_with_samples(1_000_000)) {
        TimedResult::TwoWay {
            error_magnitude,
            elapsed_seconds,
        } => {
            assert!(error_magnitude < 0.05);
            assert!(elapsed_seconds.is_finite());
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_two_way_asian_and_barrier() {
    for instrument in [Instrument::from(asian_put()), Instrument::from(up_in_put())] {
        let result = two_way(instrument);
        assert!(matches!(
            result,
            TimedResult::TwoWay { error_magnitude, .. } if error_magnitude < 0.05
        ));
    }
}

#[test]
fn test_three_way_on_term_structures() {
    let process = term_structure_process();
    let mut option = PricedInstrument::new(european_put().into());
    let mut pricer = ComparativeTimedPricer::new();
    let result = pricer
        .three_way(
            &mut option,
            McEngine::legacy(process.clone(), today(), config()),
            McEngine::new(process.clone(), today(), config()),
            McEngine::new(process, today(), config().with_frozen_parameters(true)),
        )
        .unwrap();

    let TimedResult::ThreeWay {
        live_error,
        frozen_error,
        elapsed_seconds,
    } = result
    else {
        panic!("expected a three-way result");
    };
    assert_eq!(live_error, 0.0);
    assert!(frozen_error < 0.05);
    assert!(elapsed_seconds.is_finite());
}
