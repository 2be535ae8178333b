//! Benchmarks: live against frozen path generation and pricing.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::curves::{CurveEnum, CurveInterpolation, InterpolatedCurve};
use pricer_core::market_data::surfaces::{BlackVarianceCurve, VolatilityEnum};
use pricer_core::types::{Date, DayCountConvention};
use pricer_models::instruments::{EuropeanExercise, EuropeanOption, OptionType, PlainVanillaPayoff};
use pricer_models::models::{ConstantProcess, GeneralizedBlackScholesProcess, ProcessEnum};
use pricer_pricing::engine::{McEngine, PricedInstrument};
use pricer_pricing::mc::{PathGenerator, SimulationConfiguration, TimeGrid};
use pricer_pricing::rng::GaussianSequenceGenerator;

fn today() -> Date {
    Date::from_ymd(2022, 2, 24).unwrap()
}

fn live_process() -> Arc<GeneralizedBlackScholesProcess> {
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
        36.0,
        Arc::new(rates.into()),
        Arc::new(CurveEnum::flat(0.0)),
        Arc::new(vols.into()),
        dc,
    ))
}

fn benchmark_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_generation");
    let live = ProcessEnum::from(live_process());
    let frozen = ProcessEnum::from(ConstantProcess::new(36.0, 0.0124, 0.0, 0.2));

    for steps in [10, 50, 250] {
        let grid = TimeGrid::uniform(0.25, steps).unwrap();
        for (name, process) in [("live", &live), ("frozen", &frozen)] {
            let mut generator = PathGenerator::new(
                process.clone(),
                grid.clone(),
                GaussianSequenceGenerator::new(steps, 42),
                false,
            );
            group.bench_with_input(BenchmarkId::new(name, steps), &steps, |b, _| {
                b.iter(|| black_box(generator.next().map(|p| p.back())))
            });
        }
    }
    group.finish();
}

fn benchmark_european_npv(c: &mut Criterion) {
    let mut group = c.benchmark_group("european_npv");
    group.sample_size(10);
    let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
    let maturity = Date::from_ymd(2022, 5, 24).unwrap();
    let option = EuropeanOption::new(payoff, EuropeanExercise::new(maturity));

    for frozen in [false, true] {
        let config = SimulationConfiguration::builder()
            .time_steps(10)
            .samples(10_000)
            .seed(42)
            .frozen_parameters(frozen)
            .build()
            .unwrap();
        let mut instrument = PricedInstrument::new(option.into());
        instrument.set_pricing_engine(McEngine::new(live_process(), today(), config));
        let name = if frozen { "frozen" } else { "live" };
        group.bench_function(name, |b| b.iter(|| black_box(instrument.npv())));
    }
    group.finish();
}

criterion_group!(benches, benchmark_path_generation, benchmark_european_npv);
criterion_main!(benches);
