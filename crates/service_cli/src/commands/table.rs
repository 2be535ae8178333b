//! Table command implementation
//!
//! Prices each option with the legacy engine, the selecting engine on live
//! parameters and the selecting engine on frozen parameters, timing each
//! NPV call.

use std::sync::Arc;

use pricer_models::analytical::BlackScholesMerton;
use pricer_models::instruments::Instrument;
use pricer_models::models::{GeneralizedBlackScholesProcess, ProcessEnum};
use pricer_pricing::comparison::{ComparativeTimedPricer, TimedNpv};
use pricer_pricing::engine::{McEngine, PricedInstrument};
use pricer_pricing::frozen::{ConstantProcessFactory, ExtractionContext, ParameterExtractor};
use tracing::info;

use super::{live_and_frozen, simulation_config, OutputFormat};
use crate::config::CliConfig;
use crate::market::{build_instrument, build_process, OptionKind};
use crate::report::{render_table, TableRow};
use crate::{CliError, Result};

/// Run the table command
pub fn run(
    config: &CliConfig,
    kinds: &[OptionKind],
    analytic: bool,
    format: OutputFormat,
) -> Result<()> {
    info!("Pricing comparison table...");
    info!("  Time steps: {}", config.simulation.time_steps);
    info!("  Samples: {}", config.simulation.samples);
    info!("  Seed: {}", config.simulation.seed);

    let rows = compute(config, kinds, analytic)?;

    match format {
        OutputFormat::Table => print!("{}", render_table(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    info!("Pricing complete");
    Ok(())
}

/// Three timed passes per option kind.
pub fn compute(config: &CliConfig, kinds: &[OptionKind], analytic: bool) -> Result<Vec<TableRow>> {
    config.ensure_valid()?;
    let process = build_process(&config.market)?;
    let today = config.market.evaluation_date;
    let sim = simulation_config(
        &config.simulation,
        config.simulation.time_steps,
        config.simulation.samples,
    )?;

    let mut pricer = ComparativeTimedPricer::new();
    let mut rows = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let instrument = build_instrument(kind, &config.options)?;
        let reference = match (analytic, &instrument) {
            (true, Instrument::European(_)) => Some(closed_form(&process, config, &instrument)?),
            _ => None,
        };

        let (live, frozen) = live_and_frozen(&process, today, &sim);
        let legacy = McEngine::legacy(Arc::clone(&process), today, sim.clone());
        let mut priced = PricedInstrument::new(instrument);
        let measured = pricer.compare(&mut priced, vec![legacy, live, frozen])?;
        let [legacy, live, frozen] = into_triple(measured)?;

        let row = TableRow {
            kind,
            legacy,
            live,
            frozen,
            analytic: reference,
        };
        info!(
            kind = %kind,
            live_error = row.live_error(),
            frozen_error = row.frozen_error(),
            "Compared engines"
        );
        rows.push(row);
    }
    Ok(rows)
}

fn into_triple(measured: Vec<TimedNpv>) -> Result<[TimedNpv; 3]> {
    let count = measured.len();
    measured
        .try_into()
        .map_err(|_| CliError::InvalidArgument(format!("expected 3 measurements, got {count}")))
}

/// Black-Scholes price on the parameters the frozen engine would use.
fn closed_form(
    process: &Arc<GeneralizedBlackScholesProcess>,
    config: &CliConfig,
    instrument: &Instrument,
) -> Result<f64> {
    let today = config.market.evaluation_date;
    let maturity = instrument.maturity_date();
    let context = ExtractionContext::new(today, maturity, instrument.strike());
    let live = ProcessEnum::from(Arc::clone(process));
    let params = ParameterExtractor::new().extract(&live, &context)?;
    let frozen = ConstantProcessFactory::new().build(&params)?;
    let expiry = config.market.day_count.year_fraction_dates(today, maturity);
    let strike = instrument.strike().unwrap_or(config.options.strike);
    Ok(BlackScholesMerton::from_process(&frozen)?.price(instrument.option_type(), strike, expiry))
}
