//! Check command implementation
//!
//! Validates the effective configuration and builds the market and option
//! set without pricing anything.

use pricer_models::models::StochasticProcess1D;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::market::{build_instrument, build_process, OptionKind};
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig, print: bool) -> Result<()> {
    info!("Checking configuration...");

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            warn!("{}", problem);
            println!("  [FAIL] {}", problem);
        }
        return Err(CliError::InvalidConfig(problems));
    }
    println!("  [OK] configuration values");

    for line in verify(config)? {
        println!("  [OK] {}", line);
    }

    if print {
        println!();
        print!("{}", config.to_toml_string()?);
    }

    info!("Check complete");
    Ok(())
}

/// Builds every object the pricing commands need.
pub fn verify(config: &CliConfig) -> Result<Vec<String>> {
    let process = build_process(&config.market)?;
    let mut lines = vec![format!(
        "live process: spot {}, {} rate pillars, {} volatility pillars",
        process.x0(),
        config.market.rate_pillar_months.len(),
        config.market.volatility_pillar_months.len()
    )];

    for kind in OptionKind::ALL {
        let instrument = build_instrument(kind, &config.options)?;
        lines.push(format!("{} option maturing {}", kind, instrument.maturity_date()));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_checks() {
        let lines = verify(&CliConfig::default()).unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("European"));
        assert!(run(&CliConfig::default(), true).is_ok());
    }

    #[test]
    fn test_run_reports_problems() {
        let mut config = CliConfig::default();
        config.sweep.samples = vec![0];
        assert!(matches!(
            run(&config, false),
            Err(CliError::InvalidConfig(p)) if p.len() == 1
        ));
    }

    #[test]
    fn test_bad_fixings_fail_verification() {
        let mut config = CliConfig::default();
        config.options.asian_fixings.reverse();
        assert!(matches!(verify(&config), Err(CliError::Instrument(_))));
    }
}
