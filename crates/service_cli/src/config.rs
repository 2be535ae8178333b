//! CLI configuration management
//!
//! Settings come from a TOML file (`frozen_mc.toml` by default), then
//! `FROZEN_MC_*` environment variables, then command-line flags. Every
//! field has a default so a missing file reproduces the reference scenario.

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::{Date, DayCountConvention};
use pricer_models::instruments::{AveragingKind, BarrierType, OptionType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{CliError, Result};

/// Market data for the live Black-Scholes process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Evaluation date; model time is measured from here.
    pub evaluation_date: Date,
    /// Spot price of the underlying.
    pub spot: f64,
    /// Day count used for curve pillars and option times.
    pub day_count: DayCountConvention,
    /// Zero curve pillars, in months after the evaluation date.
    pub rate_pillar_months: Vec<i32>,
    /// Continuously compounded zero rates at the pillars.
    pub zero_rates: Vec<f64>,
    /// Flat continuous dividend yield.
    pub dividend_yield: f64,
    /// Black variance curve pillars, in months after the evaluation date.
    pub volatility_pillar_months: Vec<i32>,
    /// Black volatilities at the pillars.
    pub black_volatilities: Vec<f64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            evaluation_date: reference_date(2022, 2, 24),
            spot: 36.0,
            day_count: DayCountConvention::ActualActual365,
            rate_pillar_months: vec![0, 6],
            zero_rates: vec![0.01, 0.015],
            dividend_yield: 0.0,
            volatility_pillar_months: vec![3, 6],
            black_volatilities: vec![0.20, 0.25],
        }
    }
}

/// Contract terms shared by the European, Asian and barrier options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    pub option_type: OptionType,
    pub strike: f64,
    pub maturity: Date,
    pub asian_averaging: AveragingKind,
    pub asian_fixings: Vec<Date>,
    pub barrier_type: BarrierType,
    pub barrier: f64,
    pub rebate: f64,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        let asian_fixings = [3, 4, 5]
            .into_iter()
            .flat_map(|month| [4, 14, 24].map(|day| reference_date(2022, month, day)))
            .collect();
        Self {
            option_type: OptionType::Put,
            strike: 40.0,
            maturity: reference_date(2022, 5, 24),
            asian_averaging: AveragingKind::AverageStrike,
            asian_fixings,
            barrier_type: BarrierType::UpIn,
            barrier: 40.0,
            rebate: 0.0,
        }
    }
}

/// Monte Carlo settings used by the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub time_steps: usize,
    pub samples: usize,
    pub seed: u64,
    pub brownian_bridge: bool,
    pub antithetic: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            time_steps: 10,
            samples: 1_000_000,
            seed: 42,
            brownian_bridge: false,
            antithetic: false,
        }
    }
}

/// Ranges swept by the `sweep` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Step counts, each run at `simulation.samples`.
    pub time_steps: Vec<usize>,
    /// Sample counts, each run at `simulation.time_steps`.
    pub samples: Vec<usize>,
    /// Directory receiving `results_time.csv` and `results_samples.csv`.
    pub output_dir: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            time_steps: vec![5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100],
            samples: vec![10, 100, 1_000, 10_000, 15_000, 100_000, 1_000_000],
            output_dir: ".".to_string(),
        }
    }
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub market: MarketConfig,
    pub options: OptionsConfig,
    pub simulation: SimulationSettings,
    pub sweep: SweepConfig,
}

fn reference_date(year: i32, month: u32, day: u32) -> Date {
    match Date::from_ymd(year, month, day) {
        Ok(date) => date,
        Err(_) => unreachable!("hard-coded calendar date"),
    }
}

impl CliConfig {
    /// Parses a TOML document; missing tables and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Loads `path` if it exists, the defaults otherwise.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config file: {}", e)))?;
        info!(path = %path.display(), "Loaded configuration");
        Self::from_toml_str(&content)
    }

    /// File, then process environment.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Applies `FROZEN_MC_*` overrides read through `lookup`.
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `FROZEN_MC_EVALUATION_DATE` | `market.evaluation_date` |
    /// | `FROZEN_MC_SPOT` | `market.spot` |
    /// | `FROZEN_MC_STRIKE` | `options.strike` |
    /// | `FROZEN_MC_MATURITY` | `options.maturity` |
    /// | `FROZEN_MC_TIME_STEPS` | `simulation.time_steps` |
    /// | `FROZEN_MC_SAMPLES` | `simulation.samples` |
    /// | `FROZEN_MC_SEED` | `simulation.seed` |
    /// | `FROZEN_MC_OUTPUT_DIR` | `sweep.output_dir` |
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_parsed(
            &lookup,
            "FROZEN_MC_EVALUATION_DATE",
            &mut self.market.evaluation_date,
        )?;
        override_parsed(&lookup, "FROZEN_MC_SPOT", &mut self.market.spot)?;
        override_parsed(&lookup, "FROZEN_MC_STRIKE", &mut self.options.strike)?;
        override_parsed(&lookup, "FROZEN_MC_MATURITY", &mut self.options.maturity)?;
        override_parsed(
            &lookup,
            "FROZEN_MC_TIME_STEPS",
            &mut self.simulation.time_steps,
        )?;
        override_parsed(&lookup, "FROZEN_MC_SAMPLES", &mut self.simulation.samples)?;
        override_parsed(&lookup, "FROZEN_MC_SEED", &mut self.simulation.seed)?;
        if let Some(dir) = lookup("FROZEN_MC_OUTPUT_DIR") {
            self.sweep.output_dir = dir;
        }
        Ok(())
    }

    /// Collects every problem instead of stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let market = &self.market;
        let options = &self.options;
        let rate_months = &market.rate_pillar_months;
        let vol_months = &market.volatility_pillar_months;

        if market.spot.is_nan() || market.spot <= 0.0 {
            problems.push(format!("market.spot must be positive, got {}", market.spot));
        }
        if rate_months.is_empty() {
            problems.push("market.rate_pillar_months is empty".to_string());
        }
        if rate_months.len() != market.zero_rates.len() {
            problems.push(format!(
                "market.rate_pillar_months has {} entries but market.zero_rates has {}",
                rate_months.len(),
                market.zero_rates.len()
            ));
        }
        if rate_months.windows(2).any(|w| w[1] <= w[0]) {
            problems.push("market.rate_pillar_months must be strictly increasing".to_string());
        }
        if rate_months.first().is_some_and(|&m| m < 0) {
            problems.push(
                "market.rate_pillar_months must not precede the evaluation date".to_string(),
            );
        }
        if vol_months.is_empty() {
            problems.push("market.volatility_pillar_months is empty".to_string());
        }
        if vol_months.len() != market.black_volatilities.len() {
            problems.push(format!(
                "market.volatility_pillar_months has {} entries, market.black_volatilities {}",
                vol_months.len(),
                market.black_volatilities.len()
            ));
        }
        if vol_months.windows(2).any(|w| w[1] <= w[0]) {
            problems.push(
                "market.volatility_pillar_months must be strictly increasing".to_string(),
            );
        }
        if vol_months.first().is_some_and(|&m| m <= 0) {
            problems.push(
                "market.volatility_pillar_months must be after the evaluation date".to_string(),
            );
        }
        let volatilities = &market.black_volatilities;
        if volatilities.iter().any(|v| v.is_nan() || *v < 0.0) {
            problems.push("market.black_volatilities must be non-negative".to_string());
        }

        if options.strike.is_nan() || options.strike <= 0.0 {
            problems.push(format!("options.strike must be positive, got {}", options.strike));
        }
        if options.maturity <= market.evaluation_date {
            problems.push(format!(
                "options.maturity {} must be after market.evaluation_date {}",
                options.maturity, market.evaluation_date
            ));
        }
        if options.barrier.is_nan() || options.barrier <= 0.0 {
            problems.push(format!("options.barrier must be positive, got {}", options.barrier));
        }
        let evaluation_date = market.evaluation_date;
        if !options.asian_fixings.iter().any(|&d| d >= evaluation_date) {
            problems.push(
                "options.asian_fixings has no fixing on or after the evaluation date".to_string(),
            );
        }

        if self.simulation.time_steps == 0 {
            problems.push("simulation.time_steps must be positive".to_string());
        }
        if self.simulation.samples == 0 {
            problems.push("simulation.samples must be positive".to_string());
        }
        if self.sweep.time_steps.contains(&0) {
            problems.push("sweep.time_steps must not contain 0".to_string());
        }
        if self.sweep.samples.contains(&0) {
            problems.push("sweep.samples must not contain 0".to_string());
        }

        problems
    }

    /// Validates, turning collected problems into an error.
    pub fn ensure_valid(&self) -> Result<()> {
        let problems = self.validate();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CliError::InvalidConfig(problems))
        }
    }

    /// Effective configuration rendered back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to render TOML: {}", e)))
    }
}

fn override_parsed<F, T>(lookup: &F, name: &'static str, field: &mut T) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(name) {
        *field = value
            .trim()
            .parse()
            .map_err(|_| CliError::EnvOverride {
                name,
                value: value.clone(),
            })?;
        debug!(name, value = %value, "Applied environment override");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config_is_reference_scenario() {
        let config = CliConfig::default();
        assert_eq!(
            config.market.evaluation_date,
            Date::from_ymd(2022, 2, 24).unwrap()
        );
        assert_eq!(config.market.spot, 36.0);
        assert_eq!(config.market.zero_rates, vec![0.01, 0.015]);
        assert_eq!(config.market.black_volatilities, vec![0.20, 0.25]);
        assert_eq!(config.options.option_type, OptionType::Put);
        assert_eq!(config.options.strike, 40.0);
        assert_eq!(
            config.options.maturity,
            Date::from_ymd(2022, 5, 24).unwrap()
        );
        assert_eq!(config.options.asian_fixings.len(), 9);
        assert_eq!(config.options.barrier_type, BarrierType::UpIn);
        assert_eq!(config.simulation.time_steps, 10);
        assert_eq!(config.simulation.samples, 1_000_000);
        assert_eq!(config.simulation.seed, 42);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
            [market]
            spot = 38.5

            [simulation]
            samples = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.market.spot, 38.5);
        assert_eq!(config.market.zero_rates, vec![0.01, 0.015]);
        assert_eq!(config.simulation.samples, 5000);
        assert_eq!(config.simulation.time_steps, 10);
    }

    #[test]
    fn test_toml_enums_and_dates() {
        let config = CliConfig::from_toml_str(
            r#"
            [market]
            evaluation_date = "2023-01-02"
            day_count = "ACT/360"

            [options]
            option_type = "call"
            maturity = "2023-07-03"
            asian_averaging = "average_price"
            asian_fixings = ["2023-03-01", "2023-07-03"]
            barrier_type = "down_out"
            barrier = 30.0
            "#,
        )
        .unwrap();
        assert_eq!(config.market.day_count, DayCountConvention::ActualActual360);
        assert_eq!(config.options.option_type, OptionType::Call);
        assert_eq!(config.options.asian_averaging, AveragingKind::AveragePrice);
        assert_eq!(config.options.barrier_type, BarrierType::DownOut);
        assert_eq!(
            config.options.asian_fixings[1],
            Date::from_ymd(2023, 7, 3).unwrap()
        );
    }

    #[test]
    fn test_malformed_toml() {
        let err = CliConfig::from_toml_str("[market\nspot = 1").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frozen_mc.toml");
        let mut config = CliConfig::default();
        config.simulation.seed = 7;
        config.sweep.samples = vec![100, 200];
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        assert_eq!(CliConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("FROZEN_MC_SPOT", "37.5"),
                ("FROZEN_MC_SAMPLES", " 2500 "),
                ("FROZEN_MC_SEED", "1"),
                ("FROZEN_MC_MATURITY", "2022-08-24"),
                ("FROZEN_MC_OUTPUT_DIR", "/tmp/out"),
            ]))
            .unwrap();
        assert_eq!(config.market.spot, 37.5);
        assert_eq!(config.simulation.samples, 2500);
        assert_eq!(config.simulation.seed, 1);
        assert_eq!(
            config.options.maturity,
            Date::from_ymd(2022, 8, 24).unwrap()
        );
        assert_eq!(config.sweep.output_dir, "/tmp/out");
        assert_eq!(config.simulation.time_steps, 10);
    }

    #[test]
    fn test_bad_env_override() {
        let mut config = CliConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("FROZEN_MC_TIME_STEPS", "ten")]))
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::EnvOverride {
                name: "FROZEN_MC_TIME_STEPS",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let mut config = CliConfig::default();
        config.market.spot = -1.0;
        config.market.zero_rates.push(0.02);
        config.options.maturity = config.market.evaluation_date;
        config.simulation.samples = 0;

        let problems = config.validate();
        assert_eq!(problems.len(), 4);
        assert!(problems.iter().any(|p| p.contains("market.spot")));
        assert!(problems.iter().any(|p| p.contains("market.zero_rates")));
        assert!(problems.iter().any(|p| p.contains("options.maturity")));
        assert!(problems.iter().any(|p| p.contains("simulation.samples")));
        assert!(matches!(
            config.ensure_valid(),
            Err(CliError::InvalidConfig(p)) if p.len() == 4
        ));
    }

    #[test]
    fn test_validate_nan_spot() {
        let mut config = CliConfig::default();
        config.market.spot = f64::NAN;
        assert_eq!(config.validate().len(), 1);
    }
}
