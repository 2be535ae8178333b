//! # Pricer Pricing
//!
//! Monte Carlo engines for European, discrete Asian and single-barrier
//! options on a one-dimensional Black-Scholes process, with the option of
//! replacing the term-structure driven process by a frozen-parameter one.
//!
//! ## Modules
//!
//! - [`rng`]: seeded pseudo-random sequences (Gaussian and uniform)
//! - [`mc`]: time grids, Brownian bridge, path generation, path pricers,
//!   statistics and the sampling loop
//! - [`frozen`]: parameter extraction, constant process factory and the
//!   path generator selector
//! - [`engine`]: pricing engines and the instrument wrapper they attach to
//! - [`comparison`]: timed NPV comparison across engine configurations
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pricer_core::market_data::curves::CurveEnum;
//! use pricer_core::market_data::surfaces::VolatilityEnum;
//! use pricer_core::types::{Date, DayCountConvention};
//! use pricer_models::instruments::{
//!     EuropeanExercise, EuropeanOption, OptionType, PlainVanillaPayoff,
//! };
//! use pricer_models::models::GeneralizedBlackScholesProcess;
//! use pricer_pricing::engine::{McEngine, PricedInstrument};
//! use pricer_pricing::mc::SimulationConfiguration;
//!
//! let today = Date::from_ymd(2022, 2, 24).unwrap();
//! let maturity = Date::from_ymd(2022, 5, 24).unwrap();
//! let process = Arc::new(GeneralizedBlackScholesProcess::new(
//!     36.0,
//!     Arc::new(CurveEnum::flat(0.01)),
//!     Arc::new(CurveEnum::flat(0.0)),
//!     Arc::new(VolatilityEnum::flat(0.2)),
//!     DayCountConvention::ActualActual365,
//! ));
//!
//! let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
//! let option = EuropeanOption::new(payoff, EuropeanExercise::new(maturity));
//!
//! let config = SimulationConfiguration::builder()
//!     .time_steps(10)
//!     .samples(2_000)
//!     .seed(42)
//!     .frozen_parameters(true)
//!     .build()
//!     .unwrap();
//!
//! let mut instrument = PricedInstrument::new(option.into());
//! instrument.set_pricing_engine(McEngine::new(process, today, config));
//! let npv = instrument.npv().unwrap();
//! assert!(npv > 3.0 && npv < 6.0);
//! ```

#![warn(missing_docs)]

pub mod comparison;
pub mod engine;
pub mod frozen;
pub mod mc;
pub mod rng;
