//! Option instruments priced by the Monte Carlo engines.
//!
//! # Architecture
//!
//! Uses enum dispatch rather than trait objects: [`Instrument`] wraps the
//! three supported contracts, each with a single European exercise date.
//!
//! # Instrument Types
//!
//! - [`EuropeanOption`]: plain vanilla payoff at maturity
//! - [`DiscreteAsianOption`]: arithmetic average price or average strike
//! - [`BarrierOption`]: single barrier with rebate
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{
//!     EuropeanExercise, EuropeanOption, Instrument, OptionType, PlainVanillaPayoff,
//! };
//!
//! let maturity = Date::from_ymd(2022, 5, 24).unwrap();
//! let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
//! let option = EuropeanOption::new(payoff, EuropeanExercise::new(maturity));
//! let instrument = Instrument::European(option);
//!
//! assert_eq!(instrument.maturity_date(), maturity);
//! assert_eq!(instrument.strike(), Some(40.0));
//! assert_eq!(instrument.kind_name(), "European");
//! ```

mod asian;
mod barrier;
mod error;
mod exercise;
mod payoff;
mod vanilla;

pub use asian::{AveragingKind, DiscreteAsianOption};
pub use barrier::{BarrierOption, BarrierType};
pub use error::InstrumentError;
pub use exercise::EuropeanExercise;
pub use payoff::{OptionType, PlainVanillaPayoff};
pub use vanilla::EuropeanOption;

use pricer_core::types::Date;

/// Instrument enum for static dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Instrument {
    /// European vanilla option
    European(EuropeanOption),
    /// Discrete arithmetic Asian option
    Asian(DiscreteAsianOption),
    /// Single-barrier option
    Barrier(BarrierOption),
}

impl Instrument {
    /// Last exercise date.
    pub fn maturity_date(&self) -> Date {
        match self {
            Instrument::European(option) => option.exercise().last_date(),
            Instrument::Asian(option) => option.exercise().last_date(),
            Instrument::Barrier(option) => option.exercise().last_date(),
        }
    }

    /// Payoff strike, if the contract has a fixed one.
    pub fn strike(&self) -> Option<f64> {
        match self {
            Instrument::European(option) => Some(option.payoff().strike()),
            Instrument::Asian(option) => option.strike(),
            Instrument::Barrier(option) => Some(option.payoff().strike()),
        }
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        match self {
            Instrument::European(option) => option.payoff().option_type(),
            Instrument::Asian(option) => option.option_type(),
            Instrument::Barrier(option) => option.payoff().option_type(),
        }
    }

    /// Short label used in logs and reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Instrument::European(_) => "European",
            Instrument::Asian(_) => "Asian",
            Instrument::Barrier(_) => "Barrier",
        }
    }
}

impl From<EuropeanOption> for Instrument {
    fn from(option: EuropeanOption) -> Self {
        Instrument::European(option)
    }
}

impl From<DiscreteAsianOption> for Instrument {
    fn from(option: DiscreteAsianOption) -> Self {
        Instrument::Asian(option)
    }
}

impl From<BarrierOption> for Instrument {
    fn from(option: BarrierOption) -> Self {
        Instrument::Barrier(option)
    }
}
