//! European vanilla option.

use super::exercise::EuropeanExercise;
use super::payoff::PlainVanillaPayoff;

/// European option: plain vanilla payoff paid at the exercise date.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{
///     EuropeanExercise, EuropeanOption, OptionType, PlainVanillaPayoff,
/// };
///
/// let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
/// let exercise = EuropeanExercise::new(Date::from_ymd(2022, 5, 24).unwrap());
/// let option = EuropeanOption::new(payoff, exercise);
/// assert_eq!(option.payoff().strike(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption {
    payoff: PlainVanillaPayoff,
    exercise: EuropeanExercise,
}

impl EuropeanOption {
    /// Creates a European option.
    pub fn new(payoff: PlainVanillaPayoff, exercise: EuropeanExercise) -> Self {
        Self { payoff, exercise }
    }

    /// Payoff.
    #[inline]
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// Exercise.
    #[inline]
    pub fn exercise(&self) -> &EuropeanExercise {
        &self.exercise
    }
}
