//! Discretely monitored arithmetic Asian options.

use pricer_core::types::Date;

use super::error::InstrumentError;
use super::exercise::EuropeanExercise;
use super::payoff::OptionType;

/// What the arithmetic average replaces in the vanilla payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AveragingKind {
    /// Average price: `max(φ (A - K), 0)`
    AveragePrice,
    /// Average strike: `max(φ (S_T - A), 0)`
    AverageStrike,
}

/// Discrete arithmetic-average Asian option.
///
/// Fixings already observed are carried as a running sum and a count so the
/// average spans past and simulated fixings.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{DiscreteAsianOption, EuropeanExercise, OptionType};
///
/// let maturity = Date::from_ymd(2022, 5, 24).unwrap();
/// let fixings = vec![
///     Date::from_ymd(2022, 3, 24).unwrap(),
///     Date::from_ymd(2022, 4, 24).unwrap(),
///     maturity,
/// ];
/// let option = DiscreteAsianOption::average_strike(
///     OptionType::Put,
///     fixings,
///     EuropeanExercise::new(maturity),
/// ).unwrap();
/// assert_eq!(option.strike(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteAsianOption {
    averaging: AveragingKind,
    option_type: OptionType,
    strike: Option<f64>,
    fixing_dates: Vec<Date>,
    running_sum: f64,
    past_fixings: usize,
    exercise: EuropeanExercise,
}

impl DiscreteAsianOption {
    /// Average-price option with a fixed strike.
    pub fn average_price(
        option_type: OptionType,
        strike: f64,
        fixing_dates: Vec<Date>,
        exercise: EuropeanExercise,
    ) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike < 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Self::build(
            AveragingKind::AveragePrice,
            option_type,
            Some(strike),
            fixing_dates,
            exercise,
        )
    }

    /// Average-strike option; the average of the fixings acts as strike.
    pub fn average_strike(
        option_type: OptionType,
        fixing_dates: Vec<Date>,
        exercise: EuropeanExercise,
    ) -> Result<Self, InstrumentError> {
        Self::build(
            AveragingKind::AverageStrike,
            option_type,
            None,
            fixing_dates,
            exercise,
        )
    }

    fn build(
        averaging: AveragingKind,
        option_type: OptionType,
        strike: Option<f64>,
        fixing_dates: Vec<Date>,
        exercise: EuropeanExercise,
    ) -> Result<Self, InstrumentError> {
        if fixing_dates.is_empty() {
            return Err(InstrumentError::InvalidFixings {
                message: "no fixing dates".to_string(),
            });
        }
        if let Some(pair) = fixing_dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(InstrumentError::InvalidFixings {
                message: format!("fixing dates not increasing at {}", pair[1]),
            });
        }
        let last = fixing_dates[fixing_dates.len() - 1];
        if last > exercise.last_date() {
            return Err(InstrumentError::InvalidFixings {
                message: format!(
                    "fixing {} after exercise date {}",
                    last,
                    exercise.last_date()
                ),
            });
        }
        Ok(Self {
            averaging,
            option_type,
            strike,
            fixing_dates,
            running_sum: 0.0,
            past_fixings: 0,
            exercise,
        })
    }

    /// Seeds the average with fixings observed before the evaluation date.
    ///
    /// ```
    /// use pricer_core::types::Date;
    /// use pricer_models::instruments::{DiscreteAsianOption, EuropeanExercise, OptionType};
    ///
    /// let maturity = Date::from_ymd(2022, 5, 24).unwrap();
    /// let option = DiscreteAsianOption::average_price(
    ///     OptionType::Call, 40.0, vec![maturity], EuropeanExercise::new(maturity),
    /// ).unwrap()
    /// .with_past_fixings(75.0, 2)
    /// .unwrap();
    /// assert_eq!(option.past_fixings(), 2);
    /// ```
    pub fn with_past_fixings(
        mut self,
        running_sum: f64,
        past_fixings: usize,
    ) -> Result<Self, InstrumentError> {
        if !running_sum.is_finite() || running_sum < 0.0 {
            return Err(InstrumentError::InvalidParameter {
                message: format!("running sum must be non-negative, got {}", running_sum),
            });
        }
        if past_fixings == 0 && running_sum != 0.0 {
            return Err(InstrumentError::InvalidParameter {
                message: "running sum given without past fixings".to_string(),
            });
        }
        self.running_sum = running_sum;
        self.past_fixings = past_fixings;
        Ok(self)
    }

    /// Averaging kind.
    pub fn averaging(&self) -> AveragingKind {
        self.averaging
    }

    /// Option type.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Fixed strike; `None` for average-strike options.
    pub fn strike(&self) -> Option<f64> {
        self.strike
    }

    /// Future fixing dates, strictly increasing.
    pub fn fixing_dates(&self) -> &[Date] {
        &self.fixing_dates
    }

    /// Sum of the past fixings.
    pub fn running_sum(&self) -> f64 {
        self.running_sum
    }

    /// Number of past fixings.
    pub fn past_fixings(&self) -> usize {
        self.past_fixings
    }

    /// Exercise.
    pub fn exercise(&self) -> &EuropeanExercise {
        &self.exercise
    }
}
