//! Single-barrier options.

use super::error::InstrumentError;
use super::exercise::EuropeanExercise;
use super::payoff::PlainVanillaPayoff;

/// Barrier direction and knock behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BarrierType {
    /// Activated when the underlying falls below the barrier
    DownIn,
    /// Activated when the underlying rises above the barrier
    UpIn,
    /// Extinguished when the underlying falls below the barrier
    DownOut,
    /// Extinguished when the underlying rises above the barrier
    UpOut,
}

impl BarrierType {
    /// Whether the barrier is monitored from below.
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::UpOut)
    }

    /// Whether touching the barrier activates the option.
    #[inline]
    pub fn is_knock_in(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::DownIn)
    }

    /// Whether `underlying` is strictly beyond `barrier`.
    ///
    /// ```
    /// use pricer_models::instruments::BarrierType;
    ///
    /// assert!(BarrierType::UpIn.is_triggered(41.0, 40.0));
    /// assert!(!BarrierType::UpIn.is_triggered(40.0, 40.0));
    /// assert!(BarrierType::DownOut.is_triggered(39.0, 40.0));
    /// ```
    #[inline]
    pub fn is_triggered(&self, underlying: f64, barrier: f64) -> bool {
        if self.is_up() {
            underlying > barrier
        } else {
            underlying < barrier
        }
    }
}

/// Single-barrier option on a plain vanilla payoff, with an optional rebate.
///
/// Knock-in options pay the rebate at maturity when never activated;
/// knock-out options pay it when extinguished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierOption {
    barrier_type: BarrierType,
    barrier: f64,
    rebate: f64,
    payoff: PlainVanillaPayoff,
    exercise: EuropeanExercise,
}

impl BarrierOption {
    /// Creates a barrier option.
    ///
    /// ```
    /// use pricer_core::types::Date;
    /// use pricer_models::instruments::{
    ///     BarrierOption, BarrierType, EuropeanExercise, OptionType, PlainVanillaPayoff,
    /// };
    ///
    /// let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
    /// let exercise = EuropeanExercise::new(Date::from_ymd(2022, 5, 24).unwrap());
    /// let option = BarrierOption::new(BarrierType::UpIn, 40.0, 0.0, payoff, exercise).unwrap();
    /// assert!(option.barrier_type().is_knock_in());
    /// ```
    pub fn new(
        barrier_type: BarrierType,
        barrier: f64,
        rebate: f64,
        payoff: PlainVanillaPayoff,
        exercise: EuropeanExercise,
    ) -> Result<Self, InstrumentError> {
        if !barrier.is_finite() || barrier <= 0.0 {
            return Err(InstrumentError::InvalidBarrier { barrier });
        }
        if !rebate.is_finite() || rebate < 0.0 {
            return Err(InstrumentError::InvalidRebate { rebate });
        }
        Ok(Self {
            barrier_type,
            barrier,
            rebate,
            payoff,
            exercise,
        })
    }

    /// Barrier type.
    pub fn barrier_type(&self) -> BarrierType {
        self.barrier_type
    }

    /// Barrier level.
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Rebate.
    pub fn rebate(&self) -> f64 {
        self.rebate
    }

    /// Payoff.
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// Exercise.
    pub fn exercise(&self) -> &EuropeanExercise {
        &self.exercise
    }

    /// Whether the barrier is already breached at `underlying`.
    pub fn is_triggered(&self, underlying: f64) -> bool {
        self.barrier_type.is_triggered(underlying, self.barrier)
    }
}
