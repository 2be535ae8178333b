//! Exercise schedule.

use pricer_core::types::Date;

/// European exercise: a single exercise date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuropeanExercise {
    date: Date,
}

impl EuropeanExercise {
    /// Exercise on `date`.
    #[inline]
    pub fn new(date: Date) -> Self {
        Self { date }
    }

    /// The exercise date, which is also the last date of the contract.
    #[inline]
    pub fn last_date(&self) -> Date {
        self.date
    }
}
