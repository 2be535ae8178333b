//! Dates and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions used to turn
//!   evaluation and maturity dates into model time
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let today = Date::from_ymd(2022, 2, 24).unwrap();
//! let maturity = Date::from_ymd(2022, 5, 24).unwrap();
//!
//! let t = DayCountConvention::ActualActual365.year_fraction_dates(today, maturity);
//! assert!((t - 89.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2022, 2, 24).unwrap();
/// let parsed: Date = "2022-02-24".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = date.add_days(10).unwrap();
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// `DateError::InvalidDate` when the components do not form a calendar date.
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2022, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date shifted by a signed number of calendar days.
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2022, 2, 24).unwrap();
    /// assert_eq!(date.add_days(8).unwrap(), Date::from_ymd(2022, 3, 4).unwrap());
    /// assert_eq!(date.add_days(-24).unwrap(), Date::from_ymd(2022, 1, 31).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("{} {:+} days", self, days)))
    }

    /// Returns the date shifted by a signed number of months.
    ///
    /// When the target month is shorter, the day is clamped to its last day
    /// (31 January + 1 month = 28 or 29 February).
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2022, 2, 24).unwrap();
    /// assert_eq!(date.add_months(6).unwrap(), Date::from_ymd(2022, 8, 24).unwrap());
    ///
    /// let end_of_jan = Date::from_ymd(2022, 1, 31).unwrap();
    /// assert_eq!(end_of_jan.add_months(1).unwrap(), Date::from_ymd(2022, 2, 28).unwrap());
    /// ```
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("{} {:+} months", self, months)))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates (negative when `other` is later).
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `ActualActual365`: Actual days / 365 (Act/365 Fixed, the default for
///   equity option term structures)
/// - `ActualActual360`: Actual days / 360
/// - `Thirty360`: Each month treated as 30 days, year as 360 days
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
///
/// assert_eq!(DayCountConvention::default(), DayCountConvention::ActualActual365);
/// assert_eq!("act/360".parse::<DayCountConvention>().unwrap().name(), "ACT/360");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    ActualActual365,

    /// Actual/360: actual_days / 360.0
    ActualActual360,

    /// 30/360 US Bond Basis
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual365 => "ACT/365",
            DayCountConvention::ActualActual360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`; callers decide whether
    /// a backwards interval is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
    /// assert!((yf - 0.4986).abs() < 0.001);
    ///
    /// let yf_neg = DayCountConvention::ActualActual365.year_fraction_dates(end, start);
    /// assert!((yf_neg + 0.4986).abs() < 0.001);
    /// ```
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        let days = end - start;

        match self {
            DayCountConvention::ActualActual365 => days as f64 / 365.0,
            DayCountConvention::ActualActual360 => days as f64 / 360.0,
            DayCountConvention::Thirty360 => {
                let (first, last, sign) = if start <= end {
                    (start, end, 1.0)
                } else {
                    (end, start, -1.0)
                };

                let d1 = if first.day() == 31 { 30 } else { first.day() };
                let d2 = if last.day() == 31 && d1 == 30 {
                    30
                } else {
                    last.day()
                };

                let days_30_360 = 360 * (last.year() - first.year())
                    + 30 * (last.month() as i32 - first.month() as i32)
                    + (d2 as i32 - d1 as i32);
                sign * days_30_360 as f64 / 360.0
            }
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// Accepted aliases: "ACT/365", "Actual/365", "A365", "ACT/360",
    /// "Actual/360", "A360", "30/360", "Thirty360".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" | "ACT365F" => Ok(DayCountConvention::ActualActual365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::ActualActual360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Date Tests
    // ========================================

    #[test]
    fn test_from_ymd_rejects_invalid() {
        assert_eq!(
            Date::from_ymd(2022, 2, 30),
            Err(DateError::InvalidDate {
                year: 2022,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let date = Date::parse("2022-05-24").unwrap();
        assert_eq!(date.to_string(), "2022-05-24");
        assert!(Date::parse("24/05/2022").is_err());
    }

    #[test]
    fn test_add_days_crosses_month() {
        let today = Date::from_ymd(2022, 2, 24).unwrap();
        let later = today.add_days(28).unwrap();
        assert_eq!(later, Date::from_ymd(2022, 3, 24).unwrap());
        assert_eq!(later - today, 28);
    }

    #[test]
    fn test_add_months_negative() {
        let date = Date::from_ymd(2022, 5, 24).unwrap();
        assert_eq!(
            date.add_months(-3).unwrap(),
            Date::from_ymd(2022, 2, 24).unwrap()
        );
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let date = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(
            date.add_months(1).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_sub_is_signed() {
        let a = Date::from_ymd(2022, 2, 24).unwrap();
        let b = Date::from_ymd(2022, 5, 24).unwrap();
        assert_eq!(b - a, 89);
        assert_eq!(a - b, -89);
    }

    // ========================================
    // Day Count Tests
    // ========================================

    #[test]
    fn test_act_365_reference_maturity() {
        let today = Date::from_ymd(2022, 2, 24).unwrap();
        let maturity = Date::from_ymd(2022, 5, 24).unwrap();
        let t = DayCountConvention::ActualActual365.year_fraction_dates(today, maturity);
        assert_relative_eq!(t, 89.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_act_360() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();
        let t = DayCountConvention::ActualActual360.year_fraction_dates(start, end);
        assert_relative_eq!(t, 182.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_thirty_360_with_31st_days() {
        let start = Date::from_ymd(2024, 1, 31).unwrap();
        let end = Date::from_ymd(2024, 3, 31).unwrap();
        let t = DayCountConvention::Thirty360.year_fraction_dates(start, end);
        assert_relative_eq!(t, 60.0 / 360.0, epsilon = 1e-12);

        let back = DayCountConvention::Thirty360.year_fraction_dates(end, start);
        assert_relative_eq!(back, -60.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_same_date_is_zero() {
        let date = Date::from_ymd(2022, 2, 24).unwrap();
        for dc in [
            DayCountConvention::ActualActual365,
            DayCountConvention::ActualActual360,
            DayCountConvention::Thirty360,
        ] {
            assert_eq!(dc.year_fraction_dates(date, date), 0.0);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "Actual/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActualActual365
        );
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert!("ACT/ACT".parse::<DayCountConvention>().is_err());
    }
}
