//! Interpolated yield curve implementation.

use super::traits::short_end;
use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use crate::types::{Date, DayCountConvention};
use num_traits::Float;

/// Interpolation method for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates.
    #[default]
    Linear,

    /// Linear interpolation on ln(D(t)), i.e. piecewise constant forwards.
    LogLinear,
}

/// Interpolated yield curve built from (tenor, zero rate) pillars.
///
/// The first pillar may sit at `t = 0`. Below the first pillar the curve is
/// flat in the first zero rate; beyond the last pillar it is flat in the last
/// zero rate only when `allow_extrapolation` is set.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, InterpolatedCurve, CurveInterpolation};
///
/// let curve = InterpolatedCurve::new(
///     &[0.0_f64, 0.5],
///     &[0.01, 0.015],
///     CurveInterpolation::Linear,
///     false,
/// ).unwrap();
///
/// let r = curve.zero_rate(0.25).unwrap();
/// assert!((r - 0.0125).abs() < 1e-12);
/// assert!(curve.zero_rate(1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve<T: Float> {
    /// Pillar zero rates
    rates: Vec<T>,
    /// Interpolator over rates (Linear) or log discount factors (LogLinear)
    interp: LinearInterpolator<T>,
    /// Interpolation method
    method: CurveInterpolation,
    /// Whether to allow flat extrapolation beyond the last pillar
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct an interpolated curve from pillar points.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - Fewer than 2 pillars or mismatched lengths
    /// * `MarketDataError::InvalidMaturity` - Negative or non-increasing tenor
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len(),
                need: 2,
            });
        }

        if tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: rates.len(),
                need: tenors.len(),
            });
        }

        for (i, &tenor) in tenors.iter().enumerate() {
            let decreasing = i > 0 && tenor <= tenors[i - 1];
            if tenor < T::zero() || decreasing || tenor.is_nan() {
                return Err(MarketDataError::InvalidMaturity {
                    t: tenor.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let interp = match method {
            CurveInterpolation::Linear => LinearInterpolator::new(tenors, rates)?,
            CurveInterpolation::LogLinear => {
                let log_dfs: Vec<T> = tenors
                    .iter()
                    .zip(rates.iter())
                    .map(|(&tenor, &rate)| -rate * tenor)
                    .collect();
                LinearInterpolator::new(tenors, &log_dfs)?
            }
        };

        Ok(Self {
            rates: rates.to_vec(),
            interp,
            method,
            allow_extrapolation,
        })
    }

    /// Construct a curve from pillar dates measured from `reference`.
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve, YieldCurve};
    /// use pricer_core::types::{Date, DayCountConvention};
    ///
    /// let today = Date::from_ymd(2022, 2, 24).unwrap();
    /// let dates = [today, today.add_months(6).unwrap()];
    /// let curve = InterpolatedCurve::from_dates(
    ///     today,
    ///     &dates,
    ///     &[0.01_f64, 0.015],
    ///     DayCountConvention::ActualActual365,
    ///     CurveInterpolation::Linear,
    ///     false,
    /// ).unwrap();
    /// assert_eq!(curve.domain().0, 0.0);
    /// ```
    pub fn from_dates(
        reference: Date,
        dates: &[Date],
        rates: &[T],
        day_count: DayCountConvention,
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        let tenors = dates
            .iter()
            .map(|&d| {
                let t = day_count.year_fraction_dates(reference, d);
                T::from(t).ok_or(MarketDataError::InvalidMaturity { t })
            })
            .collect::<Result<Vec<T>, _>>()?;
        Self::new(&tenors, rates, method, allow_extrapolation)
    }

    /// Return the tenor domain `(t_min, t_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        self.interp.domain()
    }

    /// Return the interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Return whether extrapolation is allowed.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Flat rate to use outside the pillar range, if any.
    fn boundary_rate(&self, t: T) -> Result<Option<T>, MarketDataError> {
        let (t_min, t_max) = self.domain();
        if t < t_min {
            return Ok(Some(self.rates[0]));
        }
        if t > t_max {
            if !self.allow_extrapolation {
                return Err(MarketDataError::OutOfBounds {
                    x: t.to_f64().unwrap_or(f64::NAN),
                    min: t_min.to_f64().unwrap_or(f64::NAN),
                    max: t_max.to_f64().unwrap_or(f64::NAN),
                });
            }
            return Ok(Some(self.rates[self.rates.len() - 1]));
        }
        Ok(None)
    }

    /// ln(D(t)) for t > 0.
    fn log_discount(&self, t: T) -> Result<T, MarketDataError> {
        if let Some(rate) = self.boundary_rate(t)? {
            return Ok(-rate * t);
        }
        match self.method {
            CurveInterpolation::Linear => Ok(-self.interp.interpolate(t)? * t),
            CurveInterpolation::LogLinear => Ok(self.interp.interpolate(t)?),
        }
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    /// # Errors
    ///
    /// * `MarketDataError::InvalidMaturity` - If t < 0
    /// * `MarketDataError::OutOfBounds` - Beyond the last pillar without extrapolation
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        Ok(self.log_discount(t)?.exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let t_eff = if t == T::zero() { short_end::<T>() } else { t };
        if let Some(rate) = self.boundary_rate(t_eff)? {
            return Ok(rate);
        }
        match self.method {
            CurveInterpolation::Linear => Ok(self.interp.interpolate(t_eff)?),
            CurveInterpolation::LogLinear => Ok(-self.interp.interpolate(t_eff)? / t_eff),
        }
    }
}
