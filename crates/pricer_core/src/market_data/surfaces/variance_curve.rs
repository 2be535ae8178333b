//! Black variance curve: a strike-independent volatility term structure.

use super::traits::check_query;
use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::market_data::MIN_VARIANCE_TIME;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use crate::types::{Date, DayCountConvention};
use num_traits::Float;

/// Strike-independent Black volatility curve.
///
/// Pillar volatilities are converted to total variances `σᵢ² tᵢ` and an
/// implicit `(0, 0)` node is prepended. Total variance is linear between
/// nodes; past the last pillar the last volatility is held flat
/// (variance grows linearly in `t`). Volatility lookups use
/// `max(t, MIN_VARIANCE_TIME)` so `t = 0` returns the first-segment volatility.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{BlackVarianceCurve, VolatilitySurface};
///
/// let curve = BlackVarianceCurve::new(&[0.25_f64, 0.5], &[0.20, 0.25]).unwrap();
///
/// // First segment: constant volatility
/// assert!((curve.volatility(36.0, 0.1).unwrap() - 0.20).abs() < 1e-12);
/// assert!((curve.volatility(36.0, 0.0).unwrap() - 0.20).abs() < 1e-12);
///
/// // Pillar
/// assert!((curve.volatility(36.0, 0.5).unwrap() - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BlackVarianceCurve<T: Float> {
    /// Interpolator over (time, total variance), starting at (0, 0)
    variance: LinearInterpolator<T>,
}

impl<T: Float> BlackVarianceCurve<T> {
    /// Build the curve from pillar times (years) and Black volatilities.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - No pillars or mismatched lengths
    /// * `MarketDataError::InvalidMaturity` - Non-positive or non-increasing time
    /// * `MarketDataError::InvalidVariance` - Total variance decreasing in time
    pub fn new(times: &[T], vols: &[T]) -> Result<Self, MarketDataError> {
        if times.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }
        if times.len() != vols.len() {
            return Err(MarketDataError::InsufficientData {
                got: vols.len(),
                need: times.len(),
            });
        }

        let mut nodes_t = Vec::with_capacity(times.len() + 1);
        let mut nodes_v = Vec::with_capacity(times.len() + 1);
        nodes_t.push(T::zero());
        nodes_v.push(T::zero());

        for (&t, &vol) in times.iter().zip(vols.iter()) {
            let previous_t = nodes_t[nodes_t.len() - 1];
            if t.is_nan() || t <= previous_t {
                return Err(MarketDataError::InvalidMaturity {
                    t: t.to_f64().unwrap_or(f64::NAN),
                });
            }
            let var = vol * vol * t;
            if var < nodes_v[nodes_v.len() - 1] {
                return Err(MarketDataError::InvalidVariance {
                    t: t.to_f64().unwrap_or(f64::NAN),
                    variance: var.to_f64().unwrap_or(f64::NAN),
                });
            }
            nodes_t.push(t);
            nodes_v.push(var);
        }

        Ok(Self {
            variance: LinearInterpolator::new(&nodes_t, &nodes_v)?,
        })
    }

    /// Build the curve from pillar dates measured from `reference`.
    pub fn from_dates(
        reference: Date,
        dates: &[Date],
        vols: &[T],
        day_count: DayCountConvention,
    ) -> Result<Self, MarketDataError> {
        let times = dates
            .iter()
            .map(|&d| {
                let t = day_count.year_fraction_dates(reference, d);
                T::from(t).ok_or(MarketDataError::InvalidMaturity { t })
            })
            .collect::<Result<Vec<T>, _>>()?;
        Self::new(&times, vols)
    }

    /// Pillar times including the implicit origin.
    pub fn times(&self) -> &[T] {
        self.variance.xs()
    }

    /// Total variances at [`times`](Self::times).
    pub fn variances(&self) -> &[T] {
        self.variance.ys()
    }

    /// Total Black variance at `t >= 0`.
    pub fn black_variance(&self, t: T) -> Result<T, MarketDataError> {
        if t.is_nan() || t < T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let (_, t_last) = self.variance.domain();
        if t <= t_last {
            return Ok(self.variance.interpolate(t)?);
        }
        let ys = self.variance.ys();
        Ok(ys[ys.len() - 1] * t / t_last)
    }
}

impl<T: Float> VolatilitySurface<T> for BlackVarianceCurve<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        let floor = T::from(MIN_VARIANCE_TIME).unwrap_or_else(T::epsilon);
        let t = expiry.max(floor);
        Ok((self.black_variance(t)? / t).sqrt())
    }

    fn total_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        self.black_variance(expiry)
    }

    #[inline]
    fn is_strike_independent(&self) -> bool {
        true
    }

    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
