//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use crate::market_data::SHORT_END_INTERVAL;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate calculations.
///
/// # Contract
///
/// - `discount_factor(t)` returns the discount factor D(t) for maturity t
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `forward_rate(t1, t2)` returns the continuously compounded forward rate
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
/// - Negative times are rejected with `MarketDataError::InvalidMaturity`
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidMaturity` - If t < 0
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    ///
    /// At `t = 0` the rate is implied over [`SHORT_END_INTERVAL`] instead,
    /// so the instantaneous short rate is returned rather than `0/0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let t_eff = if t == T::zero() { short_end::<T>() } else { t };
        let df = self.discount_factor(t_eff)?;
        Ok(-df.ln() / t_eff)
    }

    /// Return the forward rate between t1 and t2.
    ///
    /// ```text
    /// f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)
    /// ```
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidMaturity` - If t2 <= t1
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(f64::NAN),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(-(df2 / df1).ln() / dt)
    }
}

/// [`SHORT_END_INTERVAL`] in the curve's float type.
#[inline]
pub(crate) fn short_end<T: Float>() -> T {
    T::from(SHORT_END_INTERVAL).unwrap_or_else(T::epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Curve with a linearly rising instantaneous rate r(s) = a + b s.
    struct LinearShortRate {
        a: f64,
        b: f64,
    }

    impl YieldCurve<f64> for LinearShortRate {
        fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
            if t < 0.0 {
                return Err(MarketDataError::InvalidMaturity { t });
            }
            Ok((-(self.a * t + 0.5 * self.b * t * t)).exp())
        }
    }

    #[test]
    fn test_default_zero_rate() {
        let curve = LinearShortRate { a: 0.01, b: 0.02 };
        let r = curve.zero_rate(0.5).unwrap();
        assert_relative_eq!(r, 0.01 + 0.5 * 0.02 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_at_zero_uses_short_end() {
        let curve = LinearShortRate { a: 0.01, b: 0.02 };
        let r = curve.zero_rate(0.0).unwrap();
        assert!(r.is_finite());
        assert_relative_eq!(r, 0.01 + 0.5 * 0.02 * SHORT_END_INTERVAL, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_negative_time() {
        let curve = LinearShortRate { a: 0.01, b: 0.0 };
        assert!(matches!(
            curve.zero_rate(-0.1),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_default_forward_rate() {
        let curve = LinearShortRate { a: 0.01, b: 0.02 };
        // Average of the short rate over [0.25, 0.75]
        let fwd = curve.forward_rate(0.25, 0.75).unwrap();
        assert_relative_eq!(fwd, 0.01 + 0.02 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate_rejects_empty_interval() {
        let curve = LinearShortRate { a: 0.01, b: 0.0 };
        assert!(curve.forward_rate(1.0, 1.0).is_err());
    }
}
