//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat yield curve with constant continuously compounded rate.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.01_f64);
///
/// assert_eq!(curve.zero_rate(0.0).unwrap(), 0.01);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.01);
/// assert!((curve.discount_factor(1.0).unwrap() - (-0.01_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant interest rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    fn check_time(t: T) -> Result<(), MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// `D(t) = exp(-r t)`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        Self::check_time(t)?;
        Ok((-self.rate * t).exp())
    }

    /// The constant rate for every `t >= 0`, including `t = 0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        Self::check_time(t)?;
        Ok(self.rate)
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(f64::NAN),
            });
        }
        Self::check_time(t1)?;
        Ok(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_negative_rate() {
        let curve = FlatCurve::new(-0.01_f64);
        assert_eq!(curve.rate(), -0.01);
    }

    // ========================================
    // Lookup Tests
    // ========================================

    #[test]
    fn test_discount_factor_at_zero() {
        let curve = FlatCurve::new(0.05_f64);
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor_negative_time() {
        let curve = FlatCurve::new(0.05_f64);
        assert!(matches!(
            curve.discount_factor(-1.0),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_zero_rate_at_zero() {
        let curve = FlatCurve::new(0.015_f64);
        assert_eq!(curve.zero_rate(0.0).unwrap(), 0.015);
    }

    #[test]
    fn test_forward_rate_invalid_order() {
        let curve = FlatCurve::new(0.05_f64);
        assert!(curve.forward_rate(2.0, 1.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_zero_rate_is_constant(rate in -0.05_f64..0.2, t in 0.0_f64..30.0) {
            let curve = FlatCurve::new(rate);
            prop_assert_eq!(curve.zero_rate(t).unwrap(), rate);
        }

        #[test]
        fn prop_discount_factor_consistent(rate in -0.05_f64..0.2, t in 0.0_f64..30.0) {
            let curve = FlatCurve::new(rate);
            let df = curve.discount_factor(t).unwrap();
            assert_relative_eq!(df, (-rate * t).exp(), max_relative = 1e-12);
        }
    }
}
