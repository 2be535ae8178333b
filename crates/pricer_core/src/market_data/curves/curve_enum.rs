//! Static dispatch over the concrete yield curves.

use super::{FlatCurve, InterpolatedCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete yield curve implementations.
///
/// Used by the Black-Scholes process to hold risk-free and dividend curves
/// without trait objects.
///
/// # Variants
///
/// - `Flat`: Constant rate yield curve
/// - `Interpolated`: Pillar-based interpolated yield curve
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveEnum, FlatCurve, YieldCurve};
///
/// // Create a flat curve wrapped in CurveEnum
/// let flat = FlatCurve::new(0.05_f64);
/// let curve = CurveEnum::Flat(flat);
///
/// // Use YieldCurve trait methods
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub enum CurveEnum<T: Float> {
    /// Flat (constant rate) yield curve
    Flat(FlatCurve<T>),
    /// Interpolated yield curve with pillar points
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Create a flat curve variant.
    ///
    /// # Arguments
    ///
    /// * `rate` - The constant interest rate
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveEnum, YieldCurve};
    ///
    /// let curve = CurveEnum::flat(0.05_f64);
    /// let df = curve.discount_factor(1.0).unwrap();
    /// ```
    #[inline]
    pub fn flat(rate: T) -> Self {
        CurveEnum::Flat(FlatCurve::new(rate))
    }
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    /// Return the discount factor for maturity `t`.
    ///
    /// Delegates to the underlying curve implementation.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.discount_factor(t),
            CurveEnum::Interpolated(curve) => curve.discount_factor(t),
        }
    }

    /// Return the zero rate for maturity `t`.
    ///
    /// Delegates to the underlying curve implementation.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.zero_rate(t),
            CurveEnum::Interpolated(curve) => curve.zero_rate(t),
        }
    }

    /// Return the forward rate between t1 and t2.
    ///
    /// Delegates to the underlying curve implementation.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.forward_rate(t1, t2),
            CurveEnum::Interpolated(curve) => curve.forward_rate(t1, t2),
        }
    }
}

impl<T: Float> From<FlatCurve<T>> for CurveEnum<T> {
    fn from(curve: FlatCurve<T>) -> Self {
        CurveEnum::Flat(curve)
    }
}

impl<T: Float> From<InterpolatedCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedCurve<T>) -> Self {
        CurveEnum::Interpolated(curve)
    }
}
