//! Generalised Black-Scholes process driven by term structures.
//!
//! ```text
//! d ln S = (r(t) - q(t) - σ_loc(t, S)²/2) dt + σ_loc(t, S) dW
//! ```
//!
//! `r` and `q` are instantaneous forward rates of the risk-free and dividend
//! curves, and `σ_loc² = ∂(total Black variance)/∂t`. For strike-independent
//! volatility the step is exact:
//!
//! ```text
//! S(t0+dt) = S(t0) · exp((f_r - f_q) dt - ΔV/2 + √ΔV · dw)
//! ```
//!
//! with `f_r`, `f_q` the forward rates over `[t0, t0+dt]` and `ΔV` the
//! increase of total variance over the step.

use std::sync::Arc;

use pricer_core::market_data::curves::{CurveEnum, YieldCurve};
use pricer_core::market_data::surfaces::{VolatilityEnum, VolatilitySurface};
use pricer_core::market_data::{MarketDataError, SHORT_END_INTERVAL};
use pricer_core::types::DayCountConvention;

use super::stochastic::{euler_evolve, StochasticProcess1D};

/// Live Black-Scholes-Merton process.
///
/// Curves and volatility are shared through `Arc` so several engines can
/// reference the same market without copying it.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pricer_core::market_data::curves::CurveEnum;
/// use pricer_core::market_data::surfaces::VolatilityEnum;
/// use pricer_core::types::DayCountConvention;
/// use pricer_models::models::{GeneralizedBlackScholesProcess, StochasticProcess1D};
///
/// let process = GeneralizedBlackScholesProcess::new(
///     36.0,
///     Arc::new(CurveEnum::flat(0.01)),
///     Arc::new(CurveEnum::flat(0.0)),
///     Arc::new(VolatilityEnum::flat(0.2)),
///     DayCountConvention::ActualActual365,
/// );
/// assert_eq!(process.x0(), 36.0);
/// assert!((process.drift(0.1, 36.0).unwrap() - (0.01 - 0.02)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GeneralizedBlackScholesProcess {
    x0: f64,
    risk_free: Arc<CurveEnum<f64>>,
    dividend: Arc<CurveEnum<f64>>,
    volatility: Arc<VolatilityEnum<f64>>,
    day_count: DayCountConvention,
}

impl GeneralizedBlackScholesProcess {
    /// Creates the process from a spot value and shared term structures.
    pub fn new(
        x0: f64,
        risk_free: Arc<CurveEnum<f64>>,
        dividend: Arc<CurveEnum<f64>>,
        volatility: Arc<VolatilityEnum<f64>>,
        day_count: DayCountConvention,
    ) -> Self {
        Self {
            x0,
            risk_free,
            dividend,
            volatility,
            day_count,
        }
    }

    /// Risk-free curve.
    pub fn risk_free_curve(&self) -> &CurveEnum<f64> {
        &self.risk_free
    }

    /// Dividend curve.
    pub fn dividend_curve(&self) -> &CurveEnum<f64> {
        &self.dividend
    }

    /// Black volatility term structure.
    pub fn volatility_surface(&self) -> &VolatilityEnum<f64> {
        &self.volatility
    }

    /// Day count used to convert dates into process time.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Continuously compounded risk-free zero rate to `t`.
    pub fn risk_free_zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        self.risk_free.zero_rate(t)
    }

    /// Continuously compounded dividend zero rate to `t`.
    pub fn dividend_zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        self.dividend.zero_rate(t)
    }

    /// Black volatility at `(t, strike)`.
    pub fn black_volatility(&self, t: f64, strike: f64) -> Result<f64, MarketDataError> {
        self.volatility.volatility(strike, t)
    }

    /// Local variance rate `∂V/∂t` at `(t, x)` by forward difference.
    fn local_variance(&self, t: f64, x: f64) -> Result<f64, MarketDataError> {
        let h = SHORT_END_INTERVAL;
        let v1 = self.volatility.total_variance(x, t)?;
        let v2 = self.volatility.total_variance(x, t + h)?;
        Ok(((v2 - v1) / h).max(0.0))
    }
}

impl StochasticProcess1D for GeneralizedBlackScholesProcess {
    fn x0(&self) -> f64 {
        self.x0
    }

    fn drift(&self, t: f64, x: f64) -> Result<f64, MarketDataError> {
        let t1 = t + SHORT_END_INTERVAL;
        let r = self.risk_free.forward_rate(t, t1)?;
        let q = self.dividend.forward_rate(t, t1)?;
        Ok(r - q - 0.5 * self.local_variance(t, x)?)
    }

    fn diffusion(&self, t: f64, x: f64) -> Result<f64, MarketDataError> {
        Ok(self.local_variance(t, x)?.sqrt())
    }

    #[inline]
    fn apply(&self, x0: f64, dx: f64) -> f64 {
        x0 * dx.exp()
    }

    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, MarketDataError> {
        if !self.volatility.is_strike_independent() {
            return euler_evolve(self, t0, x0, dt, dw);
        }
        let t1 = t0 + dt;
        let var = self.volatility.total_variance(x0, t1)? - self.volatility.total_variance(x0, t0)?;
        let r = self.risk_free.forward_rate(t0, t1)?;
        let q = self.dividend.forward_rate(t0, t1)?;
        let drift = (r - q) * dt - 0.5 * var;
        Ok(self.apply(x0, var.max(0.0).sqrt() * dw + drift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve};
    use pricer_core::market_data::surfaces::BlackVarianceCurve;

    fn flat_process() -> GeneralizedBlackScholesProcess {
        GeneralizedBlackScholesProcess::new(
            36.0,
            Arc::new(CurveEnum::flat(0.01)),
            Arc::new(CurveEnum::flat(0.0)),
            Arc::new(VolatilityEnum::flat(0.2)),
            DayCountConvention::ActualActual365,
        )
    }

    fn term_process() -> GeneralizedBlackScholesProcess {
        let curve = InterpolatedCurve::new(
            &[0.0, 0.5],
            &[0.01, 0.015],
            CurveInterpolation::Linear,
            false,
        )
        .unwrap();
        let vol = BlackVarianceCurve::new(&[0.25, 0.5], &[0.20, 0.25]).unwrap();
        GeneralizedBlackScholesProcess::new(
            36.0,
            Arc::new(curve.into()),
            Arc::new(CurveEnum::flat(0.0)),
            Arc::new(vol.into()),
            DayCountConvention::ActualActual365,
        )
    }

    #[test]
    fn test_flat_market_matches_constant_coefficients() {
        let p = flat_process();
        assert_relative_eq!(p.diffusion(0.3, 30.0).unwrap(), 0.2, epsilon = 1e-8);
        assert_relative_eq!(p.drift(0.3, 30.0).unwrap(), 0.01 - 0.02, epsilon = 1e-8);
        let x = p.evolve(0.0, 36.0, 0.25, 1.0).unwrap();
        let expected = 36.0 * ((0.01 - 0.02) * 0.25 + 0.2 * 0.5_f64).exp();
        assert_relative_eq!(x, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_local_vol_reflects_variance_slope() {
        let p = term_process();
        // Between 0.25 and 0.5 the variance slope is (0.03125 - 0.01) / 0.25.
        let sigma = p.diffusion(0.3, 36.0).unwrap();
        assert_relative_eq!(sigma, (0.085_f64).sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn test_exact_step_uses_variance_difference() {
        let p = term_process();
        let x = p.evolve(0.25, 36.0, 0.25, 0.0).unwrap();
        let var = 0.03125_f64 - 0.01;
        let fwd = (0.015_f64 * 0.5 - 0.0125 * 0.25) / 0.25;
        assert_relative_eq!(x, 36.0 * (fwd * 0.25 - 0.5 * var).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_zero_rate_accessors() {
        let p = term_process();
        assert_relative_eq!(
            p.risk_free_zero_rate(0.25).unwrap(),
            0.0125,
            epsilon = 1e-12
        );
        assert_eq!(p.dividend_zero_rate(0.25).unwrap(), 0.0);
        assert_relative_eq!(
            p.black_volatility(0.25, 36.0).unwrap(),
            0.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_step_beyond_curve_propagates_error() {
        let p = term_process();
        assert!(matches!(
            p.evolve(0.45, 36.0, 0.1, 0.0),
            Err(MarketDataError::OutOfBounds { .. })
        ));
    }
}
