//! Black-Scholes-Merton prices for European options with a dividend yield.
//!
//! ```text
//! d₁ = (ln(S/K) + (r - q + σ²/2) T) / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S e^(-qT) N(d₁) - K e^(-rT) N(d₂)
//! P  = K e^(-rT) N(-d₂) - S e^(-qT) N(-d₁)
//! ```

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionType;
use crate::models::{ConstantProcess, StochasticProcess1D};

/// Black-Scholes-Merton model with constant coefficients.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesMerton;
/// use pricer_models::instruments::OptionType;
///
/// let bsm = BlackScholesMerton::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = bsm.price(OptionType::Call, 100.0, 1.0);
/// let put = bsm.price(OptionType::Put, 100.0, 1.0);
///
/// // Put-call parity: C - P = S - K e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesMerton {
    spot: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
}

impl BlackScholesMerton {
    /// Creates the model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(
        spot: f64,
        rate: f64,
        dividend: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if spot.is_nan() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if volatility.is_nan() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Model with the coefficients of a frozen process.
    pub fn from_process(process: &ConstantProcess) -> Result<Self, AnalyticalError> {
        Self::new(
            process.x0(),
            process.risk_free_rate(),
            process.dividend_yield(),
            process.volatility(),
        )
    }

    /// European price for `strike` and time to expiry `expiry` (years).
    ///
    /// At `expiry <= 0` the intrinsic value is returned.
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return option_type.intrinsic(self.spot, strike);
        }
        let sd = self.volatility * expiry.sqrt();
        let d1 = ((self.spot / strike).ln()
            + (self.rate - self.dividend + 0.5 * self.volatility * self.volatility) * expiry)
            / sd;
        let d2 = d1 - sd;
        let forward_spot = self.spot * (-self.dividend * expiry).exp();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => forward_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - forward_spot * norm_cdf(-d1),
        }
    }
}
