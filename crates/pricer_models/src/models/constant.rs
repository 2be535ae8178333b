//! Frozen-parameter Black-Scholes process.
//!
//! The state variable is the underlying price, modelled through its
//! logarithm with time-invariant coefficients:
//!
//! ```text
//! d ln S = (r - q - σ²/2) dt + σ dW
//! S(t+dt) = S(t) · exp((r - q - σ²/2) dt + σ √dt · dw)
//! ```
//!
//! Nothing is looked up after construction, which is what makes this
//! process cheaper to step than its term-structure counterpart.

use pricer_core::market_data::MarketDataError;

use super::quote::ValueSource;
use super::stochastic::{euler_evolve, StochasticProcess1D};

/// How [`ConstantProcess::evolve`](StochasticProcess1D::evolve) is computed.
///
/// Both schemes give the same value up to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvolutionScheme {
    /// Trait default: `apply(expectation, std_dev · dw)`.
    Generic,
    /// Closed form: `apply(x0, drift · dt + σ √dt · dw)`.
    #[default]
    Direct,
}

/// Black-Scholes process with constant rate, dividend yield and volatility.
///
/// Negative volatility is not rejected; it only flips the sign of the
/// diffusion term.
///
/// # Examples
/// ```
/// use pricer_models::models::{ConstantProcess, StochasticProcess1D};
///
/// let process = ConstantProcess::new(36.0, 0.01, 0.0, 0.2);
/// assert!((process.drift(0.3, 40.0).unwrap() - (0.01 - 0.02)).abs() < 1e-15);
/// assert_eq!(process.diffusion(1.0, 1.0).unwrap(), 0.2);
/// assert_eq!(process.apply(36.0, 0.0), 36.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantProcess {
    initial_value: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    volatility: f64,
    scheme: EvolutionScheme,
}

impl ConstantProcess {
    /// Creates a process using the [`EvolutionScheme::Direct`] step.
    pub fn new(
        initial_value: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Self {
        Self {
            initial_value,
            risk_free_rate,
            dividend_yield,
            volatility,
            scheme: EvolutionScheme::default(),
        }
    }

    /// Samples each source once and builds the process from the values.
    ///
    /// ```
    /// use pricer_models::models::{ConstantProcess, SimpleQuote, StochasticProcess1D};
    ///
    /// let spot = SimpleQuote::new(36.0);
    /// let process = ConstantProcess::from_sources(&spot, &0.01, &0.0, &0.2);
    /// spot.set_value(50.0);
    /// assert_eq!(process.x0(), 36.0);
    /// ```
    pub fn from_sources<S, R, Q, V>(spot: &S, rate: &R, dividend: &Q, vol: &V) -> Self
    where
        S: ValueSource + ?Sized,
        R: ValueSource + ?Sized,
        Q: ValueSource + ?Sized,
        V: ValueSource + ?Sized,
    {
        Self::new(
            spot.current_value(),
            rate.current_value(),
            dividend.current_value(),
            vol.current_value(),
        )
    }

    /// Returns the process with a different evolution scheme.
    pub fn with_scheme(mut self, scheme: EvolutionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Evolution scheme in use.
    pub fn scheme(&self) -> EvolutionScheme {
        self.scheme
    }

    /// Risk-free rate `r`.
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Dividend yield `q`.
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Volatility `σ`.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Log drift `r - q - σ²/2`.
    #[inline]
    pub fn log_drift(&self) -> f64 {
        self.risk_free_rate - self.dividend_yield - 0.5 * self.volatility * self.volatility
    }
}

impl StochasticProcess1D for ConstantProcess {
    fn x0(&self) -> f64 {
        self.initial_value
    }

    fn drift(&self, _t: f64, _x: f64) -> Result<f64, MarketDataError> {
        Ok(self.log_drift())
    }

    fn diffusion(&self, _t: f64, _x: f64) -> Result<f64, MarketDataError> {
        Ok(self.volatility)
    }

    #[inline]
    fn apply(&self, x0: f64, dx: f64) -> f64 {
        x0 * dx.exp()
    }

    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, MarketDataError> {
        match self.scheme {
            EvolutionScheme::Generic => euler_evolve(self, t0, x0, dt, dw),
            EvolutionScheme::Direct => {
                Ok(self.apply(x0, self.log_drift() * dt + self.volatility * dt.sqrt() * dw))
            }
        }
    }
}
