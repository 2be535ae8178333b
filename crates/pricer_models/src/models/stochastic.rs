//! StochasticProcess1D trait for one-dimensional diffusions.
//!
//! A process describes `dx = μ(t, x) dt + σ(t, x) dW` for some state
//! variable `x`, together with an [`apply`](StochasticProcess1D::apply)
//! map that adds an increment to the state. Log-price processes override
//! `apply` with `x · exp(dx)` so increments are expressed in log space.
//!
//! The provided `expectation`, `std_deviation`, `variance` and `evolve`
//! implement a single Euler step:
//!
//! ```text
//! E      = apply(x0, μ(t0, x0) dt)
//! stdev  = σ(t0, x0) √dt
//! evolve = apply(E, stdev · dw)
//! ```
//!
//! Term-structure lookups can fail, so coefficient methods return
//! `Result<f64, MarketDataError>`.

use pricer_core::market_data::MarketDataError;

/// One-dimensional stochastic process.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::MarketDataError;
/// use pricer_models::models::StochasticProcess1D;
///
/// // Arithmetic Brownian motion with unit drift.
/// struct Abm;
///
/// impl StochasticProcess1D for Abm {
///     fn x0(&self) -> f64 { 0.0 }
///     fn drift(&self, _t: f64, _x: f64) -> Result<f64, MarketDataError> { Ok(1.0) }
///     fn diffusion(&self, _t: f64, _x: f64) -> Result<f64, MarketDataError> { Ok(0.5) }
/// }
///
/// let x = Abm.evolve(0.0, 0.0, 0.25, 2.0).unwrap();
/// assert!((x - (0.25 + 0.5 * 0.5 * 2.0)).abs() < 1e-15);
/// ```
pub trait StochasticProcess1D {
    /// Initial value of the state variable.
    fn x0(&self) -> f64;

    /// Drift coefficient μ(t, x).
    fn drift(&self, t: f64, x: f64) -> Result<f64, MarketDataError>;

    /// Diffusion coefficient σ(t, x).
    fn diffusion(&self, t: f64, x: f64) -> Result<f64, MarketDataError>;

    /// Adds the increment `dx` to the state `x0`.
    fn apply(&self, x0: f64, dx: f64) -> f64 {
        x0 + dx
    }

    /// Expected state after `dt` starting from `(t0, x0)`.
    fn expectation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, MarketDataError> {
        Ok(self.apply(x0, self.drift(t0, x0)? * dt))
    }

    /// Standard deviation of the increment over `dt`.
    fn std_deviation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, MarketDataError> {
        Ok(self.diffusion(t0, x0)? * dt.sqrt())
    }

    /// Variance of the increment over `dt`.
    fn variance(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, MarketDataError> {
        let sd = self.std_deviation(t0, x0, dt)?;
        Ok(sd * sd)
    }

    /// State after `dt` given the standard normal draw `dw`.
    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, MarketDataError> {
        euler_evolve(self, t0, x0, dt, dw)
    }
}

/// The default Euler step, callable from overriding implementations.
pub fn euler_evolve<P: StochasticProcess1D + ?Sized>(
    process: &P,
    t0: f64,
    x0: f64,
    dt: f64,
    dw: f64,
) -> Result<f64, MarketDataError> {
    let expectation = process.expectation(t0, x0, dt)?;
    let sd = process.std_deviation(t0, x0, dt)?;
    Ok(process.apply(expectation, sd * dw))
}
