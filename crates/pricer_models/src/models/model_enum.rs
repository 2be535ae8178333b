//! Static dispatch enum over the supported processes.

use std::sync::Arc;

use pricer_core::market_data::MarketDataError;

use super::black_scholes::GeneralizedBlackScholesProcess;
use super::constant::ConstantProcess;
use super::stochastic::StochasticProcess1D;

/// Process handed to a path generator.
///
/// The live process is shared with the engine that owns the market; a
/// frozen process is owned outright by whoever built it.
///
/// # Example
///
/// ```
/// use pricer_models::models::{ConstantProcess, ProcessEnum, StochasticProcess1D};
///
/// let process = ProcessEnum::from(ConstantProcess::new(36.0, 0.01, 0.0, 0.2));
/// assert_eq!(process.process_name(), "ConstantProcess");
/// assert!(process.as_black_scholes().is_none());
/// assert_eq!(process.x0(), 36.0);
/// ```
#[derive(Debug, Clone)]
pub enum ProcessEnum {
    /// Term-structure driven process
    BlackScholes(Arc<GeneralizedBlackScholesProcess>),
    /// Frozen-parameter process
    Constant(ConstantProcess),
}

impl ProcessEnum {
    /// Type name used in logs and errors.
    pub fn process_name(&self) -> &'static str {
        match self {
            ProcessEnum::BlackScholes(_) => "GeneralizedBlackScholesProcess",
            ProcessEnum::Constant(_) => "ConstantProcess",
        }
    }

    /// The live process, when this is one.
    pub fn as_black_scholes(&self) -> Option<&GeneralizedBlackScholesProcess> {
        match self {
            ProcessEnum::BlackScholes(process) => Some(process),
            ProcessEnum::Constant(_) => None,
        }
    }
}

impl StochasticProcess1D for ProcessEnum {
    fn x0(&self) -> f64 {
        match self {
            ProcessEnum::BlackScholes(p) => p.x0(),
            ProcessEnum::Constant(p) => p.x0(),
        }
    }

    fn drift(&self, t: f64, x: f64) -> Result<f64, MarketDataError> {
        match self {
            ProcessEnum::BlackScholes(p) => p.drift(t, x),
            ProcessEnum::Constant(p) => p.drift(t, x),
        }
    }

    fn diffusion(&self, t: f64, x: f64) -> Result<f64, MarketDataError> {
        match self {
            ProcessEnum::BlackScholes(p) => p.diffusion(t, x),
            ProcessEnum::Constant(p) => p.diffusion(t, x),
        }
    }

    fn apply(&self, x0: f64, dx: f64) -> f64 {
        match self {
            ProcessEnum::BlackScholes(p) => p.apply(x0, dx),
            ProcessEnum::Constant(p) => p.apply(x0, dx),
        }
    }

    fn expectation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, MarketDataError> {
        match self {
            ProcessEnum::BlackScholes(p) => p.expectation(t0, x0, dt),
            ProcessEnum::Constant(p) => p.expectation(t0, x0, dt),
        }
    }

    fn std_deviation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, MarketDataError> {
        match self {
            ProcessEnum::BlackScholes(p) => p.std_deviation(t0, x0, dt),
            ProcessEnum::Constant(p) => p.std_deviation(t0, x0, dt),
        }
    }

    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, MarketDataError> {
        match self {
            ProcessEnum::BlackScholes(p) => p.evolve(t0, x0, dt, dw),
            ProcessEnum::Constant(p) => p.evolve(t0, x0, dt, dw),
        }
    }
}

impl From<ConstantProcess> for ProcessEnum {
    fn from(process: ConstantProcess) -> Self {
        ProcessEnum::Constant(process)
    }
}

impl From<Arc<GeneralizedBlackScholesProcess>> for ProcessEnum {
    fn from(process: Arc<GeneralizedBlackScholesProcess>) -> Self {
        ProcessEnum::BlackScholes(process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::curves::CurveEnum;
    use pricer_core::market_data::surfaces::VolatilityEnum;
    use pricer_core::types::DayCountConvention;

    #[test]
    fn test_black_scholes_variant() {
        let live = Arc::new(GeneralizedBlackScholesProcess::new(
            36.0,
            Arc::new(CurveEnum::flat(0.01)),
            Arc::new(CurveEnum::flat(0.0)),
            Arc::new(VolatilityEnum::flat(0.2)),
            DayCountConvention::ActualActual365,
        ));
        let process = ProcessEnum::from(Arc::clone(&live));
        assert_eq!(process.process_name(), "GeneralizedBlackScholesProcess");
        assert!(process.as_black_scholes().is_some());
        assert_eq!(
            process.evolve(0.0, 36.0, 0.1, 0.5).unwrap(),
            live.evolve(0.0, 36.0, 0.1, 0.5).unwrap()
        );
    }

    #[test]
    fn test_constant_variant_delegates() {
        let inner = ConstantProcess::new(36.0, 0.01, 0.0, 0.2);
        let process = ProcessEnum::from(inner);
        assert_eq!(process.drift(0.5, 10.0).unwrap(), inner.log_drift());
        assert_eq!(process.apply(2.0, 0.0), 2.0);
    }
}
