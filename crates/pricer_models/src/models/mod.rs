//! One-dimensional diffusion processes.
//!
//! - [`stochastic`]: the [`StochasticProcess1D`] trait and its Euler defaults
//! - [`black_scholes`]: the live process reading rates and volatility from term structures
//! - [`constant`]: the frozen-parameter process with time-invariant coefficients
//! - [`quote`]: scalar value sources a frozen process can be sampled from
//! - [`model_enum`]: [`ProcessEnum`] for static dispatch over both processes

pub mod black_scholes;
pub mod constant;
pub mod model_enum;
pub mod quote;
pub mod stochastic;

pub use black_scholes::GeneralizedBlackScholesProcess;
pub use constant::{ConstantProcess, EvolutionScheme};
pub use model_enum::ProcessEnum;
pub use quote::{SimpleQuote, ValueSource};
pub use stochastic::StochasticProcess1D;
