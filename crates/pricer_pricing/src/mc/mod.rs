//! # Monte Carlo Machinery
//!
//! Building blocks shared by the option engines:
//!
//! 1. [`TimeGrid`]: simulation dates as year fractions
//! 2. [`PathGenerator`]: evolves a process along the grid, optionally
//!    through a [`BrownianBridge`]
//! 3. [`PathPricer`]: discounted payoff of one path
//! 4. [`McSimulation`]: accumulates [`RunningStatistics`] over a fixed
//!    number of samples or until a tolerance is met
//!
//! Everything runs on a single thread; a simulation owns its generator,
//! pricer and statistics for the duration of one pricing call.

pub mod brownian_bridge;
pub mod config;
pub mod error;
pub mod path;
pub mod path_generator;
pub mod path_pricers;
pub mod simulation;
pub mod statistics;
pub mod time_grid;

pub use brownian_bridge::BrownianBridge;
pub use config::{SimulationConfiguration, SimulationConfigurationBuilder};
pub use error::EngineError;
pub use path::Path;
pub use path_generator::PathGenerator;
pub use path_pricers::{
    AveragePricePathPricer, AverageStrikePathPricer, BiasedBarrierPathPricer,
    BridgedBarrierPathPricer, EuropeanPathPricer, PathPricer, BARRIER_CORRECTION_SEED,
};
pub use simulation::{McResults, McSimulation, MIN_SAMPLES};
pub use statistics::RunningStatistics;
pub use time_grid::TimeGrid;
