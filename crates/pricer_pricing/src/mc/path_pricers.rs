//! Discounted payoffs of single paths.
//!
//! Discount factors always come from the live risk-free curve, so swapping
//! the path-generating process leaves the pricers untouched.

use pricer_models::instruments::{BarrierType, OptionType, PlainVanillaPayoff};
use pricer_models::models::{ProcessEnum, StochasticProcess1D};

use super::error::EngineError;
use super::path::Path;
use crate::rng::UniformSequenceGenerator;

/// Seed of the uniform stream used by the barrier crossing correction.
pub const BARRIER_CORRECTION_SEED: u64 = 5;

/// European payoff on the terminal value.
#[derive(Debug, Clone)]
pub struct EuropeanPathPricer {
    payoff: PlainVanillaPayoff,
    discount: f64,
}

impl EuropeanPathPricer {
    /// `discount` is the risk-free discount factor to maturity.
    pub fn new(payoff: PlainVanillaPayoff, discount: f64) -> Self {
        Self { payoff, discount }
    }

    fn price(&self, path: &Path) -> f64 {
        self.payoff.value(path.back()) * self.discount
    }
}

/// Sum and count of the fixings seen by an Asian pricer.
///
/// When the first mandatory time is zero the initial value is a fixing;
/// otherwise it is skipped.
fn fixings_sum(path: &Path, running_sum: f64, past_fixings: usize) -> (f64, usize) {
    let values = path.values();
    let includes_start = path
        .time_grid()
        .mandatory_times()
        .first()
        .is_some_and(|&t| t == 0.0);
    let fixed = if includes_start { values } else { &values[1..] };
    let sum = fixed.iter().fold(running_sum, |acc, v| acc + v);
    (sum, past_fixings + fixed.len())
}

/// Arithmetic average-price Asian payoff.
#[derive(Debug, Clone)]
pub struct AveragePricePathPricer {
    payoff: PlainVanillaPayoff,
    discount: f64,
    running_sum: f64,
    past_fixings: usize,
}

impl AveragePricePathPricer {
    /// Creates the pricer; `running_sum` and `past_fixings` cover fixings
    /// already observed.
    pub fn new(
        payoff: PlainVanillaPayoff,
        discount: f64,
        running_sum: f64,
        past_fixings: usize,
    ) -> Self {
        Self {
            payoff,
            discount,
            running_sum,
            past_fixings,
        }
    }

    fn price(&self, path: &Path) -> f64 {
        let (sum, fixings) = fixings_sum(path, self.running_sum, self.past_fixings);
        self.discount * self.payoff.value(sum / fixings as f64)
    }
}

/// Arithmetic average-strike Asian payoff.
#[derive(Debug, Clone)]
pub struct AverageStrikePathPricer {
    option_type: OptionType,
    discount: f64,
    running_sum: f64,
    past_fixings: usize,
}

impl AverageStrikePathPricer {
    /// Creates the pricer; the strike is the average of all fixings.
    pub fn new(
        option_type: OptionType,
        discount: f64,
        running_sum: f64,
        past_fixings: usize,
    ) -> Self {
        Self {
            option_type,
            discount,
            running_sum,
            past_fixings,
        }
    }

    fn price(&self, path: &Path) -> f64 {
        let (sum, fixings) = fixings_sum(path, self.running_sum, self.past_fixings);
        let average_strike = sum / fixings as f64;
        self.discount * self.option_type.intrinsic(path.back(), average_strike)
    }
}

/// Barrier contract terms shared by both barrier pricers.
#[derive(Debug, Clone)]
struct BarrierTerms {
    barrier_type: BarrierType,
    barrier: f64,
    rebate: f64,
    payoff: PlainVanillaPayoff,
    discounts: Vec<f64>,
}

impl BarrierTerms {
    fn crossed(&self, level: f64) -> bool {
        if self.barrier_type.is_up() {
            level >= self.barrier
        } else {
            level <= self.barrier
        }
    }

    /// Value once the monitoring outcome is known. `knock_node` is the first
    /// grid index at which the barrier was hit.
    fn settle(&self, terminal: f64, knock_node: Option<usize>) -> f64 {
        let last = self.discounts[self.discounts.len() - 1];
        let active = knock_node.is_some() == self.barrier_type.is_knock_in();
        if active {
            return self.payoff.value(terminal) * last;
        }
        match knock_node {
            Some(node) if !self.barrier_type.is_knock_in() => self.rebate * self.discounts[node],
            _ => self.rebate * last,
        }
    }
}

/// Barrier monitored on the grid points only.
#[derive(Debug, Clone)]
pub struct BiasedBarrierPathPricer {
    terms: BarrierTerms,
}

impl BiasedBarrierPathPricer {
    /// `discounts[i]` is the discount factor to grid point `i`.
    pub fn new(
        barrier_type: BarrierType,
        barrier: f64,
        rebate: f64,
        payoff: PlainVanillaPayoff,
        discounts: Vec<f64>,
    ) -> Self {
        Self {
            terms: BarrierTerms {
                barrier_type,
                barrier,
                rebate,
                payoff,
                discounts,
            },
        }
    }

    fn price(&self, path: &Path) -> f64 {
        let knock_node = (1..path.len()).find(|&i| self.terms.crossed(path[i]));
        self.terms.settle(path.back(), knock_node)
    }
}

/// Barrier with a Brownian-bridge crossing correction between grid points.
///
/// For each step, the extremum of the bridge between the two endpoints is
/// sampled from a uniform draw `u`:
///
/// ```text
/// x = ln(S_{i+1} / S_i)
/// y = S_i exp(0.5 (x ∓ sqrt(x² - 2 σ² dt ln u)))
/// ```
///
/// with `-` for down barriers (minimum) and `+` for up barriers (maximum).
#[derive(Debug, Clone)]
pub struct BridgedBarrierPathPricer {
    terms: BarrierTerms,
    process: ProcessEnum,
    uniforms: UniformSequenceGenerator,
}

impl BridgedBarrierPathPricer {
    /// `process` supplies the local volatility of the correction, and
    /// `uniforms` must have one dimension per grid step.
    pub fn new(
        barrier_type: BarrierType,
        barrier: f64,
        rebate: f64,
        payoff: PlainVanillaPayoff,
        discounts: Vec<f64>,
        process: ProcessEnum,
        uniforms: UniformSequenceGenerator,
    ) -> Self {
        Self {
            terms: BarrierTerms {
                barrier_type,
                barrier,
                rebate,
                payoff,
                discounts,
            },
            process,
            uniforms,
        }
    }

    fn price(&mut self, path: &Path) -> Result<f64, EngineError> {
        let grid = path.time_grid();
        let u = self.uniforms.next_sequence();
        let up = self.terms.barrier_type.is_up();

        let mut knock_node = None;
        for i in 0..path.len() - 1 {
            let asset = path[i];
            let next = path[i + 1];
            let vol = self.process.diffusion(grid.at(i), asset)?;
            let dt = grid.dt(i);

            let x = (next / asset).ln();
            let root = (x * x - 2.0 * vol * vol * dt * u[i].ln()).sqrt();
            let y = if up { 0.5 * (x + root) } else { 0.5 * (x - root) };
            if knock_node.is_none() && self.terms.crossed(asset * y.exp()) {
                knock_node = Some(i + 1);
            }
        }
        Ok(self.terms.settle(path.back(), knock_node))
    }
}

/// Path pricer dispatch for the three engines.
#[derive(Debug, Clone)]
pub enum PathPricer {
    /// European vanilla
    European(EuropeanPathPricer),
    /// Average-price Asian
    AveragePrice(AveragePricePathPricer),
    /// Average-strike Asian
    AverageStrike(AverageStrikePathPricer),
    /// Barrier monitored on grid points
    BiasedBarrier(BiasedBarrierPathPricer),
    /// Barrier with crossing correction
    BridgedBarrier(BridgedBarrierPathPricer),
}

impl PathPricer {
    /// Discounted payoff of `path`.
    ///
    /// # Errors
    ///
    /// The bridged barrier pricer propagates local volatility failures.
    pub fn price(&mut self, path: &Path) -> Result<f64, EngineError> {
        match self {
            PathPricer::European(p) => Ok(p.price(path)),
            PathPricer::AveragePrice(p) => Ok(p.price(path)),
            PathPricer::AverageStrike(p) => Ok(p.price(path)),
            PathPricer::BiasedBarrier(p) => Ok(p.price(path)),
            PathPricer::BridgedBarrier(p) => p.price(path),
        }
    }
}
