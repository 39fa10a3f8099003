//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for Monte Carlo pricing.
//!
//! # Overview
//!
//! [`MonteCarloPricer`] coordinates:
//! 1. Seed splitting: one [`PricerRng`] stream per chunk of samples
//! 2. Exact terminal sampling for the base and bumped scenarios
//!    (via [`TerminalSampler`])
//! 3. Chunk-parallel accumulation on rayon, reduced in chunk order
//! 4. Discounted means, standard errors and finite-difference Greeks
//!
//! The pricer holds only its configuration, so a single instance can be
//! shared by every thread of a sensitivity grid.

use rayon::prelude::*;
use tracing::debug;

use pricer_core::market_data::MarketState;
use pricer_core::traits::{validate_inputs, PricingStrategy};
use pricer_core::types::{Date, OptionContract, PricingError, PricingResult, StandardError};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::estimator::{
    Bumps, Scenario, ScenarioEstimates, ScenarioParams, TerminalSampler, N_SCENARIOS,
};
use crate::rng::PricerRng;

/// Samples simulated by one rayon task.
///
/// Fixed so that the chunk layout (and therefore every chunk's random
/// stream) depends only on the sample count, never on the thread count.
pub const CHUNK_SIZE: usize = 8_192;

/// Monte Carlo pricing strategy.
///
/// Samples the terminal price exactly under risk-neutral GBM, optionally
/// with antithetic variates, and derives Greeks by bump-and-revalue with
/// common random numbers. Results are bit-identical for a fixed seed.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketState;
/// use pricer_core::traits::PricingStrategy;
/// use pricer_core::types::{Date, OptionContract};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let result = pricer.calculate(&contract, &market, valuation).unwrap();
/// let std_error = result.std_error.unwrap();
/// println!("Call: {} +/- {}", result.call_price, 1.96 * std_error.call);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Simulates `n_samples` samples of chunk `chunk_index` for every scenario.
    fn simulate_chunk(
        &self,
        samplers: &[TerminalSampler; N_SCENARIOS],
        strike: f64,
        chunk_index: usize,
        n_samples: usize,
    ) -> ScenarioEstimates {
        let mut rng = PricerRng::for_chunk(self.config.seed(), chunk_index as u64);
        let antithetic = self.config.antithetic();
        let mut estimates = ScenarioEstimates::default();

        for _ in 0..n_samples {
            let z = rng.gen_normal();
            for (index, sampler) in samplers.iter().enumerate() {
                let (call, put) = sampler.sample(z, strike, antithetic);
                estimates.push(index, call, put);
            }
        }
        estimates
    }

    /// Runs the simulation for a live contract (`expiry > 0`).
    fn simulate(&self, base: ScenarioParams, bumps: &Bumps, strike: f64) -> ScenarioEstimates {
        let samplers = TerminalSampler::for_scenarios(&base, bumps);
        let n_samples = self.config.n_samples();
        let n_chunks = n_samples.div_ceil(CHUNK_SIZE);

        debug!(
            n_paths = self.config.n_paths(),
            n_samples,
            n_chunks,
            seed = self.config.seed(),
            antithetic = self.config.antithetic(),
            "Starting Monte Carlo simulation"
        );

        let partials: Vec<ScenarioEstimates> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk_index| {
                let start = chunk_index * CHUNK_SIZE;
                let len = CHUNK_SIZE.min(n_samples - start);
                self.simulate_chunk(&samplers, strike, chunk_index, len)
            })
            .collect();

        partials
            .iter()
            .fold(ScenarioEstimates::default(), |acc, p| acc.merge(p))
    }
}

impl PricingStrategy for MonteCarloPricer {
    fn name(&self) -> &'static str {
        "monte-carlo"
    }

    fn calculate(
        &self,
        contract: &OptionContract,
        market: &MarketState,
        valuation_date: Date,
    ) -> Result<PricingResult, PricingError> {
        validate_inputs(contract, market)?;

        let strike = contract.strike();
        let ratio = contract.exercise_ratio();
        let tau = contract.time_to_maturity(valuation_date);

        if tau <= 0.0 {
            return Ok(PricingResult::intrinsic(
                market.underlying_price(),
                strike,
                ratio,
            ));
        }

        let base = ScenarioParams {
            spot: market.underlying_price(),
            rate: market.risk_free_rate(),
            volatility: market.volatility(),
            expiry: tau,
        };
        let bumps = Bumps::for_inputs(base.spot, base.volatility, tau);
        let estimates = self.simulate(base, &bumps, strike);

        let base_index = Scenario::Base.index();
        let std_error = StandardError {
            call: estimates.call[base_index].std_error(),
            put: estimates.put[base_index].std_error(),
        };
        let greeks = estimates.finite_difference_greeks(&bumps);

        let result = PricingResult {
            call_price: estimates.call_mean(Scenario::Base) * ratio,
            put_price: estimates.put_mean(Scenario::Base) * ratio,
            greeks: Some(greeks.scale(ratio)),
            std_error: Some(std_error.scale(ratio)),
        };

        debug!(
            call = result.call_price,
            put = result.put_price,
            call_std_error = std_error.call * ratio,
            put_std_error = std_error.put * ratio,
            "Monte Carlo simulation complete"
        );

        Ok(result)
    }
}
