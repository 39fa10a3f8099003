//! Strategy selection and the single-contract pricing entry point.
//!
//! [`PricingModel`] is the closed set of strategies the engine ships.
//! Selecting one is a configuration-time decision; afterwards callers see
//! only the [`PricingStrategy`] contract.

use pricer_core::market_data::MarketState;
use pricer_core::traits::PricingStrategy;
use pricer_core::types::{Date, OptionContract, PricingError, PricingResult};
use pricer_models::analytical::AnalyticStrategy;

use crate::mc::MonteCarloPricer;

/// Static dispatch enum over the available pricing strategies.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::PricingStrategy;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::strategy::PricingModel;
///
/// let analytic = PricingModel::default();
/// assert_eq!(analytic.name(), "analytic");
///
/// let config = MonteCarloConfig::builder().n_paths(10_000).build().unwrap();
/// let mc = PricingModel::MonteCarlo(MonteCarloPricer::new(config).unwrap());
/// assert_eq!(mc.name(), "monte-carlo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingModel {
    /// Closed-form Black-Scholes with analytical Greeks
    Analytic(AnalyticStrategy),
    /// Monte Carlo simulation with finite-difference Greeks
    MonteCarlo(MonteCarloPricer),
}

impl Default for PricingModel {
    fn default() -> Self {
        PricingModel::Analytic(AnalyticStrategy)
    }
}

impl From<AnalyticStrategy> for PricingModel {
    fn from(strategy: AnalyticStrategy) -> Self {
        PricingModel::Analytic(strategy)
    }
}

impl From<MonteCarloPricer> for PricingModel {
    fn from(pricer: MonteCarloPricer) -> Self {
        PricingModel::MonteCarlo(pricer)
    }
}

impl PricingStrategy for PricingModel {
    fn name(&self) -> &'static str {
        match self {
            PricingModel::Analytic(s) => s.name(),
            PricingModel::MonteCarlo(s) => s.name(),
        }
    }

    fn calculate(
        &self,
        contract: &OptionContract,
        market: &MarketState,
        valuation_date: Date,
    ) -> Result<PricingResult, PricingError> {
        match self {
            PricingModel::Analytic(s) => s.calculate(contract, market, valuation_date),
            PricingModel::MonteCarlo(s) => s.calculate(contract, market, valuation_date),
        }
    }
}

/// Prices one contract with the given strategy.
///
/// Pure pass-through to [`PricingStrategy::calculate`]; the sensitivity grid
/// evaluator goes through the same call, so a grid cell always equals the
/// corresponding `price_option` result.
///
/// # Errors
/// `PricingError::InvalidParameter` if any contract or market input violates
/// its constraint.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketState;
/// use pricer_core::types::{Date, OptionContract};
/// use pricer_pricing::strategy::{price_option, PricingModel};
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let result = price_option(&contract, &market, &PricingModel::default(), valuation).unwrap();
/// assert!((result.call_price - 10.4506).abs() < 1e-3);
/// ```
pub fn price_option<S: PricingStrategy + ?Sized>(
    contract: &OptionContract,
    market: &MarketState,
    strategy: &S,
    valuation_date: Date,
) -> Result<PricingResult, PricingError> {
    strategy.calculate(contract, market, valuation_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::MonteCarloConfig;

    fn inputs() -> (OptionContract, MarketState, Date) {
        let valuation = Date::from_ymd(2025, 1, 1).unwrap();
        let maturity = Date::from_ymd(2026, 1, 1).unwrap();
        let contract = OptionContract::new(100.0, maturity, 1.0).unwrap();
        let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
        (contract, market, valuation)
    }

    fn monte_carlo() -> MonteCarloPricer {
        let config = MonteCarloConfig::builder()
            .n_paths(8_000)
            .seed(17)
            .build()
            .unwrap();
        MonteCarloPricer::new(config).unwrap()
    }

    #[test]
    fn test_enum_dispatch_matches_inner_strategy() {
        let (contract, market, valuation) = inputs();

        let direct = AnalyticStrategy
            .calculate(&contract, &market, valuation)
            .unwrap();
        let via_enum = PricingModel::from(AnalyticStrategy)
            .calculate(&contract, &market, valuation)
            .unwrap();
        assert_eq!(direct, via_enum);

        let direct = monte_carlo()
            .calculate(&contract, &market, valuation)
            .unwrap();
        let via_enum = PricingModel::from(monte_carlo())
            .calculate(&contract, &market, valuation)
            .unwrap();
        assert_eq!(direct, via_enum);
    }

    #[test]
    fn test_price_option_accepts_trait_objects() {
        let (contract, market, valuation) = inputs();
        let strategies: Vec<Box<dyn PricingStrategy>> =
            vec![Box::new(AnalyticStrategy), Box::new(monte_carlo())];

        for strategy in &strategies {
            let result = price_option(&contract, &market, strategy.as_ref(), valuation).unwrap();
            assert!(result.call_price > 0.0, "{} priced zero", strategy.name());
            assert!(result.has_greeks());
        }
    }

    #[test]
    fn test_expired_contract_is_intrinsic_for_every_model() {
        let (contract, market, _) = inputs();
        let after_maturity = contract.maturity_date().add_days(1);
        let market = market.with_underlying_price(112.0).unwrap();
        let expected = PricingResult::intrinsic(112.0, 100.0, 1.0);

        for model in [PricingModel::default(), PricingModel::from(monte_carlo())] {
            let result = price_option(&contract, &market, &model, after_maturity).unwrap();
            assert_eq!(result, expected, "{}", model.name());
        }
    }

    #[test]
    fn test_default_model_is_analytic() {
        assert!(matches!(PricingModel::default(), PricingModel::Analytic(_)));
    }
}
