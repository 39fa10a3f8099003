//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute
//! paths and through the module-level re-exports.

/// Types module and its re-exports.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::contract::{OptionContract, OptionType};
    use pricer_core::types::error::{DateError, PricingError};
    use pricer_core::types::result::{GreeksSet, PricingResult, StandardError};
    use pricer_core::types::time::{time_to_maturity, Date, DAYS_PER_YEAR};

    let valuation = Date::from_ymd(2025, 1, 1).unwrap();
    let maturity = Date::from_ymd(2025, 7, 2).unwrap();
    assert_eq!(
        time_to_maturity(valuation, maturity),
        182.0 / DAYS_PER_YEAR
    );

    let contract = OptionContract::new(100.0, maturity, 1.0).unwrap();
    assert_eq!(contract.maturity_date(), maturity);
    assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);

    let _: Option<GreeksSet> = None;
    let _: Option<StandardError> = None;
    let result = PricingResult::intrinsic(100.0, 100.0, 1.0);
    assert_eq!(result.call_price, 0.0);

    let _: Result<(), PricingError> = Ok(());
    let _: Result<(), DateError> = Err(DateError::ParseError("x".into()));
}

/// Re-exports at `types` level name the same items.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{
        time_to_maturity, Date, DateError, GreeksSet, OptionContract, OptionType, PricingError,
        PricingResult, StandardError,
    };

    let d = Date::from_ymd(2025, 1, 1).unwrap();
    assert_eq!(time_to_maturity(d, d), 0.0);
    let _ = OptionContract::new(1.0, d, 1.0).unwrap();
    let _ = OptionType::Call;
    let _: fn(f64, f64, f64) -> PricingResult = PricingResult::intrinsic;
    let _: Option<(GreeksSet, StandardError, PricingError, DateError)> = None;
}

/// Market data, traits and math modules.
#[test]
fn test_market_traits_math_exports() {
    use pricer_core::market_data::state::MarketState as StateModuleMarket;
    use pricer_core::market_data::MarketState;
    use pricer_core::math::grid::linspace;
    use pricer_core::traits::strategy::PricingStrategy as StrategyModuleTrait;
    use pricer_core::traits::{validate_inputs, Float, PricingStrategy};

    let market: StateModuleMarket = MarketState::new(100.0, 0.0, 0.1).unwrap();
    let contract = pricer_core::types::OptionContract::new(
        100.0,
        pricer_core::types::Date::from_ymd(2025, 1, 1).unwrap(),
        1.0,
    )
    .unwrap();
    assert!(validate_inputs(&contract, &market).is_ok());

    fn takes_strategy<S: PricingStrategy + ?Sized>(_: &S) {}
    fn takes_module_trait<S: StrategyModuleTrait + ?Sized>(s: &S) {
        takes_strategy(s)
    }
    let _ = takes_module_trait::<dyn PricingStrategy>;

    fn half<T: Float>(x: T) -> T {
        x / (T::one() + T::one())
    }
    assert_eq!(half(3.0_f64), 1.5);
    assert_eq!(linspace(0.0_f64, 1.0, 3), vec![0.0, 0.5, 1.0]);
}
