//! Sample statistics and bumped-scenario payoff evaluation.
//!
//! Every normal draw is pushed through [`N_SCENARIOS`] revaluation
//! scenarios (the base case plus one bump per finite difference). Because
//! all scenarios see the same draw, the finite-difference Greeks use
//! common random numbers and most of the sampling noise cancels.

use pricer_core::types::time::DAYS_PER_YEAR;
use pricer_core::types::GreeksSet;
use pricer_models::analytical::greeks::PERCENT;

/// Number of revaluation scenarios evaluated per draw.
pub const N_SCENARIOS: usize = 8;

/// Relative spot bump for delta and gamma.
pub const SPOT_BUMP_RELATIVE: f64 = 0.01;

/// Absolute volatility bump for vega (capped at half the volatility).
pub const VOL_BUMP: f64 = 0.001;

/// Absolute rate bump for rho.
pub const RATE_BUMP: f64 = 1e-4;

/// Revaluation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Unbumped inputs
    Base,
    /// Spot + h
    SpotUp,
    /// Spot − h
    SpotDown,
    /// Volatility + h
    VolUp,
    /// Volatility − h
    VolDown,
    /// Rate + h
    RateUp,
    /// Rate − h
    RateDown,
    /// Time to maturity − dt
    TimeDecay,
}

impl Scenario {
    /// All scenarios in storage order.
    pub const ALL: [Scenario; N_SCENARIOS] = [
        Scenario::Base,
        Scenario::SpotUp,
        Scenario::SpotDown,
        Scenario::VolUp,
        Scenario::VolDown,
        Scenario::RateUp,
        Scenario::RateDown,
        Scenario::TimeDecay,
    ];

    /// Position in [`Scenario::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Finite-difference step sizes for one valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bumps {
    /// Spot step (1% of spot)
    pub spot: f64,
    /// Volatility step
    pub volatility: f64,
    /// Rate step
    pub rate: f64,
    /// Time step in years, `min(1/365, τ/2)`
    pub time: f64,
}

impl Bumps {
    /// Step sizes for the given base inputs; `volatility` and `expiry`
    /// must be positive.
    pub fn for_inputs(spot: f64, volatility: f64, expiry: f64) -> Self {
        Self {
            spot: SPOT_BUMP_RELATIVE * spot,
            volatility: VOL_BUMP.min(0.5 * volatility),
            rate: RATE_BUMP,
            time: (1.0 / DAYS_PER_YEAR).min(0.5 * expiry),
        }
    }
}

/// Market inputs of one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParams {
    /// Spot price
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Time to maturity in years
    pub expiry: f64,
}

impl ScenarioParams {
    /// Inputs of `scenario`, bumped from `self` by `bumps`.
    pub fn bumped(&self, bumps: &Bumps, scenario: Scenario) -> Self {
        let mut params = *self;
        match scenario {
            Scenario::Base => {}
            Scenario::SpotUp => params.spot += bumps.spot,
            Scenario::SpotDown => params.spot -= bumps.spot,
            Scenario::VolUp => params.volatility += bumps.volatility,
            Scenario::VolDown => params.volatility -= bumps.volatility,
            Scenario::RateUp => params.rate += bumps.rate,
            Scenario::RateDown => params.rate -= bumps.rate,
            Scenario::TimeDecay => params.expiry -= bumps.time,
        }
        params
    }
}

/// Exact sampler of the risk-neutral GBM terminal price.
///
/// `S_T = S·exp[(r − σ²/2)τ + σ√τ·Z]`, so one draw per path suffices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalSampler {
    spot: f64,
    drift: f64,
    diffusion: f64,
    discount: f64,
}

impl TerminalSampler {
    /// One sampler per scenario, in [`Scenario::ALL`] order.
    pub fn for_scenarios(base: &ScenarioParams, bumps: &Bumps) -> [Self; N_SCENARIOS] {
        Scenario::ALL.map(|s| Self::new(&base.bumped(bumps, s)))
    }

    /// Precomputes drift, diffusion and discount for `params`.
    pub fn new(params: &ScenarioParams) -> Self {
        let ScenarioParams {
            spot,
            rate,
            volatility,
            expiry,
        } = *params;
        Self {
            spot,
            drift: (rate - 0.5 * volatility * volatility) * expiry,
            diffusion: volatility * expiry.sqrt(),
            discount: (-rate * expiry).exp(),
        }
    }

    /// Terminal price for the normal draw `z`.
    #[inline]
    pub fn terminal(&self, z: f64) -> f64 {
        self.spot * self.diffusion.mul_add(z, self.drift).exp()
    }

    /// Discounted `(call, put)` payoffs for one sample.
    ///
    /// With `antithetic` the sample averages the payoffs at `z` and `−z`.
    #[inline]
    pub fn sample(&self, z: f64, strike: f64, antithetic: bool) -> (f64, f64) {
        let s_t = self.terminal(z);
        let (mut call, mut put) = ((s_t - strike).max(0.0), (strike - s_t).max(0.0));
        if antithetic {
            let s_anti = self.terminal(-z);
            call = 0.5 * (call + (s_anti - strike).max(0.0));
            put = 0.5 * (put + (strike - s_anti).max(0.0));
        }
        (self.discount * call, self.discount * put)
    }
}

/// Streaming mean and variance (Welford), mergeable across chunks.
///
/// Keeps `(count, mean, m2)` rather than raw power sums, so the variance
/// stays accurate when the mean is large relative to the spread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Moments {
    /// Adds one observation.
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Combines two sets of observations (Chan et al. pairwise update).
    pub fn merge(&self, other: &Self) -> Self {
        if self.count == 0 {
            return *other;
        }
        if other.count == 0 {
            return *self;
        }
        let (n_a, n_b) = (self.count as f64, other.count as f64);
        let n = n_a + n_b;
        let delta = other.mean - self.mean;
        Self {
            count: self.count + other.count,
            mean: self.mean + delta * n_b / n,
            m2: self.m2 + other.m2 + delta * delta * n_a * n_b / n,
        }
    }

    /// Number of observations.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean (0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample variance (0 with fewer than two observations).
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2 / (self.count - 1) as f64).max(0.0)
    }

    /// Standard error of the mean, `sqrt(variance / n)`.
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.variance() / self.count as f64).sqrt()
    }
}

/// Moments of discounted call and put payoffs for every scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioEstimates {
    /// Call payoff moments, indexed by [`Scenario::index`]
    pub call: [Moments; N_SCENARIOS],
    /// Put payoff moments, indexed by [`Scenario::index`]
    pub put: [Moments; N_SCENARIOS],
}

impl ScenarioEstimates {
    /// Adds one sample for scenario `index`.
    #[inline]
    pub fn push(&mut self, index: usize, call: f64, put: f64) {
        self.call[index].push(call);
        self.put[index].push(put);
    }

    /// Combines two partial estimates.
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = *self;
        for i in 0..N_SCENARIOS {
            merged.call[i] = self.call[i].merge(&other.call[i]);
            merged.put[i] = self.put[i].merge(&other.put[i]);
        }
        merged
    }

    /// Mean discounted call payoff under `scenario`.
    #[inline]
    pub fn call_mean(&self, scenario: Scenario) -> f64 {
        self.call[scenario.index()].mean()
    }

    /// Mean discounted put payoff under `scenario`.
    #[inline]
    pub fn put_mean(&self, scenario: Scenario) -> f64 {
        self.put[scenario.index()].mean()
    }

    /// Central finite-difference Greeks per unit of the contract.
    ///
    /// Gamma and vega are taken from the call side; theta is the one-step
    /// forward difference in time, quoted per calendar day.
    pub fn finite_difference_greeks(&self, bumps: &Bumps) -> GreeksSet {
        use Scenario::*;

        let c = |s: Scenario| self.call_mean(s);
        let p = |s: Scenario| self.put_mean(s);
        let (h_spot, h_vol, h_rate, h_time) =
            (bumps.spot, bumps.volatility, bumps.rate, bumps.time);

        GreeksSet {
            delta_call: (c(SpotUp) - c(SpotDown)) / (2.0 * h_spot),
            delta_put: (p(SpotUp) - p(SpotDown)) / (2.0 * h_spot),
            gamma: (c(SpotUp) - 2.0 * c(Base) + c(SpotDown)) / (h_spot * h_spot),
            vega: (c(VolUp) - c(VolDown)) / (2.0 * h_vol) * PERCENT,
            theta_call: (c(TimeDecay) - c(Base)) / h_time / DAYS_PER_YEAR,
            theta_put: (p(TimeDecay) - p(Base)) / h_time / DAYS_PER_YEAR,
            rho_call: (c(RateUp) - c(RateDown)) / (2.0 * h_rate) * PERCENT,
            rho_put: (p(RateUp) - p(RateDown)) / (2.0 * h_rate) * PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Moments tests
    // ==========================================================

    #[test]
    fn test_moments_known_data() {
        let mut m = Moments::default();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            m.push(x);
        }
        assert_eq!(m.count(), 8);
        assert_relative_eq!(m.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(m.variance(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(
            m.std_error(),
            (32.0 / 7.0 / 8.0_f64).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_moments_empty_and_single() {
        let mut m = Moments::default();
        assert_eq!(m.mean(), 0.0);
        assert_eq!(m.std_error(), 0.0);
        m.push(3.0);
        assert_eq!(m.mean(), 3.0);
        assert_eq!(m.variance(), 0.0);
    }

    #[test]
    fn test_moments_merge_matches_sequential() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin()).collect();
        let mut all = Moments::default();
        let (mut left, mut right) = (Moments::default(), Moments::default());
        for (i, &x) in data.iter().enumerate() {
            all.push(x);
            if i < 20 {
                left.push(x);
            } else {
                right.push(x);
            }
        }
        let merged = left.merge(&right);
        assert_eq!(merged.count(), all.count());
        assert_relative_eq!(merged.mean(), all.mean(), epsilon = 1e-12);
        assert_relative_eq!(merged.variance(), all.variance(), epsilon = 1e-12);
    }

    #[test]
    fn test_moments_large_offset_keeps_variance() {
        // Raw power sums lose every significant digit of the spread here
        let offset = 1e9;
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mut all = Moments::default();
        let (mut left, mut right) = (Moments::default(), Moments::default());
        for (i, x) in data.iter().enumerate() {
            all.push(offset + x);
            if i < 3 {
                left.push(offset + x);
            } else {
                right.push(offset + x);
            }
        }

        assert_relative_eq!(all.mean(), offset + 5.0, epsilon = 1e-3);
        assert_relative_eq!(all.variance(), 32.0 / 7.0, epsilon = 1e-4);
        assert_relative_eq!(left.merge(&right).variance(), 32.0 / 7.0, epsilon = 1e-4);
    }

    #[test]
    fn test_moments_merge_with_empty_side() {
        let mut m = Moments::default();
        m.push(1.0);
        m.push(3.0);
        assert_eq!(Moments::default().merge(&m), m);
        assert_eq!(m.merge(&Moments::default()), m);
    }

    // ==========================================================
    // Scenario and sampler tests
    // ==========================================================

    #[test]
    fn test_scenario_indices_follow_storage_order() {
        for (i, scenario) in Scenario::ALL.iter().enumerate() {
            assert_eq!(scenario.index(), i);
        }
    }

    #[test]
    fn test_bumps_are_capped() {
        let bumps = Bumps::for_inputs(200.0, 0.2, 1.0);
        assert_relative_eq!(bumps.spot, 2.0, epsilon = 1e-12);
        assert_eq!(bumps.volatility, VOL_BUMP);
        assert_relative_eq!(bumps.time, 1.0 / 365.0, epsilon = 1e-15);

        let tiny = Bumps::for_inputs(100.0, 0.0004, 1.0 / 365.0);
        assert_eq!(tiny.volatility, 0.0002);
        assert_relative_eq!(tiny.time, 0.5 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_bumped_params_touch_one_field() {
        let base = ScenarioParams {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            expiry: 1.0,
        };
        let bumps = Bumps::for_inputs(100.0, 0.2, 1.0);

        assert_eq!(base.bumped(&bumps, Scenario::Base), base);
        assert_eq!(base.bumped(&bumps, Scenario::SpotDown).spot, 99.0);
        assert_relative_eq!(
            base.bumped(&bumps, Scenario::VolUp).volatility,
            0.201,
            epsilon = 1e-15
        );
        let rate_down = base.bumped(&bumps, Scenario::RateDown);
        assert_eq!(rate_down.rate, 0.05 - RATE_BUMP);
        let decayed = base.bumped(&bumps, Scenario::TimeDecay);
        assert_eq!(decayed.expiry, 1.0 - bumps.time);
        assert_eq!(decayed.spot, base.spot);
    }

    #[test]
    fn test_terminal_sampler_median_path() {
        let params = ScenarioParams {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            expiry: 1.0,
        };
        let sampler = TerminalSampler::new(&params);
        assert_relative_eq!(
            sampler.terminal(0.0),
            100.0 * 0.03_f64.exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_antithetic_sample_averages_mirror_draws() {
        let params = ScenarioParams {
            spot: 100.0,
            rate: 0.0,
            volatility: 0.2,
            expiry: 1.0,
        };
        let sampler = TerminalSampler::new(&params);
        let (call_up, put_up) = sampler.sample(1.5, 100.0, false);
        let (call_down, put_down) = sampler.sample(-1.5, 100.0, false);
        let (call_pair, put_pair) = sampler.sample(1.5, 100.0, true);

        assert_relative_eq!(call_pair, 0.5 * (call_up + call_down), epsilon = 1e-12);
        assert_relative_eq!(put_pair, 0.5 * (put_up + put_down), epsilon = 1e-12);
        assert!(call_up > 0.0 && put_down > 0.0);
    }

    #[test]
    fn test_greeks_from_linear_payoffs() {
        // Scenario means of a forward-like payoff: V = S − 90 everywhere
        let bumps = Bumps::for_inputs(100.0, 0.2, 1.0);
        let mut estimates = ScenarioEstimates::default();
        for scenario in Scenario::ALL {
            let spot = match scenario {
                Scenario::SpotUp => 101.0,
                Scenario::SpotDown => 99.0,
                _ => 100.0,
            };
            estimates.push(scenario.index(), spot - 90.0, 0.0);
        }

        let greeks = estimates.finite_difference_greeks(&bumps);
        assert_relative_eq!(greeks.delta_call, 1.0, epsilon = 1e-12);
        assert_relative_eq!(greeks.gamma, 0.0, epsilon = 1e-10);
        assert_eq!(greeks.vega, 0.0);
        assert_eq!(greeks.theta_call, 0.0);
        assert_eq!(greeks.delta_put, 0.0);
    }
}
