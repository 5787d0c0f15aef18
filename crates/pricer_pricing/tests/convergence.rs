//! Convergence of the numerical pricers to the Black-Scholes closed form.
//!
//! # Test Categories
//!
//! 1. **Binomial lattice**: CRR prices vs Black-Scholes as N grows
//! 2. **Monte Carlo**: GBM estimates within standard-error bounds
//! 3. **Heston**: zero vol-of-vol reduces to GBM
//! 4. **Pricing contract**: every engine plugs into hedging and strategies

use approx::assert_relative_eq;
use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_models::hedging::{portfolio_hedge, HedgeConfig};
use pricer_models::strategies::Strategy;
use pricer_pricing::lattice::BinomialTreePricer;
use pricer_pricing::mc::{HestonParams, HestonPricer, MonteCarloPricer, SimulationConfig};
use proptest::prelude::*;

/// S=100, K=100, T=1, r=0.05, σ=0.2.
fn reference(kind: OptionType) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).unwrap()
}

fn black_scholes(params: &OptionParameters) -> f64 {
    BlackScholes.price(params).unwrap()
}

fn monte_carlo(n_paths: usize) -> MonteCarloPricer {
    MonteCarloPricer::new(
        SimulationConfig::builder()
            .n_paths(n_paths)
            .seed(42)
            .build()
            .unwrap(),
    )
    .unwrap()
}

// ============================================================================
// Binomial lattice
// ============================================================================

#[test]
fn test_binomial_500_steps_within_one_cent() {
    let tree = BinomialTreePricer::with_steps(500).unwrap();
    for kind in [OptionType::Call, OptionType::Put] {
        let params = reference(kind);
        let error = (tree.price(&params).unwrap() - black_scholes(&params)).abs();
        assert!(error < 0.01, "{kind}: error {error:.5}");
    }
}

#[test]
fn test_binomial_error_shrinks_with_steps() {
    let params = reference(OptionType::Call);
    let target = black_scholes(&params);
    let errors: Vec<f64> = [10, 100, 1_000]
        .iter()
        .map(|&n| {
            let price = BinomialTreePricer::with_steps(n).unwrap().price(&params).unwrap();
            (price - target).abs()
        })
        .collect();
    assert!(errors[1] < errors[0]);
    assert!(errors[2] < errors[1]);
    assert!(errors[2] < 1e-3);
}

#[test]
fn test_binomial_put_with_overflowing_top_nodes() {
    // σ√(T·N) = 750, past the f64 range of e^x
    let put = OptionParameters::new(100.0, 100.0, 5.0, 0.05, 1.5, OptionType::Put).unwrap();
    let call = put.with_option_type(OptionType::Call);
    let lattice_put = BinomialTreePricer::with_steps(50_000).unwrap().price(&put).unwrap();

    assert_relative_eq!(lattice_put, black_scholes(&put), epsilon = 0.01);
    let forward_gap = 100.0 - 100.0 * (-0.25_f64).exp();
    assert_relative_eq!(black_scholes(&call) - lattice_put, forward_gap, epsilon = 0.01);
}

// ============================================================================
// Monte Carlo
// ============================================================================

#[test]
fn test_monte_carlo_100k_paths_within_three_standard_errors() {
    for kind in [OptionType::Call, OptionType::Put] {
        let params = reference(kind);
        let result = monte_carlo(100_000).simulate(&params).unwrap();
        let error = (result.price - black_scholes(&params)).abs();
        assert!(
            error < 3.0 * result.std_error,
            "{kind}: MC={:.4} error={:.4} se={:.4}",
            result.price,
            error,
            result.std_error
        );
    }
}

#[test]
fn test_monte_carlo_within_ten_cents() {
    // 250k paths puts ten cents above three standard errors
    let params = reference(OptionType::Call);
    let result = monte_carlo(250_000).simulate(&params).unwrap();
    assert!(3.0 * result.std_error < 0.10);
    assert!((result.price - 10.450583572185565).abs() < 0.10);
}

#[test]
fn test_parallel_monte_carlo_within_three_standard_errors() {
    let params = reference(OptionType::Call);
    let result = monte_carlo(100_000).simulate_parallel(&params).unwrap();
    let error = (result.price - black_scholes(&params)).abs();
    assert!(error < 3.0 * result.std_error);
}

#[test]
fn test_monte_carlo_standard_error_scales_with_paths() {
    let params = reference(OptionType::Call);
    let small = monte_carlo(10_000).simulate(&params).unwrap();
    let large = monte_carlo(160_000).simulate(&params).unwrap();
    // Four times smaller, within sampling noise of the std estimate
    let ratio = small.std_error / large.std_error;
    assert!(ratio > 3.5 && ratio < 4.5, "ratio {ratio}");
}

// ============================================================================
// Heston
// ============================================================================

#[test]
fn test_heston_without_vol_of_vol_lands_near_black_scholes() {
    // v0 = θ = σ², ξ = 0: variance is constant and the model is GBM
    let heston = HestonParams::new(0.04, 2.0, 0.04, 0.0, -0.5).unwrap();
    let config = SimulationConfig::builder()
        .n_paths(50_000)
        .n_steps(20)
        .build()
        .unwrap();
    let pricer = HestonPricer::with_config(heston, config).unwrap();

    for kind in [OptionType::Call, OptionType::Put] {
        let params = reference(kind);
        let result = pricer.simulate(&params).unwrap();
        let error = (result.price - black_scholes(&params)).abs();
        assert!(
            error < 4.0 * result.std_error,
            "{kind}: heston={:.4} error={:.4} se={:.4}",
            result.price,
            error,
            result.std_error
        );
    }
}

#[test]
fn test_heston_negative_correlation_cheapens_otm_calls() {
    // Negative spot/variance correlation fattens the left tail at the
    // expense of the right
    let option = OptionParameters::new(100.0, 130.0, 1.0, 0.03, 0.2, OptionType::Call).unwrap();
    let config = SimulationConfig::builder()
        .n_paths(40_000)
        .n_steps(50)
        .build()
        .unwrap();
    let price = |rho: f64| {
        let heston = HestonParams::new(0.04, 1.5, 0.04, 0.6, rho).unwrap();
        HestonPricer::with_config(heston, config)
            .unwrap()
            .simulate(&option)
            .unwrap()
    };
    let negative = price(-0.9);
    let positive = price(0.9);
    let noise = 4.0 * (negative.std_error.powi(2) + positive.std_error.powi(2)).sqrt();
    assert!(positive.price - negative.price > noise);
}

// ============================================================================
// Pricing contract
// ============================================================================

#[test]
fn test_idempotence_across_engines() {
    let params = reference(OptionType::Put);
    let engines: Vec<Box<dyn OptionPricer>> = vec![
        Box::new(BlackScholes),
        Box::new(BinomialTreePricer::with_steps(300).unwrap()),
        Box::new(monte_carlo(5_000)),
        Box::new(HestonPricer::new(HestonParams::new(0.04, 1.0, 0.04, 0.2, 0.0).unwrap())),
    ];
    for engine in &engines {
        let a = engine.price(&params).unwrap();
        let b = engine.price(&params).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "{} is not idempotent", engine.name());
    }
}

#[test]
fn test_strategies_accept_any_engine() {
    let market = reference(OptionType::Call);
    let straddle = Strategy::Straddle { strike: 100.0 };
    let closed_form = straddle.evaluate(&BlackScholes, &market).unwrap();
    let lattice = straddle
        .evaluate(&BinomialTreePricer::with_steps(500).unwrap(), &market)
        .unwrap();
    assert!((closed_form - lattice).abs() < 0.02);
    assert_relative_eq!(closed_form, 10.450583572185565 + 5.573526022256971, epsilon = 1e-4);
}

#[test]
fn test_hedging_accepts_simulation_engine() {
    let params = reference(OptionType::Call);
    let mc = monte_carlo(20_000);
    let hedge = portfolio_hedge(&mc, &params, &HedgeConfig::default()).unwrap();
    let expected_units = 100_000.0 / mc.price(&params).unwrap();
    assert_relative_eq!(hedge.delta_hedge, 0.6368306511756191 * expected_units, epsilon = 1e-6);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_binomial_put_call_parity(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        expiry in 0.1_f64..2.0,
        rate in 0.0_f64..0.08,
        vol in 0.1_f64..0.5,
    ) {
        let call = OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let tree = BinomialTreePricer::with_steps(200).unwrap();
        let c = tree.price(&call).unwrap();
        let p = tree.price(&call.with_option_type(OptionType::Put)).unwrap();
        let parity = spot - strike * (-rate * expiry).exp();
        prop_assert!((c - p - parity).abs() < 1e-8);
    }

    #[test]
    fn test_binomial_tracks_black_scholes(
        spot in 80.0_f64..120.0,
        vol in 0.1_f64..0.4,
    ) {
        let call = OptionParameters::new(spot, 100.0, 1.0, 0.03, vol, OptionType::Call).unwrap();
        let tree = BinomialTreePricer::with_steps(1_000).unwrap().price(&call).unwrap();
        prop_assert!((tree - black_scholes(&call)).abs() < 0.02);
    }
}
