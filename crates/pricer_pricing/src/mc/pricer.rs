//! Monte Carlo pricing engine for European options under GBM.
//!
//! # Overview
//!
//! [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`])
//! 2. Terminal price sampling (via [`GbmStepper`])
//! 3. Payoff accumulation with a running variance
//! 4. Discounting by e^(-rT)
//!
//! # Parallel variant
//!
//! [`MonteCarloPricer::simulate_parallel`] splits the paths into chunks of
//! [`PARALLEL_CHUNK_PATHS`], gives chunk `i` the stream
//! `PricerRng::for_stream(seed, i)` and merges the chunk statistics in chunk
//! order. The result depends on the seed only, never on the thread count. It
//! is not bit-identical to [`MonteCarloPricer::simulate`], which draws every
//! path from a single stream.

use pricer_core::traits::priceable::{ensure_valid_price, OptionPricer};
use pricer_core::types::{OptionParameters, PricingError};
use rayon::prelude::*;
use tracing::debug;

use super::config::SimulationConfig;
use super::paths::GbmStepper;
use super::result::{PayoffAccumulator, SimulationResult};
use crate::rng::PricerRng;

/// Paths per independently seeded chunk in the parallel variant.
pub const PARALLEL_CHUNK_PATHS: usize = 4_096;

/// Monte Carlo pricer for European calls and puts.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_pricing::mc::MonteCarloPricer;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
///
/// // 10 000 paths, seed 42
/// let pricer = MonteCarloPricer::default();
/// let result = pricer.simulate(&params).unwrap();
///
/// assert!((result.price - 10.45).abs() < 4.0 * result.std_error);
/// assert_eq!(pricer.price(&params).unwrap(), result.price);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonteCarloPricer {
    config: SimulationConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Default configuration with a different path count.
    pub fn with_paths(n_paths: usize) -> Result<Self, PricingError> {
        Self::new(SimulationConfig::builder().n_paths(n_paths).build()?)
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation on a single stream seeded with the configured seed.
    ///
    /// # Errors
    ///
    /// [`PricingError::NumericalInstability`] if the estimate is not finite.
    pub fn simulate(&self, params: &OptionParameters) -> Result<SimulationResult, PricingError> {
        debug!(
            n_paths = self.config.n_paths(),
            n_steps = self.config.n_steps(),
            seed = self.config.seed(),
            option_type = %params.option_type(),
            "monte carlo simulation"
        );

        let stepper = GbmStepper::new(params, self.config.n_steps());
        let mut rng = PricerRng::from_seed(self.config.seed());
        let acc = simulate_paths(params, &stepper, &mut rng, self.config.n_paths());

        finish(acc, params, self.name())
    }

    /// Runs the simulation over independently seeded chunks with rayon.
    ///
    /// # Errors
    ///
    /// [`PricingError::NumericalInstability`] if the estimate is not finite.
    pub fn simulate_parallel(
        &self,
        params: &OptionParameters,
    ) -> Result<SimulationResult, PricingError> {
        let n_paths = self.config.n_paths();
        let n_chunks = n_paths.div_ceil(PARALLEL_CHUNK_PATHS);
        debug!(
            n_paths,
            n_chunks,
            seed = self.config.seed(),
            threads = rayon::current_num_threads(),
            "parallel monte carlo simulation"
        );

        let stepper = GbmStepper::new(params, self.config.n_steps());
        let seed = self.config.seed();

        let chunks: Vec<PayoffAccumulator> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * PARALLEL_CHUNK_PATHS;
                let len = PARALLEL_CHUNK_PATHS.min(n_paths - start);
                let mut rng = PricerRng::for_stream(seed, chunk as u64);
                simulate_paths(params, &stepper, &mut rng, len)
            })
            .collect();

        let acc = chunks
            .into_iter()
            .fold(PayoffAccumulator::default(), PayoffAccumulator::merge);

        finish(acc, params, self.name())
    }
}

fn simulate_paths(
    params: &OptionParameters,
    stepper: &GbmStepper,
    rng: &mut PricerRng,
    n_paths: usize,
) -> PayoffAccumulator {
    let option_type = params.option_type();
    let strike = params.strike();
    let mut acc = PayoffAccumulator::default();
    for _ in 0..n_paths {
        acc.push(option_type.payoff(stepper.sample_terminal(rng), strike));
    }
    acc
}

fn finish(
    acc: PayoffAccumulator,
    params: &OptionParameters,
    model: &str,
) -> Result<SimulationResult, PricingError> {
    let mut result = acc.finish(params.discount_factor());
    result.price = ensure_valid_price(model, result.price)?;
    if !result.std_error.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "{model} produced non-finite standard error"
        )));
    }
    Ok(result)
}

impl OptionPricer for MonteCarloPricer {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        Ok(self.simulate(params)?.price)
    }

    fn name(&self) -> &'static str {
        "monte-carlo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionType;

    fn reference(kind: OptionType) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).unwrap()
    }

    fn pricer(n_paths: usize, seed: u64) -> MonteCarloPricer {
        MonteCarloPricer::new(
            SimulationConfig::builder()
                .n_paths(n_paths)
                .seed(seed)
                .build()
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let p = MonteCarloPricer::default();
        assert_eq!(p.config().n_paths(), 10_000);
        assert_eq!(p.config().seed(), 42);
        assert_eq!(p.name(), "monte-carlo");
    }

    #[test]
    fn test_with_paths_validates() {
        assert_eq!(MonteCarloPricer::with_paths(500).unwrap().config().n_paths(), 500);
        assert!(matches!(
            MonteCarloPricer::with_paths(0),
            Err(PricingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let params = reference(OptionType::Call);
        let a = pricer(5_000, 42).simulate(&params).unwrap();
        let b = pricer(5_000, 42).simulate(&params).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
        assert_eq!(a.std_error.to_bits(), b.std_error.to_bits());
    }

    #[test]
    fn test_different_seeds_differ() {
        let params = reference(OptionType::Call);
        let a = pricer(5_000, 1).price(&params).unwrap();
        let b = pricer(5_000, 2).price(&params).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_std_error_reported() {
        let result = pricer(10_000, 42)
            .simulate(&reference(OptionType::Call))
            .unwrap();
        assert_eq!(result.n_paths, 10_000);
        // Payoff std is about 14.7, so std error is about 0.147
        assert!(result.std_error > 0.10 && result.std_error < 0.20);
    }

    #[test]
    fn test_put_price_non_negative_and_close() {
        let result = pricer(20_000, 42).simulate(&reference(OptionType::Put)).unwrap();
        assert!(result.price >= 0.0);
        assert!((result.price - 5.5735).abs() < 4.0 * result.std_error);
    }

    #[test]
    fn test_far_otm_prices_zero_without_error() {
        let params = OptionParameters::new(10.0, 1_000.0, 0.1, 0.01, 0.1, OptionType::Call).unwrap();
        let result = pricer(1_000, 42).simulate(&params).unwrap();
        assert_eq!(result.price, 0.0);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_parallel_is_deterministic() {
        let params = reference(OptionType::Call);
        let p = pricer(3 * PARALLEL_CHUNK_PATHS + 17, 42);
        let a = p.simulate_parallel(&params).unwrap();
        let b = p.simulate_parallel(&params).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
        assert_eq!(a.n_paths, 3 * PARALLEL_CHUNK_PATHS + 17);
    }

    #[test]
    fn test_parallel_independent_of_thread_count() {
        let params = reference(OptionType::Call);
        let p = pricer(20_000, 42);
        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| p.simulate_parallel(&params).unwrap());
        let multi = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap()
            .install(|| p.simulate_parallel(&params).unwrap());
        assert_eq!(single.price.to_bits(), multi.price.to_bits());
    }

    #[test]
    fn test_parallel_agrees_statistically_with_sequential() {
        let params = reference(OptionType::Call);
        let p = pricer(40_000, 42);
        let seq = p.simulate(&params).unwrap();
        let par = p.simulate_parallel(&params).unwrap();
        let tolerance = 4.0 * (seq.std_error.powi(2) + par.std_error.powi(2)).sqrt();
        assert!((seq.price - par.price).abs() < tolerance);
    }

    #[test]
    fn test_multi_step_matches_single_step_statistically() {
        let params = reference(OptionType::Call);
        let stepped = MonteCarloPricer::new(
            SimulationConfig::builder()
                .n_paths(40_000)
                .n_steps(10)
                .build()
                .unwrap(),
        )
        .unwrap()
        .simulate(&params)
        .unwrap();
        assert!((stepped.price - 10.4506).abs() < 4.0 * stepped.std_error);
    }
}
