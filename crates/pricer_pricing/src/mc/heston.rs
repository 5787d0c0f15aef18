//! Simplified Heston stochastic-volatility pricer.
//!
//! ```text
//! dS = r·S·dt + √V·S·dW₂
//! dV = κ(θ - V)·dt + ξ·√V·dW₁
//! E[dW₁·dW₂] = ρ·dt
//! ```
//!
//! Discretised with a full-truncation Euler step on `m` equal steps:
//!
//! ```text
//! dW₁ = √dt·Z₁
//! dW₂ = ρ·dW₁ + √(1-ρ²)·√dt·Z₂
//! V  ← max(0, V + κ(θ - V)·dt + ξ·√V·dW₁)
//! S  ← S·exp((r - V/2)·dt + √V·dW₂)
//! ```
//!
//! The spot step uses the variance after its update. This is an approximate
//! model: the Euler scheme carries a discretisation bias at small step
//! counts, and there is no semi-analytic benchmark here.

use pricer_core::traits::priceable::{ensure_valid_price, OptionPricer};
use pricer_core::types::{OptionParameters, PricingError};
use tracing::{debug, warn};

use super::config::SimulationConfig;
use super::result::{PayoffAccumulator, SimulationResult};
use crate::rng::PricerRng;

/// Variance-process parameters.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::HestonParams;
///
/// let params = HestonParams::new(0.04, 1.5, 0.04, 0.3, -0.7).unwrap();
/// assert!(params.satisfies_feller());
/// assert!(HestonParams::new(0.04, 1.5, 0.04, 0.3, -1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HestonParams {
    v0: f64,
    kappa: f64,
    theta: f64,
    xi: f64,
    rho: f64,
}

impl HestonParams {
    /// Validates and creates the parameters.
    ///
    /// # Arguments
    ///
    /// * `v0` - Initial variance (≥ 0)
    /// * `kappa` - Mean-reversion speed (≥ 0)
    /// * `theta` - Long-run variance (≥ 0)
    /// * `xi` - Volatility of variance (≥ 0)
    /// * `rho` - Spot/variance correlation in [-1, 1]
    ///
    /// # Errors
    ///
    /// [`PricingError::DomainError`] naming the first offending parameter.
    pub fn new(v0: f64, kappa: f64, theta: f64, xi: f64, rho: f64) -> Result<Self, PricingError> {
        for (parameter, value) in [("v0", v0), ("kappa", kappa), ("theta", theta), ("xi", xi)] {
            if !value.is_finite() || value < 0.0 {
                return Err(PricingError::DomainError { parameter, value });
            }
        }
        if !rho.is_finite() || !(-1.0..=1.0).contains(&rho) {
            return Err(PricingError::DomainError {
                parameter: "rho",
                value: rho,
            });
        }
        Ok(Self {
            v0,
            kappa,
            theta,
            xi,
            rho,
        })
    }

    /// Initial variance.
    #[inline]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Mean-reversion speed.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Long-run variance.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Volatility of variance.
    #[inline]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Spot/variance correlation.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Feller condition 2κθ > ξ².
    #[inline]
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta > self.xi * self.xi
    }
}

/// Monte Carlo pricer for the simplified Heston model.
///
/// Implements [`OptionPricer`]; the `volatility` of the incoming
/// [`OptionParameters`] is ignored because the variance process replaces it.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_pricing::mc::{HestonParams, HestonPricer};
///
/// let heston = HestonParams::new(0.04, 2.0, 0.04, 0.3, -0.5).unwrap();
/// let pricer = HestonPricer::new(heston);
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
///
/// let price = pricer.price(&params).unwrap();
/// assert!(price > 5.0 && price < 15.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HestonPricer {
    params: HestonParams,
    config: SimulationConfig,
}

impl HestonPricer {
    /// Pricer with 10 000 paths, 100 steps and seed 42.
    pub fn new(params: HestonParams) -> Self {
        Self {
            params,
            config: SimulationConfig::heston(),
        }
    }

    /// Pricer with an explicit simulation configuration.
    pub fn with_config(params: HestonParams, config: SimulationConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { params, config })
    }

    /// Variance-process parameters.
    #[inline]
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates the joint spot/variance paths.
    ///
    /// # Errors
    ///
    /// [`PricingError::NumericalInstability`] if the estimate is not finite.
    pub fn simulate(&self, option: &OptionParameters) -> Result<SimulationResult, PricingError> {
        let HestonParams {
            v0,
            kappa,
            theta,
            xi,
            rho,
        } = self.params;
        let n_steps = self.config.n_steps();
        let dt = option.expiry() / n_steps as f64;
        let sqrt_dt = dt.sqrt();
        let rho_perp = (1.0 - rho * rho).sqrt();
        let rate = option.rate();

        debug!(
            n_paths = self.config.n_paths(),
            n_steps,
            seed = self.config.seed(),
            v0,
            kappa,
            theta,
            xi,
            rho,
            "heston simulation"
        );
        if !self.params.satisfies_feller() {
            warn!(
                kappa,
                theta,
                xi,
                "feller condition violated; variance may touch zero"
            );
        }

        let mut rng = PricerRng::from_seed(self.config.seed());
        let mut acc = PayoffAccumulator::default();
        let option_type = option.option_type();

        for _ in 0..self.config.n_paths() {
            let mut spot = option.spot();
            let mut variance = v0;
            for _ in 0..n_steps {
                let dw1 = sqrt_dt * rng.gen_normal();
                let dw2 = rho * dw1 + rho_perp * sqrt_dt * rng.gen_normal();
                variance =
                    (variance + kappa * (theta - variance) * dt + xi * variance.sqrt() * dw1).max(0.0);
                spot *= ((rate - 0.5 * variance) * dt + variance.sqrt() * dw2).exp();
            }
            acc.push(option_type.payoff(spot, option.strike()));
        }

        let mut result = acc.finish(option.discount_factor());
        if !result.price.is_finite() {
            warn!(price = result.price, "heston simulation diverged");
        }
        result.price = ensure_valid_price(self.name(), result.price)?;
        Ok(result)
    }
}

impl OptionPricer for HestonPricer {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        Ok(self.simulate(params)?.price)
    }

    fn name(&self) -> &'static str {
        "heston"
    }
}
