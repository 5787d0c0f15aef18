//! Cox-Ross-Rubinstein binomial lattice for European options.
//!
//! ```text
//! dt = T/N,  u = e^(σ√dt),  d = 1/u,  p = (e^(r·dt) - d)/(u - d)
//! ```
//!
//! Terminal node `j` (0 ≤ j ≤ N) carries `S·u^(N-j)·d^j = S·e^(σ√dt·(N-2j))`
//! and the payoff of the option's kind. Backward induction collapses the
//! layer N times with `v[i] ← e^(-r·dt)·(p·v[i] + (1-p)·v[i+1])`. Prices
//! converge to Black-Scholes as N grows, with an error of order 1/N.

use pricer_core::traits::priceable::{ensure_valid_price, OptionPricer};
use pricer_core::types::{OptionParameters, PricingError};
use tracing::{debug, warn};

/// Maximum number of lattice steps.
pub const MAX_LATTICE_STEPS: usize = 100_000;

/// Lattice step count used when none is configured.
pub const DEFAULT_LATTICE_STEPS: usize = 100;

/// Lattice configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::LatticeConfig;
///
/// assert_eq!(LatticeConfig::new(500).unwrap().steps(), 500);
/// assert!(LatticeConfig::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    steps: usize,
}

impl LatticeConfig {
    /// Creates a configuration with `steps` in [1, 100 000].
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidConfig`] outside that range.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        let config = Self { steps };
        config.validate()?;
        Ok(config)
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Checks the step count against its bounds.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.steps == 0 || self.steps > MAX_LATTICE_STEPS {
            return Err(PricingError::InvalidConfig(format!(
                "lattice step count {} must be in range [1, {}]",
                self.steps, MAX_LATTICE_STEPS
            )));
        }
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

/// CRR lattice parameters for one option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrrParameters {
    /// Up factor u.
    pub up: f64,
    /// Down factor d = 1/u.
    pub down: f64,
    /// Risk-neutral up probability p.
    pub probability: f64,
    /// One-step discount e^(-r·dt).
    pub step_discount: f64,
}

impl CrrParameters {
    /// Derives u, d, p and the step discount for `steps` steps.
    ///
    /// # Errors
    ///
    /// [`PricingError::NumericalInstability`] when p falls outside [0, 1],
    /// i.e. the step is too coarse for the rate/volatility pair.
    pub fn new(params: &OptionParameters, steps: usize) -> Result<Self, PricingError> {
        let dt = params.expiry() / steps as f64;
        let up = (params.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (params.rate() * dt).exp();
        let probability = (growth - down) / (up - down);

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            warn!(probability, steps, "risk-neutral probability out of range");
            return Err(PricingError::NumericalInstability(format!(
                "risk-neutral probability {probability} outside [0, 1]; increase the step count"
            )));
        }

        Ok(Self {
            up,
            down,
            probability,
            step_discount: 1.0 / growth,
        })
    }
}

/// Binomial tree pricer.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_pricing::lattice::{BinomialTreePricer, LatticeConfig};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let pricer = BinomialTreePricer::new(LatticeConfig::new(500).unwrap());
///
/// let price = pricer.price(&params).unwrap();
/// assert!((price - 10.4506).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinomialTreePricer {
    config: LatticeConfig,
}

impl BinomialTreePricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Shorthand for `new(LatticeConfig::new(steps)?)`.
    pub fn with_steps(steps: usize) -> Result<Self, PricingError> {
        Ok(Self::new(LatticeConfig::new(steps)?))
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    fn induct(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        let steps = self.config.steps();
        let crr = CrrParameters::new(params, steps)?;
        debug!(
            steps,
            up = crr.up,
            probability = crr.probability,
            option_type = %params.option_type(),
            "binomial induction"
        );

        let option_type = params.option_type();
        let strike = params.strike();

        // Node j sits at S·e^(σ√dt·(N-2j)); spots far up the tree may overflow
        // to inf, where a put is worth exactly zero and a call is unpriceable.
        let log_step = params.volatility() * (params.expiry() / steps as f64).sqrt();
        let mut values: Vec<f64> = Vec::with_capacity(steps + 1);
        for j in 0..=steps {
            let exponent = log_step * (steps as f64 - 2.0 * j as f64);
            let payoff = option_type.payoff(params.spot() * exponent.exp(), strike);
            if !payoff.is_finite() {
                warn!(node = j, exponent, "terminal payoff overflows");
                return Err(PricingError::NumericalInstability(format!(
                    "terminal payoff at node {j} is not finite; reduce the step count"
                )));
            }
            values.push(payoff);
        }

        let p = crr.probability;
        let q = 1.0 - p;
        for layer in (1..=steps).rev() {
            for i in 0..layer {
                values[i] = crr.step_discount * (p * values[i] + q * values[i + 1]);
            }
        }

        Ok(values[0])
    }
}

impl OptionPricer for BinomialTreePricer {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        let raw = self.induct(params)?;
        ensure_valid_price(self.name(), raw)
    }

    fn name(&self) -> &'static str {
        "binomial"
    }
}
