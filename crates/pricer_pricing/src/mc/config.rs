//! Simulation configuration.
//!
//! Path count, time-step count and seed for the Monte Carlo and Heston
//! pricers. Built through [`SimulationConfig::builder`] and validated at
//! build time.

use pricer_core::types::PricingError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Path count used when none is configured.
pub const DEFAULT_PATHS: usize = 10_000;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Time steps per path for the stochastic-volatility pricer.
pub const DEFAULT_HESTON_STEPS: usize = 100;

/// Monte Carlo simulation configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(50_000)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.n_steps(), 1);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a builder preloaded with the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Seed of the random stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Defaults with 100 steps per path, as used by the Heston pricer.
    pub fn heston() -> Self {
        Self {
            n_steps: DEFAULT_HESTON_STEPS,
            ..Self::default()
        }
    }

    /// Checks path and step counts against their bounds.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidConfig`] if `n_paths` is outside [1, 10 000 000]
    /// or `n_steps` is outside [1, 10 000].
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(PricingError::InvalidConfig(format!(
                "path count {} must be in range [1, {}]",
                self.n_paths, MAX_PATHS
            )));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(PricingError::InvalidConfig(format!(
                "step count {} must be in range [1, {}]",
                self.n_steps, MAX_STEPS
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    /// 10 000 paths, one step, seed 42.
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_steps: 1,
            seed: DEFAULT_SEED,
        }
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the number of paths, in [1, 10 000 000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.config.n_paths = n_paths;
        self
    }

    /// Sets the number of time steps per path, in [1, 10 000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.config.n_steps = n_steps;
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<SimulationConfig, PricingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
