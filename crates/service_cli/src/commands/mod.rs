//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns its rendered
//! output; `main` prints it. Shared argument groups and pricer selection
//! live here.

pub mod greeks;
pub mod hedge;
pub mod price;
pub mod strategy;

use std::str::FromStr;

use clap::{Args, ValueEnum};
use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::lattice::BinomialTreePricer;
use pricer_pricing::mc::{HestonParams, HestonPricer, MonteCarloPricer, SimulationConfig};
use tracing::debug;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Pricing model selected with `--method`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PricingMethod {
    /// Closed-form Black-Scholes
    #[default]
    BlackScholes,
    /// Cox-Ross-Rubinstein binomial lattice
    Binomial,
    /// Monte Carlo under GBM
    MonteCarlo,
    /// Simplified Heston stochastic-volatility simulation
    Heston,
}

impl PricingMethod {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMethod::BlackScholes => "black-scholes",
            PricingMethod::Binomial => "binomial",
            PricingMethod::MonteCarlo => "monte-carlo",
            PricingMethod::Heston => "heston",
        }
    }
}

/// Underlying market: spot, expiry, rate and volatility
#[derive(Debug, Clone, Args)]
pub struct UnderlyingArgs {
    /// Spot price of the underlying (> 0)
    #[arg(long)]
    pub spot: f64,

    /// Time to expiry in years (> 0)
    #[arg(long, visible_alias = "time")]
    pub expiry: f64,

    /// Annualised risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility (> 0; replaced by the variance process under heston)
    #[arg(long, visible_alias = "sigma")]
    pub volatility: f64,
}

/// A single option on the underlying
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    #[command(flatten)]
    pub underlying: UnderlyingArgs,

    /// Strike price (> 0)
    #[arg(long)]
    pub strike: f64,

    /// Option type: call or put
    #[arg(long = "type", default_value = "call")]
    pub option_type: String,
}

impl MarketArgs {
    /// Validated option parameters
    pub fn to_params(&self) -> Result<OptionParameters> {
        let option_type = OptionType::from_str(&self.option_type)?;
        self.underlying.to_params(self.strike, option_type)
    }
}

impl UnderlyingArgs {
    /// Validated option parameters with the given strike and kind
    pub fn to_params(&self, strike: f64, option_type: OptionType) -> Result<OptionParameters> {
        Ok(OptionParameters::new(
            self.spot,
            strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )?)
    }
}

/// Model selection and numerical settings
#[derive(Debug, Clone, Default, Args)]
pub struct MethodArgs {
    /// Pricing model
    #[arg(long, value_enum, default_value_t = PricingMethod::BlackScholes)]
    pub method: PricingMethod,

    /// Binomial lattice steps (default from config)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Simulation paths for monte-carlo and heston (default from config)
    #[arg(long)]
    pub paths: Option<usize>,

    /// Simulation seed (default from config)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub heston: HestonArgs,
}

/// Variance-process parameters for `--method heston`
#[derive(Debug, Clone, Default, Args)]
pub struct HestonArgs {
    /// Initial variance
    #[arg(long)]
    pub v0: Option<f64>,

    /// Mean-reversion speed
    #[arg(long)]
    pub kappa: Option<f64>,

    /// Long-run variance
    #[arg(long)]
    pub theta: Option<f64>,

    /// Volatility of variance
    #[arg(long, visible_alias = "sigma-v")]
    pub xi: Option<f64>,

    /// Spot/variance correlation
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rho: f64,
}

impl HestonArgs {
    /// Validated parameters; v0, kappa, theta and xi are required.
    pub fn to_params(&self) -> Result<HestonParams> {
        let require = |value: Option<f64>, flag: &str| {
            value.ok_or_else(|| {
                CliError::InvalidArgument(format!("--method heston requires --{flag}"))
            })
        };
        Ok(HestonParams::new(
            require(self.v0, "v0")?,
            require(self.kappa, "kappa")?,
            require(self.theta, "theta")?,
            require(self.xi, "xi")?,
            self.rho,
        )?)
    }
}

impl MethodArgs {
    /// Builds the selected pricer, filling unset settings from `config`.
    pub fn build_pricer(&self, config: &CliConfig) -> Result<Box<dyn OptionPricer>> {
        let paths = self.paths.unwrap_or(config.paths);
        let seed = self.seed.unwrap_or(config.seed);
        debug!(method = self.method.as_str(), paths, seed, "building pricer");

        let pricer: Box<dyn OptionPricer> = match self.method {
            PricingMethod::BlackScholes => Box::new(BlackScholes),
            PricingMethod::Binomial => Box::new(BinomialTreePricer::with_steps(
                self.steps.unwrap_or(config.lattice_steps),
            )?),
            PricingMethod::MonteCarlo => {
                let sim = SimulationConfig::builder().n_paths(paths).seed(seed).build()?;
                Box::new(MonteCarloPricer::new(sim)?)
            }
            PricingMethod::Heston => {
                let sim = SimulationConfig::builder()
                    .n_paths(paths)
                    .n_steps(config.heston_steps)
                    .seed(seed)
                    .build()?;
                Box::new(HestonPricer::with_config(self.heston.to_params()?, sim)?)
            }
        };
        Ok(pricer)
    }
}
