//! # service_cli: the `divergence` command line
//!
//! Service layer over the pricer crates. Commands:
//!
//! - `divergence price` - price a European option (black-scholes, binomial, monte-carlo, heston)
//! - `divergence greeks` - Delta, Gamma, Theta, Vega and Rho
//! - `divergence hedge` - delta, gamma and vega hedge positions for a portfolio
//! - `divergence strategy` - value a multi-leg strategy
//!
//! Configuration is layered (defaults, TOML file, `DIVERGENCE_*` environment,
//! flags); see [`config`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Crate version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
