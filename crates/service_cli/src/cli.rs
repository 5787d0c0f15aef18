//! Command-line definition and dispatch.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::commands::{greeks, hedge, price, strategy};
use crate::config::{build_config_with, CliConfig, CliOverrides, LogLevel};
use crate::output::OutputFormat;
use crate::{CliError, Result};

/// Option pricing, Greeks, hedging and strategy valuation
#[derive(Debug, Parser)]
#[command(name = "divergence")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./divergence.toml when present)
    #[arg(short, long, global = true, env = "DIVERGENCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price a European option
    Price(price::PriceArgs),

    /// Black-Scholes Greeks of a European option
    Greeks(greeks::GreeksArgs),

    /// Delta, gamma and vega hedge positions for a portfolio
    Hedge(hedge::HedgeArgs),

    /// Value a multi-leg option strategy
    Strategy(strategy::StrategyArgs),
}

impl Cli {
    /// Global flags as configuration overrides.
    ///
    /// # Errors
    ///
    /// [`CliError::FileNotFound`] when `--config` names a missing file.
    pub fn overrides(&self) -> Result<CliOverrides> {
        if let Some(path) = &self.config {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
        }
        Ok(CliOverrides {
            config_file: self.config.clone(),
            log_level: self.log_level,
            verbose: self.verbose,
            format: self.format,
        })
    }

    /// Layered configuration using `lookup` for environment variables.
    pub fn load_config_with<F>(&self, lookup: F) -> Result<CliConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(build_config_with(&self.overrides()?, lookup)?)
    }
}

/// Runs `command` and returns its rendered output.
pub fn execute(command: &Command, config: &CliConfig) -> Result<String> {
    match command {
        Command::Price(args) => price::run(args, config),
        Command::Greeks(args) => greeks::run(args, config),
        Command::Hedge(args) => hedge::run(args, config),
        Command::Strategy(args) => strategy::run(args, config),
    }
}

/// Prints `rendered`, or writes it to `path` when one is given.
pub fn emit(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_price_with_aliases() {
        let cli = parse(&[
            "divergence", "price", "--spot", "100", "--strike", "95", "--time", "0.5",
            "--rate", "-0.01", "--sigma", "0.3", "--type", "put", "--method", "binomial",
        ]);
        match cli.command {
            Command::Price(args) => {
                assert_eq!(args.market.underlying.expiry, 0.5);
                assert_eq!(args.market.underlying.rate, -0.01);
                assert_eq!(args.market.option_type, "put");
                assert_eq!(args.method.method, crate::commands::PricingMethod::Binomial);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_strategy_strikes() {
        let cli = parse(&[
            "divergence", "strategy", "iron-condor", "--strikes", "105,110,95,90",
            "--spot", "100", "--expiry", "1", "--rate", "0.05", "--volatility", "0.2",
        ]);
        match cli.command {
            Command::Strategy(args) => assert_eq!(args.strikes, vec![105.0, 110.0, 95.0, 90.0]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "divergence", "greeks", "--spot", "100", "--strike", "100", "--expiry", "1",
            "--rate", "0.05", "--volatility", "0.2", "--format", "json", "--log-level", "info",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.log_level, Some(LogLevel::Info));
    }

    #[test]
    fn test_invalid_log_level_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "divergence", "greeks", "--spot", "100", "--strike", "100", "--expiry", "1",
            "--rate", "0.05", "--volatility", "0.2", "--log-level", "loud",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&[
            "divergence", "--config", "/nonexistent/divergence.toml", "greeks", "--spot",
            "100", "--strike", "100", "--expiry", "1", "--rate", "0.05", "--volatility", "0.2",
        ]);
        let err = cli.load_config_with(|_| None).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_emit_to_file() {
        let path = std::env::temp_dir().join(format!("divergence-emit-{}.txt", std::process::id()));
        emit("hello", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
        std::fs::remove_file(&path).unwrap();
    }
}
