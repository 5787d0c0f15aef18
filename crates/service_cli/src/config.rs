//! CLI configuration management
//!
//! Settings are layered, lowest to highest priority:
//! 1. Default values
//! 2. TOML file (`--config`, or `divergence.toml` in the working directory)
//! 3. `DIVERGENCE_*` environment variables
//! 4. Command-line flags

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use pricer_models::hedging::DEFAULT_PORTFOLIO_VALUE;
use pricer_pricing::lattice::{DEFAULT_LATTICE_STEPS, MAX_LATTICE_STEPS};
use pricer_pricing::mc::{DEFAULT_HESTON_STEPS, DEFAULT_PATHS, DEFAULT_SEED, MAX_PATHS, MAX_STEPS};

use crate::output::OutputFormat;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "divergence.toml";

/// Prefix of the environment variables read by [`CliConfig::apply_env`].
pub const ENV_PREFIX: &str = "DIVERGENCE_";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Tracing filter directive for this level
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Merged CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level, overridden by `--verbose` and `RUST_LOG`
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format of command results
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Monte Carlo and Heston path count
    pub paths: usize,
    /// Seed of the simulation pricers
    pub seed: u64,
    /// Binomial lattice step count
    pub lattice_steps: usize,
    /// Heston time steps per path
    pub heston_steps: usize,
    /// Portfolio value for hedge calculations
    pub portfolio_value: f64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
            lattice_steps: DEFAULT_LATTICE_STEPS,
            heston_steps: DEFAULT_HESTON_STEPS,
            portfolio_value: DEFAULT_PORTFOLIO_VALUE,
        }
    }
}

impl CliConfig {
    /// Parses a TOML document; unspecified keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Loads a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Applies `DIVERGENCE_*` variables from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies `DIVERGENCE_*` variables resolved through `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = var("FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(paths) = var("PATHS") {
            self.paths = parse_value("DIVERGENCE_PATHS", &paths)?;
        }
        if let Some(seed) = var("SEED") {
            self.seed = parse_value("DIVERGENCE_SEED", &seed)?;
        }
        if let Some(steps) = var("LATTICE_STEPS") {
            self.lattice_steps = parse_value("DIVERGENCE_LATTICE_STEPS", &steps)?;
        }
        if let Some(steps) = var("HESTON_STEPS") {
            self.heston_steps = parse_value("DIVERGENCE_HESTON_STEPS", &steps)?;
        }
        if let Some(value) = var("PORTFOLIO_VALUE") {
            self.portfolio_value = parse_value("DIVERGENCE_PORTFOLIO_VALUE", &value)?;
        }
        Ok(())
    }

    /// Applies command-line overrides.
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Validates counts and values against the pricers' bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths == 0 || self.paths > MAX_PATHS {
            return Err(invalid("paths", self.paths));
        }
        if self.lattice_steps == 0 || self.lattice_steps > MAX_LATTICE_STEPS {
            return Err(invalid("lattice_steps", self.lattice_steps));
        }
        if self.heston_steps == 0 || self.heston_steps > MAX_STEPS {
            return Err(invalid("heston_steps", self.heston_steps));
        }
        if !self.portfolio_value.is_finite() || self.portfolio_value <= 0.0 {
            return Err(invalid("portfolio_value", self.portfolio_value));
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

fn invalid(name: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    }
}

/// Global command-line settings that override the configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file
    pub config_file: Option<PathBuf>,
    /// `--log-level`
    pub log_level: Option<LogLevel>,
    /// `--verbose`
    pub verbose: bool,
    /// `--format`
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliOverrides, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
