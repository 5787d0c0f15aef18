//! Strategy command implementation
//!
//! Values a named multi-leg strategy. The strikes come from `--strikes` in
//! leg order; the market comes from the underlying flags.

use clap::Args;
use pricer_core::types::OptionType;
use pricer_models::strategies::Strategy;
use serde::Serialize;
use tracing::info;

use super::{MethodArgs, UnderlyingArgs};
use crate::config::CliConfig;
use crate::output::{number, render};
use crate::Result;

/// Arguments of `divergence strategy`
#[derive(Debug, Clone, Args)]
pub struct StrategyArgs {
    /// Strategy name: bull-call-spread, bear-put-spread, straddle, strangle,
    /// iron-condor or covered-call
    pub name: String,

    /// Strikes in leg order, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub strikes: Vec<f64>,

    #[command(flatten)]
    pub underlying: UnderlyingArgs,

    #[command(flatten)]
    pub method: MethodArgs,
}

#[derive(Debug, Serialize)]
struct StrategyReport {
    method: &'static str,
    #[serde(flatten)]
    strategy: Strategy,
    value: f64,
}

/// Run the strategy command
pub fn run(args: &StrategyArgs, config: &CliConfig) -> Result<String> {
    let strategy = Strategy::from_name(&args.name, &args.strikes)?;
    // Each leg replaces strike and kind; spot is only a valid placeholder.
    let market = args
        .underlying
        .to_params(args.underlying.spot, OptionType::Call)?;
    let pricer = args.method.build_pricer(config)?;
    info!(
        strategy = strategy.name(),
        method = args.method.method.as_str(),
        "valuing strategy"
    );

    let value = strategy.evaluate(&pricer, &market)?;
    let report = StrategyReport {
        method: args.method.method.as_str(),
        strategy,
        value,
    };

    let mut rows = vec![
        ("Strategy".to_string(), strategy.name().to_string()),
        ("Method".to_string(), report.method.to_string()),
    ];
    if strategy.underlying_units() != 0.0 {
        rows.push((
            "Underlying".to_string(),
            number(strategy.underlying_units()),
        ));
    }
    for (sign, kind, strike) in strategy.legs() {
        let side = if sign > 0.0 { "Long" } else { "Short" };
        rows.push((format!("{side} {kind} {strike}"), String::new()));
    }
    rows.push(("Value".to_string(), number(value)));
    render(config.format, &report, &rows)
}
