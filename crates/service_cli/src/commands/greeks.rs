//! Greeks command implementation

use clap::Args;
use pricer_models::analytical::greeks_summary;
use tracing::info;

use super::MarketArgs;
use crate::config::CliConfig;
use crate::output::{number, render};
use crate::Result;

/// Arguments of `divergence greeks`
#[derive(Debug, Clone, Args)]
pub struct GreeksArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

/// Run the greeks command
pub fn run(args: &GreeksArgs, config: &CliConfig) -> Result<String> {
    let params = args.market.to_params()?;
    info!(option_type = %params.option_type(), "computing greeks");

    let greeks = greeks_summary(&params);
    let rows: Vec<(String, String)> = greeks
        .entries()
        .iter()
        .map(|(greek, value)| (greek.name().to_string(), number(*value)))
        .collect();

    render(config.format, &greeks, &rows)
}
