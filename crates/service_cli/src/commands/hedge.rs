//! Hedge command implementation

use clap::Args;
use pricer_models::hedging::{number_of_options, portfolio_hedge, HedgeConfig};
use serde::Serialize;
use tracing::info;

use super::{MarketArgs, MethodArgs};
use crate::config::CliConfig;
use crate::output::{number, render};
use crate::Result;

/// Arguments of `divergence hedge`
#[derive(Debug, Clone, Args)]
pub struct HedgeArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub method: MethodArgs,

    /// Portfolio notional to hedge (default from config)
    #[arg(long)]
    pub portfolio_value: Option<f64>,
}

#[derive(Debug, Serialize)]
struct HedgeReport {
    method: &'static str,
    portfolio_value: f64,
    units: f64,
    delta_hedge: f64,
    gamma_hedge: f64,
    vega_hedge: f64,
}

/// Run the hedge command
pub fn run(args: &HedgeArgs, config: &CliConfig) -> Result<String> {
    let params = args.market.to_params()?;
    let hedge_config =
        HedgeConfig::new(args.portfolio_value.unwrap_or(config.portfolio_value))?;
    let pricer = args.method.build_pricer(config)?;
    info!(
        method = args.method.method.as_str(),
        portfolio_value = hedge_config.portfolio_value(),
        "computing hedge positions"
    );

    let units = number_of_options(&pricer, &params, &hedge_config)?;
    let positions = portfolio_hedge(&pricer, &params, &hedge_config)?;

    let report = HedgeReport {
        method: args.method.method.as_str(),
        portfolio_value: hedge_config.portfolio_value(),
        units,
        delta_hedge: positions.delta_hedge,
        gamma_hedge: positions.gamma_hedge,
        vega_hedge: positions.vega_hedge,
    };
    let rows = vec![
        ("Portfolio value".to_string(), number(report.portfolio_value)),
        ("Option units".to_string(), number(report.units)),
        ("Delta hedge".to_string(), number(report.delta_hedge)),
        ("Gamma hedge".to_string(), number(report.gamma_hedge)),
        ("Vega hedge".to_string(), number(report.vega_hedge)),
    ];
    render(config.format, &report, &rows)
}
