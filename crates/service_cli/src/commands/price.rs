//! Price command implementation
//!
//! Prices one European option with the model chosen by `--method`.

use clap::Args;
use pricer_core::traits::OptionPricer;
use pricer_core::types::OptionParameters;
use pricer_pricing::mc::{HestonPricer, MonteCarloPricer, SimulationConfig, SimulationResult};
use serde::Serialize;
use tracing::info;

use super::{MarketArgs, MethodArgs, PricingMethod};
use crate::config::CliConfig;
use crate::output::{number, render};
use crate::Result;

/// Arguments of `divergence price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub method: MethodArgs,
}

/// Result of the price command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    /// Model used
    pub method: &'static str,
    /// "call" or "put"
    pub option_type: &'static str,
    /// Option price
    pub price: f64,
    /// Standard error, simulation models only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    /// 95% confidence half-width, simulation models only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_95: Option<f64>,
}

/// Computes the price report.
pub fn evaluate(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let params = args.market.to_params()?;
    info!(
        method = args.method.method.as_str(),
        spot = params.spot(),
        strike = params.strike(),
        expiry = params.expiry(),
        option_type = %params.option_type(),
        "pricing option"
    );

    let simulation = match args.method.method {
        PricingMethod::MonteCarlo | PricingMethod::Heston => {
            Some(simulate(&args.method, config, &params)?)
        }
        _ => None,
    };
    let price = match simulation {
        Some(result) => result.price,
        None => args.method.build_pricer(config)?.price(&params)?,
    };

    Ok(PriceReport {
        method: args.method.method.as_str(),
        option_type: params.option_type().as_str(),
        price,
        std_error: simulation.map(|r| r.std_error),
        confidence_95: simulation.map(|r| r.confidence_95()),
    })
}

fn simulate(
    method: &MethodArgs,
    config: &CliConfig,
    params: &OptionParameters,
) -> Result<SimulationResult> {
    let builder = SimulationConfig::builder()
        .n_paths(method.paths.unwrap_or(config.paths))
        .seed(method.seed.unwrap_or(config.seed));

    let result = if method.method == PricingMethod::Heston {
        let sim = builder.n_steps(config.heston_steps).build()?;
        HestonPricer::with_config(method.heston.to_params()?, sim)?.simulate(params)?
    } else {
        MonteCarloPricer::new(builder.build()?)?.simulate(params)?
    };
    Ok(result)
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<String> {
    let report = evaluate(args, config)?;
    info!(price = report.price, "pricing complete");

    let mut rows = vec![
        ("Method".to_string(), report.method.to_string()),
        ("Type".to_string(), report.option_type.to_string()),
        ("Price".to_string(), number(report.price)),
    ];
    if let (Some(se), Some(ci)) = (report.std_error, report.confidence_95) {
        rows.push(("Std error".to_string(), number(se)));
        rows.push(("95% CI ±".to_string(), number(ci)));
    }
    render(config.format, &report, &rows)
}
