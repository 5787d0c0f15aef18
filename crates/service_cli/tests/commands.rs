//! End-to-end command tests: parse arguments, layer configuration, execute.

use approx::assert_relative_eq;
use clap::Parser;
use serde_json::Value;

use service_cli::cli::{execute, Cli};
use service_cli::CliError;

const MARKET: [&str; 8] = [
    "--spot", "100", "--expiry", "1", "--rate", "0.05", "--volatility", "0.2",
];

fn run_json(args: &[&str]) -> Result<Value, CliError> {
    let mut argv = vec!["divergence", "--format", "json"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    let config = cli.load_config_with(|_| None)?;
    let rendered = execute(&cli.command, &config)?;
    Ok(serde_json::from_str(&rendered).expect("output should be JSON"))
}

fn with_market(prefix: &[&'static str]) -> Vec<&'static str> {
    let mut argv = prefix.to_vec();
    argv.extend_from_slice(&MARKET);
    argv
}

#[test]
fn price_matches_across_methods() {
    let bs = run_json(&with_market(&["price", "--strike", "100"])).unwrap();
    assert_relative_eq!(bs["price"].as_f64().unwrap(), 10.450583572185565, epsilon = 1e-9);

    let tree = run_json(&with_market(&[
        "price", "--strike", "100", "--method", "binomial", "--steps", "500",
    ]))
    .unwrap();
    assert_relative_eq!(tree["price"].as_f64().unwrap(), 10.44658513644654, epsilon = 1e-8);

    let mc = run_json(&with_market(&[
        "price", "--strike", "100", "--method", "monte-carlo", "--paths", "50000",
    ]))
    .unwrap();
    let se = mc["std_error"].as_f64().unwrap();
    assert!((mc["price"].as_f64().unwrap() - 10.450583572185565).abs() < 4.0 * se);
}

#[test]
fn monte_carlo_is_reproducible_for_a_seed() {
    let args = with_market(&[
        "price", "--strike", "100", "--method", "monte-carlo", "--seed", "7", "--paths", "5000",
    ]);
    assert_eq!(run_json(&args).unwrap(), run_json(&args).unwrap());
}

#[test]
fn heston_requires_variance_parameters() {
    let err = run_json(&with_market(&["price", "--strike", "100", "--method", "heston"]))
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));

    let ok = run_json(&with_market(&[
        "price", "--strike", "100", "--method", "heston", "--paths", "2000", "--v0", "0.04",
        "--kappa", "2", "--theta", "0.04", "--xi", "0.3", "--rho", "-0.7",
    ]))
    .unwrap();
    assert_eq!(ok["method"], "heston");
    assert!(ok["std_error"].as_f64().unwrap() > 0.0);
}

#[test]
fn greeks_summary_has_five_entries() {
    let greeks = run_json(&with_market(&["greeks", "--strike", "100", "--type", "put"])).unwrap();
    assert_eq!(greeks.as_object().unwrap().len(), 5);
    assert_relative_eq!(greeks["Delta"].as_f64().unwrap(), -0.3631693, epsilon = 1e-6);
    assert!(greeks["Gamma"].as_f64().unwrap() > 0.0);
}

#[test]
fn hedge_positions_scale_with_portfolio() {
    let hedge = run_json(&with_market(&[
        "hedge", "--strike", "100", "--portfolio-value", "50000",
    ]))
    .unwrap();
    assert_relative_eq!(hedge["portfolio_value"].as_f64().unwrap(), 50_000.0);
    let units = hedge["units"].as_f64().unwrap();
    assert_relative_eq!(units, 50_000.0 / 10.450583572185565, max_relative = 1e-9);
}

#[test]
fn strategy_values() {
    let straddle = run_json(&with_market(&["strategy", "straddle", "--strikes", "100"])).unwrap();
    // C + P at the money, from put-call parity
    assert_relative_eq!(
        straddle["value"].as_f64().unwrap(),
        10.450583572185565 + 5.573526022256971,
        epsilon = 1e-9
    );

    let err = run_json(&with_market(&["strategy", "straddle", "--strikes", "90,110"])).unwrap_err();
    assert!(matches!(err, CliError::Pricing(ref e) if e.is_invalid_argument()));
}

#[test]
fn invalid_inputs_are_reported() {
    let err = run_json(&with_market(&["price", "--strike=-5"])).unwrap_err();
    assert!(matches!(err, CliError::Pricing(ref e) if e.is_domain_error()));

    let err = run_json(&with_market(&["price", "--strike", "100", "--type", "digital"]))
        .unwrap_err();
    assert!(matches!(err, CliError::Pricing(ref e) if e.is_invalid_argument()));
}

#[test]
fn config_file_supplies_defaults() {
    let path = std::env::temp_dir().join(format!("divergence-it-{}.toml", std::process::id()));
    std::fs::write(&path, "format = \"json\"\nportfolio_value = 1000.0\n").unwrap();

    let mut argv = vec!["divergence", "--config", path.to_str().unwrap(), "hedge", "--strike", "100"];
    argv.extend_from_slice(&MARKET);
    let cli = Cli::try_parse_from(argv).unwrap();
    let config = cli.load_config_with(|_| None).unwrap();
    let value: Value = serde_json::from_str(&execute(&cli.command, &config).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_relative_eq!(value["portfolio_value"].as_f64().unwrap(), 1000.0);
}
