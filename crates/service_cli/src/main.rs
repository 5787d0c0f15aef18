//! `divergence` binary entry point.

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::cli::{emit, execute, Cli};
use service_cli::config::{build_config, CliConfig};
use service_cli::{Result, VERSION};

fn init_tracing(config: &CliConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides()?)?;
    init_tracing(&config);

    info!(version = VERSION, "divergence starting");
    debug!(?config, "configuration loaded");

    let rendered = execute(&cli.command, &config)?;
    emit(&rendered, cli.output.as_deref())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
