use clap::Parser;
use ferrous_mdns_domain::CliOverrides;
use tracing::{debug, info};

mod bootstrap;
mod report;

#[derive(Parser)]
#[command(name = "ferrous-mdns")]
#[command(version)]
#[command(about = "Ferrous mDNS - inspect the resource records a host publishes")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// TTL for zone entries that do not set one
    #[arg(long)]
    default_ttl: Option<u32>,

    /// Print records in canonical order
    #[arg(short = 's', long)]
    sort: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        default_ttl: cli.default_ttl,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous mDNS v{}", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => debug!("No configuration file found, using defaults"),
    }

    let records = config.records()?;
    info!(count = records.len(), "Zone loaded");

    for line in report::render(&records, cli.sort) {
        println!("{}", line);
    }

    Ok(())
}
