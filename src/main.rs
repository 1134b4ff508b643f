//! AtomicTrades - command line runner

use atomictrades::{AtomicTrades, AtomicTradesError, RunnerConfig};

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = RunnerConfig::from_env();
    let level = config.level_filter().map_err(AtomicTradesError::Config)?;

    // Initialize logging. RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting {}", config.name);

    let trades = AtomicTrades::with_config(config)?;
    let report = trades.try_run()?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Shutdown complete");
    Ok(())
}
