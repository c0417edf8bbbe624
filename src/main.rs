use clap::Parser;
use tracing_subscriber::EnvFilter;

use jot_api::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,jot_api=debug")))
        .init();

    let config = jot_api::config::config();
    tracing::info!("Starting Jot API in {:?} mode", config.environment);
    if jot_api::is_production!() && config.api.enable_request_logging {
        tracing::warn!("Request logging is enabled in production");
    }

    let cli = Cli::parse();

    if let Err(e) = jot_api::cli::run(cli, config.clone()).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
