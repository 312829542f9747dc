use clap::Parser;
use tracing_subscriber::EnvFilter;

use arms_client::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so ARMS_API_BASE_URL and friends apply to local runs
    let _ = dotenvy::dotenv();

    let config = arms_client::config::config();

    // Logs go to stderr so --json output on stdout stays parseable
    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ARMS CLI starting in {:?} mode against {}", config.environment, config.api.base_url);

    let cli = Cli::parse();

    if let Err(e) = arms_client::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
