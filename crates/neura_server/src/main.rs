use anyhow::Result;
use clap::Parser;
use neura_server::{AppState, NeuraConfig, create_router, init_observability, shutdown_observability};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Neura social story server", long_about = None)]
struct Args {
    /// Extra configuration file, layered over the bundled and user defaults
    #[arg(short, long, env = "NEURA_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (e.g. "0.0.0.0:8000")
    #[arg(short, long)]
    bind: Option<String>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = NeuraConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        let server = config.server().clone().with_bind_address(bind);
        config = config.with_server(server);
    }
    let mut logging = config.logging().clone();
    if let Some(level) = args.log_level {
        logging = logging.with_level(level);
    }
    if args.json_logs {
        logging = logging.with_json(true);
    }
    let config = config.with_logging(logging);

    init_observability(config.logging()).map_err(|e| anyhow::anyhow!(e))?;

    let state = AppState::from_config(&config)?;
    let listener = tokio::net::TcpListener::bind(config.server().bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        completion_url = %config.completion().base_url(),
        model = %config.completion().model(),
        "Starting Neura server"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    shutdown_observability();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
