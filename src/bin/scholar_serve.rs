use anyhow::{Context, Result};
use clap::Parser;
use scholar_etl::config::toml_config::ServerConfig;
use scholar_etl::server::{router, AppState};
use scholar_etl::utils::{logger, validation::Validate};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scholar-serve")]
#[command(about = "Serve scraped citation profiles over HTTP")]
struct Args {
    /// Path to TOML configuration file (only the [source] section is used)
    #[arg(short, long)]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_server_logger();

    let config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => ServerConfig::default(),
    };
    config.validate().context("Configuration validation failed")?;
    let source = config.source;

    let state = Arc::new(AppState::from_source(&source).context("Failed to build HTTP client")?);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid host:port")?;

    tracing::info!(%addr, profiles = source.profiles.len(), "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
