//! Valentine Quest - backend for a scripted Valentine's castle game

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valentine_quest::api;
use valentine_quest::config::Config;

#[derive(Parser)]
#[command(name = "valentine-quest")]
#[command(about = "Backend for a scripted Valentine's castle game")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("valentine_quest={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config, CLI flags take precedence
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let addr = config.bind_addr();
    tracing::info!("Starting HTTP server on {}", addr);

    let router = api::create_router();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Valentine Quest server running at http://{}", addr);
    println!("  Game:       http://{}/", addr);
    println!("  API:        http://{}/api/...", addr);
    println!("  API Docs:   http://{}/api/docs", addr);
    println!("  Health:     http://{}/health", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
