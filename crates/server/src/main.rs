//! Concierge server binary.
//!
//! Main entry point for the Concierge HTTP API. Loads configuration,
//! builds the agent and its collaborators, and serves requests.

use clap::Parser;
use concierge_core::{config::AppConfig, logging, AppResult};
use concierge_server::{build_agent, start_server};
use std::sync::Arc;

/// Concierge API server - routes queries between RAG and web search
#[derive(Parser, Debug)]
#[command(name = "concierge-server")]
#[command(about = "LLM-routed RAG / web-search answer service", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(short, long, env = "CONCIERGE_BIND")]
    bind: Option<String>,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "CONCIERGE_PORT")]
    port: Option<u16>,

    /// LLM provider (currently "openai")
    #[arg(long, env = "CONCIERGE_PROVIDER")]
    provider: Option<String>,

    /// Completion model identifier
    #[arg(short, long, env = "CONCIERGE_MODEL")]
    model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Load base configuration from environment, then apply CLI overrides
    let config = AppConfig::load()?;
    let config = config.with_overrides(
        cli.bind,
        cli.port,
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Concierge server starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    config.validate()?;

    // Fatal if the embedding provider is unreachable at startup
    let agent = build_agent(&config).await?;

    let result = start_server(&config, Arc::new(agent)).await;

    match &result {
        Ok(_) => tracing::info!("Server stopped"),
        Err(e) => tracing::error!("Server failed: {}", e),
    }

    result
}
