//! GameLens - AI-annotated analytics over stored aggregation pipelines.
//!
//! Main entry point: parses configuration from flags and environment,
//! wires the MongoDB store and the Gemini backend into the server state,
//! and serves the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mongodb::Client;

use gamelens_llm::{GeminiBackend, GeminiConfig};
use gamelens_server::{AppState, Server, ServerConfig};
use gamelens_store::{MongoAggregationRunner, MongoPipelineStore};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// GameLens - AI-annotated analytics over stored aggregation pipelines
#[derive(Parser, Debug)]
#[command(name = "gamelens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI")]
    mongo_uri: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Address to bind the HTTP server to
    #[arg(long, env = "GAMELENS_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Database holding the game records and pipeline definitions
    #[arg(long, default_value = "steamdb")]
    database: String,

    /// Collection holding the game records
    #[arg(long, default_value = "games")]
    games_collection: String,

    /// Collection holding the pipeline definitions
    #[arg(long, default_value = "pipelines")]
    pipelines_collection: String,

    /// Gemini model identifier
    #[arg(long, default_value = gamelens_llm::DEFAULT_MODEL)]
    model: String,

    /// Maximum number of distinct prompts kept in the summary cache
    #[arg(long, default_value_t = gamelens_llm::DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing — console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "gamelens=debug,gamelens_store=debug,gamelens_llm=debug,gamelens_server=debug,info"
    } else {
        "gamelens=info,gamelens_store=info,gamelens_llm=info,gamelens_server=info,warn"
    };

    let log_dir = dirs::data_local_dir()
        .map(|d| d.join("gamelens").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "gamelens.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "gamelens=trace,gamelens_store=trace,gamelens_llm=trace,gamelens_server=trace,info",
                )),
        )
        .init();

    // ── MongoDB ─────────────────────────────────────────────────────────
    let client = Client::with_uri_str(&cli.mongo_uri)
        .await
        .context("failed to initialize MongoDB client")?;
    let db = client.database(&cli.database);

    let pipelines = MongoPipelineStore::new(&db, &cli.pipelines_collection);
    let runner = MongoAggregationRunner::new(&db, &cli.games_collection);

    // ── Gemini ──────────────────────────────────────────────────────────
    let model = cli.model.clone();
    let gemini_config = GeminiConfig::new(cli.gemini_api_key).with_model(cli.model);
    let gemini = GeminiBackend::new(gemini_config).context("failed to create Gemini backend")?;

    // ── Server ──────────────────────────────────────────────────────────
    let config = ServerConfig::default()
        .with_bind_address(cli.bind)
        .with_summary_cache_capacity(cli.cache_capacity);

    let state = AppState::new(
        config,
        Arc::new(pipelines),
        Arc::new(runner),
        Arc::new(gemini),
    );

    tracing::info!(
        database = %cli.database,
        model = %model,
        bind = %cli.bind,
        "GameLens starting"
    );

    Server::from_state(state)
        .run()
        .await
        .context("server exited with an error")?;

    Ok(())
}
