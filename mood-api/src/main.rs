//! mood-api - Text mood analysis service
//!
//! Accepts `{"text": ...}` on POST /analyze (or /mood) and answers with a
//! coarse mood label and the polarity score it was derived from.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mood_common::config::{resolve_toml_config, ConfigSource};
use mood_common::LexiconScorer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mood_api::config::{ConfigOverrides, ServerConfig};

/// Command-line arguments for mood-api
#[derive(Parser, Debug)]
#[command(name = "mood-api")]
#[command(about = "Text mood analysis service")]
#[command(version)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, env = "MOOD_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind (overrides config file)
    #[arg(long, env = "MOOD_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "MOOD_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (toml_config, config_source) =
        resolve_toml_config(args.config.as_deref()).context("Failed to load configuration")?;

    let config = ServerConfig::resolve(
        toml_config,
        ConfigOverrides {
            host: args.host,
            port: args.port,
        },
    )
    .context("Invalid configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "mood_api={level},mood_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting mood-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_source {
        ConfigSource::BuiltInDefaults => warn!("No config file found, using built-in defaults"),
        source => info!("Loaded TOML configuration from {}", source),
    }

    let scorer = Arc::new(LexiconScorer::default());
    info!("Using bundled lexicon scorer ({} words)", scorer.len());

    mood_api::server::run(config, scorer)
        .await
        .context("Server error")?;

    Ok(())
}
