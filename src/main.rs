//! Pronoun Bot - toggles pronoun tags in Discord nicknames via buttons
//!
//! Post `!setup-pronouns` in any channel the bot can read to get the button
//! menu. Each click adds or removes a pronoun set in the clicking member's
//! nickname.
//!
//! # Usage
//!
//! ```bash
//! # Token from the environment
//! DISCORD_TOKEN=... pronounbot
//!
//! # Token from a specific config file, with debug logging
//! pronounbot --config ./config.toml --verbose
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pronounbot::config::Config;
use pronounbot::constants::APP_NAME;
use pronounbot::gateway;
use pronounbot::models::Catalog;

/// Pronoun Bot - pronoun buttons for Discord nicknames
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bot token (overrides the config file)
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let token = config.resolve_token(cli.token.as_deref())?;

    // Fail fast on a malformed catalog before connecting
    let catalog = Catalog::builtin()?;

    info!(
        "Starting {} v{} with {} pronoun options",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        catalog.len()
    );

    gateway::run(&token, catalog).await
}
