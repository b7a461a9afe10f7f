use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use ability_check_group::commands::{CommandContext, CommandDispatcher};
use ability_check_group::core::Config;
use ability_check_group::features::get_version;
use ability_check_group::host::{ChatEvent, InMemoryStore, StdoutSink};

/// Host adapter: chat events arrive as JSON lines on stdin, chat output
/// leaves as JSON lines on stdout, the tabletop is a world snapshot file.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting {} v{}...", config.feedback_name, get_version());

    let store = InMemoryStore::load(&config.world_path).map_err(|e| {
        error!("Failed to load world from {}: {e}", config.world_path);
        anyhow::anyhow!("World load failed: {}", e)
    })?;

    let feedback_name = config.feedback_name.clone();
    let context = CommandContext::new(Arc::new(store), Arc::new(StdoutSink), config);
    let dispatcher = CommandDispatcher::with_default_handlers(context);

    info!("{feedback_name} ready.");

    // One event at a time, each handled to completion before the next is read
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ChatEvent>(&line) {
            Ok(event) => {
                dispatcher.dispatch(&event);
            }
            Err(e) => warn!("Skipping malformed chat event: {e}"),
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}
