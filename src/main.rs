// Sentiscope - terminal client for the sentiment analysis API
//
// Architecture:
// - Client (reqwest): Typed wrapper over the REST endpoints
// - Hooks: Stateful units (analysis, history, cache stats) that own their
//   loading/error state and spawn fetch tasks
// - TUI (ratatui): Renders hook state and dispatches user intents
// - Event system: An mpsc channel carries fetch completions back to the
//   TUI task, tagged with sequence numbers so stale responses are dropped

mod cli;
mod client;
mod config;
mod events;
mod hooks;
mod logging;
mod tui;
mod util;
mod validate;

use anyhow::{Context, Result};
use client::ApiClient;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (analyze, health, config ...).
    // If one was handled, exit early.
    if cli::handle_cli().await {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs are captured into a buffer the TUI renders; writing them to
    // stdout would garble the display
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("sentiscope={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional rotating file log in JSON format. The guard must stay alive
    // for the duration of the program so buffered lines flush on exit.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };

                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();

                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    let client = ApiClient::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to build API client")?;

    tracing::info!("Connecting to {}", config.api_url);

    // Completion events from fetch tasks flow back over this channel.
    // Bounded so a wedged UI applies backpressure instead of growing.
    let (event_tx, event_rx) = mpsc::channel(100);

    // Startup reachability probe; the result lands in the status bar
    let health_client = client.clone();
    let health_tx = event_tx.clone();
    tokio::spawn(async move {
        let healthy = health_client.check_health().await;
        if healthy {
            tracing::info!("Server is reachable");
        } else {
            tracing::warn!("Server health check failed");
        }
        let _ = health_tx
            .send(events::ApiEvent::HealthChecked { healthy })
            .await;
    });

    // Run the TUI in the main task; blocks until the user quits
    if let Err(e) = tui::run_tui(client, event_tx, event_rx, config, log_buffer).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
