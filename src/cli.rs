// CLI module - command-line argument parsing and handlers
//
// Subcommands besides the default TUI:
// - analyze <text>: one-shot classification, result printed to stdout
// - health: reachability probe, exit code reflects the outcome
// - config --show/--reset/--edit/--path: configuration management

use crate::client::ApiClient;
use crate::config::{Config, VERSION};
use crate::tui::components::formatters::{format_confidence, format_processing_time};
use crate::validate::validate_text;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;
use std::time::Duration;

/// Sentiscope - terminal client for the sentiment analysis API
#[derive(Parser)]
#[command(name = "sentiscope")]
#[command(version = VERSION)]
#[command(about = "Terminal client for the sentiment analysis API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a piece of text and print the result
    Analyze {
        /// Text to classify (512 characters max)
        text: String,
    },

    /// Check whether the API server is reachable
    Health,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub async fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze { text }) => {
            handle_analyze(&text).await;
            true
        }
        Some(Commands::Health) => {
            handle_health().await;
            true
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                println!("Usage: sentiscope config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

async fn handle_analyze(text: &str) {
    let trimmed = match validate_text(text) {
        Ok(trimmed) => trimmed,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    let config = Config::from_env();
    let client = match ApiClient::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    match client.analyze(trimmed).await {
        Ok(result) => {
            let cached = if result.cached { " (cached)" } else { "" };
            println!(
                "{} {} in {}{}",
                result.sentiment.as_str(),
                format_confidence(result.confidence),
                format_processing_time(result.processing_time_ms),
                cached
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_health() {
    let config = Config::from_env();
    let client = match ApiClient::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if client.check_health().await {
        println!("OK: {}", config.api_url);
    } else {
        eprintln!("UNREACHABLE: {}", config.api_url);
        std::process::exit(1);
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!("history_initial_limit = {}", config.history_initial_limit);
    println!("stats_refresh_ms = {}", config.stats_refresh_ms);
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status();

    match status {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}
