//! Strictly Replay - Unified CLI
//!
//! Interactive terminal play or headless replay of a move list.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use strictly_replay::{Cli, Command, ShellConfig, parse_moves, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ShellConfig::load_or_default(&cli.config)?;
    if let Some(order) = cli.order {
        config = config.with_initial_order(order);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Run the interactive TUI, logging to a file.
fn run_play(config: &ShellConfig) -> Result<()> {
    init_file_tracing(config.log_file(), config.log_filter())?;
    run_tui(*config.initial_order())
}

/// Apply moves headlessly and print the result.
#[instrument(skip(config, moves))]
fn run_replay(
    config: &ShellConfig,
    moves: &[String],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    init_stderr_tracing(config.log_filter());

    info!("Starting headless replay");
    let moves = parse_moves(moves)?;
    let report = replay(*config.initial_order(), &moves, jump)?;

    let output = if json {
        report.render_json()?
    } else {
        report.render_text()
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path, filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(std::io::stderr)
        .try_init();
}
