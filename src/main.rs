//! Quizlens - answer multiple-choice questions found in page snapshots.
//!
//! Main entry point for the quizlens CLI.

mod cli;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use quizlens_config::{Config, ConfigLoader};
use quizlens_core::{extract_candidate, PageSnapshot};
use quizlens_display_console::ConsoleOverlay;
use quizlens_provider_gemini::GeminiProvider;
use quizlens_runloop::{
    FileSnapshotSource, IntervalTrigger, ScanGate, ScanLoop, ScanRequest, SnapshotWatcher,
};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Extract { snapshot } => extract(&snapshot),
        Commands::Scan { snapshot } => scan(&config, snapshot).await,
        Commands::Watch { snapshot } => watch(&config, snapshot).await,
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        ConfigLoader::load(path).with_context(|| format!("loading config from {:?}", path))
    } else {
        debug!("no config file at {:?}, using defaults", path);
        Ok(Config::default())
    }
}

fn extract(snapshot: &Path) -> anyhow::Result<()> {
    let page = PageSnapshot::load(snapshot)
        .with_context(|| format!("loading snapshot from {:?}", snapshot))?;

    match extract_candidate(&page) {
        Some(candidate) => {
            if candidate.question.is_empty() {
                println!("Question: (not located)");
            } else {
                println!("Question: {}", candidate.question);
            }
            for (i, option) in candidate.options.iter().enumerate() {
                println!("{}) {}", (b'A' + i as u8) as char, option);
            }
        }
        None => println!("No multiple-choice question found."),
    }
    Ok(())
}

fn build_scan_loop(config: &Config, snapshot: std::path::PathBuf) -> anyhow::Result<ScanLoop> {
    quizlens_config::validate(config).context("invalid configuration")?;

    let mut provider = GeminiProvider::new(config.provider.api_keys.clone())
        .with_model(config.provider.model.clone());
    if let Some(base_url) = &config.provider.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    let overlay = ConsoleOverlay::new(Duration::from_millis(config.overlay.duration_ms));
    let gate = ScanGate::new(Duration::from_millis(config.scan.min_interval_ms));

    Ok(ScanLoop::new(
        Arc::new(FileSnapshotSource::new(snapshot)),
        Arc::new(provider),
        Arc::new(overlay),
        gate,
    ))
}

async fn scan(config: &Config, snapshot: std::path::PathBuf) -> anyhow::Result<()> {
    let scan_loop = build_scan_loop(config, snapshot)?;
    let answer = scan_loop.scan_once().await;
    info!("answer: {}", answer);
    Ok(())
}

async fn watch(config: &Config, snapshot: std::path::PathBuf) -> anyhow::Result<()> {
    let scan_loop = build_scan_loop(config, snapshot.clone())?;

    let (tx, rx) = mpsc::channel(64);

    let _watcher = SnapshotWatcher::spawn(
        snapshot,
        Duration::from_millis(config.scan.debounce_ms),
        tx.clone(),
    )?;

    let _interval = if config.scan.poll_interval_ms > 0 {
        Some(IntervalTrigger::spawn(
            Duration::from_millis(config.scan.poll_interval_ms),
            tx.clone(),
        ))
    } else {
        None
    };

    // Enter on stdin forces a scan, like a keyboard shortcut would.
    let stdin_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            if stdin_tx.send(ScanRequest::forced()).await.is_err() {
                break;
            }
        }
    });

    info!("watching for questions; press Enter to force a scan");

    tokio::select! {
        _ = scan_loop.run(rx) => {
            warn!("scan request channel closed");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
        }
    }

    Ok(())
}
