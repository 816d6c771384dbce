//! CLI definitions for quizlens.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Quizlens CLI.
#[derive(Parser)]
#[command(name = "quizlens")]
#[command(about = "Answer multiple-choice questions found in page snapshots")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan a snapshot once and print the answer
    Scan {
        /// Path to the page snapshot JSON
        snapshot: PathBuf,
    },

    /// Watch a snapshot and answer whenever it changes
    ///
    /// Press Enter to force a scan; Ctrl-C to quit.
    Watch {
        /// Path to the page snapshot JSON
        snapshot: PathBuf,
    },

    /// Print the extracted question and options without calling the model
    Extract {
        /// Path to the page snapshot JSON
        snapshot: PathBuf,
    },
}
