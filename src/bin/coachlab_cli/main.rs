// ABOUTME: Coachlab CLI - command-line access to bloodwork classification and trends
// ABOUTME: Classifies panels, groups markers, builds trend cards, and summarizes coach rosters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify the latest test in a file, only flagged vitamin markers
//! coachlab-cli classify tests.json --search vitamin --status low
//!
//! # Show markers grouped by category
//! coachlab-cli groups tests.json
//!
//! # Trend card for one marker over the last six readings
//! coachlab-cli trend history.json --marker "Vitamin D" --window last-six
//!
//! # Roster overview for a coach, as JSON
//! coachlab-cli --format json roster roster.json
//!
//! # Use a custom reference table
//! coachlab-cli --reference-table ranges.json classify tests.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use coachlab::config::CoachlabConfig;
use coachlab::logging::LoggingConfig;
use coachlab::models::MarkerStatus;
use coachlab::views::TrendWindow;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "coachlab-cli",
    about = "Coachlab bloodwork CLI",
    long_about = "Classify blood-test markers against reference ranges, group them, and build trend and roster summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON reference table replacing the built-in panel
    #[arg(long, global = true)]
    reference_table: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Chart window argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WindowArg {
    LastThree,
    LastSix,
    LastTwelve,
    All,
}

impl From<WindowArg> for TrendWindow {
    fn from(window: WindowArg) -> Self {
        match window {
            WindowArg::LastThree => Self::LastThree,
            WindowArg::LastSix => Self::LastSix,
            WindowArg::LastTwelve => Self::LastTwelve,
            WindowArg::All => Self::All,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Classify every marker of the most recent test in a file
    Classify {
        /// Blood test file (one test or an array)
        input: PathBuf,

        /// Case-insensitive search over marker label and code
        #[arg(long)]
        search: Option<String>,

        /// Only show markers with this status (optimal, low, high, borderline)
        #[arg(long)]
        status: Option<MarkerStatus>,

        /// Only show markers in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the most recent test grouped by category
    Groups {
        /// Blood test file (one test or an array)
        input: PathBuf,
    },

    /// Build trend cards from a blood-test history
    Trend {
        /// Blood-test history file (array of tests)
        input: PathBuf,

        /// Marker label; every marker is summarized when omitted
        #[arg(long)]
        marker: Option<String>,

        /// Chart window for the printed series
        #[arg(long, value_enum, default_value_t = WindowArg::All)]
        window: WindowArg,
    },

    /// Summarize the latest panel of every client on a roster
    Roster {
        /// Roster file (array of clients with their tests)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = CoachlabConfig::from_env()?;
    if let Some(path) = &cli.reference_table {
        config = config.with_reference_table(path);
    }
    debug!(?config, "Loaded configuration");
    let analyzer = config.build_analyzer()?;

    match cli.command {
        Command::Classify {
            input,
            search,
            status,
            category,
        } => {
            commands::bloodwork::classify(
                &analyzer,
                &input,
                search.unwrap_or_default(),
                status,
                category,
                cli.format,
            )?;
        }
        Command::Groups { input } => {
            commands::bloodwork::groups(&analyzer, &input, cli.format)?;
        }
        Command::Trend {
            input,
            marker,
            window,
        } => {
            commands::bloodwork::trend(
                &analyzer,
                &input,
                marker.as_deref(),
                window.into(),
                cli.format,
            )?;
        }
        Command::Roster { input } => {
            commands::roster::summarize(&analyzer, &input, cli.format)?;
        }
    }

    Ok(())
}
