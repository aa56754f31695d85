// ABOUTME: Roster command for coachlab-cli
// ABOUTME: Summarizes every client's latest panel and lists clients needing attention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachlab::{errors::AppResult, input::read_roster, intelligence::BloodworkAnalyzer};
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::{display_json, display_roster};
use crate::OutputFormat;

/// Summarize a coach roster file
pub fn summarize(
    analyzer: &BloodworkAnalyzer,
    input: &Path,
    format: OutputFormat,
) -> AppResult<()> {
    let roster = read_roster(input)?;
    if roster.is_empty() {
        warn!(path = %input.display(), "Roster file has no clients");
    }

    let summary = analyzer.summarize_roster(&roster);
    info!(
        clients = summary.clients.len(),
        needs_attention = summary.needs_attention.len(),
        "Roster summarized"
    );

    match format {
        OutputFormat::Json => display_json(&summary),
        OutputFormat::Table => {
            display_roster(&summary);
            Ok(())
        }
    }
}
