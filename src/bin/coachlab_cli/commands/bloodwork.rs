// ABOUTME: Bloodwork panel commands for coachlab-cli
// ABOUTME: Handles classify, groups, and trend operations over blood-test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachlab::{
    errors::AppResult,
    input::{read_blood_tests, read_latest_blood_test},
    intelligence::{build_trend_series, BloodworkAnalyzer},
    models::MarkerStatus,
    views::{MarkerTableView, TrendWindow},
};
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::helpers::display::{
    display_classified, display_groups, display_json, display_trend, display_trends,
};
use crate::OutputFormat;

type Result<T> = AppResult<T>;

/// Classify the latest test and print the rows passing the filters
pub fn classify(
    analyzer: &BloodworkAnalyzer,
    input: &Path,
    search: String,
    status: Option<MarkerStatus>,
    category: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let test = read_latest_blood_test(input)?;
    let rows = analyzer.classify_test(&test);
    let view = MarkerTableView::new()
        .with_search(search)
        .with_status(status)
        .with_category(category);
    let visible = view.apply(&rows);

    info!(
        test_id = %test.id,
        markers = rows.len(),
        visible = visible.len(),
        "Classified blood test"
    );

    match format {
        OutputFormat::Json => display_json(&json!({
            "test_id": test.id,
            "taken_on": test.taken_on,
            "summary": analyzer.panel_summary(&test),
            "markers": visible,
        })),
        OutputFormat::Table => {
            display_classified(&test, &visible);
            Ok(())
        }
    }
}

/// Print the latest test grouped by category
pub fn groups(analyzer: &BloodworkAnalyzer, input: &Path, format: OutputFormat) -> Result<()> {
    let test = read_latest_blood_test(input)?;
    let groups = analyzer.grouped_panel(&test);

    match format {
        OutputFormat::Json => display_json(&groups),
        OutputFormat::Table => {
            display_groups(&test, &groups);
            Ok(())
        }
    }
}

/// Print trend cards for one marker or for every marker in the history
pub fn trend(
    analyzer: &BloodworkAnalyzer,
    input: &Path,
    marker: Option<&str>,
    window: TrendWindow,
    format: OutputFormat,
) -> Result<()> {
    let history = read_blood_tests(input)?;

    let Some(label) = marker else {
        let trends = analyzer.all_trends(&history);
        return match format {
            OutputFormat::Json => display_json(&trends),
            OutputFormat::Table => {
                display_trends(&trends);
                Ok(())
            }
        };
    };

    let trend = analyzer.marker_trend(&history, label)?;
    let series = build_trend_series(&history, label);
    let points = window.apply(&series);

    match format {
        OutputFormat::Json => display_json(&json!({
            "trend": trend,
            "window": window,
            "points": points,
        })),
        OutputFormat::Table => {
            display_trend(&trend, points);
            Ok(())
        }
    }
}
