// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for coachlab-cli
// ABOUTME: Provides consistent table and JSON output for panels, trends, and rosters

use coachlab::{
    errors::AppResult,
    intelligence::{ClassifiedMarker, MarkerGroup, MarkerTrend, RosterSummary},
    models::{BloodTest, MarkerTrendPoint, ResolvedRange, TrendDirection},
};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn display_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_range(range: ResolvedRange) -> String {
    range
        .bounds()
        .map_or_else(|| "-".to_owned(), |(low, high)| format!("{low} - {high}"))
}

const fn direction_arrow(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "up",
        TrendDirection::Down => "down",
        TrendDirection::Stable => "stable",
    }
}

fn print_marker_rows<'a>(rows: impl IntoIterator<Item = &'a ClassifiedMarker>) {
    println!(
        "{:<24} {:>10} {:<10} {:<18} {:<10}",
        "Marker", "Value", "Unit", "Range", "Status"
    );
    println!("{}", "-".repeat(76));
    for row in rows {
        println!(
            "{:<24} {:>10} {:<10} {:<18} {:<10}",
            row.marker.label,
            row.marker.value,
            row.marker.unit,
            format_range(row.range),
            row.status.display_name()
        );
    }
}

/// Display classified markers of a test
pub fn display_classified(test: &BloodTest, rows: &[&ClassifiedMarker]) {
    println!("\nBlood test {} ({})", test.taken_on, test.id);
    if let Some(lab) = &test.lab_name {
        println!("Lab: {lab}");
    }
    println!();
    if rows.is_empty() {
        println!("No markers match the current filters.");
        return;
    }
    print_marker_rows(rows.iter().copied());
}

/// Display markers grouped by category
pub fn display_groups(test: &BloodTest, groups: &[MarkerGroup]) {
    println!("\nBlood test {} ({})", test.taken_on, test.id);
    if groups.is_empty() {
        println!("\nNo markers recorded.");
        return;
    }
    for group in groups {
        println!("\n{} ({})", group.name, group.markers.len());
        println!("{}", "=".repeat(76));
        print_marker_rows(&group.markers);
    }
}

fn format_change(trend: &MarkerTrend) -> String {
    trend
        .change_percent
        .map_or_else(|| "n/a".to_owned(), |change| format!("{change:+.1}%"))
}

/// Display a single trend card with its charted points
pub fn display_trend(trend: &MarkerTrend, points: &[MarkerTrendPoint]) {
    println!("\n{}", trend.label);
    println!("{}", "=".repeat(40));
    println!("   Latest: {}", trend.latest);
    if let Some(previous) = trend.previous {
        println!("   Previous: {previous}");
    }
    println!(
        "   Change: {} ({})",
        format_change(trend),
        direction_arrow(trend.direction)
    );
    println!("   Status: {}", trend.status.display_name());
    println!("   Range: {}", format_range(trend.range));
    println!(
        "   In optimal range: {}",
        if trend.in_optimal_range { "yes" } else { "no" }
    );
    println!("\n   {:<12} {:>10}", "Date", "Value");
    for point in points {
        println!("   {:<12} {:>10}", point.date, point.value);
    }
}

/// Display a compact list of trend cards
pub fn display_trends(trends: &[MarkerTrend]) {
    if trends.is_empty() {
        println!("No trends available.");
        return;
    }
    println!(
        "{:<24} {:>10} {:>10} {:<8} {:<10}",
        "Marker", "Latest", "Change", "Trend", "Status"
    );
    println!("{}", "-".repeat(66));
    for trend in trends {
        println!(
            "{:<24} {:>10} {:>10} {:<8} {:<10}",
            trend.label,
            trend.latest,
            format_change(trend),
            direction_arrow(trend.direction),
            trend.status.display_name()
        );
    }
}

/// Display a coach roster summary
pub fn display_roster(summary: &RosterSummary) {
    println!(
        "{:<24} {:<12} {:>7} {:>7} {:>7} {:>5} {:>5}",
        "Client", "Latest", "Total", "Optimal", "Border", "Low", "High"
    );
    println!("{}", "-".repeat(74));
    for client in &summary.clients {
        let taken_on = client
            .taken_on
            .map_or_else(|| "-".to_owned(), |date| date.to_string());
        println!(
            "{:<24} {:<12} {:>7} {:>7} {:>7} {:>5} {:>5}",
            client.name,
            taken_on,
            client.summary.total,
            client.summary.optimal,
            client.summary.borderline,
            client.summary.low,
            client.summary.high
        );
    }

    println!("\nNeeds attention:");
    if summary.needs_attention.is_empty() {
        println!("   Nobody - every latest panel is within range.");
    }
    for client_id in &summary.needs_attention {
        if let Some(client) = summary.clients.iter().find(|c| c.client_id == *client_id) {
            println!(
                "   {} - {}",
                client.name,
                client.flagged_markers.join(", ")
            );
        }
    }
}
