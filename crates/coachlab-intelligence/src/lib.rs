// ABOUTME: Bloodwork intelligence engine for Coachlab dashboards
// ABOUTME: Reference-range resolution, marker status, category grouping, trends, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachlab Intelligence
//!
//! Pure classification and aggregation logic over already-fetched blood
//! tests. Everything here is synchronous and free of side effects apart from
//! `tracing` events, so dashboards can recompute it on every render.
//!
//! Dependency order: reference ranges, then marker status, then grouping,
//! trends and dashboard summaries. [`BloodworkAnalyzer`] wires them together
//! over an injected [`ReferenceRangeTable`].

/// Bloodwork analyzer combining every stage
pub mod analyzer;
/// Classification and trend configuration
pub mod config;
/// Panel and roster summaries
pub mod dashboard;
/// Category grouping
pub mod marker_groups;
/// Marker status classification
pub mod marker_status;
/// Trend aggregation and series building
pub mod marker_trends;
/// Reference-range table and resolver
pub mod reference_ranges;

pub use analyzer::BloodworkAnalyzer;
pub use config::{BloodworkConfig, ClassificationConfig, ConfigError, TrendConfig};
pub use dashboard::{ClientPanelSummary, PanelSummary, RosterSummary};
pub use marker_groups::{category_for, group_by, group_markers, ClassifiedMarker, MarkerGroup};
pub use marker_status::{classify_marker_value, classify_with_fraction, MarkerClassifier};
pub use marker_trends::{
    build_trend_series, latest_window, percent_change, trend_direction, MarkerTrend,
    TrendAggregator,
};
pub use reference_ranges::{resolve_reference_range, ReferenceRangeTable, ReferenceTableEntry};
