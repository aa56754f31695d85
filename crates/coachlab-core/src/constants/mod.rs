// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Marker classification thresholds, trend thresholds, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Marker status classification thresholds
pub mod marker_status {
    /// Fraction of the reference span, measured from either edge, that counts as borderline.
    /// Optimal requires the value to sit strictly inside the remaining inner 70%.
    pub const BORDERLINE_FRACTION: f64 = 0.15;

    /// Upper bound (exclusive) for a configured borderline fraction.
    /// At 0.5 the two borderline bands would meet and nothing could be optimal.
    pub const MAX_BORDERLINE_FRACTION: f64 = 0.5;
}

/// Trend aggregation thresholds
pub mod trends {
    /// Period-over-period change (percent) that must be exceeded to call a trend up or down
    pub const STABLE_THRESHOLD_PERCENT: f64 = 5.0;

    /// Chart label format for trend points (e.g. "Mar 2025")
    pub const POINT_LABEL_FORMAT: &str = "%b %Y";

    /// Percentage changes are rounded to this many steps per percent (1e-9)
    /// so decimal readings such as 13.5 -> 14.175 land exactly on 5.0
    pub const CHANGE_PERCENT_SCALE: f64 = 1e9;
}

/// Marker grouping
pub mod categories {
    /// Single static category every marker currently lands in
    pub const DEFAULT_CATEGORY: &str = "Biomarkers";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Service name for the CLI and library logging
    pub const COACHLAB: &str = "coachlab";
}

/// Environment variables read by the configuration layer
pub mod env_config {
    /// Overrides the borderline fraction (0.0 - 0.5)
    pub const BORDERLINE_FRACTION: &str = "COACHLAB_BORDERLINE_FRACTION";
    /// Overrides the trend stable threshold (percent)
    pub const TREND_THRESHOLD_PERCENT: &str = "COACHLAB_TREND_THRESHOLD_PERCENT";
    /// Path to a JSON reference-range table replacing the built-in one
    pub const REFERENCE_TABLE: &str = "COACHLAB_REFERENCE_TABLE";
}
