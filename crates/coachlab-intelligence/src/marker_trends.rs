// ABOUTME: Trend aggregation for blood-marker time series on dashboard cards
// ABOUTME: Period-over-period change, up/down/stable direction, and optimal-range membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Marker trend aggregation
//!
//! A trend card compares the latest reading with the one before it. The
//! change is reported as a percentage of the previous reading and called
//! `up` or `down` only when it strictly exceeds the stable threshold (5% by
//! default). A zero previous reading has no meaningful percentage change;
//! it is reported as `None` with a stable direction.

use crate::config::TrendConfig;
use crate::marker_status::MarkerClassifier;
use coachlab_core::constants::trends::{CHANGE_PERCENT_SCALE, POINT_LABEL_FORMAT};
use coachlab_core::errors::{AppError, AppResult};
use coachlab_core::models::{
    BloodTest, MarkerStatus, MarkerTrendPoint, ResolvedRange, TrendDirection,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Aggregated trend for one marker, ready for a dashboard card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerTrend {
    /// Marker label
    pub label: String,
    /// Latest reading
    pub latest: f64,
    /// Reading before the latest one
    pub previous: Option<f64>,
    /// Percentage change from previous to latest
    pub change_percent: Option<f64>,
    /// Direction of the change
    pub direction: TrendDirection,
    /// Status of the latest reading
    pub status: MarkerStatus,
    /// Whether the latest reading is optimal against a known range
    pub in_optimal_range: bool,
    /// Range used for the status
    pub range: ResolvedRange,
    /// Number of points in the series
    pub point_count: usize,
}

/// Percentage change from `previous` to `latest`
///
/// Returns `None` when `previous` is zero. The result is rounded to nine
/// decimal places, removing binary floating-point noise at the threshold.
#[must_use]
#[allow(clippy::float_cmp)] // exact zero is the only undefined baseline
pub fn percent_change(previous: f64, latest: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let change = (latest - previous) * 100.0 / previous;
    Some((change * CHANGE_PERCENT_SCALE).round() / CHANGE_PERCENT_SCALE)
}

/// Direction for a percentage change; the threshold itself counts as stable
#[must_use]
pub fn trend_direction(change_percent: Option<f64>, threshold_percent: f64) -> TrendDirection {
    match change_percent {
        Some(change) if change > threshold_percent => TrendDirection::Up,
        Some(change) if change < -threshold_percent => TrendDirection::Down,
        _ => TrendDirection::Stable,
    }
}

/// Build a chronological series for one marker from a blood-test history
///
/// Tests without the marker are skipped. Tests drawn on the same day keep
/// their input order.
#[must_use]
pub fn build_trend_series(tests: &[BloodTest], label: &str) -> Vec<MarkerTrendPoint> {
    let mut readings: Vec<_> = tests
        .iter()
        .filter_map(|test| test.marker(label).map(|marker| (test.taken_on, marker.value)))
        .collect();
    readings.sort_by_key(|(taken_on, _)| *taken_on);

    readings
        .into_iter()
        .map(|(taken_on, value)| {
            MarkerTrendPoint::new(taken_on.format(POINT_LABEL_FORMAT).to_string(), value)
        })
        .collect()
}

/// The last `count` points of a series, for chart time windows
#[must_use]
pub fn latest_window(points: &[MarkerTrendPoint], count: usize) -> &[MarkerTrendPoint] {
    &points[points.len().saturating_sub(count)..]
}

/// Trend aggregator bound to trend and classification settings
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAggregator {
    config: TrendConfig,
    classifier: MarkerClassifier,
}

impl TrendAggregator {
    /// Create an aggregator with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with custom thresholds
    #[must_use]
    pub const fn with_config(config: TrendConfig, classifier: MarkerClassifier) -> Self {
        Self { config, classifier }
    }

    /// Aggregate a chronological series into a trend card
    ///
    /// # Errors
    ///
    /// Returns an error if the series is empty
    pub fn aggregate(
        &self,
        label: &str,
        points: &[MarkerTrendPoint],
        range: ResolvedRange,
    ) -> AppResult<MarkerTrend> {
        let Some((latest_point, earlier)) = points.split_last() else {
            return Err(AppError::invalid_input(format!(
                "No readings available for trend of '{label}'"
            )));
        };

        let latest = latest_point.value;
        let previous = earlier.last().map(|point| point.value);
        let change_percent = previous.and_then(|previous| {
            let change = percent_change(previous, latest);
            if change.is_none() {
                warn!(
                    marker = %label,
                    date = %latest_point.date,
                    "Previous reading is zero, percentage change not computed"
                );
            }
            change
        });

        let direction = trend_direction(change_percent, self.config.stable_threshold_percent);
        let status = self.classifier.classify(latest, range);

        Ok(MarkerTrend {
            label: label.to_owned(),
            latest,
            previous,
            change_percent,
            direction,
            status,
            in_optimal_range: range.is_resolved() && status == MarkerStatus::Optimal,
            range,
            point_count: points.len(),
        })
    }
}
