// ABOUTME: Marker status classification against resolved reference ranges
// ABOUTME: Classifies values as optimal, low, high, or borderline near either range edge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClassificationConfig;
use coachlab_core::constants::marker_status::BORDERLINE_FRACTION;
use coachlab_core::models::{MarkerStatus, ResolvedRange};

/// Classify a value with the default 15% borderline band
///
/// A missing bound means there is nothing to flag against, so the value is
/// reported as optimal.
#[must_use]
pub fn classify_marker_value(value: f64, low: Option<f64>, high: Option<f64>) -> MarkerStatus {
    classify_with_fraction(value, low, high, BORDERLINE_FRACTION)
}

/// Classify a value with an explicit borderline fraction
///
/// The borderline band includes its inner edge: a value exactly
/// `fraction * span` away from a bound is borderline, not optimal.
#[must_use]
pub fn classify_with_fraction(
    value: f64,
    low: Option<f64>,
    high: Option<f64>,
    fraction: f64,
) -> MarkerStatus {
    let (Some(low), Some(high)) = (low, high) else {
        return MarkerStatus::Optimal;
    };

    if value < low {
        return MarkerStatus::Low;
    }
    if value > high {
        return MarkerStatus::High;
    }

    let margin = (high - low) * fraction;
    if value <= low + margin || value >= high - margin {
        MarkerStatus::Borderline
    } else {
        MarkerStatus::Optimal
    }
}

/// Marker classifier bound to a classification configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerClassifier {
    config: ClassificationConfig,
}

impl MarkerClassifier {
    /// Create a classifier with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds
    #[must_use]
    pub const fn with_config(config: ClassificationConfig) -> Self {
        Self { config }
    }

    /// Classify a value against a resolved range
    #[must_use]
    pub fn classify(&self, value: f64, range: ResolvedRange) -> MarkerStatus {
        classify_with_fraction(value, range.low, range.high, self.config.borderline_fraction)
    }

    /// Borderline fraction in use
    #[must_use]
    pub const fn borderline_fraction(&self) -> f64 {
        self.config.borderline_fraction
    }
}
