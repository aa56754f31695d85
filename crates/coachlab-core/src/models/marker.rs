// ABOUTME: Derived marker types: status classification, trend points, and trend direction
// ABOUTME: MarkerStatus, MarkerTrendPoint, and TrendDirection definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a marker value against its reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    /// Comfortably inside the reference range
    Optimal,
    /// Below the reference range
    Low,
    /// Above the reference range
    High,
    /// Inside the range but close to one of its edges
    Borderline,
}

impl MarkerStatus {
    /// All statuses in dashboard display order
    pub const ALL: [Self; 4] = [Self::Optimal, Self::Borderline, Self::Low, Self::High];

    /// Whether the value is outside the reference range
    #[must_use]
    pub const fn is_out_of_range(self) -> bool {
        matches!(self, Self::Low | Self::High)
    }

    /// Lowercase name as used in JSON and filters
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Low => "low",
            Self::High => "high",
            Self::Borderline => "borderline",
        }
    }

    /// Human-readable name for cards and tables
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Low => "Low",
            Self::High => "High",
            Self::Borderline => "Borderline",
        }
    }
}

impl fmt::Display for MarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown marker status '{normalized}': expected optimal, low, high or borderline"
                ))
            })
    }
}

/// One point of a marker's time series, labeled for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerTrendPoint {
    /// Calendar label (e.g. "Mar 2025")
    pub date: String,
    /// Marker value at that point
    pub value: f64,
}

impl MarkerTrendPoint {
    /// Create a trend point
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Direction of the latest period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Increased by more than the stable threshold
    Up,
    /// Decreased by more than the stable threshold
    Down,
    /// Change within the stable threshold (or not computable)
    Stable,
}
