// ABOUTME: View-model state for blood-work tables and trend charts
// ABOUTME: Search, status, and category filters plus chart windows passed explicitly by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard view-models
//!
//! Filter and tab selections live in values owned by the caller and are
//! applied to already-classified rows. Nothing here holds global state.

use coachlab_core::models::{MarkerStatus, MarkerTrendPoint};
use coachlab_intelligence::{latest_window, ClassifiedMarker};
use serde::{Deserialize, Serialize};

/// Filter state of the marker table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerTableView {
    /// Free-text search over label and code
    #[serde(default)]
    pub search: String,
    /// Only rows with this status
    #[serde(default)]
    pub status_filter: Option<MarkerStatus>,
    /// Only rows in this category (the selected tab)
    #[serde(default)]
    pub category: Option<String>,
}

impl MarkerTableView {
    /// View with no filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the status filter
    #[must_use]
    pub const fn with_status(mut self, status: Option<MarkerStatus>) -> Self {
        self.status_filter = status;
        self
    }

    /// Set the category tab
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Whether a row passes every active filter
    #[must_use]
    pub fn matches(&self, row: &ClassifiedMarker) -> bool {
        self.matches_search(row)
            && self.status_filter.is_none_or(|status| row.status == status)
            && self
                .category
                .as_deref()
                .is_none_or(|category| row.category == category)
    }

    fn matches_search(&self, row: &ClassifiedMarker) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        row.marker.label.to_lowercase().contains(&needle)
            || row
                .marker
                .code
                .as_deref()
                .is_some_and(|code| code.to_lowercase().contains(&needle))
    }

    /// Rows passing the filters, in input order
    #[must_use]
    pub fn apply<'a>(&self, rows: &'a [ClassifiedMarker]) -> Vec<&'a ClassifiedMarker> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

/// Time window selected on a trend chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendWindow {
    /// Last three readings
    LastThree,
    /// Last six readings
    LastSix,
    /// Last twelve readings
    LastTwelve,
    /// Every reading
    #[default]
    All,
}

impl TrendWindow {
    /// Maximum number of points shown, `None` for all
    #[must_use]
    pub const fn max_points(self) -> Option<usize> {
        match self {
            Self::LastThree => Some(3),
            Self::LastSix => Some(6),
            Self::LastTwelve => Some(12),
            Self::All => None,
        }
    }

    /// Points visible in this window
    #[must_use]
    pub fn apply(self, points: &[MarkerTrendPoint]) -> &[MarkerTrendPoint] {
        self.max_points()
            .map_or(points, |count| latest_window(points, count))
    }
}
