// ABOUTME: Bloodwork analyzer tying reference ranges, classification, grouping, and trends together
// ABOUTME: Entry point used by dashboards and the CLI; roster summaries run in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::BloodworkConfig;
use crate::dashboard::{ClientPanelSummary, PanelSummary, RosterSummary};
use crate::marker_groups::{category_for, group_markers, ClassifiedMarker, MarkerGroup};
use crate::marker_status::MarkerClassifier;
use crate::marker_trends::{build_trend_series, MarkerTrend, TrendAggregator};
use crate::reference_ranges::ReferenceRangeTable;
use coachlab_core::errors::{AppError, AppResult};
use coachlab_core::models::{BloodMarker, BloodTest, ClientBloodwork, ResolvedRange};
use rayon::prelude::*;
use tracing::debug;

/// Bloodwork analysis over an injected reference table and configuration
#[derive(Debug, Clone)]
pub struct BloodworkAnalyzer {
    table: ReferenceRangeTable,
    classifier: MarkerClassifier,
    trends: TrendAggregator,
}

impl Default for BloodworkAnalyzer {
    fn default() -> Self {
        Self::new(ReferenceRangeTable::builtin(), &BloodworkConfig::default())
    }
}

impl BloodworkAnalyzer {
    /// Create an analyzer from a table and configuration
    #[must_use]
    pub fn new(table: ReferenceRangeTable, config: &BloodworkConfig) -> Self {
        let classifier = MarkerClassifier::with_config(config.classification);
        Self {
            table,
            classifier,
            trends: TrendAggregator::with_config(config.trends, classifier),
        }
    }

    /// Reference table in use
    #[must_use]
    pub const fn table(&self) -> &ReferenceRangeTable {
        &self.table
    }

    /// Effective range for a marker
    #[must_use]
    pub fn resolve(&self, marker: &BloodMarker) -> ResolvedRange {
        self.table.resolve(marker)
    }

    /// Resolve, classify, and categorize one marker
    #[must_use]
    pub fn classify_marker(&self, marker: &BloodMarker) -> ClassifiedMarker {
        let range = self.resolve(marker);
        ClassifiedMarker {
            marker: marker.clone(),
            range,
            status: self.classifier.classify(marker.value, range),
            category: category_for(marker).to_owned(),
        }
    }

    /// Classify every marker of a test in report order
    #[must_use]
    pub fn classify_test(&self, test: &BloodTest) -> Vec<ClassifiedMarker> {
        test.markers
            .iter()
            .map(|marker| self.classify_marker(marker))
            .collect()
    }

    /// Classified markers of a test grouped by category
    #[must_use]
    pub fn grouped_panel(&self, test: &BloodTest) -> Vec<MarkerGroup> {
        group_markers(self.classify_test(test))
    }

    /// Status counts for a test
    #[must_use]
    pub fn panel_summary(&self, test: &BloodTest) -> PanelSummary {
        PanelSummary::from_classified(&self.classify_test(test))
    }

    /// Trend card for one marker across a blood-test history
    ///
    /// The range comes from the most recent reading of the marker.
    ///
    /// # Errors
    ///
    /// Returns an error if no test in the history contains the marker
    pub fn marker_trend(&self, history: &[BloodTest], label: &str) -> AppResult<MarkerTrend> {
        let latest_marker = history
            .iter()
            .filter(|test| test.marker(label).is_some())
            .max_by_key(|test| test.taken_on)
            .and_then(|test| test.marker(label))
            .ok_or_else(|| AppError::not_found(format!("Marker '{label}' in blood-test history")))?;

        let points = build_trend_series(history, label);
        self.trends
            .aggregate(label, &points, self.resolve(latest_marker))
    }

    /// Trend cards for every marker label seen in the history, in first-seen order
    #[must_use]
    pub fn all_trends(&self, history: &[BloodTest]) -> Vec<MarkerTrend> {
        let mut labels: Vec<&str> = Vec::new();
        let mut sorted: Vec<&BloodTest> = history.iter().collect();
        sorted.sort_by_key(|test| test.taken_on);
        for marker in sorted.iter().flat_map(|test| &test.markers) {
            if !labels.contains(&marker.label.as_str()) {
                labels.push(&marker.label);
            }
        }

        labels
            .into_iter()
            .filter_map(|label| self.marker_trend(history, label).ok())
            .collect()
    }

    /// Summarize each client's latest panel and list who needs attention
    #[must_use]
    pub fn summarize_roster(&self, roster: &[ClientBloodwork]) -> RosterSummary {
        let clients: Vec<ClientPanelSummary> = roster
            .par_iter()
            .map(|client| self.summarize_client(client))
            .collect();

        debug!(clients = clients.len(), "Summarized coach roster");
        RosterSummary::from_clients(clients)
    }

    fn summarize_client(&self, client: &ClientBloodwork) -> ClientPanelSummary {
        let Some(test) = client.latest_test() else {
            return ClientPanelSummary {
                client_id: client.client_id,
                name: client.name.clone(),
                taken_on: None,
                summary: PanelSummary::default(),
                flagged_markers: Vec::new(),
            };
        };

        let classified = self.classify_test(test);
        ClientPanelSummary {
            client_id: client.client_id,
            name: client.name.clone(),
            taken_on: Some(test.taken_on),
            summary: PanelSummary::from_classified(&classified),
            flagged_markers: classified
                .iter()
                .filter(|marker| marker.status.is_out_of_range())
                .map(|marker| marker.marker.label.clone())
                .collect(),
        }
    }
}
