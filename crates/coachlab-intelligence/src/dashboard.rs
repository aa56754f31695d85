// ABOUTME: Dashboard summaries over classified markers for athlete and coach views
// ABOUTME: Per-panel status counts and coach roster summaries listing clients needing attention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::marker_groups::ClassifiedMarker;
use chrono::NaiveDate;
use coachlab_core::models::MarkerStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status counts for one blood panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSummary {
    /// Markers in the panel
    pub total: usize,
    /// Optimal markers
    pub optimal: usize,
    /// Borderline markers
    pub borderline: usize,
    /// Markers below range
    pub low: usize,
    /// Markers above range
    pub high: usize,
}

impl PanelSummary {
    /// Count statuses of classified markers
    #[must_use]
    pub fn from_classified(markers: &[ClassifiedMarker]) -> Self {
        markers.iter().fold(Self::default(), |mut summary, marker| {
            summary.total += 1;
            match marker.status {
                MarkerStatus::Optimal => summary.optimal += 1,
                MarkerStatus::Borderline => summary.borderline += 1,
                MarkerStatus::Low => summary.low += 1,
                MarkerStatus::High => summary.high += 1,
            }
            summary
        })
    }

    /// Count for a single status
    #[must_use]
    pub const fn count(&self, status: MarkerStatus) -> usize {
        match status {
            MarkerStatus::Optimal => self.optimal,
            MarkerStatus::Borderline => self.borderline,
            MarkerStatus::Low => self.low,
            MarkerStatus::High => self.high,
        }
    }

    /// Markers outside their reference range
    #[must_use]
    pub const fn out_of_range(&self) -> usize {
        self.low + self.high
    }

    /// Share of optimal markers (0-100), `None` for an empty panel
    #[must_use]
    pub fn optimal_percentage(&self) -> Option<f64> {
        (self.total > 0).then(|| self.optimal as f64 * 100.0 / self.total as f64)
    }
}

/// One client's latest panel on the coach roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPanelSummary {
    /// Client identifier
    pub client_id: Uuid,
    /// Client display name
    pub name: String,
    /// Draw date of the summarized test, `None` if the client has no tests
    pub taken_on: Option<NaiveDate>,
    /// Status counts of the latest test
    pub summary: PanelSummary,
    /// Labels of markers outside their range, in panel order
    pub flagged_markers: Vec<String>,
}

impl ClientPanelSummary {
    /// Whether the coach should look at this client
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        self.summary.out_of_range() > 0
    }
}

/// Coach roster overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Every client in input order
    pub clients: Vec<ClientPanelSummary>,
    /// Clients with out-of-range markers, most flagged first
    pub needs_attention: Vec<Uuid>,
    /// Status counts across all latest panels
    pub totals: PanelSummary,
}

impl RosterSummary {
    /// Assemble the roster overview from per-client summaries
    #[must_use]
    pub fn from_clients(clients: Vec<ClientPanelSummary>) -> Self {
        let totals = clients
            .iter()
            .fold(PanelSummary::default(), |mut totals, client| {
                totals.total += client.summary.total;
                totals.optimal += client.summary.optimal;
                totals.borderline += client.summary.borderline;
                totals.low += client.summary.low;
                totals.high += client.summary.high;
                totals
            });

        let mut flagged: Vec<&ClientPanelSummary> =
            clients.iter().filter(|client| client.needs_attention()).collect();
        // Stable sort keeps roster order among equally flagged clients
        flagged.sort_by(|a, b| b.summary.out_of_range().cmp(&a.summary.out_of_range()));
        let needs_attention = flagged.iter().map(|client| client.client_id).collect();

        Self {
            clients,
            needs_attention,
            totals,
        }
    }
}
