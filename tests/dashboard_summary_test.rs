// ABOUTME: Tests for panel and coach roster summaries
// ABOUTME: Validates status counts, latest-test selection, and needs-attention ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use coachlab::intelligence::{BloodworkAnalyzer, PanelSummary};
use coachlab::models::{ClientBloodwork, MarkerStatus};
use common::{blood_test, client, date, table_marker};
use uuid::Uuid;

#[test]
fn test_panel_summary_counts_each_status() {
    let test = blood_test(
        Uuid::new_v4(),
        date(2025, 5, 1),
        vec![
            table_marker("Vitamin D", 65.0),  // borderline
            table_marker("Ferritin", 150.0),  // optimal
            table_marker("Glucose", 7.2),     // high
            table_marker("Magnesium", 0.5),   // low
            table_marker("Unlisted", 1.0),    // optimal, no range
        ],
    );

    let summary = BloodworkAnalyzer::default().panel_summary(&test);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.count(MarkerStatus::Optimal), 2);
    assert_eq!(summary.count(MarkerStatus::Borderline), 1);
    assert_eq!(summary.count(MarkerStatus::High), 1);
    assert_eq!(summary.count(MarkerStatus::Low), 1);
    assert_eq!(summary.out_of_range(), 2);
    assert_eq!(summary.optimal_percentage(), Some(40.0));
}

#[test]
fn test_empty_panel_has_no_percentage() {
    assert_eq!(PanelSummary::default().optimal_percentage(), None);
}

#[test]
fn test_roster_uses_latest_test_and_orders_attention() {
    common::init_test_logging();

    let steady_id = Uuid::new_v4();
    let steady = client(
        "Steady Sam",
        vec![blood_test(steady_id, date(2025, 4, 1), vec![table_marker("Ferritin", 150.0)])],
    );

    let recovered_id = Uuid::new_v4();
    let recovered = client(
        "Recovered Rae",
        vec![
            blood_test(recovered_id, date(2024, 10, 1), vec![table_marker("Ferritin", 10.0)]),
            blood_test(recovered_id, date(2025, 3, 1), vec![table_marker("Ferritin", 140.0)]),
        ],
    );

    let one_flag_id = Uuid::new_v4();
    let one_flag = client(
        "One Flag",
        vec![blood_test(
            one_flag_id,
            date(2025, 2, 1),
            vec![table_marker("Glucose", 7.0), table_marker("Ferritin", 150.0)],
        )],
    );

    let two_flags_id = Uuid::new_v4();
    let two_flags = client(
        "Two Flags",
        vec![blood_test(
            two_flags_id,
            date(2025, 2, 3),
            vec![table_marker("Iron", 5.0), table_marker("CRP", 9.0)],
        )],
    );

    let no_tests = ClientBloodwork {
        client_id: Uuid::new_v4(),
        name: "New Client".into(),
        tests: Vec::new(),
    };

    let roster = vec![steady, recovered, one_flag, two_flags, no_tests];
    let summary = BloodworkAnalyzer::default().summarize_roster(&roster);

    assert_eq!(summary.clients.len(), 5);
    let names: Vec<&str> = summary.clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Steady Sam", "Recovered Rae", "One Flag", "Two Flags", "New Client"]
    );

    assert_eq!(summary.clients[1].taken_on, Some(date(2025, 3, 1)));
    assert!(!summary.clients[1].needs_attention());
    assert_eq!(summary.clients[3].flagged_markers, vec!["Iron", "CRP"]);
    assert_eq!(summary.clients[4].taken_on, None);
    assert_eq!(summary.clients[4].summary.total, 0);

    assert_eq!(summary.needs_attention, vec![two_flags_id, one_flag_id]);
    assert_eq!(summary.totals.total, 6);
    assert_eq!(summary.totals.out_of_range(), 3);
}
