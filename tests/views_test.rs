// ABOUTME: Tests for dashboard view-models over classified markers
// ABOUTME: Validates search, status and category filters and trend chart windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

mod common;

use coachlab::intelligence::{BloodworkAnalyzer, ClassifiedMarker};
use coachlab::models::{BloodMarker, MarkerStatus, MarkerTrendPoint};
use coachlab::views::{MarkerTableView, TrendWindow};
use common::{blood_test, date, table_marker};
use uuid::Uuid;

fn rows() -> Vec<ClassifiedMarker> {
    let test = blood_test(
        Uuid::new_v4(),
        date(2025, 5, 1),
        vec![
            table_marker("Vitamin D", 65.0),
            BloodMarker::new("Cobalamin", 100.0, "pmol/L").with_code("B12"),
            table_marker("Ferritin", 150.0),
            table_marker("Glucose", 7.2),
        ],
    );
    BloodworkAnalyzer::default().classify_test(&test)
}

fn labels<'a>(rows: &[&'a ClassifiedMarker]) -> Vec<&'a str> {
    rows.iter().map(|row| row.marker.label.as_str()).collect()
}

#[test]
fn test_default_view_shows_everything_in_order() {
    let rows = rows();
    let visible = MarkerTableView::new().apply(&rows);
    assert_eq!(
        labels(&visible),
        vec!["Vitamin D", "Cobalamin", "Ferritin", "Glucose"]
    );
}

#[test]
fn test_search_is_case_insensitive_over_label_and_code() {
    let rows = rows();

    let by_label = MarkerTableView::new().with_search("  vitamin ").apply(&rows);
    assert_eq!(labels(&by_label), vec!["Vitamin D"]);

    let by_code = MarkerTableView::new().with_search("b12").apply(&rows);
    assert_eq!(labels(&by_code), vec!["Cobalamin"]);

    let none = MarkerTableView::new().with_search("zinc").apply(&rows);
    assert!(none.is_empty());
}

#[test]
fn test_status_filter() {
    let rows = rows();

    let low = MarkerTableView::new()
        .with_status(Some(MarkerStatus::Low))
        .apply(&rows);
    assert_eq!(labels(&low), vec!["Cobalamin"]);

    let high = MarkerTableView::new()
        .with_status(Some(MarkerStatus::High))
        .apply(&rows);
    assert_eq!(labels(&high), vec!["Glucose"]);
}

#[test]
fn test_category_filter_and_combined_filters() {
    let rows = rows();

    let biomarkers = MarkerTableView::new()
        .with_category(Some("Biomarkers".into()))
        .apply(&rows);
    assert_eq!(biomarkers.len(), 4);

    let other_tab = MarkerTableView::new()
        .with_category(Some("Hormones".into()))
        .apply(&rows);
    assert!(other_tab.is_empty());

    let combined = MarkerTableView::new()
        .with_search("i")
        .with_status(Some(MarkerStatus::Optimal))
        .apply(&rows);
    assert_eq!(labels(&combined), vec!["Ferritin"]);
}

#[test]
fn test_view_state_deserializes_with_defaults() {
    let view: MarkerTableView = serde_json::from_str(r#"{"status_filter": "borderline"}"#).unwrap();
    assert_eq!(view.search, "");
    assert_eq!(view.status_filter, Some(MarkerStatus::Borderline));
    assert_eq!(view.category, None);
}

#[test]
fn test_trend_windows() {
    let points: Vec<MarkerTrendPoint> = (0..8)
        .map(|i| MarkerTrendPoint::new(format!("P{i}"), f64::from(i)))
        .collect();

    assert_eq!(TrendWindow::LastThree.apply(&points).len(), 3);
    assert_eq!(TrendWindow::LastThree.apply(&points)[0].date, "P5");
    assert_eq!(TrendWindow::LastSix.apply(&points).len(), 6);
    assert_eq!(TrendWindow::LastTwelve.apply(&points).len(), 8);
    assert_eq!(TrendWindow::All.apply(&points).len(), 8);
    assert_eq!(TrendWindow::default(), TrendWindow::All);
}
