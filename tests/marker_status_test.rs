// ABOUTME: Unit tests for marker status classification
// ABOUTME: Validates low/high/borderline/optimal boundaries and missing-range behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::float_cmp)]
#![allow(missing_docs)]

use coachlab::intelligence::{
    classify_marker_value, classify_with_fraction, ClassificationConfig, MarkerClassifier,
};
use coachlab::models::{MarkerStatus, ResolvedRange};

#[test]
fn test_below_low_is_low_and_above_high_is_high() {
    for (low, high) in [(50.0, 175.0), (0.27, 4.2), (-5.0, 5.0), (130.0, 170.0)] {
        assert_eq!(
            classify_marker_value(low - 1.0, Some(low), Some(high)),
            MarkerStatus::Low
        );
        assert_eq!(
            classify_marker_value(high + 1.0, Some(low), Some(high)),
            MarkerStatus::High
        );
    }
}

#[test]
fn test_missing_bounds_are_always_optimal() {
    for value in [-1000.0, 0.0, 65.0, 1e9] {
        assert_eq!(classify_marker_value(value, None, None), MarkerStatus::Optimal);
        assert_eq!(
            classify_marker_value(value, Some(10.0), None),
            MarkerStatus::Optimal
        );
        assert_eq!(
            classify_marker_value(value, None, Some(10.0)),
            MarkerStatus::Optimal
        );
    }
}

#[test]
fn test_exact_lower_borderline_threshold_is_borderline() {
    let (low, high) = (50.0, 175.0);
    let threshold = low + (high - low) * 0.15;

    assert_eq!(
        classify_marker_value(threshold, Some(low), Some(high)),
        MarkerStatus::Borderline
    );
    assert_eq!(
        classify_marker_value(threshold + 0.01, Some(low), Some(high)),
        MarkerStatus::Optimal
    );
}

#[test]
fn test_exact_upper_borderline_threshold_is_borderline() {
    let (low, high) = (50.0, 175.0);
    let threshold = high - (high - low) * 0.15;

    assert_eq!(
        classify_marker_value(threshold, Some(low), Some(high)),
        MarkerStatus::Borderline
    );
    assert_eq!(
        classify_marker_value(threshold - 0.01, Some(low), Some(high)),
        MarkerStatus::Optimal
    );
}

#[test]
fn test_range_edges_are_borderline_not_out_of_range() {
    assert_eq!(
        classify_marker_value(50.0, Some(50.0), Some(175.0)),
        MarkerStatus::Borderline
    );
    assert_eq!(
        classify_marker_value(175.0, Some(50.0), Some(175.0)),
        MarkerStatus::Borderline
    );
}

#[test]
fn test_midpoint_is_optimal() {
    assert_eq!(
        classify_marker_value(112.5, Some(50.0), Some(175.0)),
        MarkerStatus::Optimal
    );
}

#[test]
fn test_vitamin_d_65_is_borderline() {
    // 65 sits 12% of the 125-wide span above the low edge
    assert_eq!(
        classify_marker_value(65.0, Some(50.0), Some(175.0)),
        MarkerStatus::Borderline
    );
}

#[test]
fn test_zero_fraction_only_flags_out_of_range_and_edges() {
    assert_eq!(
        classify_with_fraction(50.5, Some(50.0), Some(175.0), 0.0),
        MarkerStatus::Optimal
    );
    assert_eq!(
        classify_with_fraction(50.0, Some(50.0), Some(175.0), 0.0),
        MarkerStatus::Borderline
    );
}

#[test]
fn test_classifier_uses_configured_fraction() {
    let classifier = MarkerClassifier::with_config(ClassificationConfig {
        borderline_fraction: 0.25,
    });
    let range = ResolvedRange::new(0.0, 100.0);

    assert_eq!(classifier.borderline_fraction(), 0.25);
    assert_eq!(classifier.classify(20.0, range), MarkerStatus::Borderline);
    assert_eq!(classifier.classify(30.0, range), MarkerStatus::Optimal);
    assert_eq!(
        MarkerClassifier::new().classify(20.0, range),
        MarkerStatus::Optimal
    );
}

#[test]
fn test_unresolved_range_classifies_optimal() {
    let classifier = MarkerClassifier::new();
    assert_eq!(
        classifier.classify(9999.0, ResolvedRange::unresolved()),
        MarkerStatus::Optimal
    );
}

#[test]
fn test_status_parsing_and_display() {
    assert_eq!("Borderline".parse::<MarkerStatus>().unwrap(), MarkerStatus::Borderline);
    assert_eq!(" low ".parse::<MarkerStatus>().unwrap(), MarkerStatus::Low);
    assert!("normal".parse::<MarkerStatus>().is_err());
    assert_eq!(MarkerStatus::High.to_string(), "high");
    assert_eq!(
        serde_json::to_string(&MarkerStatus::Optimal).unwrap(),
        "\"optimal\""
    );
    assert!(MarkerStatus::Low.is_out_of_range());
    assert!(!MarkerStatus::Borderline.is_out_of_range());
}
