// ABOUTME: Criterion benchmarks for blood marker classification and roster summaries
// ABOUTME: Measures range resolution, panel classification, trend aggregation, and roster scans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for bloodwork intelligence.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use coachlab::intelligence::{classify_marker_value, BloodworkAnalyzer};
use coachlab::models::{BloodMarker, BloodTest, ClientBloodwork};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uuid::Uuid;

/// Labels cycled through when generating panels (mix of table hits and misses)
const PANEL_LABELS: &[&str] = &[
    "Vitamin D",
    "Ferritin",
    "Hemoglobin",
    "Glucose",
    "Magnesium",
    "CRP",
    "Testosterone",
    "Unlisted Marker",
];

#[allow(clippy::cast_precision_loss)]
fn generate_panel(client_id: Uuid, taken_on: NaiveDate, seed: usize) -> BloodTest {
    let markers = PANEL_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let value = ((seed * 37 + index * 53) % 200) as f64 + 0.5;
            let marker = BloodMarker::new(*label, value, "unit");
            // Every third marker carries lab-supplied bounds
            if index % 3 == 0 {
                marker.with_reference(20.0, 150.0)
            } else {
                marker
            }
        })
        .collect();

    BloodTest {
        id: Uuid::new_v4(),
        client_id,
        taken_on,
        lab_name: None,
        markers,
    }
}

fn generate_history(client_id: Uuid, count: usize) -> Vec<BloodTest> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    (0..count)
        .map(|index| {
            let taken_on = start
                .checked_add_days(Days::new(index as u64 * 45))
                .unwrap_or(start);
            generate_panel(client_id, taken_on, index)
        })
        .collect()
}

fn generate_roster(clients: usize) -> Vec<ClientBloodwork> {
    (0..clients)
        .map(|index| {
            let client_id = Uuid::new_v4();
            ClientBloodwork {
                client_id,
                name: format!("Client {index}"),
                tests: generate_history(client_id, 4),
            }
        })
        .collect()
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("single_value", |b| {
        b.iter(|| classify_marker_value(black_box(62.0), Some(50.0), Some(175.0)));
    });

    let analyzer = BloodworkAnalyzer::default();
    let panel = generate_panel(Uuid::new_v4(), NaiveDate::default(), 7);
    group.throughput(Throughput::Elements(panel.markers.len() as u64));
    group.bench_function("panel", |b| {
        b.iter(|| analyzer.classify_test(black_box(&panel)));
    });
    group.bench_function("grouped_panel", |b| {
        b.iter(|| analyzer.grouped_panel(black_box(&panel)));
    });

    group.finish();
}

fn bench_trends(c: &mut Criterion) {
    let mut group = c.benchmark_group("trends");
    let analyzer = BloodworkAnalyzer::default();

    for count in [6_usize, 24, 96] {
        let history = generate_history(Uuid::new_v4(), count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("all_trends", count), &history, |b, history| {
            b.iter(|| analyzer.all_trends(black_box(history)));
        });
    }

    group.finish();
}

fn bench_roster(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster");
    let analyzer = BloodworkAnalyzer::default();

    for clients in [10_usize, 100, 1000] {
        let roster = generate_roster(clients);
        group.throughput(Throughput::Elements(clients as u64));
        group.bench_with_input(
            BenchmarkId::new("summarize", clients),
            &roster,
            |b, roster| {
                b.iter(|| analyzer.summarize_roster(black_box(roster)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classification, bench_trends, bench_roster);
criterion_main!(benches);
