// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging plus blood marker, test, and roster builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `coachlab`

use chrono::NaiveDate;
use coachlab::models::{BloodMarker, BloodTest, ClientBloodwork};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Marker with stored bounds
pub fn marker(label: &str, value: f64, low: f64, high: f64) -> BloodMarker {
    BloodMarker::new(label, value, "unit").with_reference(low, high)
}

/// Marker relying on the reference table
pub fn table_marker(label: &str, value: f64) -> BloodMarker {
    BloodMarker::new(label, value, "unit")
}

/// Blood test for a client on a date
pub fn blood_test(client_id: Uuid, taken_on: NaiveDate, markers: Vec<BloodMarker>) -> BloodTest {
    BloodTest {
        id: Uuid::new_v4(),
        client_id,
        taken_on,
        lab_name: Some("Test Lab".into()),
        markers,
    }
}

/// Client with a test history
pub fn client(name: &str, tests: Vec<BloodTest>) -> ClientBloodwork {
    let client_id = tests.first().map_or_else(Uuid::new_v4, |test| test.client_id);
    ClientBloodwork {
        client_id,
        name: name.into(),
        tests,
    }
}
