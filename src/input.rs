// ABOUTME: JSON input loading for blood tests, test histories, and coach rosters
// ABOUTME: Reads files exported by the dashboard backend into core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachlab_core::errors::{AppError, AppResult};
use coachlab_core::models::{BloodTest, ClientBloodwork};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A file holding either one blood test or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<BloodTest>),
    One(Box<BloodTest>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<BloodTest> {
        match self {
            Self::Many(tests) => tests,
            Self::One(test) => vec![*test],
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })
}

/// Parse blood tests from JSON holding a single test or an array of tests
///
/// # Errors
///
/// Returns an error if the JSON does not describe blood tests
pub fn parse_blood_tests(json: &str) -> AppResult<Vec<BloodTest>> {
    let parsed: OneOrMany = serde_json::from_str(json)?;
    Ok(parsed.into_vec())
}

/// Read blood tests from a file holding one test or an array of tests
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn read_blood_tests(path: impl AsRef<Path>) -> AppResult<Vec<BloodTest>> {
    let path = path.as_ref();
    let tests = read_json::<OneOrMany>(path)?.into_vec();
    debug!(path = %path.display(), tests = tests.len(), "Read blood tests");
    Ok(tests)
}

/// Read the most recent blood test from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or holds no tests
pub fn read_latest_blood_test(path: impl AsRef<Path>) -> AppResult<BloodTest> {
    let path = path.as_ref();
    read_blood_tests(path)?
        .into_iter()
        .max_by_key(|test| test.taken_on)
        .ok_or_else(|| AppError::not_found(format!("Blood test in {}", path.display())))
}

/// Read a coach roster file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn read_roster(path: impl AsRef<Path>) -> AppResult<Vec<ClientBloodwork>> {
    let path = path.as_ref();
    let roster: Vec<ClientBloodwork> = read_json(path)?;
    debug!(path = %path.display(), clients = roster.len(), "Read roster");
    Ok(roster)
}
