// ABOUTME: Core data models for blood tests and derived marker classifications
// ABOUTME: Re-exports BloodTest, BloodMarker, ranges, statuses, and trend types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared between the intelligence crate and the dashboard layer.

/// Derived marker status and trend types
pub mod marker;

pub use blood_test::{BloodMarker, BloodTest, ClientBloodwork, ReferenceRange, ResolvedRange};
pub use marker::{MarkerStatus, MarkerTrendPoint, TrendDirection};
