// ABOUTME: Configuration module for coachlab-intelligence crate
// ABOUTME: Re-exports bloodwork classification and trend configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bloodwork classification and trend configuration
pub mod bloodwork;
/// Configuration validation errors
pub mod error;

pub use bloodwork::{BloodworkConfig, ClassificationConfig, TrendConfig};
pub use error::ConfigError;
