// ABOUTME: Configuration management module for the Coachlab library and CLI
// ABOUTME: Environment-driven thresholds and reference table selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Coachlab
//!
//! - **Environment**: thresholds and reference table path from environment variables

/// Environment configuration
pub mod environment;

pub use environment::CoachlabConfig;
