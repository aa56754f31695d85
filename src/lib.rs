// ABOUTME: Main library entry point for the Coachlab bloodwork toolkit
// ABOUTME: Re-exports the core and intelligence crates plus logging, config, input, and views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachlab
//!
//! Blood-work intelligence for fitness coaching dashboards: reference-range
//! resolution, marker status classification, category grouping, trend cards
//! and roster summaries, plus the view-models and CLI around them.
//!
//! ## Example
//!
//! ```rust
//! use coachlab::intelligence::classify_marker_value;
//! use coachlab::models::MarkerStatus;
//!
//! assert_eq!(classify_marker_value(40.0, Some(50.0), Some(175.0)), MarkerStatus::Low);
//! ```

/// Core error types (re-exported from `coachlab-core`)
pub use coachlab_core::errors;

/// Core constants (re-exported from `coachlab-core`)
pub use coachlab_core::constants;

/// Core data models (re-exported from `coachlab-core`)
pub use coachlab_core::models;

/// Bloodwork intelligence (re-exported from `coachlab-intelligence`)
pub use coachlab_intelligence as intelligence;

/// Environment configuration
pub mod config;

/// JSON input loading
pub mod input;

/// Logging configuration
pub mod logging;

/// Dashboard view-models
pub mod views;
