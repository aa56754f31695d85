// ABOUTME: Core types and constants for Coachlab bloodwork intelligence
// ABOUTME: Foundation crate with error handling, blood-test models, and thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachlab Core
//!
//! Foundation crate providing shared types and constants for the Coachlab
//! bloodwork dashboards. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Classification thresholds and service names
//! - **models**: Blood tests, markers, and derived status types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`BloodTest`, `BloodMarker`, `MarkerStatus`, etc.)
pub mod models;
