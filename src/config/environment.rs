// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bloodwork thresholds and the reference table path, then builds the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use coachlab_core::constants::env_config;
use coachlab_core::errors::AppResult;
use coachlab_intelligence::{BloodworkAnalyzer, BloodworkConfig, ReferenceRangeTable};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Application configuration assembled from the environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachlabConfig {
    /// Classification and trend thresholds
    pub bloodwork: BloodworkConfig,
    /// JSON reference table replacing the built-in panel
    pub reference_table: Option<PathBuf>,
}

impl CoachlabConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold override is unparsable or out of range
    pub fn from_env() -> AppResult<Self> {
        let bloodwork = BloodworkConfig::from_env()?;
        let reference_table = env::var_os(env_config::REFERENCE_TABLE)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bloodwork,
            reference_table,
        })
    }

    /// Replace the reference table path (e.g. from a CLI flag)
    #[must_use]
    pub fn with_reference_table(mut self, path: impl AsRef<Path>) -> Self {
        self.reference_table = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load the configured reference table, or the built-in panel when none is set
    ///
    /// # Errors
    ///
    /// Returns an error if the configured table file cannot be loaded
    pub fn load_reference_table(&self) -> AppResult<ReferenceRangeTable> {
        self.reference_table.as_ref().map_or_else(
            || Ok(ReferenceRangeTable::builtin()),
            ReferenceRangeTable::from_json_file,
        )
    }

    /// Build an analyzer from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the reference table cannot be loaded
    pub fn build_analyzer(&self) -> AppResult<BloodworkAnalyzer> {
        let table = self.load_reference_table()?;
        info!(
            reference_labels = table.len(),
            borderline_fraction = self.bloodwork.classification.borderline_fraction,
            trend_threshold_percent = self.bloodwork.trends.stable_threshold_percent,
            "Bloodwork analyzer configured"
        );
        Ok(BloodworkAnalyzer::new(table, &self.bloodwork))
    }
}
