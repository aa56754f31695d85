// ABOUTME: Bloodwork configuration for marker classification and trend aggregation
// ABOUTME: Configures the borderline band and the stable-trend threshold with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Bloodwork Configuration
//!
//! Thresholds used by the marker classifier and the trend aggregator. Values
//! come from defaults and may be overridden through environment variables.

use super::ConfigError;
use coachlab_core::constants::{env_config, marker_status, trends};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Bloodwork intelligence configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodworkConfig {
    /// Marker status classification settings
    pub classification: ClassificationConfig,
    /// Trend aggregation settings
    pub trends: TrendConfig,
}

/// Configuration for marker status classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Fraction of the reference span from either edge treated as borderline
    pub borderline_fraction: f64,
}

/// Configuration for trend aggregation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Change (percent) that must be exceeded for an up or down trend
    pub stable_threshold_percent: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            borderline_fraction: marker_status::BORDERLINE_FRACTION,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_threshold_percent: trends::STABLE_THRESHOLD_PERCENT,
        }
    }
}

impl BloodworkConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(fraction) = parse_env::<f64>(env_config::BORDERLINE_FRACTION)? {
            config.classification.borderline_fraction = fraction;
        }
        if let Some(threshold) = parse_env::<f64>(env_config::TREND_THRESHOLD_PERCENT)? {
            config.trends.stable_threshold_percent = threshold;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate all thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classification.validate()?;
        self.trends.validate()
    }
}

impl ClassificationConfig {
    /// Validate the borderline fraction lies in `[0, 0.5)`
    ///
    /// # Errors
    ///
    /// Returns an error if the fraction is negative, not finite, or leaves no optimal band
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = self.borderline_fraction;
        if !fraction.is_finite()
            || fraction < 0.0
            || fraction >= marker_status::MAX_BORDERLINE_FRACTION
        {
            return Err(ConfigError::InvalidRange(
                "borderline_fraction must be in [0.0, 0.5)",
            ));
        }
        Ok(())
    }
}

impl TrendConfig {
    /// Validate the stable threshold is a finite, non-negative percentage
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stable_threshold_percent.is_finite() || self.stable_threshold_percent < 0.0 {
            return Err(ConfigError::InvalidRange(
                "stable_threshold_percent must be a non-negative number",
            ));
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
