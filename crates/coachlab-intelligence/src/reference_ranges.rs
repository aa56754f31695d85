// ABOUTME: Reference-range resolution for blood markers with an injectable lookup table
// ABOUTME: Falls back from stored lab bounds to label, then code, lookups in a ReferenceRangeTable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference-range resolution
//!
//! Lab reports do not always carry reference bounds, and older imports stored
//! `0`/`0` for "no range". The resolver keeps usable stored bounds verbatim
//! and otherwise consults a [`ReferenceRangeTable`], first by exact label and
//! then by lab code. A marker that matches nothing resolves to an empty
//! range; it is never an error.

use coachlab_core::errors::{AppError, AppResult};
use coachlab_core::models::{BloodMarker, ReferenceRange, ResolvedRange};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Built-in athlete panel: (label, code, low, high, unit)
const BUILTIN_REFERENCE_RANGES: &[(&str, &str, f64, f64, &str)] = &[
    ("Vitamin D", "VITD", 50.0, 175.0, "nmol/L"),
    ("Ferritin", "FERR", 30.0, 300.0, "ug/L"),
    ("Hemoglobin", "HGB", 13.5, 17.5, "g/dL"),
    ("HbA1c", "HBA1C", 20.0, 42.0, "mmol/mol"),
    ("Glucose", "GLU", 3.9, 5.6, "mmol/L"),
    ("Testosterone", "TESTO", 8.6, 29.0, "nmol/L"),
    ("Free Testosterone", "FTESTO", 0.2, 0.62, "nmol/L"),
    ("Cortisol", "CORT", 133.0, 537.0, "nmol/L"),
    ("TSH", "TSH", 0.27, 4.2, "mIU/L"),
    ("Free T4", "FT4", 12.0, 22.0, "pmol/L"),
    ("Total Cholesterol", "CHOL", 3.0, 5.0, "mmol/L"),
    ("HDL Cholesterol", "HDL", 1.0, 2.2, "mmol/L"),
    ("LDL Cholesterol", "LDL", 1.0, 3.0, "mmol/L"),
    ("Triglycerides", "TRIG", 0.5, 1.7, "mmol/L"),
    ("CRP", "CRP", 0.1, 3.0, "mg/L"),
    ("Vitamin B12", "B12", 145.0, 569.0, "pmol/L"),
    ("Folate", "FOL", 8.8, 60.0, "nmol/L"),
    ("Iron", "FE", 10.0, 30.0, "umol/L"),
    ("Magnesium", "MG", 0.7, 1.0, "mmol/L"),
    ("Creatine Kinase", "CK", 40.0, 320.0, "U/L"),
    ("ALT", "ALT", 7.0, 56.0, "U/L"),
    ("AST", "AST", 10.0, 40.0, "U/L"),
    ("Creatinine", "CREA", 59.0, 104.0, "umol/L"),
    ("Omega-3 Index", "O3I", 8.0, 12.0, "%"),
];

/// One row of a reference table file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTableEntry {
    /// Marker label the range applies to
    pub label: String,
    /// Optional lab code the range also applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
    /// Unit of the bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Lookup table mapping marker labels and lab codes to reference ranges
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRangeTable {
    by_label: HashMap<String, ReferenceRange>,
    by_code: HashMap<String, ReferenceRange>,
}

impl Default for ReferenceRangeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceRangeTable {
    /// Table with no entries; every fallback lookup misses
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_label: HashMap::new(),
            by_code: HashMap::new(),
        }
    }

    /// Table holding the built-in athlete panel
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for &(label, code, low, high, unit) in BUILTIN_REFERENCE_RANGES {
            table.insert(label, Some(code), ReferenceRange::with_unit(low, high, unit));
        }
        table
    }

    /// Build a table from file entries, validating each range
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has non-finite bounds or `low > high`
    pub fn from_entries(entries: Vec<ReferenceTableEntry>) -> AppResult<Self> {
        let mut table = Self::empty();
        for entry in entries {
            if !entry.low.is_finite() || !entry.high.is_finite() || entry.low > entry.high {
                return Err(AppError::value_out_of_range(format!(
                    "Reference range for '{}' is invalid: low={} high={}",
                    entry.label, entry.low, entry.high
                )));
            }
            if table.by_label.contains_key(&entry.label) {
                warn!(label = %entry.label, "Duplicate reference table label, later entry wins");
            }
            let range = ReferenceRange {
                low: entry.low,
                high: entry.high,
                unit: entry.unit,
            };
            table.insert(entry.label, entry.code.as_deref(), range);
        }
        Ok(table)
    }

    /// Parse a table from a JSON array of entries
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an entry is invalid
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let entries: Vec<ReferenceTableEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a valid table
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
        })?;
        let table = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            labels = table.len(),
            "Loaded reference range table"
        );
        Ok(table)
    }

    /// Add or replace a range for a label, and for a code when given
    pub fn insert(&mut self, label: impl Into<String>, code: Option<&str>, range: ReferenceRange) {
        if let Some(code) = code {
            self.by_code.insert(code.to_owned(), range.clone());
        }
        self.by_label.insert(label.into(), range);
    }

    /// Range for an exact label match
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<&ReferenceRange> {
        self.by_label.get(label)
    }

    /// Range for an exact code match
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&ReferenceRange> {
        self.by_code.get(code)
    }

    /// Label lookup first, then code lookup
    #[must_use]
    pub fn lookup(&self, label: &str, code: Option<&str>) -> Option<&ReferenceRange> {
        self.by_label(label)
            .or_else(|| code.and_then(|code| self.by_code(code)))
    }

    /// Number of labels in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// Whether the table has no labels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Effective bounds for a marker
    ///
    /// Stored bounds win when both are present and not the `(0, 0)` sentinel.
    /// Otherwise the table is consulted; no match yields an unresolved range.
    #[must_use]
    pub fn resolve(&self, marker: &BloodMarker) -> ResolvedRange {
        if let Some((low, high)) = marker.stored_range() {
            return ResolvedRange::new(low, high);
        }

        if let Some(range) = self.lookup(&marker.label, marker.code.as_deref()) {
            debug!(
                marker = %marker.label,
                low = range.low,
                high = range.high,
                "Using fallback reference range"
            );
            return ResolvedRange::from(range);
        }

        debug!(marker = %marker.label, code = ?marker.code, "No reference range available");
        ResolvedRange::unresolved()
    }
}

/// Resolve a marker's effective bounds against the given table
#[must_use]
pub fn resolve_reference_range(marker: &BloodMarker, table: &ReferenceRangeTable) -> ResolvedRange {
    table.resolve(marker)
}
