// ABOUTME: Category grouping of classified blood markers for dashboard sections
// ABOUTME: Order-preserving partition into named groups; every marker currently shares one category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachlab_core::constants::categories::DEFAULT_CATEGORY;
use coachlab_core::models::{BloodMarker, MarkerStatus, ResolvedRange};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A marker with its resolved range, status, and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMarker {
    /// Marker as stored
    #[serde(flatten)]
    pub marker: BloodMarker,
    /// Effective reference range
    pub range: ResolvedRange,
    /// Status against the effective range
    pub status: MarkerStatus,
    /// Dashboard category
    pub category: String,
}

/// Named group of markers in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGroup {
    /// Category name
    pub name: String,
    /// Markers in this category
    pub markers: Vec<ClassifiedMarker>,
}

/// Category a marker belongs to
///
/// There is no category lookup yet, so every marker lands in the default category.
#[must_use]
pub fn category_for(_marker: &BloodMarker) -> &'static str {
    DEFAULT_CATEGORY
}

/// Partition items by key, keeping groups in first-seen order and items in input order
#[must_use]
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for item in items {
        let key = key_fn(&item);
        if let Some(&position) = index.get(&key) {
            groups[position].1.push(item);
        } else {
            index.insert(key.clone(), groups.len());
            groups.push((key, vec![item]));
        }
    }

    groups
}

/// Group classified markers by their category
///
/// Empty input yields no groups.
#[must_use]
pub fn group_markers(markers: Vec<ClassifiedMarker>) -> Vec<MarkerGroup> {
    group_by(markers, |marker| marker.category.clone())
        .into_iter()
        .map(|(name, markers)| MarkerGroup { name, markers })
        .collect()
}
