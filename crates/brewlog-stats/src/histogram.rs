//! Insertion-ordered occurrence counts.

use brewlog_common::ratio;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by category, remembering first-appearance order.
///
/// Serializes as a JSON object whose keys appear in first-appearance order.
#[derive(Debug, Clone)]
pub struct CategoryHistogram<K> {
    counts: Vec<(K, usize)>,
    positions: HashMap<K, usize>,
}

// `positions` is derived from `counts`, so equality only looks at the ordered counts.
impl<K: Eq + Hash> PartialEq for CategoryHistogram<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Eq + Hash> Eq for CategoryHistogram<K> {}

impl<K> Default for CategoryHistogram<K> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

/// One row of a breakdown chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CategoryShare<K> {
    /// Category.
    pub key: K,
    /// Occurrences.
    pub count: usize,
    /// `count / total`, 0 when total is 0.
    pub share: f64,
}

impl<K: Clone + Eq + Hash> CategoryHistogram<K> {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn increment(&mut self, key: &K) {
        match self.positions.get(key) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.counts.len());
                self.counts.push((key.clone(), 1));
            }
        }
    }

    /// Count for `key`, 0 when never seen.
    #[must_use]
    pub fn get(&self, key: &K) -> usize {
        self.positions
            .get(key)
            .map_or(0, |&position| self.counts[position].1)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no key was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Keys and counts in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Keys and counts sorted by descending count. Equal counts keep
    /// first-appearance order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.counts.clone();
        // `sort_by` is stable, which gives the tie-break.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Ranked rows with their share of `total`.
    #[must_use]
    pub fn breakdown(&self, total: usize) -> Vec<CategoryShare<K>> {
        self.ranked()
            .into_iter()
            .map(|(key, count)| CategoryShare {
                key,
                count,
                share: ratio(count, total),
            })
            .collect()
    }
}

impl<K: Serialize> Serialize for CategoryHistogram<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
