//! Tag frequency and top-K ranking.

use crate::accumulator::EntryAccumulator;
use crate::histogram::CategoryHistogram;
use brewlog_common::CoffeeEntry;
use serde::Serialize;

/// A tag and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Tag text, case preserved.
    pub tag: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Counts every tag occurrence.
///
/// Each occurrence counts, so a tag repeated inside one entry counts twice.
/// Tags are compared exactly; `Fruity` and `fruity` are different tags.
#[derive(Debug, Clone, Default)]
pub struct TagTally {
    counts: CategoryHistogram<String>,
}

impl TagTally {
    /// The `limit` most used tags, most used first; ties keep
    /// first-appearance order.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<TagCount> {
        let mut ranked = self.counts.ranked();
        ranked.truncate(limit);
        ranked
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect()
    }

    /// All tag counts in first-appearance order.
    #[must_use]
    pub const fn counts(&self) -> &CategoryHistogram<String> {
        &self.counts
    }
}

impl EntryAccumulator for TagTally {
    type Output = Self;

    fn observe(&mut self, entry: &CoffeeEntry) {
        for tag in &entry.tags {
            self.counts.increment(tag);
        }
    }

    fn finish(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::accumulate;
    use brewlog_common::test_utils::entry;

    fn tags(top: &[TagCount]) -> Vec<(&str, usize)> {
        top.iter().map(|t| (t.tag.as_str(), t.count)).collect()
    }

    #[test]
    fn test_counts_across_entries() {
        let entries = vec![
            entry("1", 3, "2024-03-01").with_tags(["A", "B"]),
            entry("2", 3, "2024-03-02").with_tags(["A"]),
        ];
        let tally = accumulate::<TagTally, _>(&entries);
        assert_eq!(tags(&tally.top(5)), vec![("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_limit_and_tie_break() {
        let entries = vec![
            entry("1", 3, "2024-03-01").with_tags(["c", "b", "a"]),
            entry("2", 3, "2024-03-02").with_tags(["d", "a"]),
        ];
        let tally = accumulate::<TagTally, _>(&entries);
        assert_eq!(tags(&tally.top(3)), vec![("a", 2), ("c", 1), ("b", 1)]);
        assert!(tally.top(0).is_empty());
    }

    #[test]
    fn test_duplicate_within_entry_counts_twice() {
        let entries = vec![entry("1", 3, "2024-03-01").with_tags(["x", "x", "y"])];
        let tally = accumulate::<TagTally, _>(&entries);
        assert_eq!(tags(&tally.top(5)), vec![("x", 2), ("y", 1)]);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let entries = vec![entry("1", 3, "2024-03-01").with_tags(["Fruity", "fruity"])];
        let tally = accumulate::<TagTally, _>(&entries);
        assert_eq!(tally.counts().len(), 2);
    }
}
