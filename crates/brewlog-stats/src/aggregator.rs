//! Statistics aggregation over a filtered entry sequence.

use crate::accumulator::{CategoryCounter, EntryAccumulator, RatingAccumulator};
use crate::histogram::{CategoryHistogram, CategoryShare};
use crate::tags::{TagCount, TagTally};
use crate::taste::{AverageTasteProfile, TasteAccumulator};
use crate::window::filter_by_window;
use brewlog_common::{ratio, BrewMethod, CoffeeEntry, CoffeeType, EntryId, TimeWindow};
use brewlog_config::StatsConfig;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, instrument};

/// Number of tags reported by default.
pub const DEFAULT_TOP_TAGS: usize = 5;

/// Number of recent entries listed by default.
pub const DEFAULT_RECENT_ENTRIES: usize = 5;

/// Configuration for aggregation operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationConfig {
    /// How many tags `topTags` keeps
    pub top_tags_limit: usize,
    /// How many entries the summary lists as recent
    pub recent_limit: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            top_tags_limit: DEFAULT_TOP_TAGS,
            recent_limit: DEFAULT_RECENT_ENTRIES,
        }
    }
}

impl From<&StatsConfig> for AggregationConfig {
    fn from(config: &StatsConfig) -> Self {
        Self {
            top_tags_limit: config.top_tags_limit,
            recent_limit: config.recent_limit,
        }
    }
}

/// Aggregate statistics over one sequence of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of entries.
    pub total_count: usize,
    /// Mean rating, 0 for no entries.
    pub average_rating: f64,
    /// Entries per coffee type, absent types skipped.
    pub counts_by_coffee_type: CategoryHistogram<CoffeeType>,
    /// Entries per brew method, absent methods skipped.
    pub counts_by_brew_method: CategoryHistogram<BrewMethod>,
    /// Most used tags, most used first.
    pub top_tags: Vec<TagCount>,
    /// Per-dimension taste averages.
    pub average_taste_profile: AverageTasteProfile,
}

impl Statistics {
    /// Coffee type rows sorted by count with their share of all entries.
    #[must_use]
    pub fn coffee_type_breakdown(&self) -> Vec<CategoryShare<CoffeeType>> {
        self.counts_by_coffee_type.breakdown(self.total_count)
    }

    /// Brew method rows sorted by count with their share of all entries.
    #[must_use]
    pub fn brew_method_breakdown(&self) -> Vec<CategoryShare<BrewMethod>> {
        self.counts_by_brew_method.breakdown(self.total_count)
    }

    /// `count / totalCount`, 0 when there are no entries.
    #[must_use]
    pub fn share_of_total(&self, count: usize) -> f64 {
        ratio(count, self.total_count)
    }
}

/// Short listing of an entry for the recent-entries section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    /// Entry identifier.
    pub id: EntryId,
    /// Coffee name.
    pub name: String,
    /// Tasting date.
    #[serde(with = "brewlog_common::iso_date")]
    pub date: NaiveDate,
    /// Overall rating.
    pub rating: u8,
}

impl From<&CoffeeEntry> for RecentEntry {
    fn from(entry: &CoffeeEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            date: entry.date,
            rating: entry.rating,
        }
    }
}

/// Everything a statistics view shows for one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Window the entries were filtered by.
    pub window: TimeWindow,
    /// Calendar date of the reference instant.
    #[serde(with = "brewlog_common::iso_date")]
    pub reference_date: NaiveDate,
    /// Aggregates over the filtered entries.
    pub statistics: Statistics,
    /// Coffee type chart rows.
    pub coffee_type_breakdown: Vec<CategoryShare<CoffeeType>>,
    /// Brew method chart rows.
    pub brew_method_breakdown: Vec<CategoryShare<BrewMethod>>,
    /// First entries of the filtered sequence.
    pub recent_entries: Vec<RecentEntry>,
}

/// Filters entries by time window and computes their statistics.
///
/// Pure: the same inputs always give the same outputs, and entries are only
/// ever borrowed.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAggregator {
    config: AggregationConfig,
}

impl StatisticsAggregator {
    /// Creates an aggregator with the given configuration.
    #[must_use]
    pub const fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Keeps the entries inside `window`, preserving order.
    pub fn filter_by_window<'a, I>(
        &self,
        entries: I,
        window: TimeWindow,
        reference: NaiveDateTime,
    ) -> Vec<&'a CoffeeEntry>
    where
        I: IntoIterator<Item = &'a CoffeeEntry>,
    {
        filter_by_window(entries, window, reference)
    }

    /// Computes statistics in a single pass over `entries`.
    #[instrument(skip_all, fields(top_tags_limit = self.config.top_tags_limit))]
    pub fn aggregate<'a, I>(&self, entries: I) -> Statistics
    where
        I: IntoIterator<Item = &'a CoffeeEntry>,
    {
        let mut ratings = RatingAccumulator::default();
        let mut coffee_types = CategoryCounter::coffee_types();
        let mut brew_methods = CategoryCounter::brew_methods();
        let mut tags = TagTally::default();
        let mut taste = TasteAccumulator::default();

        for entry in entries {
            ratings.observe(entry);
            coffee_types.observe(entry);
            brew_methods.observe(entry);
            tags.observe(entry);
            taste.observe(entry);
        }

        let ratings = ratings.finish();
        let statistics = Statistics {
            total_count: ratings.total_count,
            average_rating: ratings.average_rating,
            counts_by_coffee_type: coffee_types.finish(),
            counts_by_brew_method: brew_methods.finish(),
            top_tags: tags.finish().top(self.config.top_tags_limit),
            average_taste_profile: taste.finish(),
        };

        debug!(
            total = statistics.total_count,
            average_rating = statistics.average_rating,
            coffee_types = statistics.counts_by_coffee_type.len(),
            brew_methods = statistics.counts_by_brew_method.len(),
            tags = statistics.top_tags.len(),
            "aggregated entries"
        );
        statistics
    }

    /// Filters by `window`, aggregates, and derives the chart rows and
    /// recent-entries list.
    #[instrument(skip(self, entries), fields(window = %window, reference = %reference))]
    pub fn summarize<'a, I>(
        &self,
        entries: I,
        window: TimeWindow,
        reference: NaiveDateTime,
    ) -> StatisticsSummary
    where
        I: IntoIterator<Item = &'a CoffeeEntry>,
    {
        let filtered = filter_by_window(entries, window, reference);
        let statistics = self.aggregate(filtered.iter().copied());
        let recent_entries = filtered
            .iter()
            .take(self.config.recent_limit)
            .map(|entry| RecentEntry::from(*entry))
            .collect();

        StatisticsSummary {
            window,
            reference_date: reference.date(),
            coffee_type_breakdown: statistics.coffee_type_breakdown(),
            brew_method_breakdown: statistics.brew_method_breakdown(),
            statistics,
            recent_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_common::test_utils::{datetime, entry, journal_fixtures::sample_journal};
    use brewlog_common::TasteProfile;

    #[test]
    fn test_empty_input() {
        let statistics = StatisticsAggregator::default().aggregate(std::iter::empty());
        assert_eq!(statistics.total_count, 0);
        assert_eq!(statistics.average_rating, 0.0);
        assert!(statistics.counts_by_coffee_type.is_empty());
        assert!(statistics.top_tags.is_empty());
        assert!(statistics.average_taste_profile.is_empty());
        assert_eq!(statistics.share_of_total(3), 0.0);
    }

    #[test]
    fn test_sample_journal() {
        let journal = sample_journal();
        let statistics = StatisticsAggregator::default().aggregate(&journal);

        assert_eq!(statistics.total_count, 3);
        assert_eq!(statistics.average_rating, 4.0);
        assert_eq!(statistics.counts_by_coffee_type.get(&CoffeeType::SingleOrigin), 2);
        assert_eq!(statistics.counts_by_brew_method.get(&BrewMethod::HandDrip), 1);
        assert_eq!(statistics.top_tags[0].tag, "ナッツ");
        assert_eq!(statistics.top_tags[0].count, 2);
        assert_eq!(statistics.top_tags.len(), 5);
        assert_eq!(statistics.average_taste_profile.acidity, 3.0);
    }

    #[test]
    fn test_top_tags_limit_is_configurable() {
        let journal = sample_journal();
        let aggregator = StatisticsAggregator::new(AggregationConfig {
            top_tags_limit: 2,
            ..AggregationConfig::default()
        });
        assert_eq!(aggregator.aggregate(&journal).top_tags.len(), 2);
    }

    #[test]
    fn test_breakdown_uses_total_count_as_denominator() {
        let entries = vec![
            entry("1", 3, "2024-03-01").with_brew_method(BrewMethod::Drip),
            entry("2", 3, "2024-03-02").with_brew_method(BrewMethod::Drip),
            entry("3", 3, "2024-03-03").with_brew_method(BrewMethod::Siphon),
            entry("4", 3, "2024-03-04"),
        ];
        let rows = StatisticsAggregator::default().aggregate(&entries).brew_method_breakdown();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, BrewMethod::Drip);
        assert_eq!(rows[0].share, 0.5);
        assert_eq!(rows[1].share, 0.25);
    }

    #[test]
    fn test_summarize_filters_then_lists_recent_entries() {
        let mut journal = sample_journal();
        journal.push(
            entry("old", 1, "2023-01-01")
                .with_name("Old beans")
                .with_taste_profile(TasteProfile::full(1, 1, 1, 1)),
        );
        let aggregator = StatisticsAggregator::new(AggregationConfig {
            recent_limit: 2,
            ..AggregationConfig::default()
        });

        let summary = aggregator.summarize(&journal, TimeWindow::CurrentMonth, datetime(2024, 3, 25, 10, 0, 0));

        assert_eq!(summary.statistics.total_count, 3);
        assert_eq!(summary.reference_date.to_string(), "2024-03-25");
        let recent: Vec<_> = summary.recent_entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(recent, vec!["1", "2"]);
        assert_eq!(summary.coffee_type_breakdown[0].key, CoffeeType::SingleOrigin);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let journal = sample_journal();
        let summary = StatisticsAggregator::default().summarize(&journal, TimeWindow::All, datetime(2024, 3, 25, 0, 0, 0));
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["window"], "ALL");
        assert_eq!(value["referenceDate"], "2024-03-25");
        assert_eq!(value["statistics"]["totalCount"], 3);
        assert_eq!(value["statistics"]["countsByCoffeeType"]["SINGLE_ORIGIN"], 2);
        assert_eq!(value["statistics"]["averageTasteProfile"]["support"]["body"], 3);
        assert_eq!(value["recentEntries"][0]["date"], "2024-03-20");
        assert_eq!(value["brewMethodBreakdown"][0]["share"].as_f64().unwrap(), 1.0 / 3.0);
    }
}
