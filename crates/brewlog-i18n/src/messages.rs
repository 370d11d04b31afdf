//! Report headings and count-dependent messages.

use crate::Locale;

/// Fixed strings used by statistics and search reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Report title.
    StatisticsTitle,
    /// Window selector caption.
    Period,
    /// Total entry count heading.
    TotalEntries,
    /// Average rating heading.
    AverageRating,
    /// Coffee type breakdown heading.
    ByCoffeeType,
    /// Brew method breakdown heading.
    ByBrewMethod,
    /// Top tags heading.
    TopTags,
    /// Average taste profile heading.
    AverageTasteProfile,
    /// Recent entries heading.
    RecentEntries,
    /// Placeholder for empty sections.
    NoData,
    /// Search results heading.
    SearchResults,
    /// Validation report heading.
    ValidationResults,
}

impl Message {
    /// Every message, for completeness checks.
    pub const ALL: [Self; 12] = [
        Self::StatisticsTitle,
        Self::Period,
        Self::TotalEntries,
        Self::AverageRating,
        Self::ByCoffeeType,
        Self::ByBrewMethod,
        Self::TopTags,
        Self::AverageTasteProfile,
        Self::RecentEntries,
        Self::NoData,
        Self::SearchResults,
        Self::ValidationResults,
    ];

    /// Text of this message in the given locale.
    #[must_use]
    pub const fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Japanese => self.japanese(),
            Locale::English => self.english(),
        }
    }

    const fn japanese(self) -> &'static str {
        match self {
            Self::StatisticsTitle => "コーヒー統計",
            Self::Period => "期間",
            Self::TotalEntries => "総記録数",
            Self::AverageRating => "平均評価",
            Self::ByCoffeeType => "コーヒータイプ別",
            Self::ByBrewMethod => "淹れ方別",
            Self::TopTags => "よく使うタグ",
            Self::AverageTasteProfile => "平均味わいプロファイル",
            Self::RecentEntries => "最近のコーヒー",
            Self::NoData => "データがありません",
            Self::SearchResults => "検索結果",
            Self::ValidationResults => "検証結果",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::StatisticsTitle => "Coffee statistics",
            Self::Period => "Period",
            Self::TotalEntries => "Total entries",
            Self::AverageRating => "Average rating",
            Self::ByCoffeeType => "By coffee type",
            Self::ByBrewMethod => "By brew method",
            Self::TopTags => "Top tags",
            Self::AverageTasteProfile => "Average taste profile",
            Self::RecentEntries => "Recent coffees",
            Self::NoData => "No data",
            Self::SearchResults => "Search results",
            Self::ValidationResults => "Validation results",
        }
    }
}

/// Plural category of a count, following CLDR naming.
#[must_use]
pub const fn plural_form(locale: Locale, count: usize) -> &'static str {
    match locale {
        // Japanese has no grammatical plural.
        Locale::Japanese => "other",
        Locale::English => {
            if count == 1 {
                "one"
            } else {
                "other"
            }
        }
    }
}

/// "N results found" line for search output.
#[must_use]
pub fn results_found(locale: Locale, count: usize) -> String {
    match (locale, count) {
        (Locale::Japanese, 0) => "検索結果はありません".to_string(),
        (Locale::Japanese, n) => format!("{n}件の結果が見つかりました"),
        (Locale::English, 0) => "No results found".to_string(),
        (Locale::English, n) => match plural_form(locale, n) {
            "one" => format!("{n} result found"),
            _ => format!("{n} results found"),
        },
    }
}

/// "N of M entries invalid" line for validation output.
#[must_use]
pub fn invalid_entries(locale: Locale, invalid: usize, checked: usize) -> String {
    match locale {
        Locale::Japanese => format!("{checked}件中{invalid}件に問題があります"),
        Locale::English => match plural_form(locale, checked) {
            "one" => format!("{invalid} of {checked} entry invalid"),
            _ => format!("{invalid} of {checked} entries invalid"),
        },
    }
}
