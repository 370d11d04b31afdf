//! Display label catalogs.
//!
//! One [`LabelCatalog`] exists per [`Locale`]. Catalogs are built lazily on
//! first use and never change afterwards, so report code borrows them as
//! `&'static LabelCatalog` instead of keeping its own lookup tables.

use crate::messages::{self, Message};
use crate::Locale;
use brewlog_common::{BrewMethod, CoffeeType, RoastLevel, TasteDimension, TimeWindow};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Labels keyed by wire key.
type LabelTable = HashMap<&'static str, &'static str>;

/// Display strings for every categorical value in one locale.
#[derive(Debug)]
pub struct LabelCatalog {
    locale: Locale,
    coffee_types: LabelTable,
    brew_methods: LabelTable,
    roast_levels: LabelTable,
    taste_dimensions: [&'static str; 4],
    windows: [&'static str; 4],
    date_format: &'static str,
}

static JAPANESE: Lazy<LabelCatalog> = Lazy::new(|| {
    LabelCatalog::build(
        Locale::Japanese,
        &[
            ("SINGLE_ORIGIN", "シングルオリジン"),
            ("BLEND", "ブレンド"),
            ("ESPRESSO", "エスプレッソ"),
            ("DECAF", "カフェインレス"),
            ("OTHER", "その他"),
        ],
        &[
            ("DRIP", "ドリップ"),
            ("FRENCH_PRESS", "フレンチプレス"),
            ("AEROPRESS", "エアロプレス"),
            ("ESPRESSO_MACHINE", "エスプレッソマシン"),
            ("HAND_DRIP", "ハンドドリップ"),
            ("COLD_BREW", "水出し"),
            ("SIPHON", "サイフォン"),
            ("OTHER", "その他"),
        ],
        &[
            ("LIGHT", "ライトロースト"),
            ("MEDIUM_LIGHT", "ミディアムライトロースト"),
            ("MEDIUM", "ミディアムロースト"),
            ("MEDIUM_DARK", "ミディアムダークロースト"),
            ("DARK", "ダークロースト"),
        ],
        ["酸味", "甘み", "苦味", "コク"],
        ["すべて", "今月", "過去3ヶ月", "過去6ヶ月"],
        "%Y年%m月%d日",
    )
});

static ENGLISH: Lazy<LabelCatalog> = Lazy::new(|| {
    LabelCatalog::build(
        Locale::English,
        &[
            ("SINGLE_ORIGIN", "Single origin"),
            ("BLEND", "Blend"),
            ("ESPRESSO", "Espresso"),
            ("DECAF", "Decaf"),
            ("OTHER", "Other"),
        ],
        &[
            ("DRIP", "Drip"),
            ("FRENCH_PRESS", "French press"),
            ("AEROPRESS", "AeroPress"),
            ("ESPRESSO_MACHINE", "Espresso machine"),
            ("HAND_DRIP", "Hand drip"),
            ("COLD_BREW", "Cold brew"),
            ("SIPHON", "Siphon"),
            ("OTHER", "Other"),
        ],
        &[
            ("LIGHT", "Light roast"),
            ("MEDIUM_LIGHT", "Medium-light roast"),
            ("MEDIUM", "Medium roast"),
            ("MEDIUM_DARK", "Medium-dark roast"),
            ("DARK", "Dark roast"),
        ],
        ["Acidity", "Sweetness", "Bitterness", "Body"],
        ["All time", "This month", "Last 3 months", "Last 6 months"],
        "%b %-d, %Y",
    )
});

/// Returns the catalog for a locale.
#[must_use]
pub fn catalog(locale: Locale) -> &'static LabelCatalog {
    match locale {
        Locale::Japanese => &JAPANESE,
        Locale::English => &ENGLISH,
    }
}

impl LabelCatalog {
    fn build(
        locale: Locale,
        coffee_types: &[(&'static str, &'static str)],
        brew_methods: &[(&'static str, &'static str)],
        roast_levels: &[(&'static str, &'static str)],
        taste_dimensions: [&'static str; 4],
        windows: [&'static str; 4],
        date_format: &'static str,
    ) -> Self {
        tracing::debug!(locale = %locale, "building label catalog");
        Self {
            locale,
            coffee_types: coffee_types.iter().copied().collect(),
            brew_methods: brew_methods.iter().copied().collect(),
            roast_levels: roast_levels.iter().copied().collect(),
            taste_dimensions,
            windows,
            date_format,
        }
    }

    /// Locale this catalog belongs to.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Label for a coffee type. Unrecognized values show their literal.
    #[must_use]
    pub fn coffee_type<'a>(&'a self, value: &'a CoffeeType) -> &'a str {
        lookup(&self.coffee_types, value.key())
    }

    /// Label for a brew method. Unrecognized values show their literal.
    #[must_use]
    pub fn brew_method<'a>(&'a self, value: &'a BrewMethod) -> &'a str {
        lookup(&self.brew_methods, value.key())
    }

    /// Label for a roast level. Unrecognized values show their literal.
    #[must_use]
    pub fn roast_level<'a>(&'a self, value: &'a RoastLevel) -> &'a str {
        lookup(&self.roast_levels, value.key())
    }

    /// Label for a taste dimension.
    #[must_use]
    pub const fn taste_dimension(&self, dimension: TasteDimension) -> &'static str {
        self.taste_dimensions[dimension.index()]
    }

    /// Label for a time window.
    #[must_use]
    pub const fn window(&self, window: TimeWindow) -> &'static str {
        let index = match window {
            TimeWindow::All => 0,
            TimeWindow::CurrentMonth => 1,
            TimeWindow::Last3Months => 2,
            TimeWindow::Last6Months => 3,
        };
        self.windows[index]
    }

    /// Fixed report text.
    #[must_use]
    pub const fn message(&self, message: Message) -> &'static str {
        message.text(self.locale)
    }

    /// Search result count line.
    #[must_use]
    pub fn results_found(&self, count: usize) -> String {
        messages::results_found(self.locale, count)
    }

    /// Validation summary line.
    #[must_use]
    pub fn invalid_entries(&self, invalid: usize, checked: usize) -> String {
        messages::invalid_entries(self.locale, invalid, checked)
    }

    /// Formats a date for display.
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_format).to_string()
    }
}

fn lookup<'a>(table: &'a LabelTable, key: &'a str) -> &'a str {
    table.get(key).copied().unwrap_or(key)
}
