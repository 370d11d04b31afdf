//! Coffee entry model and newtype wrappers for domain modeling.

use crate::{BrewLogError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a coffee entry as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Creates a new entry ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user who logged an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Creates a new user ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

categorical! {
    /// Kind of coffee that was tasted.
    pub enum CoffeeType {
        /// Beans from a single farm or region.
        SingleOrigin => "SINGLE_ORIGIN",
        /// A blend of origins.
        Blend => "BLEND",
        /// Espresso-based drink.
        Espresso => "ESPRESSO",
        /// Decaffeinated coffee.
        Decaf => "DECAF",
        /// Anything else.
        Other => "OTHER",
    }
}

categorical! {
    /// How the coffee was brewed.
    pub enum BrewMethod {
        /// Automatic drip machine.
        Drip => "DRIP",
        /// French press.
        FrenchPress => "FRENCH_PRESS",
        /// AeroPress.
        Aeropress => "AEROPRESS",
        /// Espresso machine.
        EspressoMachine => "ESPRESSO_MACHINE",
        /// Manual pour over. Older records used the `pour_over` key.
        HandDrip => "HAND_DRIP" | "POUR_OVER",
        /// Cold brew.
        ColdBrew => "COLD_BREW",
        /// Siphon brewer.
        Siphon => "SIPHON",
        /// Anything else.
        Other => "OTHER",
    }
}

categorical! {
    /// Roast level of the beans.
    pub enum RoastLevel {
        /// Light roast.
        Light => "LIGHT",
        /// Medium-light roast.
        MediumLight => "MEDIUM_LIGHT",
        /// Medium roast.
        Medium => "MEDIUM",
        /// Medium-dark roast.
        MediumDark => "MEDIUM_DARK",
        /// Dark roast.
        Dark => "DARK",
    }
}

/// One axis of the taste profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TasteDimension {
    /// Acidity.
    Acidity,
    /// Sweetness.
    Sweetness,
    /// Bitterness.
    Bitterness,
    /// Body.
    Body,
}

impl TasteDimension {
    /// All dimensions in display order.
    pub const ALL: [Self; 4] = [Self::Acidity, Self::Sweetness, Self::Bitterness, Self::Body];

    /// Position of this dimension in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Acidity => 0,
            Self::Sweetness => 1,
            Self::Bitterness => 2,
            Self::Body => 3,
        }
    }

    /// Field name used on the wire.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Acidity => "acidity",
            Self::Sweetness => "sweetness",
            Self::Bitterness => "bitterness",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for TasteDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Taste profile scores, each on a 1-5 scale. Every dimension is optional
/// on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasteProfile {
    /// Acidity score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acidity: Option<u8>,
    /// Sweetness score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweetness: Option<u8>,
    /// Bitterness score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<u8>,
    /// Body score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<u8>,
}

impl TasteProfile {
    /// Creates a profile with all four dimensions present.
    #[must_use]
    pub const fn full(acidity: u8, sweetness: u8, bitterness: u8, body: u8) -> Self {
        Self {
            acidity: Some(acidity),
            sweetness: Some(sweetness),
            bitterness: Some(bitterness),
            body: Some(body),
        }
    }

    /// Score for one dimension.
    #[must_use]
    pub const fn get(&self, dimension: TasteDimension) -> Option<u8> {
        match dimension {
            TasteDimension::Acidity => self.acidity,
            TasteDimension::Sweetness => self.sweetness,
            TasteDimension::Bitterness => self.bitterness,
            TasteDimension::Body => self.body,
        }
    }

    /// Returns a copy with one dimension replaced.
    #[must_use]
    pub fn with(mut self, dimension: TasteDimension, score: Option<u8>) -> Self {
        match dimension {
            TasteDimension::Acidity => self.acidity = score,
            TasteDimension::Sweetness => self.sweetness = score,
            TasteDimension::Bitterness => self.bitterness = score,
            TasteDimension::Body => self.body = score,
        }
        self
    }

    /// Whether no dimension carries a score.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.acidity.is_none()
            && self.sweetness.is_none()
            && self.bitterness.is_none()
            && self.body.is_none()
    }

    /// Present dimensions with their scores, in display order.
    pub fn scores(&self) -> impl Iterator<Item = (TasteDimension, u8)> + '_ {
        TasteDimension::ALL
            .into_iter()
            .filter_map(|dimension| self.get(dimension).map(|score| (dimension, score)))
    }
}

/// Relative time range used to filter entries before aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeWindow {
    /// Every entry.
    #[default]
    All,
    /// The calendar month containing the reference instant.
    CurrentMonth,
    /// From three calendar months before the reference instant onwards.
    Last3Months,
    /// From six calendar months before the reference instant onwards.
    Last6Months,
}

impl TimeWindow {
    /// All windows in selector order.
    pub const ALL: [Self; 4] = [Self::All, Self::CurrentMonth, Self::Last3Months, Self::Last6Months];

    /// Canonical name, e.g. `LAST_3_MONTHS`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::CurrentMonth => "CURRENT_MONTH",
            Self::Last3Months => "LAST_3_MONTHS",
            Self::Last6Months => "LAST_6_MONTHS",
        }
    }

    /// Short selector key, e.g. `3months`.
    #[must_use]
    pub const fn selector_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CurrentMonth => "month",
            Self::Last3Months => "3months",
            Self::Last6Months => "6months",
        }
    }

    /// Number of calendar months looked back, for the rolling windows.
    #[must_use]
    pub const fn months_back(self) -> Option<u32> {
        match self {
            Self::Last3Months => Some(3),
            Self::Last6Months => Some(6),
            Self::All | Self::CurrentMonth => None,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeWindow {
    type Err = BrewLogError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|window| {
                needle.eq_ignore_ascii_case(window.name())
                    || needle.eq_ignore_ascii_case(window.selector_key())
            })
            .ok_or_else(|| {
                BrewLogError::parse(format!(
                    "Unknown time window '{needle}', expected one of: all, month, 3months, 6months"
                ))
            })
    }
}

impl TryFrom<String> for TimeWindow {
    type Error = BrewLogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeWindow> for String {
    fn from(window: TimeWindow) -> Self {
        window.name().to_string()
    }
}

/// A single coffee-tasting record.
///
/// Only `id`, `rating` and `date` are required on the wire; everything else
/// defaults so that minimal exports still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeEntry {
    /// Backend identifier.
    pub id: EntryId,
    /// Coffee name.
    #[serde(default)]
    pub name: String,
    /// Author of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Kind of coffee.
    #[serde(
        default,
        deserialize_with = "crate::utils::blank_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub coffee_type: Option<CoffeeType>,
    /// Brew method.
    #[serde(
        default,
        deserialize_with = "crate::utils::blank_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub brew_method: Option<BrewMethod>,
    /// Roast level.
    #[serde(
        default,
        deserialize_with = "crate::utils::blank_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub roast_level: Option<RoastLevel>,
    /// Overall rating, 1-5.
    pub rating: u8,
    /// Optional taste profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_profile: Option<TasteProfile>,
    /// Tasting date.
    #[serde(with = "crate::utils::iso_date", alias = "tastingDate")]
    pub date: NaiveDate,
    /// Free-form tags in the order they were added.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Tasting notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Where the coffee was had.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Map place identifier for `location`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Whether the viewer marked the entry as a favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Like count.
    #[serde(default)]
    pub likes: u32,
}

impl CoffeeEntry {
    /// Creates an entry with the required fields only.
    pub fn new(id: impl Into<String>, rating: u8, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(id),
            name: String::new(),
            user_id: None,
            coffee_type: None,
            brew_method: None,
            roast_level: None,
            rating,
            taste_profile: None,
            date,
            tags: Vec::new(),
            comment: None,
            location: None,
            place_id: None,
            is_favorite: false,
            likes: 0,
        }
    }

    /// Sets the coffee name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(UserId::new(user_id));
        self
    }

    /// Sets the coffee type.
    #[must_use]
    pub fn with_coffee_type(mut self, coffee_type: CoffeeType) -> Self {
        self.coffee_type = Some(coffee_type);
        self
    }

    /// Sets the brew method.
    #[must_use]
    pub fn with_brew_method(mut self, brew_method: BrewMethod) -> Self {
        self.brew_method = Some(brew_method);
        self
    }

    /// Sets the roast level.
    #[must_use]
    pub fn with_roast_level(mut self, roast_level: RoastLevel) -> Self {
        self.roast_level = Some(roast_level);
        self
    }

    /// Sets the taste profile.
    #[must_use]
    pub fn with_taste_profile(mut self, profile: TasteProfile) -> Self {
        self.taste_profile = Some(profile);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the tasting notes.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks the entry as a favorite or not.
    #[must_use]
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}
