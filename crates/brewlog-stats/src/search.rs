//! Entry search and simple selections.
//!
//! All functions borrow their input and return matches in input order.

use brewlog_common::{BrewLogError, CoffeeEntry, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Which part of an entry a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Coffee name.
    #[default]
    Coffee,
    /// Coffee name or tasting notes.
    Comment,
    /// Location name.
    Location,
    /// Any tag.
    Tags,
}

impl SearchScope {
    /// All scopes.
    pub const ALL: [Self; 4] = [Self::Coffee, Self::Comment, Self::Location, Self::Tags];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Comment => "comment",
            Self::Location => "location",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchScope {
    type Err = BrewLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| s.trim().eq_ignore_ascii_case(scope.name()))
            .ok_or_else(|| {
                BrewLogError::parse(format!(
                    "Unknown search scope '{s}', expected one of: coffee, comment, location, tags"
                ))
            })
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches(entry: &CoffeeEntry, needle: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Coffee => contains_ignore_case(&entry.name, needle),
        SearchScope::Comment => {
            contains_ignore_case(&entry.name, needle)
                || entry
                    .comment
                    .as_deref()
                    .is_some_and(|comment| contains_ignore_case(comment, needle))
        }
        SearchScope::Location => contains_ignore_case(entry.location.as_deref().unwrap_or_default(), needle),
        // An empty term selects nothing here; the tag view shows no results
        // until something is typed.
        SearchScope::Tags => {
            !needle.is_empty() && entry.tags.iter().any(|tag| contains_ignore_case(tag, needle))
        }
    }
}

/// Entries matching `term` in `scope`, case-insensitively.
///
/// An empty term matches every entry, except in [`SearchScope::Tags`] where
/// it matches none.
pub fn search_entries<'a, I>(entries: I, term: &str, scope: SearchScope) -> Vec<&'a CoffeeEntry>
where
    I: IntoIterator<Item = &'a CoffeeEntry>,
{
    let needle = term.trim().to_lowercase();
    let found: Vec<&CoffeeEntry> = entries
        .into_iter()
        .filter(|entry| matches(entry, &needle, scope))
        .collect();
    tracing::debug!(%scope, term, found = found.len(), "searched entries");
    found
}

/// Entries marked as favorites.
pub fn favorites<'a, I>(entries: I) -> Vec<&'a CoffeeEntry>
where
    I: IntoIterator<Item = &'a CoffeeEntry>,
{
    entries.into_iter().filter(|entry| entry.is_favorite).collect()
}

/// Entries logged by `user`.
pub fn owned_by<'a, I>(entries: I, user: &UserId) -> Vec<&'a CoffeeEntry>
where
    I: IntoIterator<Item = &'a CoffeeEntry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.user_id.as_ref() == Some(user))
        .collect()
}

/// Every tag used, deduplicated, in first-appearance order.
pub fn distinct_tags<'a, I>(entries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a CoffeeEntry>,
{
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .flat_map(|entry| entry.tags.iter().map(String::as_str))
        .filter(|tag| seen.insert(*tag))
        .collect()
}
