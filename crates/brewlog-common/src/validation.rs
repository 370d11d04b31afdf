//! Entry validation rules applied by whoever constructs entries.
//!
//! Aggregation never validates its input. These are the journal form's
//! rules, offered to importers and the CLI so that bad records can be
//! reported before they reach the statistics.

use crate::{BrewLogError, CoffeeEntry, EntryId, TasteDimension};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Allowed range for ratings and taste scores.
pub const SCORE_RANGE: RangeInclusive<u8> = 1..=5;

/// Maximum number of tags per entry.
pub const MAX_TAGS: usize = 10;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Entry the issue belongs to.
    pub entry_id: EntryId,
    /// Offending field, in wire naming.
    pub field: String,
    /// Human readable description.
    pub message: String,
}

impl ValidationIssue {
    fn new(entry_id: &EntryId, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.clone(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {}: {}: {}", self.entry_id, self.field, self.message)
    }
}

impl From<ValidationIssue> for BrewLogError {
    fn from(issue: ValidationIssue) -> Self {
        Self::validation_field(format!("entry {}: {}", issue.entry_id, issue.message), issue.field)
    }
}

/// Outcome of validating a batch of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Number of entries checked.
    pub checked: usize,
    /// Number of entries with at least one issue.
    pub invalid_entries: usize,
    /// Every issue found, grouped by entry in input order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether every entry passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the first issue into an error, if any.
    pub fn into_result(self) -> crate::Result<()> {
        match self.issues.into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }
}

/// Validator for [`CoffeeEntry`] records.
#[derive(Debug, Clone)]
pub struct EntryValidator {
    today: NaiveDate,
    earliest: NaiveDate,
}

impl EntryValidator {
    /// Creates a validator that rejects dates after `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            earliest: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }

    /// Returns every rule the entry breaks.
    #[must_use]
    pub fn validate(&self, entry: &CoffeeEntry) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let id = &entry.id;

        if entry.id.as_str().trim().is_empty() {
            issues.push(ValidationIssue::new(id, "id", "id cannot be empty"));
        }

        if entry.name.trim().is_empty() {
            issues.push(ValidationIssue::new(id, "name", "name cannot be empty"));
        }

        if !SCORE_RANGE.contains(&entry.rating) {
            issues.push(ValidationIssue::new(
                id,
                "rating",
                format!("rating must be between 1 and 5, got {}", entry.rating),
            ));
        }

        if let Some(profile) = &entry.taste_profile {
            for (dimension, score) in profile.scores() {
                if !SCORE_RANGE.contains(&score) {
                    issues.push(ValidationIssue::new(
                        id,
                        taste_field(dimension),
                        format!("{dimension} must be between 1 and 5, got {score}"),
                    ));
                }
            }
        }

        if entry.date > self.today {
            issues.push(ValidationIssue::new(
                id,
                "date",
                format!("date {} is in the future", entry.date),
            ));
        } else if entry.date < self.earliest {
            issues.push(ValidationIssue::new(
                id,
                "date",
                format!("date {} is before {}", entry.date, self.earliest),
            ));
        }

        self.validate_tags(entry, &mut issues);
        issues
    }

    fn validate_tags(&self, entry: &CoffeeEntry, issues: &mut Vec<ValidationIssue>) {
        let id = &entry.id;

        if entry.tags.len() > MAX_TAGS {
            issues.push(ValidationIssue::new(
                id,
                "tags",
                format!("at most {MAX_TAGS} tags are allowed, got {}", entry.tags.len()),
            ));
        }

        let mut seen = HashSet::new();
        for tag in &entry.tags {
            if tag.trim().is_empty() {
                issues.push(ValidationIssue::new(id, "tags", "tags cannot be blank"));
            } else if !seen.insert(tag.as_str()) {
                issues.push(ValidationIssue::new(id, "tags", format!("duplicate tag '{tag}'")));
            }
        }
    }

    /// Validates a batch, collecting every issue.
    pub fn validate_all<'a, I>(&self, entries: I) -> ValidationReport
    where
        I: IntoIterator<Item = &'a CoffeeEntry>,
    {
        let mut report = ValidationReport::default();
        for entry in entries {
            report.checked += 1;
            let issues = self.validate(entry);
            if !issues.is_empty() {
                report.invalid_entries += 1;
                report.issues.extend(issues);
            }
        }
        tracing::debug!(
            checked = report.checked,
            invalid = report.invalid_entries,
            "validated entry batch"
        );
        report
    }
}

fn taste_field(dimension: TasteDimension) -> String {
    format!("tasteProfile.{}", dimension.key())
}
