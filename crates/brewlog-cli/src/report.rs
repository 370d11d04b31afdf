//! Text and JSON rendering of command results.

use crate::error::CliResult;
use brewlog_common::{excerpt_around, CoffeeEntry, TasteDimension, ValidationReport};
use brewlog_i18n::{LabelCatalog, Message};
use brewlog_stats::{CategoryShare, SearchScope, StatisticsSummary};
use serde::Serialize;

/// Width of the bar charts, in cells.
pub const BAR_WIDTH: usize = 20;

/// Longest tasting-note excerpt shown under a comment search hit, kept
/// around the matched term.
pub const COMMENT_EXCERPT_CHARS: usize = 30;

/// Search hits as written by `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport<'a> {
    /// Term as given.
    pub term: &'a str,
    /// Searched field.
    pub scope: SearchScope,
    /// Number of hits.
    pub count: usize,
    /// Matching entries in journal order.
    pub entries: Vec<&'a CoffeeEntry>,
}

/// Pretty-printed JSON followed by a newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Horizontal bar filled to `fraction` (clamped to 0..=1).
#[must_use]
pub fn bar(fraction: f64, width: usize) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Five-star rating line; scores above 5 show five stars.
#[must_use]
pub fn stars(rating: u8) -> String {
    let full = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

fn heading(out: &mut String, labels: &LabelCatalog, message: Message) {
    out.push_str(&format!("\n{}\n", labels.message(message)));
}

fn no_data(out: &mut String, labels: &LabelCatalog) {
    out.push_str(&format!("  {}\n", labels.message(Message::NoData)));
}

fn breakdown_rows<K>(
    out: &mut String,
    labels: &LabelCatalog,
    rows: &[CategoryShare<K>],
    label: impl Fn(&K) -> String,
) {
    if rows.is_empty() {
        no_data(out, labels);
        return;
    }
    for row in rows {
        out.push_str(&format!(
            "  {} {:>3} ({:>5.1}%)  {}\n",
            bar(row.share, BAR_WIDTH),
            row.count,
            row.share * 100.0,
            label(&row.key)
        ));
    }
}

/// Renders a statistics summary as text.
#[must_use]
pub fn render_summary(summary: &StatisticsSummary, labels: &LabelCatalog) -> String {
    let statistics = &summary.statistics;
    let mut out = String::new();

    out.push_str(&format!("{}\n", labels.message(Message::StatisticsTitle)));
    out.push_str(&format!(
        "{}: {} ({})\n",
        labels.message(Message::Period),
        labels.window(summary.window),
        labels.format_date(summary.reference_date)
    ));
    out.push_str(&format!(
        "{}: {}\n",
        labels.message(Message::TotalEntries),
        statistics.total_count
    ));
    out.push_str(&format!(
        "{}: {:.1} {}\n",
        labels.message(Message::AverageRating),
        statistics.average_rating,
        bar(statistics.average_rating / 5.0, 5)
    ));

    heading(&mut out, labels, Message::ByCoffeeType);
    breakdown_rows(&mut out, labels, &summary.coffee_type_breakdown, |key| {
        labels.coffee_type(key).to_string()
    });

    heading(&mut out, labels, Message::ByBrewMethod);
    breakdown_rows(&mut out, labels, &summary.brew_method_breakdown, |key| {
        labels.brew_method(key).to_string()
    });

    heading(&mut out, labels, Message::TopTags);
    if statistics.top_tags.is_empty() {
        no_data(&mut out, labels);
    }
    for (rank, tag) in statistics.top_tags.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", rank + 1, tag.tag, tag.count));
    }

    heading(&mut out, labels, Message::AverageTasteProfile);
    let taste = &statistics.average_taste_profile;
    if taste.is_empty() {
        no_data(&mut out, labels);
    } else {
        for dimension in TasteDimension::ALL {
            out.push_str(&format!(
                "  {} {:.1}  {}\n",
                bar(taste.bar_fraction(dimension), BAR_WIDTH),
                taste.get(dimension),
                labels.taste_dimension(dimension)
            ));
        }
    }

    heading(&mut out, labels, Message::RecentEntries);
    if summary.recent_entries.is_empty() {
        no_data(&mut out, labels);
    }
    for entry in &summary.recent_entries {
        out.push_str(&format!(
            "  {}  {}  {}\n",
            labels.format_date(entry.date),
            stars(entry.rating),
            entry.name
        ));
    }

    out
}

/// Renders search hits as text.
#[must_use]
pub fn render_search(report: &SearchReport<'_>, labels: &LabelCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: \"{}\" ({})\n",
        labels.message(Message::SearchResults),
        report.term,
        report.scope
    ));
    out.push_str(&format!("{}\n", labels.results_found(report.count)));

    for entry in &report.entries {
        out.push_str(&format!(
            "  {}  {}  {}",
            labels.format_date(entry.date),
            stars(entry.rating),
            entry.name
        ));
        if let Some(location) = entry.location.as_deref().filter(|l| !l.is_empty()) {
            out.push_str(&format!(" @ {location}"));
        }
        if !entry.tags.is_empty() {
            out.push_str(&format!("  #{}", entry.tags.join(" #")));
        }
        out.push('\n');

        if report.scope == SearchScope::Comment {
            if let Some(comment) = entry.comment.as_deref().filter(|c| !c.is_empty()) {
                let excerpt = excerpt_around(comment, report.term, COMMENT_EXCERPT_CHARS);
                out.push_str(&format!("    {excerpt}\n"));
            }
        }
    }
    out
}

/// Renders a validation report as text.
#[must_use]
pub fn render_validation(report: &ValidationReport, labels: &LabelCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", labels.message(Message::ValidationResults)));
    out.push_str(&format!(
        "{}\n",
        labels.invalid_entries(report.invalid_entries, report.checked)
    ));
    for issue in &report.issues {
        out.push_str(&format!("  {issue}\n"));
    }
    out
}
