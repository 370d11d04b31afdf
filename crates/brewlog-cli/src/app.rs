//! Command execution.

use crate::cli::{Cli, Commands, FormatArg, SearchArgs, StatsArgs, ValidateArgs};
use crate::error::CliResult;
use crate::input::load_entries;
use crate::report::{self, SearchReport};
use brewlog_common::{CoffeeEntry, EntryValidator, UserId};
use brewlog_config::{Config, OutputFormat};
use brewlog_i18n::{catalog, LabelCatalog};
use brewlog_stats::{
    favorites, owned_by, search_entries, AggregationConfig, SearchScope, StatisticsAggregator,
};
use chrono::{Local, NaiveDateTime, NaiveTime};
use std::io::Write;
use std::process::ExitCode;
use tracing::{info, warn};

/// How a command ended, independent of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything went fine.
    Success,
    /// `validate` found invalid entries.
    InvalidEntries,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::InvalidEntries => Self::FAILURE,
        }
    }
}

/// Options shared by every command after merging the command line over the
/// configuration.
struct Session<'c> {
    config: &'c Config,
    labels: &'static LabelCatalog,
}

impl Session<'_> {
    fn format(&self, flag: Option<FormatArg>) -> OutputFormat {
        flag.map_or(self.config.display.format, OutputFormat::from)
    }
}

/// Runs the parsed command line, writing reports to `out`.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> CliResult<Outcome> {
    let session = Session {
        config,
        labels: catalog(cli.locale.unwrap_or(config.display.locale)),
    };

    match &cli.command {
        Commands::Stats(args) => stats(&session, args, out),
        Commands::Search(args) => search(&session, args, out),
        Commands::Validate(args) => validate(&session, args, out),
    }
}

fn stats<W: Write>(session: &Session<'_>, args: &StatsArgs, out: &mut W) -> CliResult<Outcome> {
    let entries = load_entries(&args.file)?;
    let window = args.window.unwrap_or(session.config.stats.default_window);
    let reference = args.as_of.map_or_else(
        || Local::now().naive_local(),
        |date| NaiveDateTime::new(date, NaiveTime::MIN),
    );

    let mut aggregation = AggregationConfig::from(&session.config.stats);
    if let Some(top) = args.top {
        aggregation.top_tags_limit = top;
    }

    let selection: Vec<&CoffeeEntry> = match &args.user {
        Some(user) => owned_by(&entries, &UserId::new(user.as_str())),
        None => entries.iter().collect(),
    };

    let summary = StatisticsAggregator::new(aggregation).summarize(selection, window, reference);
    info!(
        window = %window,
        reference = %reference,
        loaded = entries.len(),
        counted = summary.statistics.total_count,
        "computed statistics"
    );

    let rendered = match session.format(args.format) {
        OutputFormat::Json => report::to_json(&summary)?,
        OutputFormat::Text => report::render_summary(&summary, session.labels),
    };
    out.write_all(rendered.as_bytes())?;
    Ok(Outcome::Success)
}

fn search<W: Write>(session: &Session<'_>, args: &SearchArgs, out: &mut W) -> CliResult<Outcome> {
    let entries = load_entries(&args.file)?;
    let pool: Vec<&CoffeeEntry> = if args.favorites {
        favorites(&entries)
    } else {
        entries.iter().collect()
    };

    let scope = SearchScope::from(args.scope);
    let hits = search_entries(pool, &args.term, scope);
    info!(term = %args.term, %scope, hits = hits.len(), "searched entries");

    let report = SearchReport {
        term: &args.term,
        scope,
        count: hits.len(),
        entries: hits,
    };
    let rendered = match session.format(args.format) {
        OutputFormat::Json => report::to_json(&report)?,
        OutputFormat::Text => report::render_search(&report, session.labels),
    };
    out.write_all(rendered.as_bytes())?;
    Ok(Outcome::Success)
}

fn validate<W: Write>(session: &Session<'_>, args: &ValidateArgs, out: &mut W) -> CliResult<Outcome> {
    let entries = load_entries(&args.file)?;
    let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let report = EntryValidator::new(today).validate_all(&entries);

    let rendered = match session.format(args.format) {
        OutputFormat::Json => report::to_json(&report)?,
        OutputFormat::Text => report::render_validation(&report, session.labels),
    };
    out.write_all(rendered.as_bytes())?;

    if report.is_valid() {
        info!(checked = report.checked, "all entries valid");
        Ok(Outcome::Success)
    } else {
        warn!(
            checked = report.checked,
            invalid = report.invalid_entries,
            issues = report.issues.len(),
            "invalid entries found"
        );
        Ok(Outcome::InvalidEntries)
    }
}
