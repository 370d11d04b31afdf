//! Command line definitions.

use brewlog_common::TimeWindow;
use brewlog_config::{OutputFormat, TOP_TAGS_RANGE};
use brewlog_i18n::Locale;
use brewlog_stats::SearchScope;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Coffee journal statistics, search and validation.
#[derive(Debug, Parser)]
#[command(name = "brewlog")]
#[command(
    author,
    version,
    about = "Statistics, search and validation for coffee journal exports"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a configuration file (.toml, .yaml or .yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale for labels and dates (ja, ja-JP, en, en-US)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize entries inside a time window
    Stats(StatsArgs),

    /// Find entries by name, notes, location or tag
    #[command(visible_alias = "find")]
    Search(SearchArgs),

    /// Check entries against the journal's input rules
    Validate(ValidateArgs),
}

/// Arguments of `brewlog stats`.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Journal export: a JSON array of entries or `{"entries": [...]}`; `-` reads stdin
    pub file: PathBuf,

    /// Time window: all, month, 3months or 6months
    #[arg(short, long)]
    pub window: Option<TimeWindow>,

    /// Reference date (YYYY-MM-DD); defaults to now
    #[arg(long, value_parser = brewlog_common::parse_iso_date)]
    pub as_of: Option<NaiveDate>,

    /// Only count entries written by this user
    #[arg(short, long)]
    pub user: Option<String>,

    /// Number of tags in the ranking (1-50)
    #[arg(long, value_parser = parse_top_tags)]
    pub top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments of `brewlog search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Journal export; `-` reads stdin
    pub file: PathBuf,

    /// Search term, matched case-insensitively
    pub term: String,

    /// Field to search
    #[arg(short, long, value_enum, default_value = "coffee")]
    pub scope: ScopeArg,

    /// Only search favorite entries
    #[arg(long)]
    pub favorites: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments of `brewlog validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Journal export; `-` reads stdin
    pub file: PathBuf,

    /// Latest allowed tasting date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = brewlog_common::parse_iso_date)]
    pub as_of: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Parses `--top` with the same bounds the configuration enforces.
fn parse_top_tags(raw: &str) -> Result<usize, String> {
    let limit: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number"))?;
    if TOP_TAGS_RANGE.contains(&limit) {
        Ok(limit)
    } else {
        Err(format!(
            "must be between {} and {}",
            TOP_TAGS_RANGE.start(),
            TOP_TAGS_RANGE.end()
        ))
    }
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// `--scope` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Coffee name
    Coffee,
    /// Coffee name or tasting notes
    Comment,
    /// Location
    Location,
    /// Tags
    Tags,
}

impl From<ScopeArg> for SearchScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Coffee => Self::Coffee,
            ScopeArg::Comment => Self::Comment,
            ScopeArg::Location => Self::Location,
            ScopeArg::Tags => Self::Tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from([
            "brewlog",
            "stats",
            "journal.json",
            "--window",
            "LAST_3_MONTHS",
            "--as-of",
            "2024-04-01",
            "--top",
            "3",
            "--locale",
            "en",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.locale, Some(Locale::English));
        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.file, PathBuf::from("journal.json"));
                assert_eq!(args.window, Some(TimeWindow::Last3Months));
                assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2024, 4, 1));
                assert_eq!(args.top, Some(3));
                assert_eq!(args.format, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_window_accepts_selector_keys() {
        let cli = Cli::try_parse_from(["brewlog", "stats", "j.json", "-w", "6months"]).unwrap();
        match cli.command {
            Commands::Stats(args) => assert_eq!(args.window, Some(TimeWindow::Last6Months)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::try_parse_from(["brewlog", "find", "j.json", "ナッツ"]).unwrap();
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.term, "ナッツ");
                assert_eq!(SearchScope::from(args.scope), SearchScope::Coffee);
                assert!(!args.favorites);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(Cli::try_parse_from(["brewlog", "stats", "j.json", "--window", "year"]).is_err());
        assert!(Cli::try_parse_from(["brewlog", "stats", "j.json", "--as-of", "2024/04/01"]).is_err());
        assert!(Cli::try_parse_from(["brewlog", "validate", "j.json", "--locale", "fr"]).is_err());
        assert!(Cli::try_parse_from(["brewlog", "search", "j.json"]).is_err());
    }

    #[test]
    fn test_top_is_range_checked() {
        for bad in ["0", "51", "100000", "-1", "five"] {
            assert!(
                Cli::try_parse_from(["brewlog", "stats", "j.json", "--top", bad]).is_err(),
                "--top {bad} should be rejected"
            );
        }
        for good in ["1", "50"] {
            assert!(Cli::try_parse_from(["brewlog", "stats", "j.json", "--top", good]).is_ok());
        }
    }
}
