//! CLI argument definitions for formsweep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sweep_engine::DEFAULT_PREVIEW_LIMIT;
use sweep_model::DeletionLimits;

#[derive(Parser)]
#[command(
    name = "formsweep",
    version,
    about = "Filter, preview, and bulk-delete spam form entries",
    long_about = "Filter form entries against saved field-match rules, preview the\n\
                  matches, delete them in bounded batches, or import entries from a\n\
                  CSV export for local testing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the entry store.
    #[arg(
        long = "store",
        value_name = "DIR",
        default_value = "entries",
        global = true
    )]
    pub store_dir: PathBuf,

    /// Path to the saved cleaner configuration.
    #[arg(
        long = "config",
        value_name = "FILE",
        default_value = "formsweep.json",
        global = true
    )]
    pub config_path: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show or change the saved filter settings.
    Config(ConfigArgs),

    /// List entries the current rules flag, without touching the store.
    Preview(PreviewArgs),

    /// Delete matching entries in bounded batches.
    Delete(DeleteArgs),

    /// Import entries from a CSV export (testing aid).
    Import(ImportArgs),
}

#[derive(Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the saved settings.
    Show,

    /// Replace the saved settings.
    Set(ConfigSetArgs),
}

#[derive(Parser)]
pub struct ConfigSetArgs {
    /// Form whose entries are scanned.
    #[arg(long = "form-id", value_name = "ID")]
    pub form_id: String,

    /// AND = every rule must match (safer); OR = any rule matches.
    #[arg(long = "logic", value_enum, default_value = "and")]
    pub logic: LogicArg,

    /// Field rule as FIELD=VALUE; repeatable. Use the value `blank` to
    /// flag empty fields.
    #[arg(long = "rule", value_name = "FIELD=VALUE")]
    pub rules: Vec<String>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Maximum matches to collect.
    #[arg(long = "limit", value_name = "N", default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Entries fetched per batch.
    #[arg(long = "batch-size", value_name = "N", default_value_t = DeletionLimits::default().batch_size)]
    pub batch_size: usize,

    /// Cap on successful deletions for this run.
    #[arg(long = "max-run", value_name = "N", default_value_t = DeletionLimits::default().max_deletions_per_run)]
    pub max_deletions_per_run: usize,

    /// Cap on batches scanned this run.
    #[arg(long = "max-batches", value_name = "N", default_value_t = DeletionLimits::default().max_batches)]
    pub max_batches: usize,

    /// Deletions allowed within one batch before moving on.
    #[arg(long = "max-batch-deletions", value_name = "N", default_value_t = DeletionLimits::default().max_deletions_per_batch)]
    pub max_deletions_per_batch: usize,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file to import.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Destination form (defaults to the configured form).
    #[arg(long = "form-id", value_name = "ID")]
    pub form_id: Option<String>,

    /// Column mapping as COLUMN=FIELD_ID; repeatable. Columns mapped to
    /// an empty field id are skipped.
    #[arg(long = "map", value_name = "COLUMN=FIELD_ID")]
    pub map: Vec<String>,
}

/// CLI match logic choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogicArg {
    And,
    Or,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
