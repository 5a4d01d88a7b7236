//! Command implementations. Each returns data; rendering lives in
//! `summary`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use sweep_engine::{ConfigStore, JsonEntryStore, preview_matches, run_deletion};
use sweep_ingest::{import_table, parse_table};
use sweep_model::{
    CleanerConfig, Criterion, DeletionLimits, DeletionReport, Entry, ImportMapping, ImportReport,
    MatchLogic,
};

use crate::cli::{ConfigSetArgs, DeleteArgs, ImportArgs, LogicArg, PreviewArgs};

/// Matches found by `preview`, together with the config that found them
/// (the summary renders one column per criterion field).
pub struct PreviewResult {
    pub config: CleanerConfig,
    pub matches: Vec<Entry>,
}

pub fn load_config(config_path: &Path) -> Result<CleanerConfig> {
    ConfigStore::new(config_path).load()
}

pub fn run_config_set(config_path: &Path, args: &ConfigSetArgs) -> Result<CleanerConfig> {
    let mut criteria = Vec::new();
    for rule in &args.rules {
        let (field_id, value) = split_pair(rule)
            .with_context(|| format!("invalid rule {rule:?}; expected FIELD=VALUE"))?;
        // Half-empty rules are dropped, matching the settings form.
        if field_id.trim().is_empty() || value.trim().is_empty() {
            continue;
        }
        criteria.push(Criterion::new(field_id, value));
    }
    let config = CleanerConfig {
        form_id: args.form_id.trim().to_string(),
        criteria,
        logic: match args.logic {
            LogicArg::And => MatchLogic::And,
            LogicArg::Or => MatchLogic::Or,
        },
    };
    ConfigStore::new(config_path).save(&config)?;
    info!(form_id = %config.form_id, rules = config.criteria.len(), "settings saved");
    Ok(config)
}

pub fn run_preview(
    store_dir: &Path,
    config_path: &Path,
    args: &PreviewArgs,
) -> Result<PreviewResult> {
    let config = load_config(config_path)?;
    let store = JsonEntryStore::open(store_dir)
        .with_context(|| format!("open entry store at {}", store_dir.display()))?;
    let matches = preview_matches(&store, &config, args.limit)?;
    Ok(PreviewResult { config, matches })
}

pub fn run_delete(
    store_dir: &Path,
    config_path: &Path,
    args: &DeleteArgs,
) -> Result<DeletionReport> {
    let config = load_config(config_path)?;
    let mut store = JsonEntryStore::open(store_dir)
        .with_context(|| format!("open entry store at {}", store_dir.display()))?;
    let limits = DeletionLimits {
        batch_size: args.batch_size,
        max_deletions_per_run: args.max_deletions_per_run,
        max_batches: args.max_batches,
        max_deletions_per_batch: args.max_deletions_per_batch,
    };
    run_deletion(&mut store, &config, &limits)
}

pub fn run_import(store_dir: &Path, config_path: &Path, args: &ImportArgs) -> Result<ImportReport> {
    let config = load_config(config_path)?;
    let form_id = args
        .form_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or(config.form_id);
    if form_id.trim().is_empty() {
        bail!("no destination form id; pass --form-id or save one with `config set`");
    }

    let table = parse_table(&args.csv)?;
    let mut pairs = Vec::new();
    for raw in &args.map {
        let (column, field_id) = split_pair(raw)
            .with_context(|| format!("invalid mapping {raw:?}; expected COLUMN=FIELD_ID"))?;
        pairs.push((column, field_id));
    }
    let mapping = ImportMapping::from_pairs(pairs);

    let mut store = JsonEntryStore::open(store_dir)
        .with_context(|| format!("open entry store at {}", store_dir.display()))?;
    let report = import_table(&mut store, &form_id, &table, &mapping);
    info!(
        imported = report.imported,
        errors = report.errors.len(),
        "import finished"
    );
    Ok(report)
}

fn split_pair(raw: &str) -> Option<(String, String)> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
}
