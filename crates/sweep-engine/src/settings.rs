//! Persistence for the cleaner configuration.
//!
//! Settings are an explicit load/save interface over one pretty-printed
//! JSON file; a missing file loads the documented default (no form, no
//! criteria, AND logic). No ambient global state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use sweep_model::CleanerConfig;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<CleanerConfig> {
        if !self.path.exists() {
            return Ok(CleanerConfig::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read config from {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parse config from {}", self.path.display()))
    }

    pub fn save(&self, config: &CleanerConfig) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config).context("serialize config")?;
        fs::write(&self.path, json)
            .with_context(|| format!("write config to {}", self.path.display()))
    }
}
