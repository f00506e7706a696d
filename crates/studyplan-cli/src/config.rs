//! Configuration file management for studyplan.
//!
//! Provides a TOML-based config file at `~/.config/studyplan/config.toml`
//! and a resolution chain for the data directory: CLI flag > env var >
//! config file > default. The optional `[policy]` table tunes the planner.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use studyplan_core::PlanPolicy;
use studyplan_store::StoreConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub policy: PlanPolicy,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory for courses, availability and the generated plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the studyplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/studyplan` or
/// `~/.config/studyplan`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("studyplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("studyplan")
}

/// Return the path to the studyplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Serialize and write the config file to `path`, creating parent dirs as needed.
pub fn save_config_to(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct StudyplanConfig {
    pub store: StoreConfig,
    pub policy: PlanPolicy,
}

impl StudyplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Data dir: `cli_data_dir` > `STUDYPLAN_DATA_DIR` env > `storage.data_dir` > platform data dir
    /// - Policy: `[policy]` table of the config file, per-field defaults otherwise
    ///
    /// A missing config file is fine; a config file that fails to parse is an error.
    pub fn resolve(cli_data_dir: Option<&Path>) -> Result<Self> {
        let path = config_path();
        let file_config = if path.exists() {
            debug!(path = %path.display(), "loading config file");
            Some(load_config_from(&path)?)
        } else {
            None
        };
        let resolved = Self::resolve_with(cli_data_dir, file_config);
        debug!(
            data_dir = %resolved.store.data_dir.display(),
            policy = ?resolved.policy,
            "resolved configuration"
        );
        Ok(resolved)
    }

    fn resolve_with(cli_data_dir: Option<&Path>, file_config: Option<ConfigFile>) -> Self {
        let (file_data_dir, policy) = match file_config {
            Some(cfg) => (cfg.storage.data_dir, cfg.policy),
            None => (None, PlanPolicy::default()),
        };

        let store = if let Some(dir) = cli_data_dir {
            StoreConfig::new(dir)
        } else if let Some(dir) = std::env::var_os(StoreConfig::ENV_VAR) {
            StoreConfig::new(dir)
        } else if let Some(dir) = file_data_dir {
            StoreConfig::new(dir)
        } else {
            StoreConfig::new(StoreConfig::default_data_dir())
        };

        Self { store, policy }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
