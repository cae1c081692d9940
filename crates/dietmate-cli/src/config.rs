//! Configuration file management for dietmate.
//!
//! Provides a TOML-based config file at `~/.config/dietmate/config.toml` and
//! a resolution chain for the data directory:
//! CLI flag > `DIETMATE_DATA_DIR` env var > config file > `~/.dietmate`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use dietmate_core::shopping::DEFAULT_HEADER;
use dietmate_store::StoreConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the JSON data files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSection {
    /// First line of an exported shopping list.
    #[serde(default = "default_header")]
    pub shopping_list_header: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            shopping_list_header: default_header(),
        }
    }
}

fn default_header() -> String {
    DEFAULT_HEADER.to_owned()
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the dietmate config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/dietmate` or `~/.config/dietmate`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("dietmate");
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("dietmate")
}

/// Return the path to the dietmate config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Parse a config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Load the config file if it exists. A present but malformed file is an error.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    load_config_from(&path).map(Some)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(path)
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct DietmateConfig {
    pub store_config: StoreConfig,
    pub shopping_list_header: String,
}

impl DietmateConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    pub fn resolve(cli_data_dir: Option<&Path>) -> Result<Self> {
        let file_config = load_config()?.unwrap_or_default();

        let data_dir = if let Some(dir) = cli_data_dir {
            dir.to_path_buf()
        } else if let Some(dir) = StoreConfig::env_data_dir() {
            dir
        } else if let Some(dir) = file_config.storage.data_dir {
            dir
        } else {
            StoreConfig::default_data_dir()
        };

        tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

        Ok(Self {
            store_config: StoreConfig::new(data_dir),
            shopping_list_header: file_config.export.shopping_list_header,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
