use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides where vesh keeps its config and language files.
pub const HOME_ENV: &str = "VESH_HOME";

const CONFIG_FILE: &str = "config.toml";
const LANGUAGES_DIR: &str = "languages";

/// The persisted record. Every field is optional so that an old or partial
/// file still loads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_theme: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Program used by `run` instead of picking one from the script extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShellPaths {
    pub home: PathBuf,
    pub config_file: PathBuf,
    pub languages_dir: PathBuf,
}

impl ShellPaths {
    pub fn discover() -> Self {
        let home = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("vesh")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::at(home)
    }

    pub fn at(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            config_file: home.join(CONFIG_FILE),
            languages_dir: home.join(LANGUAGES_DIR),
            home,
        }
    }
}

/// A missing file is not an error: a fresh install simply has no config yet.
pub fn load_config(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(ShellConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ShellConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Rewrites the whole file; nothing is patched in place.
pub fn save_config(path: &Path, config: &ShellConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved config to {}", path.display());
    Ok(())
}
