use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the hearthmate data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. HEARTHMATE_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.hearthmate (fallback for systems without a standard data directory)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: HEARTHMATE_PATH environment variable
    if let Ok(env_path) = std::env::var("HEARTHMATE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("hearthmate"));
    }

    // Priority 4: Fallback to ~/.hearthmate
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".hearthmate"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Lifetime cap on crash reports submitted per process
    #[serde(default = "default_max_reports")]
    pub max_reports: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            max_reports: default_max_reports(),
        }
    }
}

fn default_max_reports() -> usize {
    hearthmate_diagnostics::DEFAULT_MAX_SENT
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_path(None)?.join("config.toml"))
    }
}
