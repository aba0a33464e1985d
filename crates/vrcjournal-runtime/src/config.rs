use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VRCJOURNAL_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.vrcjournal (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("VRCJOURNAL_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join("vrcjournal"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".vrcjournal"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME or XDG data directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Persistent settings: where the activity-log databases live and where the
/// photo index sits. Sources are handed explicitly to each service call, so
/// this struct is only read at the application boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Activity-log databases written by the external logging tool, in the
    /// order they should be federated.
    #[serde(default)]
    pub log_databases: Vec<PathBuf>,

    /// App-owned photo index. Defaults to `photos.db` in the data directory
    /// when unset.
    #[serde(default)]
    pub photo_database: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn photo_database_path(&self, data_dir: &std::path::Path) -> PathBuf {
        self.photo_database
            .clone()
            .unwrap_or_else(|| data_dir.join("photos.db"))
    }
}
