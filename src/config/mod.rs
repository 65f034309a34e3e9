use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_duration;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger")]
    pub ledger: String,
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_ledger() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mate.csv")
        .to_string_lossy()
        .to_string()
}
fn default_daily_target() -> String {
    "7h30m".to_string()
}
fn default_separator() -> String {
    "---".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            daily_target: default_daily_target(),
            separator: default_separator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mate")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mate.yaml")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        // fail early on a bad target instead of at the first `info`
        cfg.daily_target()?;

        tracing::debug!(path = %path.display(), ?cfg, "loaded configuration");
        Ok(cfg)
    }

    /// Write the defaults to `path` (or the default location).
    /// An existing file is never overwritten.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() {
            return Err(AppError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger)
    }

    pub fn daily_target(&self) -> AppResult<TimeDelta> {
        parse_duration(&self.daily_target)
    }
}
