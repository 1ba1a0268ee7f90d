use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::theme::ThemeConfig;

pub const APP_DIR: &str = "reminder-tui";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// How long a confirmation stays in the status bar.
    pub toast_ms: u64,
    /// Empty the draft after a successful add. Off keeps message, date and
    /// time filled in for the next reminder.
    pub reset_draft_after_add: bool,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            toast_ms: 2500,
            reset_draft_after_add: false,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the user config directory. A missing file
    /// means defaults; a file that fails to parse is an error.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}
