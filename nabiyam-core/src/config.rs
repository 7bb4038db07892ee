use crate::error::ConfigError;
use crate::greeting::GreetingStyle;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Env var that overrides `reply_delay_ms`.
pub const DELAY_ENV: &str = "NABIYAM_REPLY_DELAY_MS";

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Pause before the bot answers. 0 answers right away.
    pub reply_delay_ms: u64,
    pub greeting: GreetingStyle,
    pub bot_name: String,
    pub log_level: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            greeting: GreetingStyle::Classic,
            bot_name: "YUM:AI".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise the platform config dir is
    /// tried and a missing file there means defaults. The delay env var is
    /// applied last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match default_path() {
                Some(path) if path.exists() => Self::load(&path)?,
                _ => Self::default(),
            },
        };

        if let Ok(raw) = std::env::var(DELAY_ENV) {
            config.apply_delay_override(&raw);
        }

        Ok(config)
    }

    /// Apply a textual delay override; unparsable values are ignored.
    pub fn apply_delay_override(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.reply_delay_ms = ms,
            Err(_) => tracing::warn!("Ignoring {}={:?}: not a number", DELAY_ENV, raw),
        }
    }
}

/// `<config dir>/nabiyam/config.json` for the current platform.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "NabiYam", "nabiyam").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
