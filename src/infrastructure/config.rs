//! Configuration management

use crate::domain::{DiaryParser, NarrativeBreaks};
use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the per-directory config file
pub const CONFIG_FILE_NAME: &str = ".diarylog.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "DIARYLOG_CONFIG";

/// How a single entry is printed by `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Invalid format: '{}'. Valid values: text, html", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Html => f.write_str("html"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub narrative_breaks: NarrativeBreaks,
    pub format: OutputFormat,
}

impl Config {
    /// Load config from an explicit TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::Config(format!("Config file not found: {}", path.display()))
            } else {
                DiaryError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to a TOML file, creating parent directories as needed
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Path the config is read from and written to.
    ///
    /// `DIARYLOG_CONFIG` wins when set; otherwise `.diarylog.toml` in the
    /// current directory.
    pub fn location() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(std::env::current_dir()?.join(CONFIG_FILE_NAME)),
        }
    }

    /// Discover config using the environment and the current directory
    pub fn discover() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir, explicit.as_deref())
    }

    /// Discover config from an explicit file or a directory.
    ///
    /// An explicit file must exist. A missing `.diarylog.toml` in `dir`
    /// falls back to defaults.
    pub fn discover_from(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::load_from_path(path);
        }

        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load_from_path(&path)
        } else {
            log::debug!("no config file in {}, using defaults", dir.display());
            Ok(Config::default())
        }
    }

    /// Parser configured from these settings
    pub fn parser(&self) -> DiaryParser {
        DiaryParser::new(self.narrative_breaks)
    }
}
