//! Config management use case

use crate::domain::NarrativeBreaks;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, OutputFormat};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for reading and editing a config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a config service for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    fn load(&self) -> Result<Config> {
        if self.path.is_file() {
            Config::load_from_path(&self.path)
        } else {
            Ok(Config::default())
        }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;

        match key {
            "narrative_breaks" => Ok(config.narrative_breaks.to_string()),
            "format" => Ok(config.format.to_string()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: narrative_breaks, format",
                key
            ))),
        }
    }

    /// Set a config value, creating the file if needed
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.load()?;

        match key {
            "narrative_breaks" => {
                config.narrative_breaks =
                    NarrativeBreaks::from_str(value).map_err(DiaryError::Config)?;
            }
            "format" => {
                config.format = OutputFormat::from_str(value).map_err(DiaryError::Config)?;
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: narrative_breaks, format",
                    key
                )));
            }
        }

        config.save_to_path(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::CONFIG_FILE_NAME;
    use tempfile::TempDir;

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join(CONFIG_FILE_NAME));

        assert_eq!(service.get("narrative_breaks").unwrap(), "drop");
        assert_eq!(service.get("format").unwrap(), "text");
        assert_eq!(service.list().unwrap(), Config::default());
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        let service = ConfigService::new(path.clone());

        service.set("narrative_breaks", "preserve").unwrap();
        service.set("format", "html").unwrap();

        assert!(path.exists());
        assert_eq!(service.get("narrative_breaks").unwrap(), "preserve");
        assert_eq!(service.get("format").unwrap(), "html");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join(CONFIG_FILE_NAME));

        assert!(matches!(
            service.get("colour"),
            Err(DiaryError::Config(msg)) if msg.contains("Unknown config key")
        ));
        assert!(service.set("colour", "red").is_err());
    }

    #[test]
    fn test_invalid_value_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        let service = ConfigService::new(path.clone());

        let err = service.set("narrative_breaks", "keep").unwrap_err();
        assert!(err.to_string().contains("Invalid narrative_breaks"));
        assert!(!path.exists());
    }
}
