use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the data lives and how pages are sized by default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub delimiter: char,
    pub has_header: bool,
    pub default_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("Popular_Baby_Names.csv"),
            delimiter: ',',
            has_header: true,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "default_page_size must be positive".to_string(),
            ));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> ConfigResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    self.delimiter
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.data_file, PathBuf::from("Popular_Baby_Names.csv"));
        assert_eq!(config.delimiter, ',');
        assert!(config.has_header);
        assert_eq!(config.default_page_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"data_file": "names.tsv", "delimiter": "\t"}"#).unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("names.tsv"));
        assert_eq!(config.delimiter_byte().unwrap(), b'\t');
        assert!(config.has_header);
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_delimiter_byte_rejects_non_ascii() {
        let mut config = ServerConfig::default();
        assert_eq!(config.delimiter_byte().unwrap(), b',');

        // 'é' would truncate to 0xE9, which never occurs in UTF-8 text
        config.delimiter = 'é';
        assert!(matches!(
            config.delimiter_byte(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut config = ServerConfig::new("rows.csv");
        config.default_page_size = 25;
        config.has_header = false;
        config.save(&path).unwrap();

        assert_eq!(ServerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        fs::write(&path, r#"{"default_page_size": 0}"#).unwrap();
        assert!(matches!(
            ServerConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));

        fs::write(&path, r#"{"delimiter": "é"}"#).unwrap();
        assert!(matches!(
            ServerConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ServerConfig::load(&path),
            Err(ConfigError::JsonError(_))
        ));

        assert!(matches!(
            ServerConfig::load(&temp_dir.path().join("missing.json")),
            Err(ConfigError::IoError(_))
        ));
    }
}
