//! Configuration for card file output

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Directory cards are written to unless configured otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "generated_cards";

/// Extension of generated card files
pub const DEFAULT_EXTENSION: &str = "janet";

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where and how generated cards are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving the card files (created if absent)
    pub output_dir: PathBuf,

    /// File extension, without the leading dot
    pub extension: String,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
struct TomlConfig {
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
struct TomlOutput {
    dir: Option<PathBuf>,
    extension: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; absent keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(output) = parsed.output {
            if let Some(dir) = output.dir {
                config.output_dir = dir;
            }
            if let Some(extension) = output.extension {
                config.extension = extension.trim_start_matches('.').to_string();
            }
        }

        Ok(config)
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("generated_cards"));
        assert_eq!(config.extension, "janet");
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneratorConfig::new()
            .with_output_dir("/tmp/cards")
            .with_extension("txt");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/cards"));
        assert_eq!(config.extension, "txt");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[output]
dir = "content/cards"
extension = ".jdn"
"#;
        let config = GeneratorConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.output_dir, PathBuf::from("content/cards"));
        assert_eq!(config.extension, "jdn");
    }

    #[test]
    fn test_parse_toml_partial() {
        let config = GeneratorConfig::from_str("[output]\ndir = \"out\"\n").expect("Should parse");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.extension, "janet");

        let empty = GeneratorConfig::from_str("").expect("Should parse");
        assert_eq!(empty, GeneratorConfig::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = GeneratorConfig::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
