//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the generator works without a
//! config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::lookup::mojang::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::nickname::generator::DEFAULT_BATCH_SIZE;
use crate::nickname::mutator::{DEFAULT_PREFIXES, DEFAULT_SUFFIXES};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub existence: ExistenceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Vocabulary, affixes and retry policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Word list to draw from instead of the bundled one.
    #[serde(default)]
    pub words_path: Option<PathBuf>,
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    /// Names buffered before each write to the save file.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Attempts allowed per accepted name. Unset means retry forever.
    #[serde(default)]
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            prefixes: default_prefixes(),
            suffixes: default_suffixes(),
            batch_size: default_batch_size(),
            max_attempts: None,
        }
    }
}

/// Profile lookup endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistenceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ExistenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
        }
    }
}

/// Diagnostic log settings. Levels use `tracing` filter syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_console_level")]
    pub console_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_level(),
            console_level: default_console_level(),
        }
    }
}

fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect()
}
fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}
fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_timeout_secs() -> u64 {
    5
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_save_path() -> PathBuf {
    PathBuf::from(".generated_nicks")
}
fn default_log_file() -> PathBuf {
    PathBuf::from("randomnickgen.log")
}
fn default_level() -> String {
    "debug".to_string()
}
fn default_console_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generator.batch_size, 1000);
        assert_eq!(config.generator.prefixes.len(), 6);
        assert_eq!(config.existence.timeout_secs, 5);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [generator]
            suffixes = ["pro"]
            max_attempts = 50

            [output]
            save_path = "/tmp/nicks"
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.suffixes, vec!["pro"]);
        assert_eq!(config.generator.prefixes, default_prefixes());
        assert_eq!(config.generator.max_attempts, Some(50));
        assert_eq!(config.output.save_path, PathBuf::from("/tmp/nicks"));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_serialized_defaults_parse_back() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
