//! Conversion settings.
//!
//! The command-line tool always runs with [`ConvertConfig::default`], whose
//! values are the fixed constants of the output layout. Library callers may
//! override them, e.g. to write into a different directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings for a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Directory receiving one XML file per image
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Suffix cut from image file names to build the output stem
    #[serde(default = "default_image_suffix")]
    pub image_suffix: String,

    /// Label written into `<folder>` and `<database>`
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Value written into `<depth>`
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Log verbosity when `RUST_LOG` is not set
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(constants::OUTPUT_DIR)
}

fn default_image_suffix() -> String {
    constants::IMAGE_SUFFIX.to_string()
}

fn default_database_name() -> String {
    constants::DATABASE_NAME.to_string()
}

fn default_depth() -> u32 {
    constants::IMAGE_DEPTH
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            image_suffix: default_image_suffix(),
            database_name: default_database_name(),
            depth: default_depth(),
            log_level: LogLevel::default(),
        }
    }
}

impl ConvertConfig {
    /// Create a config with the default output layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_output_layout() {
        let config = ConvertConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("annotations_pascalformat"));
        assert_eq!(config.image_suffix, ".jpg");
        assert_eq!(config.database_name, "COCO2014pascalformat");
        assert_eq!(config.depth, 3);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ConvertConfig =
            serde_json::from_str(r#"{"output_dir": "out", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.database_name, "COCO2014pascalformat");
    }

    #[test]
    fn test_builder_setters() {
        let config = ConvertConfig::new()
            .output_dir("/tmp/voc")
            .log_level(LogLevel::Info);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/voc"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.depth, 3);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}
