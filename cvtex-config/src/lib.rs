//! Shared configuration loader for the cvtex tools.
//!
//! `defaults/cvtex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CvtexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use cvtex_babel::rules::ConversionRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/cvtex.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "cvtex.toml";

/// Top-level configuration consumed by the cvtex binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct CvtexConfig {
    pub conversion: ConversionConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the vocabulary shared by the LaTeX and YAML formats.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    pub entry_command: String,
    pub free_text_key: String,
    pub transcript_title: String,
}

impl From<ConversionConfig> for ConversionRules {
    fn from(config: ConversionConfig) -> Self {
        ConversionRules {
            entry_command: config.entry_command,
            free_text_key: config.free_text_key,
            transcript_title: config.transcript_title,
        }
    }
}

impl From<&ConversionConfig> for ConversionRules {
    fn from(config: &ConversionConfig) -> Self {
        ConversionRules {
            entry_command: config.entry_command.clone(),
            free_text_key: config.free_text_key.clone(),
            transcript_title: config.transcript_title.clone(),
        }
    }
}

/// Extensions of the sibling files written when no output path is given.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub yaml_extension: String,
    pub tex_extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CvtexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CvtexConfig, ConfigError> {
    Loader::new().build()
}
