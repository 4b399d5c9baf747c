//! Configuration loader for the wkt toolchain.
//!
//! `defaults/wkt.default.toml` is embedded into the crate so documented defaults and runtime
//! behavior stay in sync. Callers layer user files and single-key overrides on top via
//! [`Loader`] before deserializing into [`WktConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/wkt.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WktConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Limits applied before text reaches the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Largest accepted input in bytes; 0 means unlimited
    pub max_input_bytes: usize,
    /// Deepest accepted geometry nesting
    pub max_depth: usize,
}

impl ParserConfig {
    /// Whether `len` bytes of input exceed the configured limit
    pub fn exceeds_limit(&self, len: usize) -> bool {
        self.max_input_bytes != 0 && len > self.max_input_bytes
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub default_format: String,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
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

    /// Layer an optional configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WktConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WktConfig, ConfigError> {
    Loader::new().build()
}
