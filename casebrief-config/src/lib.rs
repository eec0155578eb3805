//! Shared configuration loader for the casebrief toolchain.
//!
//! `defaults/casebrief.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CasebriefConfig`].

use casebrief_fmt::{FormatterOptions, PageOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/casebrief.default.toml");

/// Top-level configuration consumed by casebrief applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CasebriefConfig {
    pub formatter: FormatterConfig,
    pub page: PageConfig,
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatterConfig {
    pub merge_adjacent_lists: bool,
}

impl From<&FormatterConfig> for FormatterOptions {
    fn from(config: &FormatterConfig) -> Self {
        FormatterOptions {
            merge_adjacent_lists: config.merge_adjacent_lists,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub container_class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub format: String,
    pub title: String,
    pub custom_css: Option<String>,
}

impl CasebriefConfig {
    pub fn formatter_options(&self) -> FormatterOptions {
        FormatterOptions::from(&self.formatter)
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            container_class: self.page.container_class.clone(),
            formatter: self.formatter_options(),
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
    pub fn build(self) -> Result<CasebriefConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CasebriefConfig, ConfigError> {
    Loader::new().build()
}
