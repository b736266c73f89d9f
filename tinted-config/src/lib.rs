//! Shared configuration loader for the tinted toolchain.
//!
//! `defaults/tinted.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TintedConfig`].
//!
//! Besides rendering knobs, a configuration may declare extra languages as
//! ordered pattern tables (see [`LanguageConfig`]); [`TintedConfig::registry`]
//! compiles them on top of the built-in languages.

mod languages;

pub use languages::{GroupConfig, LanguageConfig, PatternConfig};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tinted_html::HtmlOptions;
use tinted_lexer::{Registry, StreamOptions};
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/tinted.default.toml");

/// Top-level configuration consumed by tinted applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TintedConfig {
    pub render: RenderConfig,
    pub stream: StreamConfig,
    pub batch: BatchConfig,
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

/// Markup knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub class_prefix: String,
    pub language_attribute: String,
    pub default_language: String,
}

/// Chunking for the streaming paths.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    pub chunk_size: usize,
    pub large_chunk_size: usize,
    pub lookback: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub slice_size: usize,
}

impl TintedConfig {
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            class_prefix: self.render.class_prefix.clone(),
            language_attribute: self.render.language_attribute.clone(),
            default_language: self.render.default_language.clone(),
            large_chunk_size: self.stream.large_chunk_size,
            lookback: self.stream.lookback,
            slice_size: self.batch.slice_size,
        }
    }

    pub fn stream_options(&self) -> StreamOptions {
        StreamOptions {
            chunk_size: self.stream.chunk_size,
            lookback: self.stream.lookback,
        }
    }

    /// Built-in languages plus the ones declared under `[[languages]]`.
    ///
    /// A declared language replaces a built-in of the same name.
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        let mut registry = Registry::builtin().clone();
        for language in &self.languages {
            let grammar = language
                .to_grammar()
                .map_err(|e| ConfigError::Message(e.to_string()))?;
            debug!(
                language = grammar.name(),
                groups = grammar.groups().len(),
                "registered configured language"
            );
            registry.register(grammar);
        }
        Ok(registry)
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

    /// Layer configuration given as TOML text.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
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
    pub fn build(self) -> Result<TintedConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TintedConfig, ConfigError> {
    Loader::new().build()
}
