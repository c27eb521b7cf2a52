//! Shared configuration loader for the quill toolchain.
//!
//! `defaults/quill.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuillConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quill_babel::formats::markdown::{MarkdownExportOptions, MarkdownImportOptions};
use quill_babel::sync::SyncOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/quill.default.toml");

/// Top-level configuration consumed by quill applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuillConfig {
    pub export: ExportConfig,
    pub import: ImportConfig,
    pub sync: SyncConfig,
}

/// Document → Markdown knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub convert_tags: bool,
    pub code_fonts: Vec<String>,
}

impl From<ExportConfig> for MarkdownExportOptions {
    fn from(config: ExportConfig) -> Self {
        MarkdownExportOptions {
            convert_tags: config.convert_tags,
            code_fonts: config.code_fonts,
        }
    }
}

impl From<&ExportConfig> for MarkdownExportOptions {
    fn from(config: &ExportConfig) -> Self {
        config.clone().into()
    }
}

/// Markdown → document knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub code_font: String,
    pub list_id: String,
}

impl From<ImportConfig> for MarkdownImportOptions {
    fn from(config: ImportConfig) -> Self {
        MarkdownImportOptions {
            code_font: config.code_font,
            list_id: config.list_id,
        }
    }
}

impl From<&ImportConfig> for MarkdownImportOptions {
    fn from(config: &ImportConfig) -> Self {
        config.clone().into()
    }
}

/// Note ⇄ document sync knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Tag marking a note as backed by a document.
    pub note_tag: String,
}

/// Sync settings draw on all three sections: the tag from `[sync]`, and the conversion
/// options from `[export]` and `[import]`.
impl From<&QuillConfig> for SyncOptions {
    fn from(config: &QuillConfig) -> Self {
        SyncOptions {
            note_tag: config.sync.note_tag.clone(),
            export: (&config.export).into(),
            import: (&config.import).into(),
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
    pub fn build(self) -> Result<QuillConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuillConfig, ConfigError> {
    Loader::new().build()
}
