//! Format lookup by name and by file extension
//!
//! The registry owns one instance of every format. Built-in formats are registered by
//! [`FormatRegistry::with_options`], which is where the Markdown export and import options
//! enter; callers then only deal in format names and file paths.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{DocJsonFormat, MarkdownExportOptions, MarkdownFormat, MarkdownImportOptions};
use crate::model::Document;
use std::collections::BTreeMap;
use std::path::Path;

/// Formats keyed by name, iterated in name order.
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// A registry with no formats.
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// Built-in formats with default options.
    pub fn with_defaults() -> Self {
        Self::with_options(
            MarkdownExportOptions::default(),
            MarkdownImportOptions::default(),
        )
    }

    /// Built-in formats, with Markdown configured by `export` and `import`.
    pub fn with_options(export: MarkdownExportOptions, import: MarkdownImportOptions) -> Self {
        let mut registry = Self::new();
        registry.register(MarkdownFormat::new(export, import));
        registry.register(DocJsonFormat);
        registry
    }

    /// Add `format`, replacing any format of the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|format| format.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// All formats, ordered by name.
    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> + '_ {
        self.formats.values().map(|format| format.as_ref())
    }

    /// The format claiming the extension of `path`.
    pub fn detect(&self, path: impl AsRef<Path>) -> Result<&dyn Format, FormatError> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.formats().find(|format| format.claims_extension(ext)))
            .ok_or_else(|| FormatError::UnknownExtension(path.display().to_string()))
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        self.get(format)?.parse(source)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(doc)
    }

    /// Read `source` as `from` and write it back out as `to`.
    ///
    /// Both names are resolved before any parsing happens.
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        let reader = self.get(from)?;
        let writer = self.get(to)?;

        let doc = reader.parse(source)?;
        let output = writer.serialize(&doc)?;
        tracing::debug!(
            from,
            to,
            elements = doc.body.content.len(),
            bytes = output.len(),
            "converted document"
        );
        Ok(output)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
