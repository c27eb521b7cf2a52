//! Document JSON format
//!
//! The document tree as the document API returns it: camelCase keys, every field
//! optional. Unknown keys are ignored on parse, and nodes of unknown kinds are kept as
//! unsupported placeholders that serialize back to `{}`.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Document;

/// Format implementation for document JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct DocJsonFormat;

impl Format for DocJsonFormat {
    fn name(&self) -> &str {
        "docjson"
    }

    fn description(&self) -> &str {
        "Structured document JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Document::from_json(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
