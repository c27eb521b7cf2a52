//! Markdown format implementation
//!
//! This module implements conversion between the document tree and Markdown in both
//! directions.
//!
//! # Library Choice
//!
//! Neither direction goes through a Markdown library. The export writes the exact text
//! note editors expect (`<u>`, `<div align>`, `<br>` runs, `[TOC]`), and the import is a
//! line classifier plus a flat inline pass whose segmentation downstream code depends on.
//! The `regex` crate does the pattern work in both directions.
//!
//! # Element Mapping Table
//!
//! | Document Element         | Markdown Equivalent          | Export Notes                        | Import Notes                       |
//! |--------------------------|------------------------------|-------------------------------------|------------------------------------|
//! | Paragraph                | Paragraph                    | Trimmed, empty ones dropped         | Blank line → empty paragraph       |
//! | TITLE / SUBTITLE         | `#` / `##`                   | Heading level 1 / 2                 | Not produced                       |
//! | HEADING_1..6             | `#`..`######`                | Direct                              | Direct                             |
//! | Paragraph alignment      | `<div align="...">`          | Center, right, justify              | Not parsed                         |
//! | Bulleted paragraph       | `- item`, `1. item`          | Two spaces per nesting level        | Indent / 2 → nesting level         |
//! | Table                    | Pipe table                   | Separator after first row           | Separator rows dropped             |
//! | Table of contents        | `[TOC]`                      | Marker only                         | Not parsed                         |
//! | Section break            | `---`                        | Direct                              | Not parsed                         |
//! | Page break / rule        | `---`                        | Direct                              | Not parsed                         |
//! | Footnote reference       | `[^id]`                      | Direct                              | Not parsed                         |
//! | Equation                 | `` `[Math Equation]` ``      | Placeholder                         | Not parsed                         |
//! | Image                    | `![title](uri)`              | `[title]` without a URI             | Not parsed                         |
//! | Text run:                |                              |                                     |                                    |
//! |   Bold / Italic          | `**x**` / `*x*` / `***x***`  | Per line                            | Flat spans                         |
//! |   Underline              | `<u>x</u>`                   | Per line                            | Not parsed                         |
//! |   Strikethrough          | `~~x~~`                      | Per line                            | Flat spans                         |
//! |   Code font              | `` `x` ``                    | Configurable font list              | Configurable font                  |
//! |   Link                   | `[x](url)`                   | Wraps all other markers             | Direct                             |
//! |   Highlight / blue ink   | `[[tag]]`                    | Tag conversion                      | Not parsed                         |
//!
//! # Lossy Conversions
//!
//! See [`parser`] for what the import loses. The export loses colors, fonts outside the
//! code list, list glyph styles other than numbered versus bulleted, and anything the
//! document model marks as unsupported.

pub mod inline;
pub mod parser;
pub mod serializer;

use crate::common::style::DEFAULT_CODE_FONTS;
use crate::error::FormatError;
use crate::format::Format;
use crate::model::Document;

/// Knobs for the Markdown export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExportOptions {
    /// Rewrite hashtags, mentions, dates and highlighted runs as `[[tag]]` links.
    pub convert_tags: bool,
    /// Font families rendered as inline code.
    pub code_fonts: Vec<String>,
}

impl Default for MarkdownExportOptions {
    fn default() -> Self {
        MarkdownExportOptions {
            convert_tags: true,
            code_fonts: DEFAULT_CODE_FONTS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Knobs for the Markdown import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownImportOptions {
    /// Font family given to inline code spans.
    pub code_font: String,
    /// List id assigned to every imported list item.
    pub list_id: String,
}

impl Default for MarkdownImportOptions {
    fn default() -> Self {
        MarkdownImportOptions {
            code_font: "Courier New".to_string(),
            list_id: "list-id".to_string(),
        }
    }
}

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    pub export: MarkdownExportOptions,
    pub import: MarkdownImportOptions,
}

impl MarkdownFormat {
    pub fn new(export: MarkdownExportOptions, import: MarkdownImportOptions) -> Self {
        MarkdownFormat { export, import }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown as written by note editors"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_from_markdown_with_options(source, None, &self.import).into_document())
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown_with_options(
            doc,
            &self.export,
        ))
    }
}
