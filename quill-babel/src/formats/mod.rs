//! Format implementations
//!
//! This module contains the format implementations that convert between the document
//! tree and its text representations.

pub mod docjson;
pub mod markdown;

pub use docjson::DocJsonFormat;
pub use markdown::{MarkdownExportOptions, MarkdownFormat, MarkdownImportOptions};
