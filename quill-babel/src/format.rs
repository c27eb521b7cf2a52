//! The Format trait
//!
//! A format is one text representation of a [`Document`]: the Markdown a note holds, or
//! the JSON the document API speaks. Every format reads and writes, so any two registered
//! formats can be chained into a conversion (see [`crate::registry::FormatRegistry`]).

use crate::error::FormatError;
use crate::model::Document;

/// A named text representation of [`Document`].
///
/// ```ignore
/// let md = MarkdownFormat::default();
/// let doc = md.parse("# Title")?;
/// assert_eq!(md.serialize(&doc)?, "# Title");
/// ```
pub trait Format: Send + Sync {
    /// Registry key, also accepted by `--from` / `--to` (e.g. "markdown").
    fn name(&self) -> &str;

    /// One line for format listings.
    fn description(&self) -> &str;

    /// File extensions without the leading dot, used to detect the format of a file.
    fn file_extensions(&self) -> &[&str];

    fn parse(&self, source: &str) -> Result<Document, FormatError>;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// Whether `extension` (no dot, any case) belongs to this format.
    fn claims_extension(&self, extension: &str) -> bool {
        self.file_extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    }
}
