//! Conversion between structured documents and Markdown notes
//!
//!     This crate converts the document tree returned by a word-processor API (paragraphs,
//!     styled text runs, lists, tables, inline objects) into Markdown note content, and
//!     Markdown back into document content ready for a batch insert.
//!
//!     TLDR: For format authors:
//!         - The document model (./model) mirrors the API's JSON; every field is optional and
//!           unknown node kinds deserialize to an `Unsupported` variant instead of failing.
//!         - Both converters are total: any document yields Markdown, any string yields content.
//!         - Shared rendering logic (list numbering, run styling, tag conversion) lives in
//!           ./common so it can be tested in isolation.
//!
//!     This is a pure lib, that is, it powers quill-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches the network. Remote services are reached through the
//!     traits in ./sync.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # Formats by name and extension, conversions
//!     ├── model                   # Document tree (serde)
//!     ├── common                  # List numbering, run styling, tags
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # Markdown → document content
//!     │   │   ├── inline.rs       # Flat inline span parse
//!     │   │   ├── serializer.rs   # Document → Markdown
//!     │   │   └── mod.rs
//!     │   └── docjson             # The document JSON itself
//!     ├── sync.rs                 # Note ⇄ document synchronization
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <format>.rs
//!     └── fixtures
//!         └── <docname>.json
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Export is a single pass over the body with one piece of state: the list tracker, which
//!     numbers ordered items per list and per nesting level and restarts whenever a plain
//!     paragraph interrupts the list. Run styling is applied per physical line so Markdown
//!     markers never straddle a line break.
//!
//!     Import is a line classifier (heading, list item, table, paragraph) plus a flat inline
//!     pass. The inline pass deliberately does not build a nested span tree; overlapping
//!     markup produces separate segments.
//!
//! Formats
//!
//!     A format is one text representation of a Document. Each has a name, file extensions, a
//!     parse() and a serialize(); see [./format.rs ]. The registry holds the configured
//!     formats and chains any two of them with convert(), which is all the CLI needs:
//!         FormatRegistry::with_options(export, import).convert(source, "docjson", "markdown")
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;
pub mod sync;

pub use error::FormatError;
pub use format::Format;
pub use formats::{DocJsonFormat, MarkdownExportOptions, MarkdownFormat, MarkdownImportOptions};
pub use model::{Document, DocumentRequest};
pub use registry::FormatRegistry;
pub use sync::{DocumentService, Note, NoteStore, NoteSync, PushOutcome, SyncError, SyncOptions};

/// Converts a document to Markdown with the default export options.
///
/// Never fails; unrecognized content renders as nothing.
pub fn to_markdown(doc: &Document) -> String {
    formats::markdown::serializer::serialize_to_markdown(doc)
}

/// Converts Markdown into document content with the default import options.
///
/// Never fails; any string yields some content.
pub fn from_markdown(markdown: &str, title: Option<&str>) -> DocumentRequest {
    formats::markdown::parser::parse_from_markdown(markdown, title)
}
