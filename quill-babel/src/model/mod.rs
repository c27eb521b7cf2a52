//! Typed model of the remote word-processor document.
//!
//! This is the subset of the document API's JSON response that the converters read, plus
//! the request shape they produce. Everything deserializes leniently: unknown fields are
//! ignored and absent optional fields fall back to defaults, so a sparsely populated
//! document is still a valid [`Document`].
//!
//! On the wire, structural and paragraph elements are "exactly one populated field"
//! objects (`{"paragraph": {...}}`, `{"textRun": {...}}`). In Rust they are closed enums;
//! see [`document::StructuralElement`] and [`document::ParagraphElement`].

pub mod document;
pub mod style;

pub use document::{
    Body, Bullet, Document, DocumentRequest, EmbeddedObject, FootnoteReference, GlyphType,
    ImageProperties, InlineObject, InlineObjectElement, InlineObjectProperties, List,
    ListProperties, NestingLevel, Paragraph, ParagraphElement, StructuralElement, Table,
    TableCell, TableRow, TextRun,
};
pub use style::{
    Alignment, Color, Link, NamedStyleType, OptionalColor, ParagraphStyle, RgbColor, TextStyle,
    WeightedFontFamily,
};
