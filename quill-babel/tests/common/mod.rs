//! Shared helpers for loading fixtures and building small documents.

use quill_babel::model::{Document, GlyphType, List, Paragraph, StructuralElement, TextRun};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

pub fn weekly_sync() -> Document {
    Document::from_json(&fixture("weekly_sync.json")).expect("fixture is valid document JSON")
}

pub fn para(text: &str) -> StructuralElement {
    Paragraph::from_runs([TextRun::plain(text)]).into()
}

pub fn item(list_id: &str, level: usize, text: &str) -> StructuralElement {
    Paragraph::from_runs([TextRun::plain(text)])
        .with_bullet(list_id, level)
        .into()
}

/// Document whose list `"num"` is numbered at every level and `"dots"` is bulleted.
pub fn with_lists(content: Vec<StructuralElement>) -> Document {
    let mut doc = Document::with_content(content);
    doc.lists.insert(
        "num".to_string(),
        List::with_glyphs([GlyphType::Decimal, GlyphType::Alpha, GlyphType::Roman]),
    );
    doc.lists.insert(
        "dots".to_string(),
        List::with_glyphs([GlyphType::GlyphTypeUnspecified, GlyphType::None]),
    );
    doc
}
