//! Document JSON format tests

use crate::common::{fixture, weekly_sync};
use quill_babel::error::FormatError;
use quill_babel::model::{GlyphType, StructuralElement};
use quill_babel::FormatRegistry;

#[test]
fn test_fixture_loads() {
    let doc = weekly_sync();

    assert_eq!(doc.document_id.as_deref(), Some("1AbCdEf"));
    assert_eq!(doc.title.as_deref(), Some("Weekly Sync"));
    assert_eq!(doc.body.content.len(), 13);
    assert!(matches!(doc.body.content[0], StructuralElement::SectionBreak));
    assert_eq!(doc.glyph_type("kix.num", 1), Some(GlyphType::Alpha));
    assert_eq!(doc.glyph_type("kix.num", 2), None);
    assert!(doc.inline_object("kix.img1").is_some());
}

#[test]
fn test_registry_converts_json_to_markdown() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(&fixture("weekly_sync.json"), "docjson")
        .unwrap();
    let md = registry.serialize(&doc, "markdown").unwrap();

    assert_eq!(md, fixture("weekly_sync.md").trim_end());
}

#[test]
fn test_registry_converts_markdown_to_json() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("# Notes\n- one", "markdown").unwrap();
    let json = registry.serialize(&doc, "docjson").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let content = &value["body"]["content"];
    assert_eq!(
        content[0]["paragraph"]["paragraphStyle"]["namedStyleType"],
        "HEADING_1"
    );
    assert_eq!(content[1]["paragraph"]["bullet"]["listId"], "list-id");
    assert_eq!(content[1]["paragraph"]["bullet"]["nestingLevel"], 0);
}

#[test]
fn test_json_survives_a_second_pass() {
    let registry = FormatRegistry::default();
    let doc = weekly_sync();
    let json = registry.serialize(&doc, "docjson").unwrap();

    assert_eq!(registry.parse(&json, "docjson").unwrap(), doc);
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let registry = FormatRegistry::default();
    let err = registry.parse("[1, 2", "docjson").unwrap_err();

    assert!(matches!(err, FormatError::ParseError(_)));
    assert!(err.to_string().starts_with("Parse error:"));
}
