//! Import tests for Markdown format (Markdown → Document)

use crate::common::fixture;
use insta::assert_snapshot;
use quill_babel::format::Format;
use quill_babel::formats::markdown::{MarkdownFormat, MarkdownImportOptions};
use quill_babel::from_markdown;
use quill_babel::model::{NamedStyleType, Paragraph, ParagraphElement, StructuralElement};

fn paragraph(element: &StructuralElement) -> &Paragraph {
    match element {
        StructuralElement::Paragraph(p) => p,
        other => panic!("expected paragraph, got {other:?}"),
    }
}

fn text(p: &Paragraph) -> String {
    p.elements
        .iter()
        .map(|element| match element {
            ParagraphElement::TextRun(run) => run.content.clone(),
            other => panic!("expected text run, got {other:?}"),
        })
        .collect()
}

/// One letter per element: H(eading), L(ist item), P(aragraph), E(mpty), T(able).
fn shape(content: &[StructuralElement]) -> String {
    content
        .iter()
        .map(|element| match element {
            StructuralElement::Table(_) => 'T',
            StructuralElement::Paragraph(p) if p.paragraph_style.named_style_type.is_some() => 'H',
            StructuralElement::Paragraph(p) if p.bullet.is_some() => 'L',
            StructuralElement::Paragraph(p) if text(p) == "\n" => 'E',
            StructuralElement::Paragraph(_) => 'P',
            _ => '?',
        })
        .collect()
}

#[test]
fn test_heading_snapshot() {
    let request = from_markdown("## Hi", None);
    assert_snapshot!(
        serde_json::to_string(&request).unwrap(),
        @r#"{"content":[{"paragraph":{"elements":[{"textRun":{"content":"Hi","textStyle":{}}}],"paragraphStyle":{"namedStyleType":"HEADING_2"}}}]}"#
    );
}

#[test]
fn test_document_shape() {
    let md = "# Title\n\nSome **bold** text\n- item\n  - nested\n\n| A | B |\n|---|---|\n| 1 | 2 |";
    let request = from_markdown(md, Some("Imported"));

    assert_eq!(request.title.as_deref(), Some("Imported"));
    assert_eq!(shape(&request.content), "HEPLLET");
}

#[test]
fn test_fixture_shape() {
    let request = from_markdown(&fixture("weekly_sync.md"), None);

    // The thematic break and the div are plain paragraphs on the way back in.
    assert_eq!(shape(&request.content), "PEHEHELLLETEPEPEPEPEPE");

    let StructuralElement::Table(table) = &request.content[10] else {
        panic!("expected table");
    };
    assert_eq!(table.rows, Some(2));
    assert_eq!(table.columns, Some(2));
}

#[test]
fn test_headings_map_to_named_styles() {
    let request = from_markdown("# one\n### three\n###### six", None);
    let styles: Vec<_> = request
        .content
        .iter()
        .map(|e| paragraph(e).paragraph_style.named_style_type)
        .collect();

    assert_eq!(
        styles,
        vec![
            Some(NamedStyleType::Heading1),
            Some(NamedStyleType::Heading3),
            Some(NamedStyleType::Heading6),
        ]
    );
}

#[test]
fn test_link_keeps_url() {
    let request = from_markdown("read [the guide](https://example.com/guide) first", None);
    let p = paragraph(&request.content[0]);

    let ParagraphElement::TextRun(link) = &p.elements[1] else {
        panic!("expected text run");
    };
    assert_eq!(link.content, "the guide");
    assert_eq!(
        link.text_style.link_url(),
        Some("https://example.com/guide")
    );
    assert_eq!(text(p), "read the guide first");
}

#[test]
fn test_options_are_honored() {
    let format = MarkdownFormat {
        import: MarkdownImportOptions {
            code_font: "Roboto Mono".to_string(),
            list_id: "kix.imported".to_string(),
        },
        ..MarkdownFormat::default()
    };

    let doc = format.parse("- run `cargo`").unwrap();
    let p = paragraph(&doc.body.content[0]);

    let bullet = p.bullet.as_ref().expect("list item");
    assert_eq!(bullet.list_id.as_deref(), Some("kix.imported"));

    let ParagraphElement::TextRun(code) = &p.elements[1] else {
        panic!("expected text run");
    };
    assert_eq!(code.text_style.font_family(), Some("Roboto Mono"));
}

#[test]
fn test_parse_has_no_title() {
    let doc = MarkdownFormat::default().parse("text").unwrap();
    assert_eq!(doc.title, None);
    assert_eq!(doc.body.content.len(), 1);
}
