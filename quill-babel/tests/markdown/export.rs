//! Export tests for Markdown format (Document → Markdown)
//!
//! Most tests compare the exact Markdown text, since note editors consume it verbatim.
//! A few parse the output with Comrak to check it is still the Markdown we meant.

use crate::common::{fixture, item, para, weekly_sync, with_lists};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use insta::assert_snapshot;
use quill_babel::format::Format;
use quill_babel::formats::markdown::{MarkdownExportOptions, MarkdownFormat};
use quill_babel::model::{
    Document, InlineObject, InlineObjectElement, OptionalColor, Paragraph, ParagraphElement,
    StructuralElement, Table, TableCell, TableRow, TextRun, TextStyle,
};
use quill_babel::to_markdown;

fn comrak_root<'a>(md: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    parse_document(arena, md, &options)
}

fn highlighted(red: f64, green: f64, blue: f64) -> TextStyle {
    TextStyle {
        background_color: Some(OptionalColor::from_rgb(red, green, blue)),
        ..TextStyle::default()
    }
}

/// Foreground of a freshly inserted hyperlink.
fn link_blue() -> Option<OptionalColor> {
    Some(OptionalColor::from_rgb(0.0667, 0.3333, 0.8))
}

fn single_paragraph(runs: impl IntoIterator<Item = TextRun>) -> Document {
    Document::with_content(vec![Paragraph::from_runs(runs).into()])
}

fn cell(text: &str) -> TableCell {
    TableCell::from_elements(vec![para(text)])
}

#[test]
fn test_fixture_document() {
    let md = to_markdown(&weekly_sync());
    assert_eq!(md, fixture("weekly_sync.md").trim_end());
}

#[test]
fn test_fixture_parses_as_markdown() {
    let md = to_markdown(&weekly_sync());
    let arena = Arena::new();
    let root = comrak_root(&md, &arena);

    let mut heading_levels = Vec::new();
    let mut tables = 0;
    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Heading(heading) => heading_levels.push(heading.level),
            NodeValue::Table(_) => tables += 1,
            _ => {}
        }
    }

    assert_eq!(heading_levels, vec![1, 2]);
    assert_eq!(tables, 1);
}

#[test]
fn test_styled_runs() {
    let code = TextStyle::font("Consolas");
    let underline = TextStyle {
        underline: true,
        ..TextStyle::default()
    };
    let bold_italic = TextStyle {
        bold: true,
        italic: true,
        ..TextStyle::default()
    };
    let bold_link = TextStyle {
        bold: true,
        ..TextStyle::link("https://x.io")
    };

    let doc = Document::with_content(vec![Paragraph::from_runs([
        TextRun::styled("both", bold_italic),
        TextRun::plain(" "),
        TextRun::styled("under", underline),
        TextRun::plain(" "),
        TextRun::styled("gone", TextStyle::strikethrough()),
        TextRun::plain(" "),
        TextRun::styled("code", code),
        TextRun::plain(" "),
        TextRun::styled("link", bold_link),
        TextRun::plain("\n"),
    ])
    .into()]);

    assert_snapshot!(
        to_markdown(&doc),
        @"***both*** <u>under</u> ~~gone~~ `code` [**link**](https://x.io)"
    );
}

#[test]
fn test_multiline_run_styles_each_line() {
    let doc = Document::with_content(vec![Paragraph::from_runs([TextRun::styled(
        "first\nsecond",
        TextStyle::bold(),
    )])
    .into()]);

    assert_eq!(to_markdown(&doc), "**first**\n**second**");
}

#[test]
fn test_numbering_restarts_after_plain_paragraph() {
    let doc = with_lists(vec![
        item("num", 0, "a\n"),
        item("num", 0, "b\n"),
        para("x\n"),
        item("num", 0, "c\n"),
    ]);

    assert_eq!(to_markdown(&doc), "1. a\n2. b\nx\n\n1. c");
}

#[test]
fn test_nested_numbering() {
    let doc = with_lists(vec![
        item("num", 0, "a"),
        item("num", 1, "a.1"),
        item("num", 1, "a.2"),
        item("num", 2, "a.2.1"),
        item("num", 0, "b"),
        item("num", 1, "b.1"),
    ]);

    assert_eq!(
        to_markdown(&doc),
        "1. a\n  1. a.1\n  2. a.2\n    1. a.2.1\n2. b\n  1. b.1"
    );
}

#[test]
fn test_bullets_for_unnumbered_or_unknown_lists() {
    let doc = with_lists(vec![
        item("dots", 0, "top"),
        item("dots", 1, "inner"),
        item("unknown", 2, "deep"),
    ]);

    assert_eq!(to_markdown(&doc), "- top\n  - inner\n    - deep");
}

#[test]
fn test_empty_paragraphs_vanish() {
    let doc = Document::with_content(vec![
        para("a\n"),
        para("\n"),
        para("   \n"),
        Paragraph::new(vec![]).into(),
        para("b\n"),
    ]);

    assert_eq!(to_markdown(&doc), "a\n\nb");
}

#[test]
fn test_newline_runs_become_breaks() {
    let doc = Document::with_content(vec![para("a\n\n\n\n\nb")]);
    assert_eq!(to_markdown(&doc), "a\n\n<br><br><br>b");
}

#[test]
fn test_toc_and_section_break_bring_their_own_newlines() {
    let doc = Document::with_content(vec![
        StructuralElement::TableOfContents,
        para("x\n"),
        StructuralElement::SectionBreak,
        para("y\n"),
    ]);

    // The paragraph's trailing newline plus the break's leading one make a run of three.
    assert_eq!(to_markdown(&doc), "[TOC]\n\nx\n\n<br>---\n\ny");
}

#[test]
fn test_page_break_and_equation() {
    let doc = Document::with_content(vec![Paragraph::new(vec![
        TextRun::plain("before").into(),
        ParagraphElement::PageBreak,
        TextRun::plain("after ").into(),
        ParagraphElement::Equation,
    ])
    .into()]);

    assert_eq!(
        to_markdown(&doc),
        "before\n\n---\n\nafter `[Math Equation]`"
    );
}

#[test]
fn test_images() {
    let object = |id: &str| {
        ParagraphElement::InlineObject(InlineObjectElement {
            inline_object_id: Some(id.to_string()),
        })
    };

    let mut doc = Document::with_content(vec![
        Paragraph::new(vec![object("with-uri")]).into(),
        Paragraph::new(vec![object("no-uri")]).into(),
        Paragraph::new(vec![object("untitled")]).into(),
        Paragraph::new(vec![object("missing")]).into(),
    ]);
    doc.inline_objects.insert(
        "with-uri".to_string(),
        InlineObject::image(Some("Chart"), Some("https://img.example/c.png")),
    );
    doc.inline_objects
        .insert("no-uri".to_string(), InlineObject::image(Some("Sketch"), None));
    doc.inline_objects.insert(
        "untitled".to_string(),
        InlineObject::image(None, Some("https://img.example/u.png")),
    );

    assert_eq!(
        to_markdown(&doc),
        "![Chart](https://img.example/c.png)\n\n[Sketch]\n\n![Image](https://img.example/u.png)"
    );
}

#[test]
fn test_table_cells_render_on_one_line() {
    let table = Table::from_rows(vec![
        TableRow {
            table_cells: vec![cell("Name\n"), cell("Notes\n")],
        },
        TableRow {
            table_cells: vec![],
        },
        TableRow {
            table_cells: vec![
                cell("Ada\n"),
                TableCell::from_elements(vec![para("one\n"), para("two\n")]),
            ],
        },
        TableRow {
            table_cells: vec![cell("\n"), cell("Grace\n")],
        },
    ]);

    let doc = Document::with_content(vec![StructuralElement::Table(table)]);
    assert_eq!(
        to_markdown(&doc),
        "| Name | Notes |\n| --- | --- |\n| Ada | one two |\n|   | Grace |"
    );
}

#[test]
fn test_empty_table_renders_nothing() {
    let doc = Document::with_content(vec![
        para("a\n"),
        StructuralElement::Table(Table::default()),
        para("b\n"),
    ]);

    assert_eq!(to_markdown(&doc), "a\n\nb");
}

#[test]
fn test_tags() {
    let highlighted = TextStyle {
        background_color: Some(OptionalColor::from_rgb(0.0, 0.9, 0.1)),
        ..TextStyle::default()
    };
    let doc = Document::with_content(vec![Paragraph::from_runs([
        TextRun::plain("Met @ana on Jan 5, 2024 re #budget, then "),
        TextRun::styled("follow up", highlighted),
        TextRun::plain("\n"),
    ])
    .into()]);

    assert_eq!(
        to_markdown(&doc),
        "Met [[ana]] on [[Jan 5, 2024]] re [[budget]], then [[follow up]]"
    );
}

#[test]
fn test_mixed_runs_with_date() {
    let doc = single_paragraph([
        TextRun::plain("Meet "),
        TextRun::styled("Alice", TextStyle::bold()),
        TextRun::plain(" at "),
        TextRun::plain("2024-01-15"),
    ]);

    assert_eq!(to_markdown(&doc), "Meet **Alice** at [[2024-01-15]]");
}

#[test]
fn test_yellow_highlight_is_a_tag_but_plain_text_is_not() {
    let tagged = single_paragraph([TextRun::styled("foo", highlighted(1.0, 1.0, 0.0))]);
    let plain = single_paragraph([TextRun::plain("foo")]);

    assert_eq!(to_markdown(&tagged), "[[foo]]");
    assert_eq!(to_markdown(&plain), "foo");
}

#[test]
fn test_highlighted_date_is_tagged_once() {
    let doc = single_paragraph([
        TextRun::plain("due "),
        TextRun::styled("2024-01-15", highlighted(0.0, 1.0, 0.0)),
        TextRun::plain(" or #2024-02-01"),
    ]);

    assert_eq!(to_markdown(&doc), "due [[2024-01-15]] or [[2024-02-01]]");
}

#[test]
fn test_hyperlinks_are_not_tags() {
    let link = TextStyle {
        underline: true,
        foreground_color: link_blue(),
        ..TextStyle::link("https://example.com")
    };
    let highlighted_link = TextStyle {
        link: link.link.clone(),
        ..highlighted(1.0, 1.0, 0.0)
    };

    let doc = single_paragraph([
        TextRun::plain("see "),
        TextRun::styled("the docs", link),
        TextRun::plain(" and "),
        TextRun::styled("notes", highlighted_link),
    ]);

    assert_eq!(
        to_markdown(&doc),
        "see [<u>the docs</u>](https://example.com) and [notes](https://example.com)"
    );
}

#[test]
fn test_ink_colored_run_only_rewrites_patterns() {
    let ink = TextStyle {
        foreground_color: link_blue(),
        ..TextStyle::default()
    };
    let doc = single_paragraph([
        TextRun::styled("blue words", ink.clone()),
        TextRun::plain(" "),
        TextRun::styled("about #launch", ink),
    ]);

    assert_eq!(to_markdown(&doc), "blue words about [[launch]]");
}

#[test]
fn test_tags_can_be_disabled() {
    let format = MarkdownFormat {
        export: MarkdownExportOptions {
            convert_tags: false,
            ..MarkdownExportOptions::default()
        },
        ..MarkdownFormat::default()
    };

    let md = format.serialize(&weekly_sync()).unwrap();
    assert!(md.contains("Follow up with @sam about #launch on 2024-03-01"));
    assert!(md.contains("\n\ndecision\n\n"));
}

#[test]
fn test_unknown_nodes_render_nothing() {
    let doc = Document::from_json(
        r#"{"body": {"content": [
            {"paragraph": {"elements": [
                {"textRun": {"content": "kept"}},
                {"autoText": {"type": "PAGE_NUMBER"}},
                {"person": {"personProperties": {"email": "a@b.c"}}}
            ]}},
            {"somethingNew": {"x": 1}},
            {"paragraph": {"elements": [{"columnBreak": {}}]}}
        ]}}"#,
    )
    .unwrap();

    assert_eq!(to_markdown(&doc), "kept");
}

#[test]
fn test_empty_document() {
    assert_eq!(to_markdown(&Document::default()), "");
}
