//! Markdown serialization (Document → Markdown export)
//!
//! Walks the document body once, rendering each structural element to a chunk of
//! Markdown, then joins the chunks and normalizes blank-line runs.
//!
//! Rendering never fails. Missing or unrecognized nodes render as empty strings and are
//! dropped before the join.
//!
//! Spacing works by convention between the pieces:
//! - a normal paragraph ends in `\n`, so joining with `\n` leaves a blank line after it;
//! - list items carry no trailing newline, so consecutive items join tightly;
//! - tables, section breaks and the TOC marker are wrapped in newlines of their own.

use super::MarkdownExportOptions;
use crate::common::style::style_text;
use crate::common::tags::{convert_tag_run, convert_tags, tag_hint, TagHint};
use crate::common::ListTracker;
use crate::model::{
    Document, InlineObjectElement, Paragraph, ParagraphElement, ParagraphStyle,
    StructuralElement, Table, TableCell, TextRun,
};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const PAGE_BREAK: &str = "\n\n---\n\n";
const EQUATION_PLACEHOLDER: &str = "`[Math Equation]`";
const DEFAULT_IMAGE_TITLE: &str = "Image";
const DEFAULT_OBJECT_TITLE: &str = "Embedded Object";

/// Serialize a document to Markdown with the default options.
pub fn serialize_to_markdown(doc: &Document) -> String {
    serialize_to_markdown_with_options(doc, &MarkdownExportOptions::default())
}

/// Serialize a document to Markdown.
pub fn serialize_to_markdown_with_options(
    doc: &Document,
    options: &MarkdownExportOptions,
) -> String {
    let writer = MarkdownWriter { doc, options };
    let mut tracker = ListTracker::new();

    let chunks: Vec<String> = doc
        .body
        .content
        .iter()
        .map(|element| writer.structural_element(element, &mut tracker))
        .filter(|chunk| !chunk.is_empty())
        .collect();

    let markdown = collapse_newline_runs(chunks.join("\n").trim());
    tracing::debug!(
        elements = doc.body.content.len(),
        chunks = chunks.len(),
        bytes = markdown.len(),
        "serialized document to markdown"
    );
    markdown
}

/// Replace every run of three or more newlines with a paragraph break followed by one
/// `<br>` per extra newline.
fn collapse_newline_runs(text: &str) -> String {
    static NEWLINE_RUN: OnceLock<Regex> = OnceLock::new();
    let re = NEWLINE_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("pattern is valid"));
    re.replace_all(text, |caps: &Captures| {
        format!("\n\n{}", "<br>".repeat(caps[0].len() - 2))
    })
    .into_owned()
}

struct MarkdownWriter<'a> {
    doc: &'a Document,
    options: &'a MarkdownExportOptions,
}

impl MarkdownWriter<'_> {
    fn structural_element(&self, element: &StructuralElement, tracker: &mut ListTracker) -> String {
        match element {
            StructuralElement::Paragraph(paragraph) => self.paragraph(paragraph, tracker),
            StructuralElement::Table(table) => self.table(table),
            StructuralElement::TableOfContents => "\n[TOC]\n".to_string(),
            StructuralElement::SectionBreak => "\n---\n".to_string(),
            StructuralElement::Unsupported => String::new(),
        }
    }

    fn paragraph(&self, paragraph: &Paragraph, tracker: &mut ListTracker) -> String {
        if paragraph.bullet.is_some() {
            return self.list_item(paragraph, tracker);
        }

        // A plain paragraph ends the current list run.
        tracker.reset();

        let content = self.paragraph_text(paragraph);
        if content.is_empty() {
            return String::new();
        }

        format!(
            "{}\n",
            apply_paragraph_style(&content, &paragraph.paragraph_style)
        )
    }

    fn list_item(&self, paragraph: &Paragraph, tracker: &mut ListTracker) -> String {
        let Some(bullet) = &paragraph.bullet else {
            return String::new();
        };
        let level = bullet.nesting_level;
        let list_id = bullet.list_id.as_deref().unwrap_or_default();

        let numbered = self
            .doc
            .glyph_type(list_id, level)
            .is_some_and(|glyph| glyph.is_numbered());
        let indent = "  ".repeat(level);

        let content = self.paragraph_text(paragraph);
        if content.is_empty() {
            return String::new();
        }

        if numbered {
            let number = tracker.next(list_id, level);
            format!("{indent}{number}. {content}")
        } else {
            format!("{indent}- {content}")
        }
    }

    /// Inline content of a paragraph, trimmed and tag-converted. Empty if nothing remains.
    fn paragraph_text(&self, paragraph: &Paragraph) -> String {
        let content: String = paragraph
            .elements
            .iter()
            .map(|element| self.paragraph_element(element))
            .collect();

        let content = content.trim();
        if content.is_empty() {
            String::new()
        } else if self.options.convert_tags {
            convert_tags(content)
        } else {
            content.to_string()
        }
    }

    fn paragraph_element(&self, element: &ParagraphElement) -> String {
        match element {
            ParagraphElement::TextRun(run) => self.text_run(run),
            ParagraphElement::InlineObject(object) => self.inline_object(object),
            ParagraphElement::PageBreak | ParagraphElement::HorizontalRule => {
                PAGE_BREAK.to_string()
            }
            ParagraphElement::FootnoteReference(footnote) => {
                format!("[^{}]", footnote.footnote_id.as_deref().unwrap_or_default())
            }
            ParagraphElement::Equation => EQUATION_PLACEHOLDER.to_string(),
            ParagraphElement::Unsupported => String::new(),
        }
    }

    fn text_run(&self, run: &TextRun) -> String {
        if run.content.is_empty() {
            return String::new();
        }

        let style = &run.text_style;
        let hint = self
            .options
            .convert_tags
            .then(|| tag_hint(style))
            .flatten();
        let text = match hint {
            // Linked text keeps its words; only patterns inside it become tags.
            Some(TagHint::Highlight) if style.link_url().is_none() => {
                convert_tag_run(&run.content)
            }
            Some(_) => convert_tags(&run.content),
            None => run.content.clone(),
        };
        style_text(&text, style, &self.options.code_fonts)
    }

    fn inline_object(&self, element: &InlineObjectElement) -> String {
        let Some(embedded) = element
            .inline_object_id
            .as_deref()
            .and_then(|id| self.doc.inline_object(id))
            .and_then(|object| object.embedded_object())
        else {
            return String::new();
        };

        let title = embedded.title.as_deref().filter(|title| !title.is_empty());
        match &embedded.image_properties {
            Some(image) => {
                let title = title.unwrap_or(DEFAULT_IMAGE_TITLE);
                match image.content_uri.as_deref().filter(|uri| !uri.is_empty()) {
                    Some(uri) => format!("![{title}]({uri})"),
                    None => format!("[{title}]"),
                }
            }
            None => format!("[{}]", title.unwrap_or(DEFAULT_OBJECT_TITLE)),
        }
    }

    fn table(&self, table: &Table) -> String {
        let mut rows = Vec::new();

        for row in &table.table_rows {
            if row.table_cells.is_empty() {
                continue;
            }

            let cells: Vec<String> = row
                .table_cells
                .iter()
                .map(|cell| self.table_cell(cell))
                .collect();
            rows.push(format!("| {} |", cells.join(" | ")));

            if rows.len() == 1 {
                rows.push(format!("|{}", " --- |".repeat(cells.len())));
            }
        }

        if rows.is_empty() {
            String::new()
        } else {
            format!("\n{}\n", rows.join("\n"))
        }
    }

    /// A cell renders on one line. Its lists number independently of the enclosing
    /// document.
    fn table_cell(&self, cell: &TableCell) -> String {
        let mut tracker = ListTracker::new();
        let content: String = cell
            .content
            .iter()
            .map(|element| self.structural_element(element, &mut tracker))
            .collect();

        let content = content.replace('\n', " ");
        let content = content.trim();
        if content.is_empty() {
            " ".to_string()
        } else {
            content.to_string()
        }
    }
}

fn apply_paragraph_style(content: &str, style: &ParagraphStyle) -> String {
    if let Some(level) = style.named_style_type.and_then(|named| named.heading_level()) {
        return format!("{} {content}", "#".repeat(level));
    }

    match style.alignment.and_then(|alignment| alignment.html_value()) {
        Some(align) => format!("<div align=\"{align}\">{content}</div>"),
        None => content.to_string(),
    }
}
