//! Markdown parsing (Markdown → Document import)
//!
//! A single forward pass over the source lines. Each line is classified in this order:
//!
//! | Line                          | Emitted element                                   |
//! |-------------------------------|---------------------------------------------------|
//! | blank                         | empty paragraph                                   |
//! | `#`..`######` + text          | paragraph styled `HEADING_n`                      |
//! | `-`/`*`/`+` item, `N.` item   | list paragraph, nesting level = indent / 2        |
//! | starts with `\|`              | table built from this and the following `\|` lines |
//! | anything else                 | plain paragraph                                   |
//!
//! Inline markup is handled per line by [`super::inline::parse_inline`].
//!
//! # Lossy Conversions
//!
//! - Every list item gets the same placeholder list id, so list grouping is not
//!   reconstructed, and numbered items are not distinguished from bulleted ones.
//! - Header separator rows made only of dashes, pipes and spaces are dropped; alignment
//!   colons are not understood.
//! - Nested inline markup becomes flat segments.

use super::inline::parse_inline;
use super::MarkdownImportOptions;
use crate::model::{
    DocumentRequest, NamedStyleType, Paragraph, ParagraphStyle, StructuralElement, Table,
    TableCell, TableRow,
};
use regex::Regex;
use std::sync::OnceLock;

struct LinePatterns {
    heading: Regex,
    bullet: Regex,
    numbered: Regex,
    table_separator: Regex,
}

fn line_patterns() -> &'static LinePatterns {
    static PATTERNS: OnceLock<LinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LinePatterns {
        heading: Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"),
        bullet: Regex::new(r"^(\s*)[-*+]\s+(.+)$").expect("bullet pattern is valid"),
        numbered: Regex::new(r"^(\s*)\d+\.\s+(.+)$").expect("numbered pattern is valid"),
        table_separator: Regex::new(r"^\s*\|[\s\-|]+\|\s*$").expect("separator pattern is valid"),
    })
}

/// Parse Markdown into document content with the default options.
pub fn parse_from_markdown(source: &str, title: Option<&str>) -> DocumentRequest {
    parse_from_markdown_with_options(source, title, &MarkdownImportOptions::default())
}

/// Parse Markdown into document content.
pub fn parse_from_markdown_with_options(
    source: &str,
    title: Option<&str>,
    options: &MarkdownImportOptions,
) -> DocumentRequest {
    let parser = LineParser {
        lines: source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect(),
        options,
    };

    let mut content = Vec::new();
    let mut index = 0;
    while index < parser.lines.len() {
        let (element, next) = parser.element_at(index);
        content.push(element);
        index = next;
    }

    tracing::debug!(
        lines = parser.lines.len(),
        elements = content.len(),
        "parsed markdown into document content"
    );

    DocumentRequest {
        title: title.map(str::to_string),
        content,
    }
}

struct LineParser<'a> {
    lines: Vec<&'a str>,
    options: &'a MarkdownImportOptions,
}

impl LineParser<'_> {
    /// Element starting at line `index`, and the index of the first line after it.
    fn element_at(&self, index: usize) -> (StructuralElement, usize) {
        let patterns = line_patterns();
        let line = self.lines[index];

        if line.trim().is_empty() {
            return (self.paragraph(""), index + 1);
        }

        if let Some(caps) = patterns.heading.captures(line) {
            let style = ParagraphStyle::named(NamedStyleType::heading(caps[1].len()));
            let heading = Paragraph::new(parse_inline(&caps[2], self.options)).with_style(style);
            return (heading.into(), index + 1);
        }

        if let Some(caps) = patterns
            .bullet
            .captures(line)
            .or_else(|| patterns.numbered.captures(line))
        {
            let indent = caps[1].chars().count();
            let item = Paragraph::new(parse_inline(&caps[2], self.options))
                .with_bullet(self.options.list_id.as_str(), indent / 2);
            return (item.into(), index + 1);
        }

        if line.contains('|') && line.trim().starts_with('|') {
            return self.table(index);
        }

        (self.paragraph(line), index + 1)
    }

    fn paragraph(&self, text: &str) -> StructuralElement {
        Paragraph::new(parse_inline(text, self.options)).into()
    }

    fn table(&self, start: usize) -> (StructuralElement, usize) {
        let separator = &line_patterns().table_separator;

        let end = self.lines[start..]
            .iter()
            .position(|line| !line.contains('|'))
            .map_or(self.lines.len(), |offset| start + offset);

        let rows = self.lines[start..end]
            .iter()
            .filter(|line| !separator.is_match(line))
            .map(|line| self.table_row(line))
            .collect();

        (StructuralElement::Table(Table::from_rows(rows)), end)
    }

    fn table_row(&self, line: &str) -> TableRow {
        let segments: Vec<&str> = line.split('|').collect();
        let cells = match segments.len() {
            0..=2 => &[][..],
            len => &segments[1..len - 1],
        };

        TableRow {
            table_cells: cells
                .iter()
                .map(|cell| {
                    TableCell::from_elements(vec![Paragraph::new(parse_inline(
                        cell.trim(),
                        self.options,
                    ))
                    .into()])
                })
                .collect(),
        }
    }
}
