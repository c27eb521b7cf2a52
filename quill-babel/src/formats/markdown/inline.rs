//! Flat inline-formatting parse for the Markdown import.
//!
//! Each marker pattern is matched independently over the whole line; the matches are then
//! laid out in order of their start offset. There is no nesting: overlapping or nested
//! markup yields a sequence of separately styled segments rather than combined styles,
//! and downstream consumers rely on that segmentation staying as it is.

use super::MarkdownImportOptions;
use crate::model::{ParagraphElement, TextRun, TextStyle};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    BoldItalic,
    Bold,
    Italic,
    Code,
    Strikethrough,
    Link,
}

impl SpanKind {
    fn style(self, url: Option<&str>, options: &MarkdownImportOptions) -> TextStyle {
        match self {
            SpanKind::BoldItalic => TextStyle {
                bold: true,
                italic: true,
                ..TextStyle::default()
            },
            SpanKind::Bold => TextStyle::bold(),
            SpanKind::Italic => TextStyle::italic(),
            SpanKind::Code => TextStyle::font(options.code_font.as_str()),
            SpanKind::Strikethrough => TextStyle::strikethrough(),
            SpanKind::Link => TextStyle::link(url.unwrap_or_default()),
        }
    }
}

fn patterns() -> &'static [(Regex, SpanKind)] {
    static PATTERNS: OnceLock<Vec<(Regex, SpanKind)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"\*\*\*(.*?)\*\*\*", SpanKind::BoldItalic),
            (r"\*\*(.*?)\*\*", SpanKind::Bold),
            (r"\*(.*?)\*", SpanKind::Italic),
            (r"`(.*?)`", SpanKind::Code),
            (r"~~(.*?)~~", SpanKind::Strikethrough),
            (r"\[([^\]]+)\]\(([^)]+)\)", SpanKind::Link),
        ]
        .into_iter()
        .map(|(pattern, kind)| (Regex::new(pattern).expect("inline pattern is valid"), kind))
        .collect()
    })
}

struct Span<'t> {
    start: usize,
    end: usize,
    inner: &'t str,
    style: TextStyle,
}

/// Split `text` into text runs, one per formatted span plus the plain gaps between them.
///
/// Blank text yields a single newline run.
pub fn parse_inline(text: &str, options: &MarkdownImportOptions) -> Vec<ParagraphElement> {
    if text.trim().is_empty() {
        return vec![TextRun::plain("\n").into()];
    }

    let mut spans: Vec<Span> = patterns()
        .iter()
        .flat_map(|(pattern, kind)| {
            pattern.captures_iter(text).filter_map(move |caps| {
                let whole = caps.get(0)?;
                let inner = caps.get(1)?;
                let url = caps.get(2).map(|url| url.as_str());
                Some(Span {
                    start: whole.start(),
                    end: whole.end(),
                    inner: inner.as_str(),
                    style: kind.style(url, options),
                })
            })
        })
        .collect();

    if spans.is_empty() {
        return vec![TextRun::plain(text).into()];
    }

    // Stable: spans sharing a start keep pattern order.
    spans.sort_by_key(|span| span.start);

    let mut elements: Vec<ParagraphElement> = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last_end = 0;
    for span in spans {
        if span.start > last_end {
            elements.push(TextRun::plain(&text[last_end..span.start]).into());
        }
        elements.push(TextRun::styled(span.inner, span.style).into());
        last_end = span.end;
    }
    if last_end < text.len() {
        elements.push(TextRun::plain(&text[last_end..]).into());
    }

    elements
}
