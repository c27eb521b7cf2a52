//! Wiki-tag detection.
//!
//! Two heuristics turn document text into `[[tag]]` links:
//!
//! - pattern rewriting: `#word`, `@word` and common date spellings in plain text;
//! - color hints: a run highlighted in yellow, green or blue becomes a tag as a whole,
//!   while a run written in a blue/purple ink only gets pattern rewriting.
//!
//! Pattern rewriting never touches text that is already a tag or a link target, so it
//! can run over a paragraph whose runs were already converted.
//!
//! The color thresholds below are part of the observable behavior: changing one changes
//! which runs become tags.

use crate::model::{RgbColor, TextStyle};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// A highlight channel above this counts as "on".
pub const HIGHLIGHT_CHANNEL_ON: f64 = 0.8;
/// A highlight channel below this counts as "off".
pub const HIGHLIGHT_CHANNEL_OFF: f64 = 0.3;
/// Minimum blue channel of a tag-colored foreground.
pub const TAG_INK_BLUE_MIN: f64 = 0.6;
/// Maximum red and green channels of a tag-colored foreground.
pub const TAG_INK_OTHER_MAX: f64 = 0.4;

fn is_tag_highlight(bg: RgbColor) -> bool {
    let on = |channel: f64| channel > HIGHLIGHT_CHANNEL_ON;
    let off = |channel: f64| channel < HIGHLIGHT_CHANNEL_OFF;

    let yellow = on(bg.red) && on(bg.green) && off(bg.blue);
    let green = off(bg.red) && on(bg.green) && off(bg.blue);
    let blue = off(bg.red) && off(bg.green) && on(bg.blue);
    yellow || green || blue
}

fn is_tag_ink(fg: RgbColor) -> bool {
    fg.blue > TAG_INK_BLUE_MIN && fg.red < TAG_INK_OTHER_MAX && fg.green < TAG_INK_OTHER_MAX
}

/// How a run's colors hint that it is a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagHint {
    /// Highlighted background: the whole run is a tag.
    Highlight,
    /// Tag-colored ink: patterns inside the run are tags.
    Ink,
}

/// The tag hint carried by a run's colors, if any. A highlight wins over ink.
pub fn tag_hint(style: &TextStyle) -> Option<TagHint> {
    if style.background_rgb().is_some_and(is_tag_highlight) {
        Some(TagHint::Highlight)
    } else if style.foreground_rgb().is_some_and(is_tag_ink) {
        Some(TagHint::Ink)
    } else {
        None
    }
}

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // #hashtag
            r"#([a-zA-Z0-9_-]+)",
            // @mention
            r"@([a-zA-Z0-9_-]+)",
            // 2024-01-15
            r"\b(\d{4}-\d{2}-\d{2})\b",
            // 1/15/2024
            r"\b(\d{1,2}/\d{1,2}/\d{4})\b",
            // 1-15-2024
            r"\b(\d{1,2}-\d{1,2}-\d{4})\b",
            // January 15, 2024
            r"(?i)\b((?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4})\b",
            // Jan 15, 2024
            r"(?i)\b((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{1,2},?\s+\d{4})\b",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("tag pattern is valid"))
        .collect()
    })
}

/// Spans pattern rewriting leaves alone: existing `[[tags]]` and `](link targets)`.
fn protected_spans() -> &'static Regex {
    static PROTECTED: OnceLock<Regex> = OnceLock::new();
    PROTECTED.get_or_init(|| {
        Regex::new(r"\[\[[^\[\]]*\]\]|\]\([^)\s]*\)").expect("protected pattern is valid")
    })
}

/// Apply `rewrite` to every stretch of `text` outside a protected span.
fn rewrite_unprotected(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in protected_spans().find_iter(text) {
        out.push_str(&rewrite(&text[last..span.start()]));
        out.push_str(span.as_str());
        last = span.end();
    }
    out.push_str(&rewrite(&text[last..]));
    out
}

/// Rewrite hashtags, mentions and dates in `text` into `[[...]]` tags.
///
/// Patterns apply one after another, each over the output of the previous one. Tags made
/// by an earlier pattern, or already present, are not wrapped again.
pub fn convert_tags(text: &str) -> String {
    patterns().iter().fold(text.to_string(), |acc, pattern| {
        rewrite_unprotected(&acc, |stretch| {
            pattern
                .replace_all(stretch, |caps: &Captures| format!("[[{}]]", &caps[1]))
                .into_owned()
        })
    })
}

/// Tag conversion for a highlighted run.
///
/// Pattern rewriting runs first. A line that no pattern touched becomes a tag as a whole,
/// keeping its surrounding whitespace outside the brackets.
pub fn convert_tag_run(text: &str) -> String {
    let rewritten = convert_tags(text);
    if rewritten != text {
        return rewritten;
    }

    rewritten
        .split('\n')
        .map(|line| {
            let core = line.trim();
            if core.is_empty() || core.contains("[[") {
                return line.to_string();
            }
            let start = line.len() - line.trim_start().len();
            let end = start + core.len();
            format!("{}[[{core}]]{}", &line[..start], &line[end..])
        })
        .collect::<Vec<_>>()
        .join("\n")
}
