//! Markdown decoration of styled text runs.
//!
//! Markers are applied per physical line so that no marker spans a line break, in a fixed
//! order: emphasis, underline, strikethrough, code font, and finally the link, which wraps
//! everything else.

use crate::model::TextStyle;
use std::borrow::Cow;

/// Font families rendered as inline code unless configured otherwise.
pub const DEFAULT_CODE_FONTS: &[&str] = &["Courier New", "Consolas", "Monaco"];

/// Decorate `text` with the Markdown markers for `style`.
///
/// `code_fonts` lists the font families that mark a run as code.
pub fn style_text(text: &str, style: &TextStyle, code_fonts: &[String]) -> String {
    text.split('\n')
        .map(|line| style_line(line, style, code_fonts))
        .collect::<Vec<_>>()
        .join("\n")
}

fn style_line(line: &str, style: &TextStyle, code_fonts: &[String]) -> String {
    if line.is_empty() {
        return String::new();
    }

    let mut styled = match (style.bold, style.italic) {
        (true, true) => format!("***{line}***"),
        (true, false) => format!("**{}**", escape_trailing_star(line)),
        (false, true) => format!("*{}*", escape_trailing_star(line)),
        (false, false) => line.to_string(),
    };

    if style.underline {
        styled = format!("<u>{styled}</u>");
    }
    if style.strikethrough {
        styled = format!("~~{styled}~~");
    }
    if style
        .font_family()
        .is_some_and(|family| code_fonts.iter().any(|font| font == family))
    {
        styled = format!("`{styled}`");
    }
    if let Some(url) = style.link_url() {
        styled = format!("[{styled}]({url})");
    }

    styled
}

/// Escape a trailing `*` so it cannot merge with a closing emphasis marker.
fn escape_trailing_star(line: &str) -> Cow<'_, str> {
    match line.strip_suffix('*') {
        Some(rest) if !rest.ends_with('\\') => Cow::Owned(format!("{rest}\\*")),
        _ => Cow::Borrowed(line),
    }
}
