//! Markdown → Document → Markdown round trips
//!
//! Only the subset both directions understand comes back unchanged. The lossy cases are
//! pinned down here too, so a change in either direction shows up as a failing test.

use quill_babel::{from_markdown, to_markdown};

fn round_trip(md: &str) -> String {
    to_markdown(&from_markdown(md, None).into_document())
}

#[test]
fn test_headings_paragraphs_and_bullets() {
    let md = "# Title\n\nplain *em* text\n\n- one\n- two\n  - three";
    assert_eq!(round_trip(md), md);
}

#[test]
fn test_table() {
    let md = "| A | B |\n| --- | --- |\n| 1 | `x` |";
    assert_eq!(round_trip(md), md);
}

#[test]
fn test_links_and_strikethrough() {
    let md = "see [docs](https://d.io) and ~~old~~ notes";
    assert_eq!(round_trip(md), md);
}

#[test]
fn test_numbered_lists_come_back_bulleted() {
    assert_eq!(round_trip("1. a\n2. b"), "- a\n- b");
}

#[test]
fn test_bold_picks_up_a_stray_copy() {
    // The bold span and the two empty italic spans inside its markers are laid out flat.
    assert_eq!(round_trip("**a**"), "**a**a");
}

#[test]
fn test_hashtags_become_tags() {
    assert_eq!(round_trip("ship #v2 today"), "ship [[v2]] today");
}
