//! Properties that hold for any input.

use crate::common::{item, para, with_lists};
use proptest::prelude::*;
use quill_babel::{from_markdown, to_markdown};

proptest! {
    #[test]
    fn import_never_fails(source in "\\PC*") {
        let request = from_markdown(&source, Some("t"));
        prop_assert!(!request.content.is_empty());
    }

    #[test]
    fn import_handles_markup_soup(source in "[#*`~|\\[\\]()\\-+ \\na-z0-9]{0,80}") {
        let md = to_markdown(&from_markdown(&source, None).into_document());
        prop_assert!(!md.contains("\n\n\n"));
        prop_assert_eq!(md.trim(), md.as_str());
    }

    /// Every run of numbered items between plain paragraphs counts from 1.
    #[test]
    fn numbering_restarts_per_run(runs in prop::collection::vec(1usize..6, 1..5)) {
        let mut content = Vec::new();
        for (i, len) in runs.iter().enumerate() {
            if i > 0 {
                content.push(para("break\n"));
            }
            for n in 0..*len {
                content.push(item("num", 0, &format!("item{n}\n")));
            }
        }

        let md = to_markdown(&with_lists(content));
        let numbers: Vec<usize> = md
            .lines()
            .filter_map(|line| line.split_once(". item"))
            .map(|(number, _)| number.parse().unwrap())
            .collect();
        let expected: Vec<usize> = runs.iter().flat_map(|len| 1..=*len).collect();
        prop_assert_eq!(numbers, expected);
    }
}
