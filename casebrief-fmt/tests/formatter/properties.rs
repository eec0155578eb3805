//! Property tests for the formatter

use casebrief_fmt::format_text;
use casebrief_fmt::rules::RULES;
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_without_markers_is_unchanged(
        text in "[a-zA-Z0-9 ,.;:!?'()#*<>/=\"\r\n-]{0,200}"
    ) {
        prop_assume!(RULES.iter().all(|rule| !rule.matches(&text)));
        prop_assume!(!text.contains("</ol>"));
        prop_assert_eq!(format_text(&text), text);
    }

    #[test]
    fn level_two_heading_wraps_whole_line(line in "[a-zA-Z ,;:!?'()-]{0,80}") {
        let source = format!("## {line}");
        prop_assert_eq!(format_text(&source), format!("<h2>{line}</h2>"));
    }

    #[test]
    fn consecutive_items_share_one_list(items in prop::collection::vec("[a-zA-Z ]{1,30}", 1..9)) {
        let source = items
            .iter()
            .enumerate()
            .map(|(index, item)| format!("{}. {item}", index + 1))
            .collect::<Vec<_>>()
            .join("\n");
        let html = format_text(&source);

        prop_assert_eq!(html.matches("<ol>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), items.len());
        for item in &items {
            let expected = format!("<li>{item}</li>");
            prop_assert!(html.contains(&expected));
        }
    }
}
