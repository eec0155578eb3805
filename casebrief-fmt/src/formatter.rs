//! Analysis text formatter
//!
//! Turns the markdown-like conventions used in generated case analyses into HTML:
//!
//! | Input                 | Output                      |
//! |-----------------------|-----------------------------|
//! | `## text`             | `<h2>text</h2>`             |
//! | `### text`            | `<h3>text</h3>`             |
//! | `#### text`           | `<h4>text</h4>`             |
//! | `**text**`            | `<strong>text</strong>`     |
//! | `1. text` (line start)| `<ol><li>text</li></ol>`    |
//!
//! Consecutive list lines end up in a single `<ol>`. Anything else is passed through
//! untouched, so text without markers comes back byte-for-byte.
//!
//! The transform is single pass and not idempotent: running it over its own output can
//! wrap again (`## ## x` → `<h2>## x</h2>` → `<h2><h2>x</h2></h2>`). Format raw input once.

use crate::rules::{self, RULES};
use std::borrow::Cow;
use tracing::trace;

/// Knobs for [`Formatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Collapse adjacent single-item lists into one list container
    pub merge_adjacent_lists: bool,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            merge_adjacent_lists: true,
        }
    }
}

/// Applies the rule table to analysis text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    options: FormatterOptions,
}

impl Formatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FormatterOptions {
        self.options
    }

    /// Format `text`, returning the new value. The caller decides where it goes.
    pub fn format(&self, text: &str) -> String {
        let mut content = text.to_string();

        for rule in RULES.iter() {
            let rewritten = match rule.apply(&content) {
                Cow::Owned(rewritten) => rewritten,
                Cow::Borrowed(_) => continue,
            };
            trace!(rule = ?rule.kind(), "rule applied");
            content = rewritten;
        }

        if self.options.merge_adjacent_lists {
            if let Cow::Owned(merged) = rules::coalesce_lists(&content) {
                trace!("adjacent lists merged");
                return merged;
            }
        }

        content
    }
}

/// Format with the default options.
pub fn format_text(text: &str) -> String {
    Formatter::default().format(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        let text = "The accused was seen near the shop at 9 pm.\nNo weapon was found.";
        assert_eq!(format_text(text), text);
    }

    #[test]
    fn test_level_two_heading() {
        assert_eq!(format_text("## Title"), "<h2>Title</h2>");
    }

    #[test]
    fn test_level_three_heading() {
        assert_eq!(format_text("### Sub"), "<h3>Sub</h3>");
    }

    #[test]
    fn test_level_four_heading_is_not_eaten_by_level_two() {
        assert_eq!(format_text("#### Detail"), "<h4>Detail</h4>");
    }

    #[test]
    fn test_bold_keeps_surrounding_text() {
        assert_eq!(
            format_text("Section **379** applies here"),
            "Section <strong>379</strong> applies here"
        );
    }

    #[test]
    fn test_consecutive_list_lines_share_one_container() {
        let out = format_text("1. First\n2. Second");
        assert_eq!(out, "<ol><li>First</li>\n<li>Second</li></ol>");
        assert_eq!(out.matches("<ol>").count(), 1);
    }

    #[test]
    fn test_three_list_lines_share_one_container() {
        let out = format_text("1. a\n2. b\n3. c\n");
        assert_eq!(out.matches("<ol>").count(), 1);
        assert_eq!(out.matches("<li>").count(), 3);
        assert!(out.find("a").unwrap() < out.find("b").unwrap());
        assert!(out.find("b").unwrap() < out.find("c").unwrap());
    }

    #[test]
    fn test_merge_can_be_disabled() {
        let formatter = Formatter::new(FormatterOptions {
            merge_adjacent_lists: false,
        });
        let out = formatter.format("1. First\n2. Second");
        assert_eq!(out, "<ol><li>First</li></ol>\n<ol><li>Second</li></ol>");
    }

    #[test]
    fn test_list_items_may_hold_bold_text() {
        assert_eq!(
            format_text("1. **FIR** first"),
            "<ol><li><strong>FIR</strong> first</li></ol>"
        );
    }

    #[test]
    fn test_single_pass_output_for_nested_markers() {
        let once = format_text("## ## x");
        assert_eq!(once, "<h2>## x</h2>");
        // A second pass wraps again
        assert_eq!(format_text(&once), "<h2><h2>x</h2></h2>");
    }

    #[test]
    fn test_unclosed_bold_is_left_literal() {
        assert_eq!(format_text("**dangling"), "**dangling");
    }

    #[test]
    fn test_marker_without_space_is_left_literal() {
        assert_eq!(format_text("##NoSpace"), "##NoSpace");
    }

    #[test]
    fn test_default_options_merge_lists() {
        assert!(Formatter::default().options().merge_adjacent_lists);
    }
}
