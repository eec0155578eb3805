//! Formatting of full analysis texts

use casebrief_fmt::format::Format;
use casebrief_fmt::formats::html::HtmlFormat;
use casebrief_fmt::{format_text, Formatter, FormatterOptions};
use insta::assert_snapshot;

const THEFT_ANALYSIS: &str = "## Case Summary
The complainant reports a **stolen mobile phone** from the shop counter.
### Applicable Sections
1. Section 378 - Theft
2. Section 379 - Punishment for theft
#### Note
Bail is generally available.";

// ============================================================================
// WHOLE DOCUMENTS
// ============================================================================

#[test]
fn test_theft_analysis() {
    assert_snapshot!(format_text(THEFT_ANALYSIS), @r"
<h2>Case Summary</h2>
The complainant reports a <strong>stolen mobile phone</strong> from the shop counter.
<h3>Applicable Sections</h3>
<ol><li>Section 378 - Theft</li>
<li>Section 379 - Punishment for theft</li></ol>
<h4>Note</h4>
Bail is generally available.
");
}

#[test]
fn test_separate_list_runs_stay_separate() {
    let text = "1. File the FIR\n2. Keep a copy\nThen wait.\n1. Follow up weekly";
    let html = format_text(text);

    assert_eq!(html.matches("<ol>").count(), 2);
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains("<li>Keep a copy</li></ol>\nThen wait.\n<ol><li>Follow up weekly</li></ol>"));
}

#[test]
fn test_blank_lines_between_items_still_merge() {
    let html = format_text("1. One\n\n2. Two");
    assert_eq!(html, "<ol><li>One</li>\n\n<li>Two</li></ol>");
}

#[test]
fn test_crlf_input() {
    let html = format_text("## Title\r\n1. a\r\n2. b\r\n");
    assert_eq!(html, "<h2>Title</h2>\r\n<ol><li>a</li>\r\n<li>b</li></ol>\r\n");
}

#[test]
fn test_carriage_return_only_input() {
    let html = format_text("Steps:\r1. File FIR\r2. Wait");
    assert_eq!(html, "Steps:\r<ol><li>File FIR</li>\r<li>Wait</li></ol>");
}

#[test]
fn test_near_markers_pass_through() {
    for text in [
        "Section 379",
        "# x",
        "*x*",
        "1.x",
        "10. Ten",
        "<em>x</em>",
        "a#b ** c",
    ] {
        assert_eq!(format_text(text), text, "input {text:?}");
    }
}

#[test]
fn test_existing_inline_html_passes_through() {
    let html = format_text("<p class=\"lead\">Under **IPC 420**</p>");
    assert_eq!(html, "<p class=\"lead\">Under <strong>IPC 420</strong></p>");
}

// ============================================================================
// HEADING PRECEDENCE
// ============================================================================

#[test]
fn test_each_heading_level() {
    assert_eq!(format_text("## A"), "<h2>A</h2>");
    assert_eq!(format_text("### B"), "<h3>B</h3>");
    assert_eq!(format_text("#### C"), "<h4>C</h4>");
}

#[test]
fn test_five_hashes_match_level_four_from_second_hash() {
    assert_eq!(format_text("##### Deep"), "#<h4>Deep</h4>");
}

#[test]
fn test_heading_marker_mid_line() {
    assert_eq!(
        format_text("Findings ## Sections"),
        "Findings <h2>Sections</h2>"
    );
}

#[test]
fn test_heading_with_bold() {
    assert_eq!(
        format_text("### **Key** facts"),
        "<h3><strong>Key</strong> facts</h3>"
    );
}

// ============================================================================
// SINGLE PASS
// ============================================================================

#[test]
fn test_formatting_twice_can_double_wrap() {
    let once = format_text("## ## Charges");
    assert_eq!(once, "<h2>## Charges</h2>");
    assert_eq!(format_text(&once), "<h2><h2>Charges</h2></h2>");
}

#[test]
fn test_unmerged_output_lists_every_line() {
    let formatter = Formatter::new(FormatterOptions {
        merge_adjacent_lists: false,
    });
    let html = formatter.format("1. a\n2. b\n3. c");
    assert_eq!(html.matches("<ol>").count(), 3);
}

// ============================================================================
// DOCUMENT OUTPUT
// ============================================================================

#[test]
fn test_html_document_contains_formatted_analysis() {
    let html = HtmlFormat::default().render(THEFT_ANALYSIS).unwrap();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<div class=\"analysis-content\">\n<h2>Case Summary</h2>"));
    assert!(html.contains("<li>Section 379 - Punishment for theft</li></ol>"));
}
