//! Page host tests against whole analysis pages

use casebrief_fmt::dom;
use casebrief_fmt::{initialize, FormatterOptions, PageOptions};

fn analysis_page(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>Case Analysis</title></head>
<body>
<div class="container">
  <div class="card analysis-section">
    <div class="card-body analysis-content">{content}</div>
  </div>
</div>
</body>
</html>"#
    )
}

fn container_html(page: &str) -> String {
    let dom = dom::parse_page(page);
    let container = dom::find_first(&dom.document, &|node| {
        dom::has_class(node, "analysis-content")
    })
    .expect("container to exist");
    dom::inner_html(&container).unwrap()
}

#[test]
fn test_analysis_container_is_formatted() {
    let page = analysis_page(
        "## Legal Analysis\nThe act falls under **Section 379**.\n### Next Steps\n1. File an FIR\n2. Collect CCTV footage\n3. Contact a lawyer",
    );
    let outcome = initialize(&page, &PageOptions::default()).unwrap();

    assert!(outcome.formatted);
    assert_eq!(
        container_html(&outcome.html),
        "<h2>Legal Analysis</h2>\nThe act falls under <strong>Section 379</strong>.\n<h3>Next Steps</h3>\n<ol><li>File an FIR</li>\n<li>Collect CCTV footage</li>\n<li>Contact a lawyer</li></ol>"
    );
}

#[test]
fn test_rest_of_page_is_preserved() {
    let page = analysis_page("## Title");
    let outcome = initialize(&page, &PageOptions::default()).unwrap();

    assert!(outcome.html.starts_with("<!DOCTYPE html>"));
    assert!(outcome.html.contains("<title>Case Analysis</title>"));
    assert!(outcome
        .html
        .contains("<div class=\"card analysis-section\">"));
}

#[test]
fn test_page_without_container_is_untouched() {
    let page = "<!DOCTYPE html><html><body><form id=\"caseForm\">## not analysis</form></body></html>";
    let outcome = initialize(page, &PageOptions::default()).unwrap();

    assert!(!outcome.formatted);
    assert_eq!(outcome.lists_merged, 0);
    assert_eq!(outcome.html, page);
}

#[test]
fn test_empty_container() {
    let outcome = initialize(&analysis_page(""), &PageOptions::default()).unwrap();
    assert!(outcome.formatted);
    assert_eq!(container_html(&outcome.html), "");
}

#[test]
fn test_upstream_lists_are_merged_in_place() {
    let page = analysis_page("<ol><li>Report</li></ol> <ol><li>Appeal</li></ol>");
    let outcome = initialize(&page, &PageOptions::default()).unwrap();

    assert_eq!(
        container_html(&outcome.html),
        "<ol><li>Report</li> <li>Appeal</li></ol>"
    );
}

#[test]
fn test_list_merging_disabled() {
    let options = PageOptions {
        formatter: FormatterOptions {
            merge_adjacent_lists: false,
        },
        ..PageOptions::default()
    };
    let outcome = initialize(&analysis_page("1. a\n2. b"), &options).unwrap();

    assert_eq!(
        container_html(&outcome.html),
        "<ol><li>a</li></ol>\n<ol><li>b</li></ol>"
    );
}

#[test]
fn test_escaped_text_stays_escaped() {
    let page = analysis_page("Fine &lt; 5000 &amp; **bail**");
    let outcome = initialize(&page, &PageOptions::default()).unwrap();

    assert_eq!(
        container_html(&outcome.html),
        "Fine &lt; 5000 &amp; <strong>bail</strong>"
    );
}

#[test]
fn test_table_container_without_markers_is_preserved() {
    let page = "<html><body><table class=\"analysis-content\"><tr><td>plain cell</td></tr></table></body></html>";
    let outcome = initialize(page, &PageOptions::default()).unwrap();

    assert!(outcome.formatted);
    assert!(outcome.html.contains(
        "<table class=\"analysis-content\"><tbody><tr><td>plain cell</td></tr></tbody></table>"
    ));
}

#[test]
fn test_table_container_cells_are_formatted() {
    let page = "<html><body><table class=\"analysis-content\"><tr><td>**Bailable**</td><td>Yes</td></tr></table></body></html>";
    let outcome = initialize(page, &PageOptions::default()).unwrap();

    assert_eq!(
        container_html(&outcome.html),
        "<tbody><tr><td><strong>Bailable</strong></td><td>Yes</td></tr></tbody>"
    );
}
