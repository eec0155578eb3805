//! Page host: formats the analysis container of a rendered page
//!
//! [`initialize`] is the single entry point. It looks for the content container (the
//! first element carrying the configured class), formats its inner HTML exactly once and
//! assigns the result back, then merges adjacent list containers inside it. A page
//! without a container is returned untouched; that is not an error.

use crate::dom;
use crate::error::FormatError;
use crate::formatter::{Formatter, FormatterOptions};
use tracing::debug;

/// Class that marks the content container on analysis pages.
pub const DEFAULT_CONTAINER_CLASS: &str = "analysis-content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Class token identifying the content container
    pub container_class: String,
    pub formatter: FormatterOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            formatter: FormatterOptions::default(),
        }
    }
}

/// Result of [`initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// The page after formatting, or the input as given when nothing was formatted
    pub html: String,
    /// Whether a content container was found and formatted
    pub formatted: bool,
    /// List containers removed by the merge pass
    pub lists_merged: usize,
}

/// Format the content container of `page_html`.
pub fn initialize(page_html: &str, options: &PageOptions) -> Result<PageOutcome, FormatError> {
    let page = dom::parse_page(page_html);
    let container = dom::find_first(&page.document, &|node| {
        dom::has_class(node, &options.container_class)
    });

    let Some(container) = container else {
        debug!(
            class = %options.container_class,
            "no content container on page, leaving it untouched"
        );
        return Ok(PageOutcome {
            html: page_html.to_string(),
            formatted: false,
            lists_merged: 0,
        });
    };

    let raw = dom::inner_html(&container)?;
    let formatted = Formatter::new(options.formatter).format(&raw);
    dom::set_inner_html(&container, &formatted);

    let lists_merged = if options.formatter.merge_adjacent_lists {
        dom::merge_adjacent_lists(&container)
    } else {
        0
    };
    debug!(bytes = raw.len(), lists_merged, "content container formatted");

    Ok(PageOutcome {
        html: dom::serialize_page(&page)?,
        formatted: true,
        lists_merged,
    })
}
