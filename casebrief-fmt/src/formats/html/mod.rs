//! Standalone HTML document output
//!
//! Wraps the formatted fragment in a complete HTML5 document:
//! - the fragment sits in `<div class="analysis-content">`, same as on the analysis page
//! - `css/analysis.css` is embedded in a `<style>` tag, followed by any custom CSS
//! - the title is escaped, the fragment is not (it is trusted content)
//!
//! Options:
//! - `title`: document title
//! - `css`: extra CSS text appended after the baseline
//! - `merge-lists`: override list merging

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::formats::get_default_css;
use crate::formatter::{Formatter, FormatterOptions};
use crate::page::DEFAULT_CONTAINER_CLASS;
use std::collections::HashMap;

pub const DEFAULT_TITLE: &str = "Case Analysis";

const KNOWN_OPTIONS: &[&str] = &["title", "css", "merge-lists"];

/// Options for document output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub title: String,
    /// Optional custom CSS to append after the baseline CSS
    pub custom_css: Option<String>,
    pub formatter: FormatterOptions,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            custom_css: None,
            formatter: FormatterOptions::default(),
        }
    }
}

impl HtmlOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Format implementation for standalone HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 document with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(render_document(source, &self.options))
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if let Some(unknown) = options
            .keys()
            .find(|key| !KNOWN_OPTIONS.contains(&key.as_str()))
        {
            return Err(FormatError::NotSupported(format!(
                "Format 'html' does not support parameter '{unknown}'"
            )));
        }

        let mut html_options = self.options.clone();
        if let Some(title) = options.get("title") {
            html_options.title = title.clone();
        }
        if let Some(css) = options.get("css") {
            html_options.custom_css = Some(css.clone());
        }
        if let Some(merge) = bool_option(options, "merge-lists")? {
            html_options.formatter.merge_adjacent_lists = merge;
        }

        Ok(render_document(source, &html_options))
    }
}

/// Format `source` and wrap it in a complete HTML document
pub fn render_document(source: &str, options: &HtmlOptions) -> String {
    let body_html = Formatter::new(options.formatter).format(source);
    let baseline_css = get_default_css();
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="casebrief">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<div class="{DEFAULT_CONTAINER_CLASS}">
{body_html}
</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
