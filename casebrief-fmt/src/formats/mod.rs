//! Output formats
//!
//! - `fragment`: the formatted HTML fragment, nothing around it
//! - `html`: a standalone HTML5 document with the fragment in an `analysis-content` container

pub mod fragment;
pub mod html;

/// Baseline CSS embedded in standalone documents.
pub fn get_default_css() -> &'static str {
    include_str!("../../css/analysis.css")
}
