//! Bare fragment output
//!
//! The formatter output as is, ready to be assigned to a content container. Accepts one
//! option, `merge-lists`, overriding the configured list merging.

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::formatter::{Formatter, FormatterOptions};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FragmentFormat {
    formatter: Formatter,
}

impl FragmentFormat {
    pub fn new(options: FormatterOptions) -> Self {
        Self {
            formatter: Formatter::new(options),
        }
    }
}

impl Format for FragmentFormat {
    fn name(&self) -> &str {
        "fragment"
    }

    fn description(&self) -> &str {
        "Formatted HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["frag"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(self.formatter.format(source))
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut formatter_options = self.formatter.options();
        if let Some(merge) = bool_option(options, "merge-lists")? {
            formatter_options.merge_adjacent_lists = merge;
        }
        if let Some(unknown) = options.keys().find(|key| key.as_str() != "merge-lists") {
            return Err(FormatError::NotSupported(format!(
                "Format 'fragment' does not support parameter '{unknown}'"
            )));
        }
        Ok(Formatter::new(formatter_options).format(source))
    }
}
