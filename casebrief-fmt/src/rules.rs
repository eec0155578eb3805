//! Rewrite rules for analysis text
//!
//!     Each rule is a (pattern, replacement) pair applied over the whole text. The table is
//!     ordered and the order matters: heading markers share a prefix, so `####` has to be
//!     consumed before `###`, and `###` before `##`, or a level 4 heading would be partially
//!     eaten by the level 2 rule (`#### x` would become `##<h2>x</h2>`).
//!
//!     Markers are literal and unanchored except for list items, which must start a line.
//!     Captured text stops at the end of the line; both `\n` and `\r` end a line so CRLF
//!     input keeps its line endings outside the generated tags. A line starts after either
//!     terminator too, which covers `\r`-only text.
//!
//!     Nothing here escapes or validates the captured text. The input is trusted content
//!     that may already carry inline HTML, and it passes through as is.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// What a rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `##`, `###` or `####` followed by a space, wrapped in `<hN>`
    Heading(u8),
    /// `**text**` anywhere in a line, wrapped in `<strong>`
    Emphasis,
    /// A line starting with a single digit, a period and a space, wrapped in a one-item `<ol>`
    ListItem,
}

/// A single pattern → replacement rule.
#[derive(Debug)]
pub struct Rule {
    kind: RuleKind,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(kind: RuleKind, pattern: &str, replacement: &'static str) -> Self {
        Rule {
            kind,
            pattern: Regex::new(pattern).expect("rule patterns are static and valid"),
            replacement,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// The regular expression source, mostly useful for diagnostics.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether this rule would change `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replace every non-overlapping match. Borrows `text` back when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// The rule table, in application order.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(RuleKind::Heading(4), r"#### ([^\r\n]*)", "<h4>${1}</h4>"),
        Rule::new(RuleKind::Heading(3), r"### ([^\r\n]*)", "<h3>${1}</h3>"),
        Rule::new(RuleKind::Heading(2), r"## ([^\r\n]*)", "<h2>${1}</h2>"),
        Rule::new(RuleKind::Emphasis, r"\*\*([^\r\n]*?)\*\*", "<strong>${1}</strong>"),
        Rule::new(
            RuleKind::ListItem,
            r"(?mR)^[0-9]\. ([^\r\n]*)",
            "<ol><li>${1}</li></ol>",
        ),
    ]
});

// A closing list tag followed by an opening one, with nothing but whitespace between.
static LIST_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</ol>(\s*)<ol>").expect("list boundary pattern is valid"));

/// Collapse runs of adjacent `<ol>` containers into the first one.
///
/// The whitespace that separated two containers ends up between their items, so the
/// line layout of the source is kept.
pub fn coalesce_lists(html: &str) -> Cow<'_, str> {
    LIST_BOUNDARY.replace_all(html, "${1}")
}
