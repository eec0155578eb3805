//! Formatting for case analysis pages
//!
//!     Case analyses are written with a handful of markdown-like conventions (`##` headings,
//!     `**bold**`, `1.` list lines). This crate turns that text into HTML and hosts the
//!     result on the analysis page. It is not a markdown implementation: the rules are
//!     literal substitutions, and anything they do not match passes through.
//!
//!     This is a pure lib, that is, it powers casebrief-cli but is shell agnostic: no code
//!     here reads env vars, prints, or touches the file system.
//!
//! Layout
//!
//!     .
//!     ├── error.rs
//!     ├── rules.rs               # Ordered pattern → replacement table
//!     ├── formatter.rs           # Text formatter (rules + list coalescing)
//!     ├── dom.rs                 # html5ever fragment parsing, in-place list merge
//!     ├── page.rs                # initialize(): formats the page's content container
//!     ├── format.rs              # Format trait definition
//!     ├── registry.rs            # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── fragment           # Bare formatted fragment
//!     │   └── html               # Standalone document with embedded CSS
//!     ├── intake.rs              # Intake form validation and case-type rules
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     1. Headings, longest marker first (`####`, `###`, `##`).
//!     2. `**bold**`, all non-overlapping occurrences.
//!     3. Lines starting with `<digit>. `, each into a one-item `<ol>`.
//!     4. Adjacent `<ol>` containers collapse into the first.
//!
//!     The formatter returns a new string; the page host assigns it to the container and
//!     repeats step 4 on the live fragment, which also catches lists that came from upstream
//!     HTML.
//!
//! Testing
//!
//!     tests
//!     ├── formatter              # Formatter behavior, snapshots, properties
//!     └── page                   # Page host against whole documents
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to
//!     include these in the mod.
pub mod dom;
pub mod error;
pub mod format;
pub mod formats;
pub mod formatter;
pub mod intake;
pub mod page;
pub mod registry;
pub mod rules;

pub use error::FormatError;
pub use format::Format;
pub use formatter::{format_text, Formatter, FormatterOptions};
pub use page::{initialize, PageOptions, PageOutcome};
pub use registry::FormatRegistry;
