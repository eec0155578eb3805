//! Page host tests
//!
//! `initialize()` against whole analysis pages.

mod host;
