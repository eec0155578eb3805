//! Formatter tests
//!
//! Behavior of the analysis text formatter on realistic input.

mod analysis;
mod properties;
