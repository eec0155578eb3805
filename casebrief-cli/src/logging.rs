//! Tracing setup for the casebrief binary
//!
//! Logs go to stderr so converted output on stdout stays clean.
//!
//!   casebrief -v ...                    # debug logging
//!   RUST_LOG=casebrief_fmt=trace ...    # fine-grained control, wins over -v

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init();
}
