//! CLI module
//!
//! Command-line interface for running one search.
//!
//! # Exit status
//!
//! - `0` - the run finished (failed pages are logged and skipped)
//! - `1` - setup error: bad arguments, endpoint or credentials
//! - `2` - `--strict` and at least one page failed

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{Runner, EXIT_OK, EXIT_PAGES_FAILED, EXIT_SETUP_ERROR};
