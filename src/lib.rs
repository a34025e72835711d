// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # gcli
//!
//! Concurrent, paginated custom search from the command line.
//!
//! A query is split into pages of ten results at offsets `0, 10, 20, ...`
//! up to the maximum result index. Every page is fetched by its own task;
//! each result becomes one formatted line, and all lines are funnelled
//! through a single queue to stdout.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gcli::{Credentials, RequestTemplate, SearchConfig, SearchEngine, Result};
//! use gcli::http::HttpClient;
//! use gcli::search::HttpPageFetcher;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Arc::new(SearchConfig::builder().terms(["rust", "async"]).build()?);
//!     let template = RequestTemplate::new(&config, &Credentials::new("key", "cx"));
//!     let fetcher = Arc::new(HttpPageFetcher::new(HttpClient::new()?));
//!
//!     let (lines, summary) = SearchEngine::new(config, template, fetcher).collect().await?;
//!     for line in lines {
//!         println!("{line}");
//!     }
//!     eprintln!("{} pages failed", summary.pages_failed());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   SearchConfig ──► RequestTemplate ──► page_url(0), page_url(10), ...
//!                                              │ one task per page
//!                                              ▼
//!                          PageFetcher ──► format_line ──► QueueProducer
//!                                                               │
//!                                 QueueConsumer ──► LineSink (stdout)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Run configuration
pub mod config;

/// API key and search-scope lookup
pub mod credentials;

/// Request URL construction
pub mod query;

/// HTTP client
pub mod http;

/// Page fetching and response decoding
pub mod search;

/// Line formatting and sinks
pub mod output;

/// Multi-producer line queue
pub mod queue;

/// Page offsets
pub mod pagination;

/// Search orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{ImageFilters, SearchConfig, SearchConfigBuilder};
pub use credentials::Credentials;
pub use engine::{PageFailure, RunOutcome, RunSummary, SearchEngine};
pub use output::{format_line, FormattedLine, LineSink, OutputOptions, WriterSink};
pub use query::RequestTemplate;
pub use search::{PageFetcher, ResultItem, ResultPage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
