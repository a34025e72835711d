//! Engine types
//!
//! Per-page failures and the summary of a run.

use crate::error::Error;
use crate::types::PageOffset;
use std::fmt;

/// A page that produced no output
#[derive(Debug)]
pub struct PageFailure {
    /// Offset of the failed page
    pub offset: PageOffset,
    /// Why it failed
    pub error: Error,
}

impl PageFailure {
    /// Create a failure for the page at `offset`
    pub fn new(offset: PageOffset, error: Error) -> Self {
        Self { offset, error }
    }
}

impl fmt::Display for PageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page at offset {}: {}", self.offset, self.error)
    }
}

/// Statistics from one run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Pages requested
    pub pages_requested: usize,
    /// Pages fetched and formatted
    pub pages_succeeded: usize,
    /// Items decoded across successful pages
    pub items_received: usize,
    /// Lines handed to the sink
    pub lines_written: usize,
    /// Failed pages
    pub failures: Vec<PageFailure>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RunSummary {
    /// Create a summary for a run of `pages_requested` pages
    pub fn new(pages_requested: usize) -> Self {
        Self {
            pages_requested,
            ..Self::default()
        }
    }

    /// Record a successful page
    pub fn add_page(&mut self, items: usize) {
        self.pages_succeeded += 1;
        self.items_received += items;
    }

    /// Record a failed page
    pub fn add_failure(&mut self, failure: PageFailure) {
        self.failures.push(failure);
    }

    /// Number of failed pages
    pub fn pages_failed(&self) -> usize {
        self.failures.len()
    }

    /// Whether every requested page succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether pages were requested and none succeeded
    pub fn is_total_failure(&self) -> bool {
        self.pages_requested > 0 && self.pages_succeeded == 0
    }
}

/// Result of a run: its summary and the sink the lines went to
#[derive(Debug)]
pub struct RunOutcome<S> {
    pub summary: RunSummary,
    pub sink: S,
}
