//! Execution engine module
//!
//! Runs one search as a single scatter/gather round.
//!
//! # Overview
//!
//! 1. The page offsets for the run are computed up front.
//! 2. A drain task is started on the blocking pool that moves lines from
//!    the aggregation queue to the sink.
//! 3. One task per offset fetches its page, formats every item and pushes
//!    the lines into the queue. A failed page pushes nothing and reports a
//!    `PageFailure`; other pages are unaffected.
//! 4. Once every page task has finished, the queue is closed, the drain
//!    task runs to end-of-stream and the sink is handed back.
//!
//! Lines from different pages interleave in whatever order the pages
//! complete. There is no retry, no cancellation and no limit on how many
//! pages are in flight.

mod types;

pub use types::{PageFailure, RunOutcome, RunSummary};

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::output::{format_line, FormattedLine, LineSink, OutputOptions};
use crate::pagination::page_offsets;
use crate::query::RequestTemplate;
use crate::queue::{AggregationQueue, QueueConsumer, QueueProducer};
use crate::search::PageFetcher;
use crate::types::PageOffset;
use futures::future::join_all;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::task;
use tracing::{debug, info, warn};

/// Paginated search engine
pub struct SearchEngine {
    /// Page fetcher shared by all page tasks
    fetcher: Arc<dyn PageFetcher>,
    /// Request template for the run
    template: Arc<RequestTemplate>,
    /// Run configuration
    config: Arc<SearchConfig>,
}

impl SearchEngine {
    /// Create a new engine
    pub fn new(
        config: Arc<SearchConfig>,
        template: RequestTemplate,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            fetcher,
            template: Arc::new(template),
            config,
        }
    }

    /// Offsets this engine will request
    pub fn offsets(&self) -> Vec<PageOffset> {
        page_offsets(self.config.max_results)
    }

    /// Run the search, writing every result line to `sink`.
    ///
    /// Page failures do not fail the run; they are logged and listed in the
    /// returned summary. The only error is failing to write to the sink.
    pub async fn run<S>(&self, sink: S) -> Result<RunOutcome<S>>
    where
        S: LineSink + 'static,
    {
        let start = Instant::now();
        let offsets = self.offsets();
        let mut summary = RunSummary::new(offsets.len());

        let (producer, consumer) = AggregationQueue::new::<FormattedLine>();
        // Sink writes block (stdout may be a stalled pipe), so the drain
        // lives on the blocking pool and never holds a runtime worker.
        let handle = Handle::current();
        let drain_task = task::spawn_blocking(move || handle.block_on(drain(consumer, sink)));

        debug!("Requesting {} pages", offsets.len());
        let handles: Vec<_> = offsets
            .iter()
            .map(|&offset| {
                tokio::spawn(fetch_and_format(
                    Arc::clone(&self.fetcher),
                    Arc::clone(&self.template),
                    self.config.output,
                    offset,
                    producer.clone(),
                ))
            })
            .collect();

        // Barrier: the queue must outlive every page task.
        for (offset, joined) in offsets.iter().zip(join_all(handles).await) {
            match joined {
                Ok(Ok(items)) => summary.add_page(items),
                Ok(Err(failure)) => {
                    warn!("Skipping {failure}");
                    summary.add_failure(failure);
                }
                Err(e) => {
                    let failure =
                        PageFailure::new(*offset, Error::Other(format!("page task aborted: {e}")));
                    warn!("Skipping {failure}");
                    summary.add_failure(failure);
                }
            }
        }
        producer.close();

        let drained = drain_task
            .await
            .map_err(|e| Error::Other(format!("output task aborted: {e}")))?;
        if let Some(e) = drained.error {
            return Err(Error::Io(e));
        }

        summary.lines_written = drained.written;
        summary.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Search finished: {}/{} pages, {} items, {} lines in {}ms",
            summary.pages_succeeded,
            summary.pages_requested,
            summary.items_received,
            summary.lines_written,
            summary.duration_ms
        );

        Ok(RunOutcome {
            summary,
            sink: drained.sink,
        })
    }

    /// Run the search and collect the lines in memory
    pub async fn collect(&self) -> Result<(Vec<FormattedLine>, RunSummary)> {
        let outcome = self.run(Vec::new()).await?;
        Ok((outcome.sink, outcome.summary))
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("max_results", &self.config.max_results)
            .field("output", &self.config.output)
            .finish_non_exhaustive()
    }
}

/// One page task: fetch, format, push. Returns the item count.
async fn fetch_and_format(
    fetcher: Arc<dyn PageFetcher>,
    template: Arc<RequestTemplate>,
    options: OutputOptions,
    offset: PageOffset,
    producer: QueueProducer<FormattedLine>,
) -> std::result::Result<usize, PageFailure> {
    let url = template.page_url(offset);
    debug!("Fetching page at offset {offset}");

    let page = fetcher
        .fetch_page(&url)
        .await
        .map_err(|error| PageFailure::new(offset, error))?;

    for item in &page.items {
        producer.push(format_line(item, &options));
    }
    debug!("Page at offset {offset}: {} items", page.len());
    Ok(page.len())
}

struct Drained<S> {
    sink: S,
    written: usize,
    error: Option<io::Error>,
}

/// Move lines from the queue to the sink until end-of-stream.
///
/// After a write error the remaining lines are still taken off the queue,
/// but discarded.
async fn drain<S: LineSink>(mut consumer: QueueConsumer<FormattedLine>, mut sink: S) -> Drained<S> {
    let mut written = 0;
    let mut error = None;

    while let Some(line) = consumer.next().await {
        if error.is_some() {
            continue;
        }
        match sink.write_line(&line) {
            Ok(()) => written += 1,
            Err(e) => error = Some(e),
        }
    }

    if error.is_none() {
        error = sink.flush().err();
    }

    Drained {
        sink,
        written,
        error,
    }
}
