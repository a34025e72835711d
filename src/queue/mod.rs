//! Aggregation queue
//!
//! An unordered multi-producer, single-consumer conduit backed by an
//! unbounded tokio channel.
//!
//! - `push` never waits: a slow consumer cannot stall producers.
//! - The consumer sees end-of-stream once every producer handle is gone
//!   and the buffer is drained, and not before.
//!
//! Capacity is unbounded, so memory grows with whatever the consumer has
//! not read yet. A run produces at most ten lines per page, which keeps
//! this small in practice; a consumer that stops reading entirely would
//! hold every line of the run in memory.

use tokio::sync::mpsc;

/// Constructor for producer/consumer pairs
pub struct AggregationQueue;

impl AggregationQueue {
    /// Create a new open queue
    #[allow(clippy::new_ret_no_self)]
    pub fn new<T: Send>() -> (QueueProducer<T>, QueueConsumer<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (QueueProducer { tx }, QueueConsumer { rx })
    }
}

/// Insertion handle; clone one per producer
#[derive(Debug)]
pub struct QueueProducer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Clone for QueueProducer<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Send> QueueProducer<T> {
    /// Insert an item.
    ///
    /// Returns `false` when the consumer is gone and the item was dropped.
    pub fn push(&self, item: T) -> bool {
        self.tx.send(item).is_ok()
    }

    /// Give up this handle.
    ///
    /// The queue closes when the last handle is closed or dropped; taking
    /// `self` by value means a handle can close at most once.
    pub fn close(self) {
        drop(self);
    }
}

/// Removal handle; there is exactly one per queue
#[derive(Debug)]
pub struct QueueConsumer<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T: Send> QueueConsumer<T> {
    /// Wait for the next item.
    ///
    /// Returns `None` once the queue is closed and empty.
    pub async fn next(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}
