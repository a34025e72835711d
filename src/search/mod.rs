//! Page fetching
//!
//! One page of results is one GET request. `PageFetcher` is the seam the
//! engine talks to; `HttpPageFetcher` is the network implementation and
//! tests substitute their own.

mod fetcher;
mod types;

pub use fetcher::{decode_page, HttpPageFetcher, PageFetcher};
pub use types::{ImageDescriptor, ResultItem, ResultPage};
