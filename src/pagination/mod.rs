//! Page offset planning
//!
//! The service returns at most ten results per request, so a search for up
//! to `M` results is split into the fixed-stride offsets `0, 10, 20, …`
//! while `offset <= M`. Every offset is known up front, which is what lets
//! the engine request all pages at once instead of walking them in order.

use crate::types::PageOffset;
use std::num::NonZeroU32;

/// Results per page
pub const PAGE_SIZE: u32 = 10;

const STRIDE: NonZeroU32 = match NonZeroU32::new(PAGE_SIZE) {
    Some(stride) => stride,
    None => panic!("PAGE_SIZE must be non-zero"),
};

/// Offsets for a search of up to `max_results` results, one per page
pub fn page_offsets(max_results: u32) -> Vec<PageOffset> {
    page_offsets_with_stride(max_results, STRIDE)
}

/// Offsets `0, stride, 2 * stride, …` up to and including `max_results`
fn page_offsets_with_stride(max_results: u32, stride: NonZeroU32) -> Vec<PageOffset> {
    (0..=max_results).step_by(stride.get() as usize).collect()
}
