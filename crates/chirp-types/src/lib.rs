//! Chirp Types - Pure type definitions for the micro-blogging API
//!
//! This crate contains only plain data types with no runtime dependencies,
//! shared between the server and any future clients.

pub mod post;
pub mod user;

pub use post::*;
pub use user::*;

/// Fixed page size for post listings (1-indexed pages).
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to hold `total` posts. Zero posts means zero pages;
/// link construction clamps `last` to page 1 separately.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}
