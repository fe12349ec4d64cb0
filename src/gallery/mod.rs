//! Filter engine and pagination controller.
//!
//! Both are pure and know nothing about where the collection came from; the
//! coordinator in [`crate::app`] decides what the working collection is.
//!
//! - [`filter`]: title/category filters and the derived category set
//! - [`pagination`]: page slices, page counts, and page transitions

pub mod filter;
pub mod pagination;

pub use filter::{apply_filters, derive_categories, match_range};
pub use pagination::{clamp_page, next_page, page_count, page_slice, previous_page, PAGE_SIZE};
