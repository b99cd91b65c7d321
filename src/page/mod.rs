//! Page selection
//!
//! Pure, stateless mapping from a page request to an inclusive index range
//! over the document sequence. No persistence, no side effects.

mod selector;

pub use selector::{select, PageRange, DEFAULT_PAGE_SIZE};
