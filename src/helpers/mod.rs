//! Helper functions for page rendering collaborators
//!
//! Pagination arithmetic and route URLs used by the listing, detail and
//! home pages.

mod pagination;
mod url;

pub use pagination::{PageLink, Pagination};
pub use url::*;
