//! Content module - post discovery, front-matter and queries

mod error;
mod frontmatter;
pub mod index;
mod post;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use index::ContentIndex;
pub use post::{Post, PostQuery, SortOrder};
