//! Content index errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the content tree
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content root {path:?} is not readable: {source}")]
    RootUnreadable { path: PathBuf, source: io::Error },

    #[error("Failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl ContentError {
    /// Whether the underlying failure is a missing file or directory
    pub fn is_not_found(&self) -> bool {
        let source = match self {
            ContentError::RootUnreadable { source, .. } => source,
            ContentError::Io { source, .. } => source,
        };
        source.kind() == io::ErrorKind::NotFound
    }
}
