//! polyblog: content index for multilingual file-based blogs
//!
//! Posts are stored as `<root>/<category>/<language>/<slug>.mdx` files with a
//! YAML front-matter header. This crate discovers, filters, sorts and
//! paginates them for the pages of a statically generated blog.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentIndex;

/// A blog site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root (`<base>/<content_dir>`)
    pub content_dir: PathBuf,
    index: ContentIndex,
}

impl Blog {
    /// Create a blog from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = match config::SiteConfig::load(&config_path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", config_path);
                config
            }
            Err(e) if is_not_found(&e) => config::SiteConfig::default(),
            Err(e) => return Err(e.context(format!("Invalid config {:?}", config_path))),
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let index = ContentIndex::new(&content_dir).with_extensions(config.extensions.clone());

        Self {
            config,
            base_dir,
            content_dir,
            index,
        }
    }

    /// The content index over this blog's posts
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.config.per_page, 10);
        assert_eq!(blog.content_dir, tmp.path().join("content/posts"));
        assert_eq!(blog.index().root(), blog.content_dir.as_path());
    }

    #[test]
    fn test_new_with_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "content_dir: posts\n").unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.content_dir, tmp.path().join("posts"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "per_page: [many\n").unwrap();
        assert!(Blog::new(tmp.path()).is_err());
    }
}
