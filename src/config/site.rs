//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::SortOrder;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Content
    pub content_dir: String,
    pub extensions: Vec<String>,

    // Languages
    pub languages: Vec<String>,
    pub default_language: String,

    // Listing
    pub per_page: usize,
    pub page_window: usize,
    pub home_posts: usize,
    pub sort: SortOrder,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content/posts".to_string(),
            extensions: vec!["mdx".to_string(), "md".to_string()],

            languages: vec!["ko".to_string(), "ja".to_string(), "en".to_string()],
            default_language: "en".to_string(),

            per_page: 10,
            page_window: 2,
            home_posts: 3,
            sort: SortOrder::DateDesc,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether `language` is one of the configured languages
    pub fn is_supported_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}
