//! Command implementations for the CLI

pub mod categories;
pub mod latest;
pub mod list;
pub mod routes;
pub mod show;

use anyhow::Result;

use crate::content::Post;
use crate::Blog;

/// Reject a language that is not configured for the site
pub(crate) fn check_language(blog: &Blog, language: &str) -> Result<()> {
    if !blog.config.is_supported_language(language) {
        anyhow::bail!(
            "Unknown language: {}. Available: {}",
            language,
            blog.config.languages.join(", ")
        );
    }
    Ok(())
}

/// One-line summary of a post for terminal listings
pub(crate) fn post_line(post: &Post) -> String {
    let date = match post.parsed_date() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None if post.date.is_empty() => "----------".to_string(),
        None => post.date.clone(),
    };

    let mut line = format!(
        "  {} - {} [{}/{}/{}]",
        date, post.title, post.category, post.language, post.slug
    );
    for tag in &post.tags {
        line.push_str(" #");
        line.push_str(tag);
    }
    line
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use crate::Blog;

    pub fn write_post(root: &Path, category: &str, language: &str, slug: &str, header: &str) {
        let dir = root.join(category).join(language);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.mdx", slug)), header).unwrap();
    }

    /// A blog with a handful of posts in `content/posts`
    pub fn sample_blog() -> (TempDir, Blog) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("content/posts");
        write_post(
            &root,
            "frontend",
            "en",
            "react-hooks",
            "---\ntitle: React Hooks\ndate: 2024-03-01\ntags: [react, hooks]\n---\nHooks body\n",
        );
        write_post(
            &root,
            "frontend",
            "ko",
            "react-hooks",
            "---\ntitle: 리액트 훅\ndate: 2024-03-01\n---\n본문\n",
        );
        write_post(
            &root,
            "backend",
            "en",
            "rust-axum",
            "---\ntitle: Rust Axum\ndate: 2024-02-20\ndescription: Web servers\n---\nAxum body\n",
        );
        let blog = Blog::new(tmp.path()).unwrap();
        (tmp, blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    #[test]
    fn test_check_language() {
        let (_tmp, blog) = test_support::sample_blog();
        assert!(check_language(&blog, "ja").is_ok());
        let err = check_language(&blog, "fr").unwrap_err();
        assert_eq!(err.to_string(), "Unknown language: fr. Available: ko, ja, en");
    }

    #[test]
    fn test_post_line() {
        let fm = FrontMatter {
            title: "Hello".to_string(),
            date: "2024-01-15 10:00:00".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        let post = Post::from_front_matter("hello", "dev", "en", fm);
        assert_eq!(post_line(&post), "  2024-01-15 - Hello [dev/en/hello] #a #b");

        let undated = Post::from_front_matter("x", "dev", "en", FrontMatter::default());
        assert!(post_line(&undated).starts_with("  ---------- - "));
    }
}
