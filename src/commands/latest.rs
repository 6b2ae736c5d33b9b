//! Newest posts for a language's home page

use anyhow::Result;
use std::io::Write;

use super::{check_language, post_line};
use crate::Blog;

/// Print the newest posts of `language`, `count` defaulting to the config
pub fn run<W: Write>(
    blog: &Blog,
    language: &str,
    count: Option<usize>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    check_language(blog, language)?;
    let count = count.unwrap_or(blog.config.home_posts);
    let posts = blog.index().latest_posts(language, count)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&posts)?)?;
        return Ok(());
    }

    writeln!(out, "Latest posts ({}):", language)?;
    for post in &posts {
        writeln!(out, "{}", post_line(post))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_blog;

    #[test]
    fn test_latest() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        run(&blog, "en", Some(1), false, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("[frontend/en/react-hooks]"));
    }

    #[test]
    fn test_latest_unknown_language() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        assert!(run(&blog, "de", None, false, &mut buf).is_err());
    }

    #[test]
    fn test_latest_json_uses_config_count() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        run(&blog, "en", None, true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
