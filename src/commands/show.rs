//! Show a single post with its body

use anyhow::Result;
use std::io::Write;

use super::check_language;
use crate::Blog;

/// Print one post. Without a category the slug is resolved within the language.
pub fn run<W: Write>(
    blog: &Blog,
    slug: &str,
    language: &str,
    category: Option<&str>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    check_language(blog, language)?;

    let post = match category {
        Some(category) => blog.index().get_post(slug, category, language),
        None => blog.index().find_post(slug, language)?,
    };

    let Some(post) = post else {
        anyhow::bail!(
            "Post not found: {} (language: {}, category: {})",
            slug,
            language,
            category.unwrap_or("any")
        );
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&post)?)?;
        return Ok(());
    }

    writeln!(out, "{}", post.title)?;
    writeln!(out, "Date:     {}", post.date)?;
    writeln!(out, "Category: {}", post.category)?;
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        writeln!(out, "Tags:     {}", tags.join(" "))?;
    }
    if !post.description.is_empty() {
        writeln!(out, "{}", post.description)?;
    }
    writeln!(out)?;
    write!(out, "{}", post.content.unwrap_or_default())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_blog;

    #[test]
    fn test_show_with_category() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        run(&blog, "react-hooks", "en", Some("frontend"), false, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("React Hooks\n"));
        assert!(out.contains("Tags:     #react #hooks"));
        assert!(out.ends_with("Hooks body\n"));
    }

    #[test]
    fn test_show_resolves_category() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        run(&blog, "rust-axum", "en", None, true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["category"], "backend");
        assert_eq!(value["description"], "Web servers");
        assert_eq!(value["content"], "Axum body\n");
    }

    #[test]
    fn test_show_missing_post() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        let err = run(&blog, "rust-axum", "ko", None, false, &mut buf).unwrap_err();
        assert!(err.to_string().contains("Post not found"));
    }
}
