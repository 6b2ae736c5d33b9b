//! List categories

use anyhow::Result;
use std::io::Write;

use super::check_language;
use crate::content::PostQuery;
use crate::Blog;

/// List categories with the languages they have, and post counts for `language`
pub fn run<W: Write>(blog: &Blog, language: Option<&str>, out: &mut W) -> Result<()> {
    if let Some(language) = language {
        check_language(blog, language)?;
    }
    let index = blog.index();
    let categories = index.list_categories();

    writeln!(out, "Categories ({}):", categories.len())?;
    for category in categories {
        match language {
            Some(language) => {
                let query = PostQuery::new().category(&category).language(language);
                let count = index.list_posts(&query)?.len();
                writeln!(out, "  {} ({})", category, count)?;
            }
            None => {
                let languages = index.list_languages(&category);
                writeln!(out, "  {} [{}]", category, languages.join(", "))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_blog;

    #[test]
    fn test_categories() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        run(&blog, None, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "Categories (2):\n  backend [en]\n  frontend [en, ko]\n"
        );
    }

    #[test]
    fn test_categories_with_counts() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        run(&blog, Some("ko"), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "Categories (2):\n  backend (0)\n  frontend (1)\n");
    }

    #[test]
    fn test_categories_unknown_language() {
        let (_tmp, blog) = sample_blog();
        let mut buf = Vec::new();
        let err = run(&blog, Some("fr"), &mut buf).unwrap_err();
        assert!(err.to_string().starts_with("Unknown language: fr"));
    }

    #[test]
    fn test_categories_without_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        let mut buf = Vec::new();
        run(&blog, None, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Categories (0):\n");
    }
}
