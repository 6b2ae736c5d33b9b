//! Paginated post listing

use anyhow::Result;
use std::io::Write;

use super::{check_language, post_line};
use crate::content::{PostQuery, SortOrder};
use crate::helpers::{blog_url, PageLink, Pagination};
use crate::Blog;

/// Options for the `list` command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub language: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
    /// Raw page parameter, validated by [`Pagination::parse_page`]
    pub page: Option<String>,
    pub json: bool,
}

/// List one page of posts
pub fn run<W: Write>(blog: &Blog, options: &ListOptions, out: &mut W) -> Result<()> {
    let mut query = PostQuery::new().sort(options.sort.unwrap_or(blog.config.sort));
    if let Some(language) = &options.language {
        check_language(blog, language)?;
        query = query.language(language);
    }
    if let Some(category) = &options.category {
        query = query.category(category);
    }

    let posts = blog.index().list_posts(&query)?;
    let requested = Pagination::parse_page(options.page.as_deref());
    let pagination = Pagination::new(posts.len(), blog.config.per_page, requested);
    let page_posts = pagination.slice(&posts);
    let window = pagination.window(blog.config.page_window);

    if options.json {
        let value = serde_json::json!({
            "pagination": pagination,
            "pages": window,
            "posts": page_posts,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "Posts ({} total, page {}/{}):",
        pagination.total_items, pagination.current, pagination.total_pages
    )?;

    if page_posts.is_empty() {
        let message = if options.category.is_some() {
            "No posts in this category."
        } else {
            "No posts yet."
        };
        writeln!(out, "  {}", message)?;
    }
    for post in page_posts {
        writeln!(out, "{}", post_line(post))?;
    }

    if pagination.total_pages > 1 {
        writeln!(out, "Pages: {}", format_window(&window))?;
        if let Some(language) = &options.language {
            if let Some(next) = pagination.next() {
                writeln!(
                    out,
                    "Next: {}",
                    blog_url(language, options.category.as_deref(), next)
                )?;
            }
        }
    }

    Ok(())
}

/// Render the page window as `1 … 3 4 [5] 6 7 … 10`
pub fn format_window(window: &[PageLink]) -> String {
    window
        .iter()
        .map(|link| match link {
            PageLink::Page(n) => n.to_string(),
            PageLink::Current(n) => format!("[{}]", n),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{sample_blog, write_post};

    fn output(blog: &Blog, options: &ListOptions) -> String {
        let mut buf = Vec::new();
        run(blog, options, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_language() {
        let (_tmp, blog) = sample_blog();
        let out = output(
            &blog,
            &ListOptions {
                language: Some("en".to_string()),
                ..Default::default()
            },
        );
        assert!(out.starts_with("Posts (2 total, page 1/1):"));
        let hooks = out.find("react-hooks").unwrap();
        let axum = out.find("rust-axum").unwrap();
        assert!(hooks < axum);
        assert!(!out.contains("Pages:"));
    }

    #[test]
    fn test_list_empty_category() {
        let (_tmp, blog) = sample_blog();
        let out = output(
            &blog,
            &ListOptions {
                category: Some("devops".to_string()),
                ..Default::default()
            },
        );
        assert!(out.contains("No posts in this category."));
    }

    #[test]
    fn test_list_paginates_and_clamps() {
        let (tmp, blog) = sample_blog();
        let root = tmp.path().join("content/posts");
        for i in 0..25 {
            write_post(
                &root,
                "bulk",
                "en",
                &format!("post-{:02}", i),
                &format!("---\ntitle: Post {}\ndate: 2023-01-{:02}\n---\n", i, i + 1),
            );
        }

        let out = output(
            &blog,
            &ListOptions {
                category: Some("bulk".to_string()),
                language: Some("en".to_string()),
                page: Some("99".to_string()),
                ..Default::default()
            },
        );
        assert!(out.starts_with("Posts (25 total, page 3/3):"));
        assert_eq!(out.lines().filter(|l| l.contains("[bulk/en/")).count(), 5);
        assert!(out.contains("Pages: 1 2 [3]"));
        assert!(!out.contains("Next:"));
    }

    #[test]
    fn test_list_json() {
        let (_tmp, blog) = sample_blog();
        let out = output(
            &blog,
            &ListOptions {
                language: Some("ko".to_string()),
                page: Some("abc".to_string()),
                json: true,
                ..Default::default()
            },
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["pagination"]["current"], 1);
        assert_eq!(value["posts"][0]["slug"], "react-hooks");
        assert_eq!(value["posts"][0]["title"], "리액트 훅");
        assert!(value["posts"][0].get("content").is_none());
        assert_eq!(value["pages"][0]["kind"], "current");
    }

    #[test]
    fn test_list_unknown_language() {
        let (_tmp, blog) = sample_blog();
        let options = ListOptions {
            language: Some("fr".to_string()),
            ..Default::default()
        };
        let mut buf = Vec::new();
        let err = run(&blog, &options, &mut buf).unwrap_err();
        assert!(err.to_string().starts_with("Unknown language: fr"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_format_window() {
        let pagination = Pagination::new(100, 10, 5);
        assert_eq!(format_window(&pagination.window(2)), "1 … 3 4 [5] 6 7 … 10");
    }
}
