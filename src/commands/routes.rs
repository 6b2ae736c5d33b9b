//! Enumerate the routes a static build has to render

use anyhow::Result;
use std::io::Write;

use crate::helpers::{blog_url, home_url, post_url};
use crate::Blog;

/// Print every page route for every configured language
pub fn run<W: Write>(blog: &Blog, out: &mut W) -> Result<()> {
    let slugs = blog.index().static_slugs()?;
    tracing::debug!("Found {} distinct slugs", slugs.len());

    for language in &blog.config.languages {
        writeln!(out, "{}", home_url(language))?;
        writeln!(out, "{}", blog_url(language, None, 1))?;
        for slug in &slugs {
            writeln!(out, "{}", post_url(language, slug))?;
        }
    }

    Ok(())
}
