//! Post model and query options

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::frontmatter::{parse_date_string, FrontMatter};

/// One localized variant of a blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// File name without extension
    pub slug: String,

    /// Category directory the post lives in
    pub category: String,

    /// Language directory the post lives in
    pub language: String,

    /// Post title
    pub title: String,

    /// Publication date, as written in the front-matter
    pub date: String,

    /// Post tags, in source order
    pub tags: Vec<String>,

    /// Short summary
    pub description: String,

    /// File creation time in milliseconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctime: Option<i64>,

    /// Raw post body; only set by detail lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Post {
    /// Build a listing record from parsed front-matter
    pub fn from_front_matter(
        slug: impl Into<String>,
        category: impl Into<String>,
        language: impl Into<String>,
        fm: FrontMatter,
    ) -> Self {
        Self {
            slug: slug.into(),
            category: category.into(),
            language: language.into(),
            title: fm.title,
            date: fm.date,
            tags: fm.tags,
            description: fm.description,
            ctime: None,
            content: None,
        }
    }

    /// Parsed publication date; `None` when missing or unparseable
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date_string(&self.date)
    }
}

/// Ordering applied to a post listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest first; ties go to the most recently created file
    #[default]
    DateDesc,
    /// Oldest first; ties go to the earliest created file
    DateAsc,
    /// Alphabetical by title
    TitleAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::TitleAsc => "title-asc",
        }
    }

    /// Sort posts in place. The sort is stable.
    pub fn sort(&self, posts: &mut [Post]) {
        match self {
            SortOrder::DateDesc => posts.sort_by_cached_key(|p| {
                std::cmp::Reverse((p.parsed_date(), p.ctime.unwrap_or(0)))
            }),
            SortOrder::DateAsc => {
                posts.sort_by_cached_key(|p| (p.parsed_date(), p.ctime.unwrap_or(0)))
            }
            SortOrder::TitleAsc => posts.sort_by_cached_key(|p| title_key(&p.title)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(SortOrder::DateDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "title-asc" => Ok(SortOrder::TitleAsc),
            other => Err(format!(
                "Unknown sort order: {}. Available: date-desc, date-asc, title-asc",
                other
            )),
        }
    }
}

/// Sort key for titles: accents and case are ignored first, then case, then
/// the exact text decides
fn title_key(title: &str) -> (String, String, String) {
    let mut base = String::with_capacity(title.len());
    for c in title.chars() {
        // Latin letters with diacritics fold to their ASCII base; other scripts keep
        // code point order
        if ('\u{80}'..='\u{24f}').contains(&c) {
            base.push_str(&unidecode::unidecode_char(c).to_lowercase());
        } else {
            base.extend(c.to_lowercase());
        }
    }
    (base, title.to_lowercase(), title.to_string())
}

/// Filter and ordering for a post listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub language: Option<String>,
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
