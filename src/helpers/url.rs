//! URL helper functions for blog routes

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept as-is in a path segment or query value
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a single path segment or query value
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Listing page URL
///
/// # Examples
/// ```ignore
/// blog_url("en", Some("frontend"), 2) // -> "/en/blog?category=frontend&page=2"
/// ```
pub fn blog_url(language: &str, category: Option<&str>, page: usize) -> String {
    let mut url = format!("/{}/blog", encode_segment(language));

    let mut params = Vec::new();
    if let Some(category) = category {
        params.push(format!("category={}", encode_segment(category)));
    }
    if page > 1 {
        params.push(format!("page={}", page));
    }

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Post detail URL
///
/// # Examples
/// ```ignore
/// post_url("ko", "react-hooks") // -> "/ko/blog/react-hooks"
/// ```
pub fn post_url(language: &str, slug: &str) -> String {
    format!("/{}/blog/{}", encode_segment(language), encode_segment(slug))
}

/// Home page URL for a language
pub fn home_url(language: &str) -> String {
    format!("/{}", encode_segment(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_url() {
        assert_eq!(blog_url("en", None, 1), "/en/blog");
        assert_eq!(blog_url("en", None, 3), "/en/blog?page=3");
        assert_eq!(
            blog_url("ja", Some("frontend"), 2),
            "/ja/blog?category=frontend&page=2"
        );
        assert_eq!(
            blog_url("en", Some("c & c++"), 1),
            "/en/blog?category=c%20%26%20c%2B%2B"
        );
    }

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("ko", "react-hooks"), "/ko/blog/react-hooks");
        assert_eq!(post_url("en", "a/b"), "/en/blog/a%2Fb");
        assert_eq!(post_url("ko", "훅"), "/ko/blog/%ED%9B%85");
    }

    #[test]
    fn test_home_url() {
        assert_eq!(home_url("ja"), "/ja");
    }
}
