//! Content index - discovers, filters and sorts posts in the content tree
//!
//! Posts live at `<root>/<category>/<language>/<slug>.<ext>`. Every query
//! re-reads the tree; nothing is cached between calls.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post, PostQuery, SortOrder};

/// Extensions read when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Query handle over a content root
#[derive(Debug, Clone)]
pub struct ContentIndex {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentIndex {
    /// Create an index over `root` reading the default extensions
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the accepted file extensions (without the leading dot)
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// The content root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List posts matching `query`, sorted by its order
    ///
    /// Fails only when the content root itself cannot be read. Missing
    /// categories or language directories contribute no posts.
    pub fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ContentError> {
        let categories = read_dir_entries(&self.root, EntryKind::Dir).map_err(|e| match e {
            ContentError::Io { path, source } => ContentError::RootUnreadable { path, source },
            other => other,
        })?;

        let mut posts = Vec::new();

        for (category, category_path) in categories {
            if let Some(filter) = &query.category {
                if *filter != category {
                    continue;
                }
            }

            let languages = match &query.language {
                Some(language) => {
                    if !is_safe_segment(language) {
                        tracing::debug!("Rejected language filter {:?}", language);
                        return Ok(Vec::new());
                    }
                    vec![(language.clone(), category_path.join(language))]
                }
                None => match read_dir_entries(&category_path, EntryKind::Dir) {
                    Ok(languages) => languages,
                    Err(e) => {
                        tracing::warn!("Skipping category {}: {}", category, e);
                        continue;
                    }
                },
            };

            for (language, language_path) in languages {
                self.collect_posts(&category, &language, &language_path, &mut posts);
            }
        }

        query.sort.sort(&mut posts);

        tracing::debug!(
            "Listed {} posts (language={:?}, category={:?}, sort={})",
            posts.len(),
            query.language,
            query.category,
            query.sort
        );

        Ok(posts)
    }

    /// Load every post file in one language directory into `posts`
    fn collect_posts(&self, category: &str, language: &str, dir: &Path, posts: &mut Vec<Post>) {
        let files = match read_dir_entries(dir, EntryKind::File) {
            Ok(files) => files,
            Err(e) if e.is_not_found() => {
                tracing::debug!("No {} posts in category {}", language, category);
                return;
            }
            Err(e) => {
                tracing::warn!("Skipping {}/{}: {}", category, language, e);
                return;
            }
        };

        // One file per slug; the earliest configured extension wins
        let mut chosen: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();
        for (file_name, path) in files {
            let Some((slug, rank)) = self.slug_for(&file_name) else {
                continue;
            };
            let preferred = chosen.get(slug).map_or(true, |(best, _)| rank < *best);
            if preferred {
                chosen.insert(slug.to_string(), (rank, path));
            } else {
                tracing::debug!("Ignoring {:?}, shadowed by a preferred extension", path);
            }
        }

        for (slug, (_, path)) in chosen {
            match load_post(&path, &slug, category, language) {
                Ok((post, _)) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }
    }

    /// Strip an accepted extension from a file name, returning the slug and
    /// the extension's position in the preference order
    fn slug_for<'n>(&self, file_name: &'n str) -> Option<(&'n str, usize)> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        let rank = self.extensions.iter().position(|e| e == ext)?;
        Some((stem, rank))
    }

    /// Fetch one post with its body
    ///
    /// Returns `None` when the file does not exist, when any of the
    /// segments is not a plain name, or when reading fails.
    pub fn get_post(&self, slug: &str, category: &str, language: &str) -> Option<Post> {
        if ![slug, category, language].iter().all(|s| is_safe_segment(s)) {
            tracing::debug!(
                "Rejected post lookup slug={:?} category={:?} language={:?}",
                slug,
                category,
                language
            );
            return None;
        }

        let dir = self.root.join(category).join(language);

        for ext in &self.extensions {
            let path = dir.join(format!("{}.{}", slug, ext));
            match load_post(&path, slug, category, language) {
                Ok((mut post, body)) => {
                    post.content = Some(body);
                    return Some(post);
                }
                // Same rule as listing: only regular files are posts
                Err(e) if e.is_not_found() || !path.is_file() => continue,
                Err(e) => {
                    tracing::error!(
                        "Error reading post slug={} category={} language={}: {}",
                        slug,
                        category,
                        language,
                        e
                    );
                    return None;
                }
            }
        }

        tracing::debug!(
            "Post not found: slug={} category={} language={}",
            slug,
            category,
            language
        );
        None
    }

    /// Resolve a slug within a language without knowing its category
    ///
    /// The newest post with that slug wins when several categories share it.
    pub fn find_post(&self, slug: &str, language: &str) -> Result<Option<Post>, ContentError> {
        let query = PostQuery::new().language(language).sort(SortOrder::DateDesc);
        let found = self
            .list_posts(&query)?
            .into_iter()
            .find(|p| p.slug == slug);

        Ok(found.and_then(|meta| self.get_post(&meta.slug, &meta.category, language)))
    }

    /// The newest `count` posts of a language
    pub fn latest_posts(&self, language: &str, count: usize) -> Result<Vec<Post>, ContentError> {
        let query = PostQuery::new().language(language).sort(SortOrder::DateDesc);
        let mut posts = self.list_posts(&query)?;
        posts.truncate(count);
        Ok(posts)
    }

    /// Distinct slugs across every category and language, newest first
    pub fn static_slugs(&self) -> Result<Vec<String>, ContentError> {
        let mut slugs: Vec<String> = Vec::new();
        for post in self.list_posts(&PostQuery::new())? {
            if !slugs.contains(&post.slug) {
                slugs.push(post.slug);
            }
        }
        Ok(slugs)
    }

    /// Category directory names, sorted; empty when the root is unreadable
    pub fn list_categories(&self) -> Vec<String> {
        match read_dir_entries(&self.root, EntryKind::Dir) {
            Ok(entries) => entries.into_iter().map(|(name, _)| name).collect(),
            Err(e) => {
                tracing::error!("Error reading categories: {}", e);
                Vec::new()
            }
        }
    }

    /// Language directory names present under a category, sorted
    pub fn list_languages(&self, category: &str) -> Vec<String> {
        if !is_safe_segment(category) {
            return Vec::new();
        }
        match read_dir_entries(&self.root.join(category), EntryKind::Dir) {
            Ok(entries) => entries.into_iter().map(|(name, _)| name).collect(),
            Err(e) => {
                tracing::error!("Error reading languages for category {}: {}", category, e);
                Vec::new()
            }
        }
    }
}

/// Read a post file into a listing record plus its body
fn load_post(
    path: &Path,
    slug: &str,
    category: &str,
    language: &str,
) -> Result<(Post, String), ContentError> {
    let io_err = |source: io::Error| ContentError::Io {
        path: path.to_path_buf(),
        source,
    };

    let raw = fs::read_to_string(path).map_err(io_err)?;
    let (fm, body) = FrontMatter::parse(&raw);
    let body = body.to_string();

    let mut post = Post::from_front_matter(slug, category, language, fm);
    post.ctime = fs::metadata(path)
        .and_then(|m| m.created())
        .ok()
        .map(|t| DateTime::<Utc>::from(t).timestamp_millis());

    Ok((post, body))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Immediate, non-hidden children of `dir` of the given kind, sorted by name
fn read_dir_entries(dir: &Path, kind: EntryKind) -> Result<Vec<(String, PathBuf)>, ContentError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                return Err(ContentError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(ContentError::Io {
                    path: dir.to_path_buf(),
                    source: io::Error::other("not a directory"),
                });
            }
            continue;
        }

        let matches_kind = match kind {
            EntryKind::Dir => entry.file_type().is_dir(),
            EntryKind::File => entry.file_type().is_file(),
        };
        if !matches_kind {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 name {:?}", entry.path());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        entries.push((name.to_string(), entry.path().to_path_buf()));
    }

    Ok(entries)
}

/// Whether a caller-supplied value is safe to use as one path component
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains(['/', '\\', '\0'])
}
