//! Article stores - where raw article text comes from

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::{ContentError, Result};

lazy_static! {
    /// One path component: no separators, no NUL
    static ref SLUG_RE: Regex = Regex::new(r"^[^/\\\x00]+$").unwrap();
}

/// Check that a slug is safe to turn into a file name
///
/// Any single path component is accepted, including non-ASCII letters and
/// spaces. Only `.`, `..` and names with separators or NUL are rejected.
pub fn validate_slug(slug: &str) -> Result<()> {
    if SLUG_RE.is_match(slug) && slug != "." && slug != ".." {
        Ok(())
    } else {
        Err(ContentError::InvalidSlug(slug.to_string()))
    }
}

/// Source of raw article text, keyed by slug
pub trait ArticleStore {
    /// All slugs, in enumeration order
    fn list_slugs(&self) -> Result<Vec<String>>;

    /// Raw text (front-matter included) of one article
    fn read_raw(&self, slug: &str) -> Result<String>;
}

impl<S: ArticleStore + ?Sized> ArticleStore for &S {
    fn list_slugs(&self) -> Result<Vec<String>> {
        (**self).list_slugs()
    }

    fn read_raw(&self, slug: &str) -> Result<String> {
        (**self).read_raw(slug)
    }
}

/// Articles stored as `<dir>/<slug>.<extension>` files
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
    extension: String,
}

impl FsStore {
    /// Create a store over `dir` for files ending in `.extension`
    pub fn new<P: AsRef<Path>>(dir: P, extension: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Directory holding the articles
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Article extension without a leading dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path an article with this slug lives at
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", slug, self.extension))
    }
}

impl ArticleStore for FsStore {
    fn list_slugs(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            tracing::debug!("Articles directory {:?} does not exist", self.dir);
            return Ok(Vec::new());
        }

        let dir = glob::Pattern::escape(&self.dir.to_string_lossy());
        let pattern = format!(
            "{}/*.{}",
            dir.trim_end_matches('/'),
            glob::Pattern::escape(&self.extension)
        );

        let mut slugs = Vec::new();
        // glob yields paths in alphabetical order
        for entry in glob::glob(&pattern)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("Skipping non UTF-8 file name {:?}", path);
                continue;
            };
            if validate_slug(slug).is_err() {
                tracing::warn!("Skipping {:?}: file stem is not a usable slug", path);
                continue;
            }
            slugs.push(slug.to_string());
        }

        Ok(slugs)
    }

    fn read_raw(&self, slug: &str) -> Result<String> {
        validate_slug(slug)?;
        let path = self.path_for(slug);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ContentError::NotFound {
                slug: slug.to_string(),
            }),
            Err(source) => Err(ContentError::Io { path, source }),
        }
    }
}

/// In-memory store, enumerated in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an article
    pub fn insert(&mut self, slug: impl Into<String>, raw: impl Into<String>) -> &mut Self {
        self.articles.insert(slug.into(), raw.into());
        self
    }

    /// Remove an article, returning its text
    pub fn remove(&mut self, slug: &str) -> Option<String> {
        self.articles.shift_remove(slug)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            articles: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ArticleStore for MemoryStore {
    fn list_slugs(&self) -> Result<Vec<String>> {
        Ok(self.articles.keys().cloned().collect())
    }

    fn read_raw(&self, slug: &str) -> Result<String> {
        self.articles
            .get(slug)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                slug: slug.to_string(),
            })
    }
}
