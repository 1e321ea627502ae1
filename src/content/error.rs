//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading articles
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Article not found: {slug}")]
    NotFound { slug: String },

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid article pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl ContentError {
    /// Whether this error means the requested article does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
