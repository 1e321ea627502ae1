//! deskfolio: content and shell state for a desktop-styled personal site
//!
//! This crate provides the non-visual parts of a site that looks like a
//! desktop operating system: a markdown article loader (front-matter,
//! slugs, reading time) and the reducer-driven state behind the menu bar,
//! windows and theme switch.

pub mod commands;
pub mod config;
pub mod content;
pub mod shell;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, FsStore};
use shell::{ShellState, ShellStore};

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the article files
    pub articles_dir: PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(config::CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", config::CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        let articles_dir = base_dir.join(&config.articles_dir);

        Ok(Self {
            config,
            base_dir,
            articles_dir,
        })
    }

    /// Filesystem store for this site's articles
    pub fn store(&self) -> FsStore {
        FsStore::new(&self.articles_dir, self.config.article_extension())
    }

    /// Content loader over this site's articles
    pub fn loader(&self) -> ContentLoader<FsStore> {
        ContentLoader::new(self.store()).with_words_per_minute(self.config.words_per_minute)
    }

    /// Shell store seeded from the configuration
    pub fn shell(&self) -> ShellStore {
        ShellStore::new(ShellState::from(&self.config.shell))
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Create a new article
    pub fn new_article(&self, title: &str) -> Result<PathBuf> {
        commands::new::run(self, title, None)
    }
}
