//! Site configuration (site.yml)

use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::shell::{ThemeMode, WindowId};

/// Name of the configuration file inside the site directory
pub const CONFIG_FILE: &str = "site.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Content
    pub articles_dir: String,
    pub extension: String,
    pub words_per_minute: u32,

    // Desktop shell
    #[serde(default)]
    pub shell: ShellConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Desktop".to_string(),
            author: "John Doe".to_string(),
            url: "http://example.com".to_string(),

            articles_dir: "data/articles".to_string(),
            extension: "mdx".to_string(),
            words_per_minute: 200,

            shell: ShellConfig::default(),
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            bail!("words_per_minute must be greater than zero");
        }
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains('/') {
            bail!("Invalid article extension: {:?}", self.extension);
        }
        Ok(())
    }

    /// Article extension without a leading dot
    pub fn article_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Initial desktop shell state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub theme: ThemeMode,
    /// Windows open when the shell starts
    pub open_windows: Vec<WindowId>,
}
