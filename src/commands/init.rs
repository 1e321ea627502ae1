//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::config::{SiteConfig, CONFIG_FILE};
use crate::Site;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("Site already initialized: {:?}", config_path);
    }

    let defaults = SiteConfig::default();
    let articles_dir = target_dir.join(&defaults.articles_dir);
    fs::create_dir_all(&articles_dir)?;

    let config_content = format!(
        r#"# Site
title: {title}
author: {author}
url: {url}

# Articles
articles_dir: {articles_dir}
extension: {extension}
words_per_minute: {wpm}

# Desktop shell
shell:
  theme: light
  open_windows: []
"#,
        title = defaults.title,
        author = defaults.author,
        url = defaults.url,
        articles_dir = defaults.articles_dir,
        extension = defaults.extension,
        wpm = defaults.words_per_minute,
    );
    fs::write(&config_path, config_content)?;

    // Create a sample article
    let today = chrono::Local::now().format("%Y-%m-%d");
    let sample = format!(
        r#"---
title: Hello World
publishedAt: {today}
excerpt: The first article on this desktop.
cover_image: /images/hello-world.png
---

Welcome! This article lives in `{dir}/hello-world.{ext}`. Its file name is
its slug, and the block above is its front-matter.

Create another one with:

```bash
$ deskfolio new "My Next Article"
```

Then list everything with `deskfolio list`.
"#,
        dir = defaults.articles_dir,
        ext = defaults.extension,
    );
    fs::write(
        articles_dir.join(format!("hello-world.{}", defaults.article_extension())),
        sample,
    )?;

    tracing::info!("Initialized site in {:?}", target_dir);

    Ok(())
}

/// Run the init command with an existing Site instance
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}
