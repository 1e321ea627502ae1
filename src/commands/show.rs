//! Show a single article

use anyhow::{bail, Result};
use std::fmt::Write;

use crate::content::{Article, ContentError};
use crate::Site;

/// Load an article, turning a missing one into a user-facing error
pub fn load(site: &Site, slug: &str) -> Result<Article> {
    match site.loader().load_article(slug) {
        Ok(article) => Ok(article),
        Err(ContentError::NotFound { slug }) => {
            bail!("No article named {:?} in {:?}", slug, site.articles_dir)
        }
        Err(e) => Err(e.into()),
    }
}

/// Render the article as a header followed by its body
pub fn format_article(article: &Article) -> String {
    let fm = &article.frontmatter;
    let mut out = String::new();
    let _ = writeln!(out, "{}", fm.display_title());
    if let Some(date) = &fm.published_at {
        let _ = writeln!(out, "Published: {}", date);
    }
    let _ = writeln!(out, "Reading time: {}", fm.reading_time);
    if let Some(excerpt) = fm.excerpt.as_deref().filter(|e| !e.is_empty()) {
        let _ = writeln!(out, "Excerpt: {}", excerpt);
    }
    if let Some(cover) = &fm.cover_image {
        let _ = writeln!(out, "Cover: {}", cover);
    }
    out.push('\n');
    out.push_str(&article.content);
    out
}

/// Run the show command
pub fn run(site: &Site, slug: &str, json: bool) -> Result<()> {
    let article = load(site, slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&article)?);
    } else {
        print!("{}", format_article(&article));
    }

    Ok(())
}
