//! List articles

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::fmt::Write;
use std::time::Duration;

use crate::content::{sort_by_published, Post};
use crate::Site;

/// Order of listed articles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Directory order, last file first
    #[default]
    Scan,
    /// Newest `publishedAt` first
    Date,
}

/// Options for the list command
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub json: bool,
    pub sort: SortOrder,
}

/// Load article summaries in the requested order
pub fn collect(site: &Site, sort: SortOrder) -> Result<Vec<Post>> {
    let mut posts = site.loader().list_articles()?;
    if sort == SortOrder::Date {
        sort_by_published(&mut posts);
    }
    Ok(posts)
}

/// Render summaries as a plain text table
pub fn format_posts(posts: &[Post]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Articles ({}):", posts.len());
    for post in posts {
        let _ = writeln!(
            out,
            "  {:<10} - {} [{}] ({})",
            post.published_at.as_deref().unwrap_or("-"),
            post.display_title(),
            post.slug,
            post.reading_time
        );
    }
    out
}

/// Print articles once
pub fn run(site: &Site, options: ListOptions) -> Result<()> {
    let posts = collect(site, options.sort)?;
    tracing::debug!("Loaded {} articles from {:?}", posts.len(), site.articles_dir);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        print!("{}", format_posts(&posts));
    }

    Ok(())
}

/// Print slugs, one per line
pub fn run_slugs(site: &Site) -> Result<()> {
    for slug in site.loader().list_slugs()? {
        println!("{}", slug);
    }
    Ok(())
}

/// Print articles, then again whenever the articles directory changes
pub fn watch(site: &Site, options: ListOptions) -> Result<()> {
    run(site, options)?;

    if !site.articles_dir.exists() {
        anyhow::bail!("Articles directory {:?} does not exist", site.articles_dir);
    }

    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid relisting on every write of a save
    let mut debouncer = new_debouncer(Duration::from_millis(300), tx)?;
    debouncer
        .watcher()
        .watch(&site.articles_dir, RecursiveMode::NonRecursive)?;

    tracing::info!(
        "Watching {:?} for changes. Press Ctrl+C to stop.",
        site.articles_dir
    );

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    e.path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext == site.config.article_extension())
                });
                if !relevant {
                    continue;
                }

                println!();
                if let Err(e) = run(site, options) {
                    tracing::error!("Listing failed: {}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::warn!("Watch error: {:?}", e);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FrontMatter, ReadingTime};

    #[test]
    fn test_format_posts() {
        let fm = FrontMatter {
            title: Some("Hello".to_string()),
            published_at: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let posts = vec![
            Post::new("hello-world", fm, &ReadingTime::of("a few words")),
            Post::new("untitled", FrontMatter::default(), &ReadingTime::of("")),
        ];

        let out = format_posts(&posts);
        assert_eq!(
            out,
            "Articles (2):\n  2024-01-01 - Hello [hello-world] (1 min read)\n  -          - untitled [untitled] (0 min read)\n"
        );
    }
}
