//! Create a new article

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::{validate_slug, FrontMatter};
use crate::Site;

/// Create a new article file and return its path
pub fn create_article(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}, pass --slug", title);
    }
    validate_slug(&slug)?;

    let store = site.store();
    let file_path = store.path_for(&slug);

    // Check if file already exists
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(store.dir())
        .with_context(|| format!("Failed to create {:?}", store.dir()))?;

    let fm = FrontMatter {
        title: Some(title.to_string()),
        published_at: Some(chrono::Local::now().format("%Y-%m-%d").to_string()),
        excerpt: Some(String::new()),
        ..Default::default()
    };
    let content = format!(
        "---\n{}---\n\nWrite something for {} here.\n",
        serde_yaml::to_string(&fm)?,
        title
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created article {} at {:?}", slug, file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    create_article(site, title, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_article_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_article(&site, "Windows: A \"Retrospective\"", None).unwrap();
        assert!(path.ends_with("windows-a-retrospective.mdx"));

        let article = site.loader().load_article("windows-a-retrospective").unwrap();
        assert_eq!(
            article.frontmatter.title.as_deref(),
            Some("Windows: A \"Retrospective\"")
        );
        assert_eq!(article.frontmatter.excerpt.as_deref(), Some(""));
        assert!(article.frontmatter.published_date().is_some());
    }

    #[test]
    fn test_new_article_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        create_article(&site, "Twice", None).unwrap();
        assert!(create_article(&site, "Twice", None).is_err());
    }

    #[test]
    fn test_new_article_explicit_slug() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let path = create_article(&site, "Anything", Some("custom-slug")).unwrap();
        assert!(path.ends_with("custom-slug.mdx"));
        assert!(create_article(&site, "Bad", Some("../escape")).is_err());
    }
}
