//! Content loader - turns stored articles into post records

use super::error::Result;
use super::reading_time::DEFAULT_WORDS_PER_MINUTE;
use super::{Article, ArticleStore, FrontMatter, Post, ReadingTime};

/// Loads articles from a store
///
/// Nothing is cached: every call re-reads the store.
pub struct ContentLoader<S> {
    store: S,
    words_per_minute: u32,
}

impl<S: ArticleStore> ContentLoader<S> {
    /// Create a new content loader
    pub fn new(store: S) -> Self {
        Self {
            store,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Set the reading speed used for reading time
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Slugs of every article, in store enumeration order
    pub fn list_slugs(&self) -> Result<Vec<String>> {
        self.store.list_slugs()
    }

    /// Load one article with its body
    ///
    /// Fails with [`ContentError::NotFound`](super::ContentError::NotFound)
    /// when there is no article for `slug`.
    pub fn load_article(&self, slug: &str) -> Result<Article> {
        let raw = self.store.read_raw(slug)?;
        let (fm, body) = FrontMatter::parse(&raw);
        let reading_time = ReadingTime::with_speed(body, self.words_per_minute);

        tracing::debug!("Loaded article {} ({})", slug, reading_time.text);

        Ok(Article {
            content: body.to_string(),
            frontmatter: Post::new(slug, fm, &reading_time),
        })
    }

    /// Load summaries of every article, last enumerated first
    ///
    /// The order comes from the store, not from `publishedAt`; use
    /// [`sort_by_published`](super::sort_by_published) for date order.
    pub fn list_articles(&self) -> Result<Vec<Post>> {
        let slugs = self.store.list_slugs()?;
        let mut posts = Vec::with_capacity(slugs.len());

        for slug in slugs.iter().rev() {
            let raw = self.store.read_raw(slug)?;
            let (fm, body) = FrontMatter::parse(&raw);
            let reading_time = ReadingTime::with_speed(body, self.words_per_minute);
            posts.push(Post::new(slug.as_str(), fm, &reading_time));
        }

        tracing::debug!("Listed {} articles", posts.len());

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;

    fn hello_world() -> String {
        format!(
            "---\ntitle: Hello\npublishedAt: 2024-01-01\nexcerpt: Hi\n---\n\n{}",
            "word ".repeat(400)
        )
    }

    #[test]
    fn test_list_articles_example() {
        let store: MemoryStore = [("hello-world", hello_world())].into_iter().collect();
        let loader = ContentLoader::new(store);

        let posts = loader.list_articles().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
        assert_eq!(posts[0].title.as_deref(), Some("Hello"));
        assert_eq!(posts[0].published_at.as_deref(), Some("2024-01-01"));
        assert_eq!(posts[0].excerpt.as_deref(), Some("Hi"));
        assert_eq!(posts[0].reading_time, "2 min read");
    }

    #[test]
    fn test_list_articles_reverse_enumeration_order() {
        let store: MemoryStore = [
            ("first", "---\npublishedAt: 2024-01-01\n---\nA"),
            ("second", "---\npublishedAt: 2020-01-01\n---\nB"),
            ("third", "C"),
        ]
        .into_iter()
        .collect();
        let loader = ContentLoader::new(store);

        let slugs: Vec<_> = loader
            .list_articles()
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, ["third", "second", "first"]);
    }

    #[test]
    fn test_every_listed_slug_loads() {
        let store: MemoryStore = [
            ("hello-world", hello_world()),
            ("plain", "Just text, no front-matter.".to_string()),
        ]
        .into_iter()
        .collect();
        let loader = ContentLoader::new(store);

        for slug in loader.list_slugs().unwrap() {
            let article = loader.load_article(&slug).unwrap();
            assert!(!article.content.is_empty());
            assert_eq!(article.frontmatter.slug, slug);
            assert!(!article.frontmatter.reading_time.is_empty());
        }
    }

    #[test]
    fn test_load_article_merges_frontmatter() {
        let store: MemoryStore = [(
            "cover",
            "---\ntitle: Cover\ncover_image: /img/c.png\nseries: desk\n---\nBody text",
        )]
        .into_iter()
        .collect();
        let article = ContentLoader::new(store).load_article("cover").unwrap();

        assert_eq!(article.content, "Body text");
        let fm = article.frontmatter;
        assert_eq!(fm.slug, "cover");
        assert_eq!(fm.title.as_deref(), Some("Cover"));
        assert_eq!(fm.cover_image.as_deref(), Some("/img/c.png"));
        assert_eq!(fm.excerpt, None);
        assert_eq!(fm.reading_time, "1 min read");
        assert_eq!(fm.extra.get("series"), Some(&serde_yaml::Value::from("desk")));
    }

    #[test]
    fn test_load_missing_article_is_not_found() {
        let loader = ContentLoader::new(MemoryStore::new());
        let err = loader.load_article("nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reading_time_is_deterministic() {
        let store: MemoryStore = [("a", hello_world())].into_iter().collect();
        let loader = ContentLoader::new(store);
        let first = loader.load_article("a").unwrap().frontmatter.reading_time;
        let second = loader.list_articles().unwrap()[0].reading_time.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_words_per_minute_is_applied() {
        let store: MemoryStore = [("a", hello_world())].into_iter().collect();
        let loader = ContentLoader::new(store).with_words_per_minute(100);
        assert_eq!(loader.load_article("a").unwrap().frontmatter.reading_time, "4 min read");
    }

    #[test]
    fn test_empty_store() {
        let loader = ContentLoader::new(MemoryStore::new());
        assert!(loader.list_slugs().unwrap().is_empty());
        assert!(loader.list_articles().unwrap().is_empty());
    }
}
