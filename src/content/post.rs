//! Post and Article models

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{FrontMatter, ReadingTime};

/// Keys computed by the loader; front-matter values for them are dropped
const COMPUTED_KEYS: [&str; 2] = ["slug", "readingTime"];

/// An article summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: Option<String>,

    /// Publication date as written in the front-matter
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,

    /// Short summary shown in listings
    pub excerpt: Option<String>,

    /// Estimated reading time, e.g. "3 min read"
    #[serde(rename = "readingTime")]
    pub reading_time: String,

    /// Slug (file name without extension)
    pub slug: String,

    /// Cover image path or URL
    pub cover_image: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Post {
    /// Build a post from parsed front-matter and the computed fields
    pub fn new(slug: impl Into<String>, fm: FrontMatter, reading_time: &ReadingTime) -> Self {
        let mut extra = fm.extra;
        for key in COMPUTED_KEYS {
            if extra.shift_remove(key).is_some() {
                tracing::debug!("Ignoring front-matter key {:?}, it is computed", key);
            }
        }

        Self {
            title: fm.title,
            published_at: fm.published_at,
            excerpt: fm.excerpt,
            reading_time: reading_time.text.clone(),
            slug: slug.into(),
            cover_image: fm.cover_image,
            extra,
        }
    }

    /// Parse `publishedAt` into a date, if present and recognisable
    pub fn published_date(&self) -> Option<DateTime<Local>> {
        self.published_at.as_deref().and_then(parse_date_string)
    }

    /// Title to display, falling back to the slug
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}

/// A full article: body plus its front-matter record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Markdown body without the front-matter block
    pub content: String,
    pub frontmatter: Post,
}

/// Sort posts newest first by `publishedAt`
///
/// Posts without a parseable date go last; ties keep their order.
pub fn sort_by_published(posts: &mut [Post]) {
    posts.sort_by_cached_key(|p| DateKey(p.published_date()));
}

/// Orders dated posts newest first, then undated ones
#[derive(PartialEq, Eq)]
struct DateKey(Option<DateTime<Local>>);

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 first, it carries its own offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, published_at: Option<&str>) -> Post {
        let fm = FrontMatter {
            published_at: published_at.map(str::to_string),
            ..Default::default()
        };
        Post::new(slug, fm, &ReadingTime::of(""))
    }

    #[test]
    fn test_parse_date_formats() {
        for s in [
            "2024-01-15",
            "2024/01/15",
            "2024-01-15 10:30",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30:00",
        ] {
            let dt = post("a", Some(s)).published_date().unwrap();
            assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15", "{}", s);
        }
        assert!(post("a", Some("2024-01-15T10:30:00Z")).published_date().is_some());
        assert!(post("a", Some("someday")).published_date().is_none());
        assert!(post("a", None).published_date().is_none());
    }

    #[test]
    fn test_computed_keys_win() {
        let mut fm = FrontMatter::default();
        fm.extra
            .insert("slug".to_string(), serde_yaml::Value::from("other"));
        fm.extra
            .insert("series".to_string(), serde_yaml::Value::from("rust"));
        let post = Post::new("real", fm, &ReadingTime::of("a b c"));
        assert_eq!(post.slug, "real");
        assert!(!post.extra.contains_key("slug"));
        assert!(post.extra.contains_key("series"));
    }

    #[test]
    fn test_serialized_key_names() {
        let mut fm = FrontMatter {
            title: Some("Hello".to_string()),
            published_at: Some("2024-01-01".to_string()),
            cover_image: Some("/cover.png".to_string()),
            ..Default::default()
        };
        fm.extra
            .insert("series".to_string(), serde_yaml::Value::from("rust"));
        let json = serde_json::to_value(Post::new("hello", fm, &ReadingTime::of("hi"))).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["publishedAt"], "2024-01-01");
        assert_eq!(json["readingTime"], "1 min read");
        assert_eq!(json["cover_image"], "/cover.png");
        assert_eq!(json["series"], "rust");
        assert!(json["excerpt"].is_null());
    }

    #[test]
    fn test_sort_by_published() {
        let mut posts = vec![
            post("undated", None),
            post("old", Some("2020-05-01")),
            post("new", Some("2024-05-01")),
            post("mid", Some("2022-05-01")),
        ];
        sort_by_published(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["new", "mid", "old", "undated"]);
    }

    #[test]
    fn test_display_title_falls_back_to_slug() {
        assert_eq!(post("no-title", None).display_title(), "no-title");
    }
}
