//! Content module - article stores, front-matter and reading time

mod error;
mod frontmatter;
pub mod loader;
mod post;
pub mod reading_time;
mod store;

pub use error::ContentError;
pub use frontmatter::{Format, FrontMatter};
pub use loader::ContentLoader;
pub use post::{sort_by_published, Article, Post};
pub use reading_time::ReadingTime;
pub use store::{validate_slug, ArticleStore, FsStore, MemoryStore};
