//! Content module - loads markdown articles and normalizes them for serving

mod article;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;

pub use article::{sort_newest_first, strip_indentation, Article, ArticleSource, ArticleSummary};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::{normalize_articles, ArticleLoader};
pub use markdown::MarkdownRenderer;
