//! Article index - the read-only structures behind the JSON endpoints
//!
//! Built once from the loader's output and never modified afterwards, so it
//! can be shared between request handlers without locking.

use std::collections::HashMap;
use thiserror::Error;

use crate::content::{Article, ArticleSummary};

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Article {title:?} has an empty slug")]
    EmptySlug { title: String },

    #[error("Failed to serialize article: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pre-serialized articles keyed by slug, plus the newest-first listing
#[derive(Debug, Clone)]
pub struct ArticleIndex {
    by_slug: HashMap<String, String>,
    summaries: Vec<ArticleSummary>,
    list_json: String,
}

impl ArticleIndex {
    /// Build the index from articles already in listing order
    pub fn build(articles: &[Article]) -> Result<Self, IndexError> {
        let mut by_slug = HashMap::with_capacity(articles.len());
        let mut summaries = Vec::with_capacity(articles.len());

        for article in articles {
            if article.slug.trim().is_empty() {
                return Err(IndexError::EmptySlug {
                    title: article.title.clone(),
                });
            }

            let json = serde_json::to_string(article)?;
            if by_slug.insert(article.slug.clone(), json).is_some() {
                return Err(IndexError::DuplicateSlug(article.slug.clone()));
            }

            summaries.push(article.summary());
        }

        let list_json = serde_json::to_string(&summaries)?;

        Ok(Self {
            by_slug,
            summaries,
            list_json,
        })
    }

    /// Serialized article for a slug
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.by_slug.get(slug).map(String::as_str)
    }

    /// Serialized listing, newest first
    pub fn list_json(&self) -> &str {
        &self.list_json
    }

    /// Listing entries, newest first
    pub fn summaries(&self) -> &[ArticleSummary] {
        &self.summaries
    }

    /// Slug and serialized article, in listing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.summaries.iter().filter_map(|s| {
            self.by_slug
                .get(&s.slug)
                .map(|json| (s.slug.as_str(), json.as_str()))
        })
    }

    /// Number of indexed articles
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Whether no article was indexed
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
