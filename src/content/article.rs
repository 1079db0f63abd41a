//! Article models

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ContentError;
use crate::helpers;

lazy_static! {
    /// Three tabs at the start of any line of the rendered body
    static ref LEADING_TABS: Regex = Regex::new(r"(?m)^\t{3}").expect("valid regex");
}

/// Front-matter keys that the article record already defines itself
const RESERVED_KEYS: [&str; 2] = ["html", "printDate"];

/// A parsed markdown document, before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSource {
    pub title: String,
    /// Publication date as written in the front-matter
    pub date: String,
    pub slug: String,
    pub excerpt: String,
    /// Rendered HTML body
    pub html: String,
    /// Custom front-matter fields
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// A normalized article, as served by `/articles/:slug`
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub title: String,
    pub date: String,
    pub slug: String,
    pub excerpt: String,
    pub html: String,

    /// Human readable publication date
    #[serde(rename = "printDate")]
    pub print_date: String,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,

    /// Parsed `date`, the sort key
    #[serde(skip)]
    published: NaiveDateTime,
}

/// The listing projection of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    #[serde(rename = "printDate")]
    pub print_date: String,
}

impl Article {
    /// Normalize a parsed document
    ///
    /// Only `html` is touched by the indentation fix; every other field is
    /// carried over as written.
    pub fn from_source(source: ArticleSource, date_format: &str) -> Result<Self, ContentError> {
        let ArticleSource {
            title,
            date,
            slug,
            excerpt,
            html,
            mut extra,
        } = source;

        let published = helpers::parse_date(&date).ok_or_else(|| ContentError::InvalidDate {
            slug: slug.clone(),
            date: date.clone(),
        })?;
        let print_date = helpers::format_date(&published, date_format)
            .map_err(|_| ContentError::InvalidDateFormat(date_format.to_string()))?;

        extra.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Ok(Self {
            title,
            date,
            slug,
            excerpt,
            html: strip_indentation(&html),
            print_date,
            extra,
            published,
        })
    }

    /// Parsed publication date
    pub fn published(&self) -> NaiveDateTime {
        self.published
    }

    /// Project to the fields shown in the article list
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            print_date: self.print_date.clone(),
        }
    }
}

/// Remove three leading tabs from every line that has them
///
/// Lines indented with fewer tabs are left alone; deeper lines lose exactly
/// three.
pub fn strip_indentation(html: &str) -> String {
    LEADING_TABS.replace_all(html, "").into_owned()
}

/// Sort by publication date, newest first, keeping input order for ties
pub fn sort_newest_first(articles: &mut [Article]) {
    // sort_by is stable
    articles.sort_by(|a, b| b.published.cmp(&a.published));
}
