//! Content loader - loads articles from the content directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{sort_newest_first, Article, ArticleSource, ContentError, FrontMatter, MarkdownRenderer};
use crate::Folio;

/// Loads markdown articles from disk
pub struct ArticleLoader {
    content_dir: PathBuf,
    date_format: String,
    renderer: MarkdownRenderer,
}

impl ArticleLoader {
    /// Create a new loader for a site
    pub fn new(folio: &Folio) -> Self {
        Self {
            content_dir: folio.content_dir.clone(),
            date_format: folio.config.date_format.clone(),
            renderer: MarkdownRenderer::with_options(&folio.config.highlight),
        }
    }

    /// Read every markdown file under the content directory
    ///
    /// Files are visited in file-name order. A document that cannot be
    /// parsed or lacks a required field is skipped with a warning.
    pub fn load_sources(&self) -> Result<Vec<ArticleSource>> {
        if !self.content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", self.content_dir);
            return Ok(Vec::new());
        }

        let mut sources = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_source(path) {
                Ok(source) => {
                    if slug::slugify(&source.slug) != source.slug {
                        tracing::warn!(
                            "Slug {:?} in {:?} is not URL-safe; it may be unreachable",
                            source.slug,
                            path
                        );
                    }
                    sources.push(source);
                }
                Err(e) => {
                    tracing::warn!("Skipping article {:?}: {}", path, e);
                }
            }
        }

        Ok(sources)
    }

    /// Load and normalize every article, newest first
    ///
    /// Articles whose date cannot be parsed are skipped with a warning. An
    /// unusable `date_format` is a site error and fails the whole load.
    pub fn load_articles(&self) -> Result<Vec<Article>> {
        let mut articles = Vec::new();

        for source in self.load_sources()? {
            match Article::from_source(source, &self.date_format) {
                Ok(article) => articles.push(article),
                Err(e @ ContentError::InvalidDate { .. }) => {
                    tracing::warn!("Skipping article: {}", e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        sort_newest_first(&mut articles);
        tracing::debug!("Loaded {} articles from {:?}", articles.len(), self.content_dir);
        Ok(articles)
    }

    /// Parse a single markdown file
    fn load_source(&self, path: &Path) -> Result<ArticleSource, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let html = self.renderer.render(body);
        fm.into_source(html)
    }
}

/// Turn parsed documents into articles sorted newest first
///
/// Pure function of its input: equal dates keep their input order.
pub fn normalize_articles(
    sources: Vec<ArticleSource>,
    date_format: &str,
) -> Result<Vec<Article>, ContentError> {
    let mut articles = sources
        .into_iter()
        .map(|source| Article::from_source(source, date_format))
        .collect::<Result<Vec<_>, _>>()?;

    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
