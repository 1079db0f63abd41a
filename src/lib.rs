//! folio-rs: a personal portfolio and blog server
//!
//! Markdown articles are loaded once at startup, normalized, and served
//! read-only as JSON next to the site's static assets. The same index can be
//! exported as static JSON files.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod index;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Markdown articles
    pub content_dir: std::path::PathBuf,
    /// Static assets
    pub static_dir: std::path::PathBuf,
    /// Export (output) directory
    pub export_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let export_dir = base_dir.join(&config.export_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            static_dir,
            export_dir,
        })
    }

    /// Load all articles, newest first
    pub fn load_articles(&self) -> Result<Vec<content::Article>> {
        content::ArticleLoader::new(self).load_articles()
    }

    /// Load all articles and build the read-only index over them
    pub fn build_index(&self) -> Result<index::ArticleIndex> {
        let articles = self.load_articles()?;
        Ok(index::ArticleIndex::build(&articles)?)
    }

    /// Write the index as static JSON files
    pub fn export(&self) -> Result<()> {
        commands::export::run(self)
    }

    /// Remove the export directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new article
    pub fn new_article(&self, title: &str) -> Result<std::path::PathBuf> {
        commands::new::create_article(self, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.content_dir, tmp.path().join("content/articles"));
        assert_eq!(folio.export_dir, tmp.path().join("public"));
    }

    #[test]
    fn test_new_with_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "content_dir: posts\nexport_dir: out\n",
        )
        .unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.content_dir, tmp.path().join("posts"));
        assert_eq!(folio.export_dir, tmp.path().join("out"));
        assert_eq!(folio.static_dir, tmp.path().join("static"));
    }

    #[test]
    fn test_new_with_broken_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "title: [oops\n").unwrap();
        assert!(Folio::new(tmp.path()).is_err());
    }

    #[test]
    fn test_build_index_rejects_duplicate_slugs() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.content_dir).unwrap();
        for file in ["one.md", "two.md"] {
            fs::write(
                folio.content_dir.join(file),
                "---\ntitle: T\ndate: 2021-01-01\nslug: same\nexcerpt: e\n---\nbody\n",
            )
            .unwrap();
        }
        let err = folio.build_index().unwrap_err();
        assert!(err.to_string().contains("Duplicate slug"));
    }
}
