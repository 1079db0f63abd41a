//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::Information;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub url: String,

    // Directory
    /// Markdown articles, relative to the base directory
    pub content_dir: String,
    /// Static assets served as the router fallback
    pub static_dir: String,
    /// Output directory of the `export` command
    pub export_dir: String,

    // Date / Time format
    /// Moment.js-style format used for an article's `printDate`
    pub date_format: String,

    #[serde(default)]
    pub highlight: HighlightConfig,

    // Profile
    #[serde(default)]
    pub information: Information,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            url: "http://localhost:3000".to_string(),

            content_dir: "content/articles".to_string(),
            static_dir: "static".to_string(),
            export_dir: "public".to_string(),

            date_format: "MMMM D, YYYY".to_string(),

            highlight: HighlightConfig::default(),
            information: Information::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    /// syntect theme name
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
