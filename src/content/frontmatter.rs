//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ArticleSource, ContentError};

/// Front-matter block at the top of an article
///
/// Every field is optional at parse time; required fields are enforced by
/// [`FrontMatter::into_source`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,

    /// Additional custom fields, in the order written
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Empty block: "---\n---"
        if let Some(remaining) = rest.strip_prefix("---") {
            return Ok((FrontMatter::default(), remaining.trim_start_matches(['\n', '\r'])));
        }

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    /// Check the required fields and attach the rendered body
    pub fn into_source(self, html: String) -> Result<ArticleSource, ContentError> {
        let title = required(self.title, "title")?;
        let date = required(self.date, "date")?;
        let slug = required(self.slug, "slug")?;
        let excerpt = self.excerpt.ok_or(ContentError::MissingField("excerpt"))?;

        Ok(ArticleSource {
            title,
            date,
            slug,
            excerpt,
            html,
            extra: self.extra,
        })
    }
}

/// A required field must be present and not blank
fn required(value: Option<String>, field: &'static str) -> Result<String, ContentError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContentError::MissingField(field)),
    }
}
