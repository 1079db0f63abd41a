//! Profile information shown on the portfolio pages
//!
//! Keys are camelCase both in `_config.yml` and in the JSON served at
//! `/information`, so the frontend reads the same names the author writes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Owner profile: bio, skills, work history and social links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Information {
    pub name: String,
    pub profile_picture: String,
    pub position: String,
    pub location: String,
    /// Bio paragraphs; may contain inline HTML
    pub about: Vec<String>,
    pub skills: String,
    pub interests: String,
    pub experiences: Vec<Experience>,
    pub email: String,
    /// Network name to profile URL, in the order written
    pub social_media: IndexMap<String, String>,
    pub keywords: String,
}

/// A single position held
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub date: String,
}

impl Information {
    /// Social links that actually have a URL
    pub fn social_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.social_media
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// Skills as a list (the config stores them as one comma separated line)
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills
            .trim_end_matches('.')
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
