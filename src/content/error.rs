//! Errors raised while turning markdown documents into articles

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Missing front-matter field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date {date:?} in article {slug:?}")]
    InvalidDate { slug: String, date: String },

    #[error("Cannot render dates with date_format {0:?}")]
    InvalidDateFormat(String),

    #[error("Invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
