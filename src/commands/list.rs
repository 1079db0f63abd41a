//! List site content

use anyhow::Result;

use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    match content_type {
        "article" | "articles" => {
            let articles = folio.load_articles()?;
            println!("Articles ({}):", articles.len());
            for article in articles {
                println!(
                    "  {} - {} [{}]",
                    article.published().format("%Y-%m-%d"),
                    article.title,
                    article.slug
                );
            }
        }
        "social" => {
            let info = &folio.config.information;
            for (name, url) in info.social_links() {
                println!("  {}: {}", name, url);
            }
        }
        "skill" | "skills" => {
            let info = &folio.config.information;
            let skills = info.skill_list();
            println!("Skills ({}):", skills.len());
            for skill in skills {
                println!("  {}", skill);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: article, social, skill",
                content_type
            );
        }
    }

    Ok(())
}
