//! Export the article index as static JSON files

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::Information;
use crate::index::ArticleIndex;
use crate::Folio;

/// Build the index and write it to the export directory
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let index = folio.build_index()?;
    let written = write_index(&index, &folio.config.information, &folio.export_dir)?;

    tracing::info!(
        "Exported {} articles to {:?} in {:?}",
        written,
        folio.export_dir,
        start.elapsed()
    );

    Ok(())
}

/// Write `articles.json`, `articles/<slug>.json` and `information.json`
///
/// The `articles/` directory is rebuilt from scratch. The files hold exactly
/// the bytes the server would send. Returns the number of article files
/// written.
pub fn write_index(index: &ArticleIndex, information: &Information, out_dir: &Path) -> Result<usize> {
    let articles_dir = out_dir.join("articles");
    // Files of deleted articles must not outlive them
    if articles_dir.exists() {
        fs::remove_dir_all(&articles_dir)?;
    }
    fs::create_dir_all(&articles_dir)?;

    fs::write(out_dir.join("articles.json"), index.list_json())?;
    fs::write(
        out_dir.join("information.json"),
        serde_json::to_string(information)?,
    )?;

    let mut written = 0;
    for (slug, json) in index.iter() {
        if !is_safe_file_name(slug) {
            tracing::warn!("Not exporting article with unsafe slug {:?}", slug);
            continue;
        }
        fs::write(articles_dir.join(format!("{}.json", slug)), json)?;
        tracing::debug!("Wrote articles/{}.json", slug);
        written += 1;
    }

    Ok(written)
}

/// A slug must stay inside the articles directory
fn is_safe_file_name(slug: &str) -> bool {
    !slug.contains(['/', '\\']) && slug != "." && slug != ".."
}
