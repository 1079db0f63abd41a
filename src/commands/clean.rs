//! Clean the export directory

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Remove everything written by `export`
pub fn run(folio: &Folio) -> Result<()> {
    if folio.export_dir.exists() {
        fs::remove_dir_all(&folio.export_dir)?;
        tracing::info!("Deleted: {:?}", folio.export_dir);
    }

    Ok(())
}
