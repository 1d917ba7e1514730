//! Upper winds from already-extracted forecast text.

use crate::table::render_winds;
use anyhow::Context;
use avwx_core::winds::{extract_upper_winds, NO_WINDS_FOUND};
use log::info;
use std::path::Path;

pub async fn run_winds(path: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    match extract_upper_winds(&text) {
        Some(table) => {
            info!("Found {} upper wind rows", table.rows.len());
            println!("{}", render_winds(&table));
        }
        None => println!("{}", NO_WINDS_FOUND),
    }
    Ok(())
}
