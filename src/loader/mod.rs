//! Catalog file loading
//!
//! Reads the plain-text video list that seeds the catalog at startup.

mod videos;

pub use videos::parse_catalog;

use crate::model::Catalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a catalog from a video list file
///
/// # Arguments
/// * `path` - Path to the video list (one `Title | id | tags` entry per line)
///
/// # Returns
/// The catalog with videos in file order
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video catalog from {:?}", path);

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;

    let catalog = parse_catalog(&text);

    log::info!("Loaded catalog: {} videos", catalog.video_count());
    Ok(catalog)
}
