//! Saving rendered labels to disk

use crate::barcode::BarcodeArtifact;
use crate::exceptions::Result;
use crate::utils::sanitize_file_stem;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File stem used when no name is given
pub const DEFAULT_FILE_STEM: &str = "barcode";

/// Write the artifact as `<dir>/<filename>.png` and return the path.
///
/// `filename` is reduced to a safe stem; directories are created as needed.
pub fn download_barcode(artifact: &BarcodeArtifact, filename: Option<&str>, dir: &Path) -> Result<PathBuf> {
    let stem = sanitize_file_stem(filename.unwrap_or(DEFAULT_FILE_STEM));

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}.png"));
    fs::write(&path, &artifact.png)?;

    if artifact.is_fallback() {
        warn!(
            "⚠️ Saved {} image instead of a barcode: {}",
            artifact.kind,
            path.display()
        );
    } else {
        info!("💾 Barcode saved: {}", path.display());
    }
    Ok(path)
}
