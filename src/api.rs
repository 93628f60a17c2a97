//! High-level API for label operations

use crate::barcode::{BarcodeArtifact, LabelPreset};
use crate::config::Settings;
use crate::exceptions::Result;
use crate::label;
use crate::status::{self, EntityType, StatusConfig};
use serde::Serialize;
use std::path::PathBuf;

/// Options for saving a label image
#[derive(Debug, Default)]
pub struct SaveOptions {
    /// Preset applied to the identifier (tag and size)
    pub preset: Option<LabelPreset>,
    /// File stem; defaults to the rendered identifier
    pub file_name: Option<String>,
    /// Overrides `Settings::output_dir`
    pub output_dir: Option<PathBuf>,
}

/// Options for opening a print view
#[derive(Debug, Default)]
pub struct PrintOptions {
    pub preset: Option<LabelPreset>,
    /// Heading above the image; defaults to the rendered identifier
    pub title: Option<String>,
    pub metadata: Vec<(String, String)>,
}

/// Result of saving a label
#[derive(Debug)]
pub struct SavedLabel {
    pub artifact: BarcodeArtifact,
    pub path: PathBuf,
}

/// Status taxonomy for one entity type, as exported by the CLI
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub entity: EntityType,
    pub statuses: Vec<StatusEntry>,
    pub legacy: Vec<LegacyEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatusEntry {
    #[serde(flatten)]
    pub config: StatusConfig,
    pub badge_classes: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LegacyEntry {
    pub legacy: &'static str,
    pub canonical: &'static str,
}

/// Identifier as it will appear on the label
fn rendered_text(text: &str, preset: Option<LabelPreset>) -> String {
    match preset {
        Some(preset) => preset.tag(text),
        None => text.to_string(),
    }
}

/// Render a label with the settings' renderer and base config
pub fn create_label(settings: &Settings, text: &str, preset: Option<LabelPreset>) -> BarcodeArtifact {
    let renderer = settings.renderer();
    match preset {
        Some(preset) => preset.render(&renderer, text, &settings.barcode),
        None => renderer.render(text, &settings.barcode),
    }
}

/// Render and write a label to disk
pub fn save_label(settings: &Settings, text: &str, options: SaveOptions) -> Result<SavedLabel> {
    let artifact = create_label(settings, text, options.preset);
    let file_name = options
        .file_name
        .unwrap_or_else(|| rendered_text(text, options.preset));
    let dir = options
        .output_dir
        .unwrap_or_else(|| settings.output_dir.clone());

    let path = label::download_barcode(&artifact, Some(&file_name), &dir)?;
    Ok(SavedLabel { artifact, path })
}

/// Render a label and write its print view, returning the HTML path
pub fn print_label(settings: &Settings, text: &str, options: PrintOptions) -> Result<PathBuf> {
    let artifact = create_label(settings, text, options.preset);
    let title = options
        .title
        .unwrap_or_else(|| rendered_text(text, options.preset));
    label::open_print_view(&artifact, &title, &options.metadata)
}

/// Canonical statuses with badge classes, plus the legacy table
pub fn status_report(entity: EntityType) -> StatusReport {
    StatusReport {
        entity,
        statuses: status::statuses(entity)
            .iter()
            .map(|config| StatusEntry {
                config: *config,
                badge_classes: config.color.badge_classes(),
            })
            .collect(),
        legacy: status::legacy_mappings(entity)
            .iter()
            .map(|&(legacy, canonical)| LegacyEntry { legacy, canonical })
            .collect(),
    }
}
