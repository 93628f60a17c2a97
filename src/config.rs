//! Settings for the label tooling
//!
//! Settings come from an optional JSON file, then environment overrides:
//! `TTARIUS_BUSINESS_NAME`, `TTARIUS_OUTPUT_DIR` and `TTARIUS_NO_CAPTION`.

use crate::barcode::renderer::DEFAULT_BUSINESS_NAME;
use crate::barcode::{BarcodeConfig, BarcodeRenderer};
use crate::exceptions::{LabelError, Result};
use crate::utils::is_truthy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub const BUSINESS_NAME_ENV: &str = "TTARIUS_BUSINESS_NAME";
pub const OUTPUT_DIR_ENV: &str = "TTARIUS_OUTPUT_DIR";
pub const NO_CAPTION_ENV: &str = "TTARIUS_NO_CAPTION";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name printed on placeholder labels
    pub business_name: String,
    /// Where downloaded labels are written
    pub output_dir: PathBuf,
    /// Base rendering config; presets override the size
    pub barcode: BarcodeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            output_dir: PathBuf::from("labels"),
            barcode: BarcodeConfig::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            LabelError::InvalidConfig(format!("Cannot read settings {}: {e}", path.display()))
        })?;
        let settings: Settings = serde_json::from_str(&data)?;
        debug!("⚙️ Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// File (if given) plus environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_overrides(|key| env::var(key).ok());
        Ok(settings)
    }

    /// Apply overrides from a lookup (the process environment in [`Settings::load`])
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(BUSINESS_NAME_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("{} override: {}", BUSINESS_NAME_ENV, name);
            self.business_name = name;
        }
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("{} override: {}", OUTPUT_DIR_ENV, dir);
            self.output_dir = PathBuf::from(dir);
        }
        if lookup(NO_CAPTION_ENV).is_some_and(|v| is_truthy(&v)) {
            self.barcode.display_value = false;
        }
    }

    /// Renderer carrying these settings' business name
    pub fn renderer(&self) -> BarcodeRenderer {
        BarcodeRenderer::new().with_business_name(self.business_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.business_name, "TTARIUS");
        assert_eq!(settings.output_dir, PathBuf::from("labels"));
        assert_eq!(settings.barcode, BarcodeConfig::default());
    }

    #[test]
    fn test_from_file_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");
        fs::write(
            &path,
            r##"{"business_name": "Ttarius Miami", "barcode": {"line_color": "#222222"}}"##,
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.business_name, "Ttarius Miami");
        assert_eq!(settings.barcode.line_color, "#222222");
        assert_eq!(settings.barcode.width, 300);
        assert_eq!(settings.output_dir, PathBuf::from("labels"));
    }

    #[test]
    fn test_from_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            Settings::from_file(&missing),
            Err(LabelError::InvalidConfig(_))
        ));

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{not json").unwrap();
        assert!(matches!(
            Settings::from_file(&broken),
            Err(LabelError::JsonError(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (BUSINESS_NAME_ENV, "Ttarius SDQ"),
            (OUTPUT_DIR_ENV, "/tmp/out"),
            (NO_CAPTION_ENV, "yes"),
        ]);
        let mut settings = Settings::default();
        settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.business_name, "Ttarius SDQ");
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
        assert!(!settings.barcode.display_value);
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut settings = Settings::default();
        settings.apply_overrides(|key| match key {
            BUSINESS_NAME_ENV => Some("  ".to_string()),
            NO_CAPTION_ENV => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(settings.business_name, "TTARIUS");
        assert!(settings.barcode.display_value);
    }

    #[test]
    fn test_renderer_uses_business_name() {
        let settings = Settings {
            business_name: "ACME".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.renderer().business_name(), "ACME");
    }
}
