//! Tagged barcode presets for packages, shipments and warehouse locations

use super::config::BarcodeConfig;
use super::renderer::{BarcodeArtifact, BarcodeRenderer};
use super::surface::RasterBackend;

/// Identifier tag plus the image size used for a kind of label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPreset {
    Package,
    Shipment,
    Warehouse,
}

impl LabelPreset {
    pub fn prefix(&self) -> &'static str {
        match self {
            LabelPreset::Package => "PKG-",
            LabelPreset::Shipment => "SHP-",
            LabelPreset::Warehouse => "WH-",
        }
    }

    /// Preset size applied on top of `base` (colors and margin are kept)
    pub fn apply(&self, base: &BarcodeConfig) -> BarcodeConfig {
        let config = base.clone();
        match self {
            LabelPreset::Package => config.with_size(250, 80).with_font_size(14),
            LabelPreset::Shipment => config.with_size(300, 100).with_font_size(14),
            LabelPreset::Warehouse => config.with_size(200, 60).with_font_size(12),
        }
    }

    pub fn config(&self) -> BarcodeConfig {
        self.apply(&BarcodeConfig::default())
    }

    /// Tagged identifier, e.g. `PKG-12345`
    pub fn tag(&self, id: &str) -> String {
        format!("{}{}", self.prefix(), id)
    }

    pub fn render<B: RasterBackend>(
        &self,
        renderer: &BarcodeRenderer<B>,
        id: &str,
        base: &BarcodeConfig,
    ) -> BarcodeArtifact {
        renderer.render(&self.tag(id), &self.apply(base))
    }
}

/// `PKG-<id>` at 250x80
pub fn generate_package_barcode(id: &str) -> BarcodeArtifact {
    LabelPreset::Package.render(&BarcodeRenderer::new(), id, &BarcodeConfig::default())
}

/// `SHP-<id>` at 300x100
pub fn generate_shipment_barcode(id: &str) -> BarcodeArtifact {
    LabelPreset::Shipment.render(&BarcodeRenderer::new(), id, &BarcodeConfig::default())
}

/// `WH-<id>` at 200x60
pub fn generate_warehouse_barcode(id: &str) -> BarcodeArtifact {
    LabelPreset::Warehouse.render(&BarcodeRenderer::new(), id, &BarcodeConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::png::dimensions;
    use crate::barcode::renderer::ArtifactKind;

    #[test]
    fn test_package_barcode_scenario() {
        let artifact = generate_package_barcode("12345");

        assert_eq!(artifact.kind, ArtifactKind::Barcode);
        assert!(artifact.caption.as_deref().unwrap().contains("PKG-12345"));
        assert_eq!((artifact.width, artifact.height), (250, 80));
        assert_eq!(dimensions(&artifact.png), Some((250, 80)));
    }

    #[test]
    fn test_shipment_and_warehouse_presets() {
        let shipment = generate_shipment_barcode("2024-001");
        assert_eq!(shipment.caption.as_deref(), Some("SHP-2024-001"));
        assert_eq!((shipment.width, shipment.height), (300, 100));

        let warehouse = generate_warehouse_barcode("A1");
        assert_eq!(warehouse.caption.as_deref(), Some("WH-A1"));
        assert_eq!((warehouse.width, warehouse.height), (200, 60));
        assert_eq!(warehouse.kind, ArtifactKind::Barcode);
    }

    #[test]
    fn test_apply_keeps_colors() {
        let base = BarcodeConfig {
            line_color: "#333333".to_string(),
            ..BarcodeConfig::default()
        };
        let config = LabelPreset::Warehouse.apply(&base);
        assert_eq!(config.line_color, "#333333");
        assert_eq!(config.font_size, 12);
    }

    #[test]
    fn test_longest_valid_id_still_renders() {
        let id = "7".repeat(50);
        let artifact = generate_shipment_barcode(&id);
        assert_eq!(artifact.kind, ArtifactKind::Barcode);
        assert!(!artifact.png.is_empty());
    }
}
