//! Barcode label generation
//!
//! Identifiers are encoded with a simplified Code-128-style symbology (start
//! pattern, one 11-module pattern per character, stop pattern, no check
//! character) and rasterized to PNG. Output is meant for printed labels and
//! is not guaranteed to decode on strict Code 128 scanners.

pub mod config;
pub mod encoder;
pub mod font;
pub mod png;
pub mod presets;
pub mod renderer;
pub mod surface;
pub mod symbols;
pub mod validation;

pub use config::{BarcodeConfig, Rgb};
pub use encoder::{Encoding, encode};
pub use presets::{
    LabelPreset, generate_package_barcode, generate_shipment_barcode, generate_warehouse_barcode,
};
pub use renderer::{ArtifactKind, BarcodeArtifact, BarcodeRenderer};
pub use surface::{Bitmap, BitmapBackend, RasterBackend, RasterSurface};
pub use validation::{MAX_BARCODE_LENGTH, validate_barcode_text};

/// Render `text` with the default renderer
pub fn generate_barcode(text: &str, config: &BarcodeConfig) -> BarcodeArtifact {
    BarcodeRenderer::new().render(text, config)
}
