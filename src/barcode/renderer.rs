//! Barcode rasterization with fallback tiers
//!
//! [`BarcodeRenderer::render`] always returns an image: a full barcode when
//! possible, otherwise a bordered placeholder carrying the business name and
//! identifier, otherwise a 1x1 blank PNG. [`BarcodeArtifact::kind`] records
//! which tier produced the image.

use super::config::{BarcodeConfig, Rgb};
use super::encoder::{Encoding, encode};
use super::font;
use super::surface::{BitmapBackend, RasterBackend};
use crate::exceptions::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, error, warn};
use std::fmt;

/// Business name printed on placeholder labels
pub const DEFAULT_BUSINESS_NAME: &str = "TTARIUS";

/// 1x1 PNG returned when nothing else can be drawn
pub const BLANK_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

const PLACEHOLDER_BORDER: u32 = 2;

/// Which fallback tier produced an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Barcode,
    Placeholder,
    Blank,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Barcode => write!(f, "barcode"),
            ArtifactKind::Placeholder => write!(f, "placeholder"),
            ArtifactKind::Blank => write!(f, "blank"),
        }
    }
}

/// Rendered label image plus the pattern it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeArtifact {
    pub kind: ArtifactKind,
    pub pattern: String,
    /// Text drawn on the image, if any
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
    /// Characters were dropped while encoding
    pub lossy: bool,
}

impl BarcodeArtifact {
    /// `data:image/png;base64,...` for embedding
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }

    pub fn is_fallback(&self) -> bool {
        self.kind != ArtifactKind::Barcode
    }
}

/// Renders barcodes onto surfaces from a [`RasterBackend`]
#[derive(Debug, Clone)]
pub struct BarcodeRenderer<B: RasterBackend = BitmapBackend> {
    backend: B,
    business_name: String,
}

impl BarcodeRenderer {
    pub fn new() -> Self {
        Self::with_backend(BitmapBackend)
    }
}

impl Default for BarcodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RasterBackend> BarcodeRenderer<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
        }
    }

    /// Name drawn on placeholder labels
    pub fn with_business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = name.into();
        self
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    /// Render `text`, degrading to a placeholder or blank image on failure
    pub fn render(&self, text: &str, config: &BarcodeConfig) -> BarcodeArtifact {
        let encoding = encode(text);

        match self.draw_barcode(text, &encoding, config) {
            Ok(png) => {
                debug!(
                    "✅ Barcode rendered: text={:?} modules={} size={}x{} bytes={}",
                    text,
                    encoding.modules(),
                    config.width,
                    config.height,
                    png.len()
                );
                return BarcodeArtifact {
                    kind: ArtifactKind::Barcode,
                    caption: config.display_value.then(|| text.to_string()),
                    width: config.width,
                    height: config.height,
                    png,
                    lossy: encoding.lossy,
                    pattern: encoding.pattern,
                };
            }
            Err(e) => warn!("⚠️ Barcode rendering failed for {:?}: {}", text, e),
        }

        match self.draw_placeholder(text, config) {
            Ok(png) => {
                return BarcodeArtifact {
                    kind: ArtifactKind::Placeholder,
                    caption: Some(text.to_string()),
                    width: config.width,
                    height: config.height,
                    png,
                    lossy: encoding.lossy,
                    pattern: encoding.pattern,
                };
            }
            Err(e) => error!("❌ Placeholder rendering failed for {:?}: {}", text, e),
        }

        BarcodeArtifact {
            kind: ArtifactKind::Blank,
            caption: None,
            width: 1,
            height: 1,
            png: blank_png(),
            lossy: encoding.lossy,
            pattern: encoding.pattern,
        }
    }

    fn draw_barcode(&self, text: &str, encoding: &Encoding, config: &BarcodeConfig) -> Result<Vec<u8>> {
        let layout = config.layout()?;
        let mut surface = self.backend.create_surface(config.width, config.height)?;

        surface.fill(layout.background);

        let module_width = layout.interior_width as f64 / encoding.modules() as f64;
        let mut x = config.margin as f64;
        for bit in encoding.pattern.bytes() {
            if bit == b'1' {
                let x0 = x.round() as i64;
                let x1 = ((x + module_width).round() as i64).max(x0 + 1);
                surface.fill_rect(
                    x0,
                    layout.bar_top as i64,
                    (x1 - x0) as u32,
                    layout.bar_height,
                    layout.foreground,
                );
            }
            x += module_width;
        }

        if config.display_value {
            font::draw_text_centered(
                surface.as_mut(),
                text,
                layout.caption_top as i64,
                font::scale_for(config.font_size),
                layout.foreground,
            );
        }

        surface.to_png()
    }

    fn draw_placeholder(&self, text: &str, config: &BarcodeConfig) -> Result<Vec<u8>> {
        let mut surface = self.backend.create_surface(config.width, config.height)?;
        let (width, height) = (surface.width(), surface.height());

        surface.fill(Rgb::WHITE);
        surface.stroke_rect(0, 0, width, height, PLACEHOLDER_BORDER, Rgb::BLACK);

        let scale = font::scale_for(config.font_size);
        let line_height = (font::GLYPH_HEIGHT * scale) as i64;
        let gap = line_height / 2;
        let top = (height as i64 - (2 * line_height + gap)) / 2;

        font::draw_text_centered(surface.as_mut(), &self.business_name, top, scale, Rgb::BLACK);
        font::draw_text_centered(
            surface.as_mut(),
            text,
            top + line_height + gap,
            scale,
            Rgb::BLACK,
        );

        surface.to_png()
    }
}

/// Decoded [`BLANK_PNG_BASE64`]
pub fn blank_png() -> Vec<u8> {
    STANDARD.decode(BLANK_PNG_BASE64).unwrap_or_default()
}
