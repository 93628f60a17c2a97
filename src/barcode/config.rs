//! Rendering configuration for barcode images

use crate::exceptions::{LabelError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted surface side in pixels
pub const MAX_SURFACE_SIDE: u32 = 8192;

/// Vertical gap between the bars and the caption
pub const CAPTION_GAP: u32 = 4;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LabelError::InvalidConfig(format!("Invalid color: {s}")));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| LabelError::InvalidConfig(format!("Invalid color: {s}")))
        };

        match hex.len() {
            6 => Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(LabelError::InvalidConfig(format!("Invalid color: {s}"))),
        }
    }
}

/// Size, spacing and color settings for one barcode image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeConfig {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub margin: u32,
    pub background: String,
    pub line_color: String,
    /// Draw the human-readable text beneath the bars
    pub display_value: bool,
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 100,
            font_size: 14,
            margin: 10,
            background: "#FFFFFF".to_string(),
            line_color: "#000000".to_string(),
            display_value: true,
        }
    }
}

/// Pixel layout derived from a validated config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub interior_width: u32,
    pub bar_top: u32,
    pub bar_height: u32,
    pub caption_top: u32,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl BarcodeConfig {
    /// Same config with a different size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_display_value(mut self, display_value: bool) -> Self {
        self.display_value = display_value;
        self
    }

    /// Vertical space reserved below the bars for the caption
    pub fn caption_space(&self) -> u32 {
        if self.display_value {
            self.font_size.saturating_add(CAPTION_GAP)
        } else {
            0
        }
    }

    /// Check dimensions and colors, returning the pixel layout
    pub fn layout(&self) -> Result<Layout> {
        if self.width == 0 || self.height == 0 {
            return Err(LabelError::InvalidConfig(format!(
                "Dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_SURFACE_SIDE || self.height > MAX_SURFACE_SIDE {
            return Err(LabelError::InvalidConfig(format!(
                "Dimensions {}x{} exceed {}px",
                self.width, self.height, MAX_SURFACE_SIDE
            )));
        }

        let interior_width = self.width.saturating_sub(self.margin.saturating_mul(2));
        let interior_height = self.height.saturating_sub(self.margin.saturating_mul(2));
        if interior_width == 0 || interior_height == 0 {
            return Err(LabelError::InvalidConfig(format!(
                "Margin {} leaves no drawable area in {}x{}",
                self.margin, self.width, self.height
            )));
        }

        let bar_height = interior_height.saturating_sub(self.caption_space());
        if bar_height == 0 {
            return Err(LabelError::InvalidConfig(format!(
                "Font size {} leaves no room for bars",
                self.font_size
            )));
        }

        Ok(Layout {
            interior_width,
            bar_top: self.margin,
            bar_height,
            caption_top: self.margin + bar_height + CAPTION_GAP,
            background: Rgb::parse_hex(&self.background)?,
            foreground: Rgb::parse_hex(&self.line_color)?,
        })
    }
}
