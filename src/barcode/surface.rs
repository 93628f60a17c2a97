//! Raster drawing surfaces
//!
//! The renderer only needs rectangles and a PNG export, so any imaging
//! backend can stand in by implementing [`RasterSurface`] and
//! [`RasterBackend`]. [`BitmapBackend`] is the in-memory default.

use super::config::{MAX_SURFACE_SIDE, Rgb};
use super::png;
use crate::exceptions::{LabelError, Result};

/// Drawing operations the renderer relies on
pub trait RasterSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fill a rectangle, clipped to the surface
    fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgb);

    /// Export the surface as PNG bytes
    fn to_png(&self) -> Result<Vec<u8>>;

    /// Fill the whole surface
    fn fill(&mut self, color: Rgb) {
        let (width, height) = (self.width(), self.height());
        self.fill_rect(0, 0, width, height, color);
    }

    /// Draw a rectangle outline of the given thickness
    fn stroke_rect(&mut self, x: i64, y: i64, width: u32, height: u32, thickness: u32, color: Rgb) {
        let t = thickness.min(width).min(height);
        self.fill_rect(x, y, width, t, color);
        self.fill_rect(x, y + height as i64 - t as i64, width, t, color);
        self.fill_rect(x, y, t, height, color);
        self.fill_rect(x + width as i64 - t as i64, y, t, height, color);
    }
}

/// Factory for drawing surfaces
pub trait RasterBackend {
    fn create_surface(&self, width: u32, height: u32) -> Result<Box<dyn RasterSurface>>;
}

/// In-memory RGB bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Allocate a white bitmap
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LabelError::Surface(format!(
                "Cannot allocate empty surface {width}x{height}"
            )));
        }
        if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(LabelError::Surface(format!(
                "Surface {width}x{height} exceeds {MAX_SURFACE_SIDE}px"
            )));
        }

        Ok(Self {
            width,
            height,
            pixels: vec![0xFF; width as usize * height as usize * 3],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl RasterSurface for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgb) {
        let x0 = x.clamp(0, self.width as i64) as usize;
        let y0 = y.clamp(0, self.height as i64) as usize;
        let x1 = (x + width as i64).clamp(0, self.width as i64) as usize;
        let y1 = (y + height as i64).clamp(0, self.height as i64) as usize;

        let stride = self.width as usize * 3;
        for row in y0..y1 {
            for col in x0..x1 {
                let i = row * stride + col * 3;
                self.pixels[i] = color.0;
                self.pixels[i + 1] = color.1;
                self.pixels[i + 2] = color.2;
            }
        }
    }

    fn to_png(&self) -> Result<Vec<u8>> {
        png::encode_rgb(self.width, self.height, &self.pixels)
    }
}

/// Backend producing [`Bitmap`] surfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapBackend;

impl RasterBackend for BitmapBackend {
    fn create_surface(&self, width: u32, height: u32) -> Result<Box<dyn RasterSurface>> {
        Ok(Box::new(Bitmap::new(width, height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(0xFF, 0, 0);

    #[test]
    fn test_new_bitmap_is_white() {
        let bitmap = Bitmap::new(3, 2).unwrap();
        assert_eq!(bitmap.pixels().len(), 18);
        assert!(bitmap.pixels().iter().all(|&b| b == 0xFF));
        assert_eq!(bitmap.pixel(3, 0), None);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(Bitmap::new(0, 5).is_err());
        assert!(Bitmap::new(5, MAX_SURFACE_SIDE + 1).is_err());
        assert!(BitmapBackend.create_surface(0, 0).is_err());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut bitmap = Bitmap::new(4, 4).unwrap();
        bitmap.fill_rect(-2, 2, 3, 10, RED);

        assert_eq!(bitmap.pixel(0, 2), Some(RED));
        assert_eq!(bitmap.pixel(0, 3), Some(RED));
        assert_eq!(bitmap.pixel(1, 3), Some(Rgb::WHITE));
        assert_eq!(bitmap.pixel(0, 1), Some(Rgb::WHITE));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut bitmap = Bitmap::new(5, 5).unwrap();
        bitmap.stroke_rect(0, 0, 5, 5, 1, Rgb::BLACK);

        assert_eq!(bitmap.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(bitmap.pixel(4, 4), Some(Rgb::BLACK));
        assert_eq!(bitmap.pixel(4, 2), Some(Rgb::BLACK));
        assert_eq!(bitmap.pixel(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn test_to_png_dimensions() {
        let mut bitmap = Bitmap::new(7, 3).unwrap();
        bitmap.fill(Rgb::BLACK);
        let bytes = bitmap.to_png().unwrap();
        assert_eq!(png::dimensions(&bytes), Some((7, 3)));
    }
}
