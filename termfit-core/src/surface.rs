use serde::Serialize;

use crate::style::css_px;

/// Pixel surface paired with a terminal for an auxiliary rendering pass.
///
/// A fit writes both the drawing-buffer size and the visual (style) size so
/// the surface maps 1:1 onto the terminal's available area.
pub trait BackingSurface {
    fn set_pixel_size(&mut self, width: i64, height: i64);

    /// Visual size as CSS lengths, e.g. `"800px"`
    fn set_style_size(&mut self, width: &str, height: &str);

    /// Set both sizes from one pixel pair
    fn sync_to(&mut self, width: i64, height: i64) {
        self.set_pixel_size(width, height);
        self.set_style_size(&css_px(width), &css_px(height));
    }
}

/// In-memory backing surface for headless hosts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PixelSurface {
    pub width: i64,
    pub height: i64,
    pub style_width: String,
    pub style_height: String,
}

impl PixelSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BackingSurface for PixelSurface {
    fn set_pixel_size(&mut self, width: i64, height: i64) {
        self.width = width;
        self.height = height;
    }

    fn set_style_size(&mut self, width: &str, height: &str) {
        self.style_width = width.to_string();
        self.style_height = height.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_sets_pixel_and_style_size() {
        let mut surface = PixelSurface::new();
        surface.sync_to(800, 500);

        assert_eq!(surface.width, 800);
        assert_eq!(surface.height, 500);
        assert_eq!(surface.style_width, "800px");
        assert_eq!(surface.style_height, "500px");
    }

    #[test]
    fn test_sync_keeps_negative_sizes() {
        let mut surface = PixelSurface::new();
        surface.sync_to(-15, 0);

        assert_eq!(surface.width, -15);
        assert_eq!(surface.style_width, "-15px");
        assert_eq!(surface.style_height, "0px");
    }
}
