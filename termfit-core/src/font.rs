use anyhow::Result;
use fontdue::{Font, FontSettings};
use log::info;
use std::path::Path;

use crate::geometry::CellMetrics;

/// Derives character-cell metrics from a monospace font
pub struct FontMetrics {
    font: Font,
    configured_font_size: f32, // Logical size from config
    current_scale_factor: f64, // Current DPI scale (1.0, 2.0, etc.)
}

impl FontMetrics {
    /// Load a font file at the given logical size and DPI scale
    pub fn from_file(path: &Path, font_size: f32, scale_factor: f64) -> Result<Self> {
        info!(
            "Loading font: {} at size {} (scale: {}x)",
            path.display(),
            font_size,
            scale_factor
        );
        let data = std::fs::read(path)?;
        Self::from_bytes(data, font_size, scale_factor)
    }

    pub fn from_bytes(data: Vec<u8>, font_size: f32, scale_factor: f64) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {}", e))?;

        Ok(Self {
            font,
            configured_font_size: font_size,
            current_scale_factor: scale_factor,
        })
    }

    /// Get effective font size (logical size * DPI scale)
    pub fn effective_font_size(&self) -> f32 {
        self.configured_font_size * self.current_scale_factor as f32
    }

    /// Cell size at the effective font size.
    ///
    /// Width is the advance of `M`; height spans ascent to descent plus the
    /// line gap, rounded up to whole pixels. A font without horizontal line
    /// metrics reports an unmeasured cell.
    pub fn cell_metrics(&self) -> CellMetrics {
        let size = self.effective_font_size();
        let Some(line) = self.font.horizontal_line_metrics(size) else {
            return CellMetrics::unmeasured();
        };
        let width = self.font.metrics('M', size).advance_width;
        let height = (line.ascent - line.descent + line.line_gap).ceil();
        CellMetrics::new(f64::from(width), f64::from(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEJAVU_MONO: &[u8] = include_bytes!("../resources/fonts/DejaVuSansMono.ttf");

    fn dejavu(size: f32, scale_factor: f64) -> FontMetrics {
        FontMetrics::from_bytes(DEJAVU_MONO.to_vec(), size, scale_factor).unwrap()
    }

    #[test]
    fn test_cell_metrics_from_monospace_font() {
        // DejaVu Sans Mono: 2048 units/em, advance 1233, ascent 1901, descent -483, no gap
        let cell = dejavu(14.0, 1.0).cell_metrics();

        assert!((cell.width - 1233.0 * 14.0 / 2048.0).abs() < 1e-3);
        // (1901 + 483) * 14 / 2048 = 16.3, rounded up
        assert_eq!(cell.height, 17.0);
        assert!(cell.is_measured());
    }

    #[test]
    fn test_cell_width_is_advance_of_m() {
        let metrics = dejavu(14.0, 1.0);
        let advance = metrics.font.metrics('M', 14.0).advance_width;
        let line = metrics.font.horizontal_line_metrics(14.0).unwrap();

        let cell = metrics.cell_metrics();
        assert_eq!(cell.width, f64::from(advance));
        assert_eq!(cell.height, f64::from((line.ascent - line.descent + line.line_gap).ceil()));
    }

    #[test]
    fn test_scale_factor_doubles_cell() {
        let base = dejavu(14.0, 1.0);
        let retina = dejavu(14.0, 2.0);
        assert_eq!(retina.effective_font_size(), 28.0);

        let base_cell = base.cell_metrics();
        let retina_cell = retina.cell_metrics();
        assert!((retina_cell.width - 2.0 * base_cell.width).abs() < 1e-3);
        // 2384 * 28 / 2048 = 32.6, rounded up
        assert_eq!(retina_cell.height, 33.0);
    }

    #[test]
    fn test_from_file_reads_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.ttf");
        std::fs::write(&path, DEJAVU_MONO).unwrap();

        let cell = FontMetrics::from_file(&path, 14.0, 1.0).unwrap().cell_metrics();
        assert_eq!(cell, dejavu(14.0, 1.0).cell_metrics());
    }

    #[test]
    fn test_invalid_font_data_is_an_error() {
        assert!(FontMetrics::from_bytes(vec![0, 1, 2, 3], 14.0, 1.0).is_err());
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        assert!(FontMetrics::from_file(&path, 14.0, 1.0).is_err());
    }
}
