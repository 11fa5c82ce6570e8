//! Render configuration.
//!
//! Every field has a default, so a YAML document only needs the keys it
//! wants to change:
//!
//! ```yaml
//! dpi: 150
//! series_color: "#d62728"
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Typographic points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Figure appearance and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Figure width in inches.
    #[serde(default = "default_width_in")]
    pub width_in: f32,

    /// Figure height in inches.
    #[serde(default = "default_height_in")]
    pub height_in: f32,

    /// Raster resolution in dots per inch.
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Canvas fill.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Axes, ticks and text.
    #[serde(default = "default_foreground")]
    pub foreground: Rgba,

    /// Bars and scatter markers.
    #[serde(default = "default_series_color")]
    pub series_color: Rgba,

    /// Bar width in data units (bars sit one unit apart).
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,

    /// Scatter marker diameter in points.
    #[serde(default = "default_marker_size_pt")]
    pub marker_size_pt: f32,

    /// Tick and axis label size in points.
    #[serde(default = "default_font_size_pt")]
    pub font_size_pt: f32,

    /// Title size in points.
    #[serde(default = "default_title_size_pt")]
    pub title_size_pt: f32,
}

fn default_width_in() -> f32 {
    10.0
}
fn default_height_in() -> f32 {
    6.0
}
fn default_dpi() -> u32 {
    100
}
fn default_background() -> Rgba {
    Rgba::WHITE
}
fn default_foreground() -> Rgba {
    Rgba::BLACK
}
fn default_series_color() -> Rgba {
    Rgba::SERIES_BLUE
}
fn default_bar_width() -> f64 {
    0.8
}
fn default_marker_size_pt() -> f32 {
    6.0
}
fn default_font_size_pt() -> f32 {
    10.0
}
fn default_title_size_pt() -> f32 {
    12.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
            background: default_background(),
            foreground: default_foreground(),
            series_color: default_series_color(),
            bar_width: default_bar_width(),
            marker_size_pt: default_marker_size_pt(),
            font_size_pt: default_font_size_pt(),
            title_size_pt: default_title_size_pt(),
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or names an unknown key.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Set the figure size in inches.
    #[must_use]
    pub fn figsize(mut self, width_in: f32, height_in: f32) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    /// Set the resolution.
    #[must_use]
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the series color.
    #[must_use]
    pub fn series_color(mut self, color: Rgba) -> Self {
        self.series_color = color;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Canvas size in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either edge rounds to zero
    /// pixels or the inputs are not finite.
    pub fn pixel_size(&self) -> Result<(u32, u32)> {
        let to_px = |inches: f32| -> u32 {
            let px = (inches * self.dpi as f32).round();
            if px.is_finite() && px >= 1.0 {
                px.min(u32::MAX as f32) as u32
            } else {
                0
            }
        };

        let (width, height) = (to_px(self.width_in), to_px(self.height_in));
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok((width, height))
    }

    /// Convert a length in points to pixels at this resolution.
    #[must_use]
    pub fn points_to_px(&self, points: f32) -> f32 {
        points * self.dpi as f32 / POINTS_PER_INCH
    }

    /// Bitmap font magnification for `size_pt` text.
    #[must_use]
    pub fn font_scale(&self, size_pt: f32) -> u32 {
        let px = self.points_to_px(size_pt) / crate::render::GLYPH_HEIGHT as f32;
        if px.is_finite() {
            (px.round() as u32).max(1)
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_pixel_size() {
        let config = RenderConfig::default();
        assert_eq!(config.pixel_size().unwrap(), (1000, 600));
        assert_eq!(config.series_color, Rgba::SERIES_BLUE);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .figsize(4.0, 3.0)
            .dpi(50)
            .series_color(Rgba::RED)
            .background(Rgba::BLACK);
        assert_eq!(config.pixel_size().unwrap(), (200, 150));
        assert_eq!(config.series_color, Rgba::RED);
        assert_eq!(config.background, Rgba::BLACK);
    }

    #[test]
    fn test_invalid_pixel_size() {
        assert!(RenderConfig::new().dpi(0).pixel_size().is_err());
        assert!(RenderConfig::new().figsize(f32::NAN, 6.0).pixel_size().is_err());
        assert!(RenderConfig::new().figsize(-1.0, 6.0).pixel_size().is_err());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = RenderConfig::parse("dpi: 150\nseries_color: \"#d62728\"\n").unwrap();
        assert_eq!(config.dpi, 150);
        assert_eq!(config.series_color, Rgba::rgb(0xd6, 0x27, 0x28));
        assert_eq!(config.pixel_size().unwrap(), (1500, 900));
        assert!((config.bar_width - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_yaml() {
        assert_eq!(RenderConfig::parse("  \n").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_and_bad_color() {
        assert!(RenderConfig::parse("dpii: 100").is_err());
        assert!(RenderConfig::parse("background: \"#12\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width_in: 8.0\nheight_in: 4.0").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.pixel_size().unwrap(), (800, 400));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            RenderConfig::load("/nonexistent/chart-uri.yaml"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_font_scale() {
        let config = RenderConfig::default();
        assert_eq!(config.font_scale(config.font_size_pt), 2);
        assert_eq!(RenderConfig::new().dpi(300).font_scale(10.0), 6);
        assert_eq!(RenderConfig::new().dpi(10).font_scale(10.0), 1);
    }
}
