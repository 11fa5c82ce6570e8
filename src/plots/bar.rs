//! Bar chart: one bar per value, positioned at the value's index.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::plots::{DrawStats, Mark, PlotArea};
use crate::render::Drawable;
use crate::scale::Extent;

/// Builder for a bar layer.
#[derive(Debug, Clone)]
pub struct BarChart {
    values: Vec<f64>,
    color: Rgba,
    bar_width: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    /// Create an empty bar layer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            color: Rgba::SERIES_BLUE,
            bar_width: 0.8,
        }
    }

    /// Set bar heights; bar `i` is centered on `x = i`.
    #[must_use]
    pub fn values(mut self, values: &[f64]) -> Self {
        self.values = values.to_vec();
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the bar width in data units. Non-positive widths fall back to 0.8.
    #[must_use]
    pub fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = if width.is_finite() && width > 0.0 { width } else { 0.8 };
        self
    }

    /// Number of bars that will be drawn (finite values only).
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars().count()
    }

    fn bars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| (i as f64, v))
    }
}

impl Mark for BarChart {
    fn x_extent(&self) -> Extent {
        let half = self.bar_width / 2.0;
        let mut extent = Extent::empty();
        for (x, _) in self.bars() {
            extent.include(x - half);
            extent.include(x + half);
        }
        extent
    }

    fn y_extent(&self) -> Extent {
        let mut extent = Extent::empty();
        for (_, height) in self.bars() {
            extent.include(0.0);
            extent.include(height);
        }
        extent
    }

    fn sticky_y(&self) -> Option<f64> {
        Some(0.0)
    }

    fn tally(&self, stats: &mut DrawStats) {
        stats.bars += self.bar_count();
    }

    fn draw(&self, fb: &mut Framebuffer, area: &PlotArea) {
        let half = self.bar_width / 2.0;
        for (x, height) in self.bars() {
            let rect = Rect::from_corners(area.to_pixel(x - half, 0.0), area.to_pixel(x + half, height));
            rect.draw(fb, self.color);
        }
    }
}
