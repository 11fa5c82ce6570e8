//! Scatter plot implementation.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::plots::{DrawStats, Mark, PlotArea};
use crate::render::draw_point;
use crate::scale::Extent;

/// Builder for a scatter layer.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    color: Rgba,
    point_size: f32,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterPlot {
    /// Create a new scatter plot builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            x_data: Vec::new(),
            y_data: Vec::new(),
            color: Rgba::SERIES_BLUE,
            point_size: 8.0,
        }
    }

    /// Set the x-axis data.
    #[must_use]
    pub fn x(mut self, data: &[f64]) -> Self {
        self.x_data = data.to_vec();
        self
    }

    /// Set the y-axis data.
    #[must_use]
    pub fn y(mut self, data: &[f64]) -> Self {
        self.y_data = data.to_vec();
        self
    }

    /// Set the point color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Number of points that will be drawn (pairs with both coordinates finite).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Validate the scatter plot.
    ///
    /// # Errors
    ///
    /// Returns an error if x/y lengths don't match.
    pub fn build(self) -> Result<Self> {
        if self.x_data.len() != self.y_data.len() {
            return Err(Error::DataLengthMismatch {
                x_len: self.x_data.len(),
                y_len: self.y_data.len(),
            });
        }

        Ok(self)
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_data
            .iter()
            .zip(&self.y_data)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
    }
}

impl Mark for ScatterPlot {
    fn x_extent(&self) -> Extent {
        let mut extent = Extent::empty();
        for (x, _) in self.points() {
            extent.include(x);
        }
        extent
    }

    fn y_extent(&self) -> Extent {
        let mut extent = Extent::empty();
        for (_, y) in self.points() {
            extent.include(y);
        }
        extent
    }

    fn tally(&self, stats: &mut DrawStats) {
        stats.points += self.point_count();
    }

    fn draw(&self, fb: &mut Framebuffer, area: &PlotArea) {
        for (x, y) in self.points() {
            draw_point(fb, area.to_pixel(x, y), self.point_size, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::scale::LinearScale;

    #[test]
    fn test_scatter_plot_builder() {
        let plot = ScatterPlot::new()
            .x(&[1.0, 2.0, 3.0])
            .y(&[4.0, 5.0, 6.0])
            .color(Rgba::RED)
            .size(5.0)
            .build()
            .unwrap();

        assert_eq!(plot.point_count(), 3);
        assert_eq!(plot.x_extent().bounds(), Some((1.0, 3.0)));
        assert_eq!(plot.y_extent().bounds(), Some((4.0, 6.0)));
        assert_eq!(plot.sticky_y(), None);
    }

    #[test]
    fn test_scatter_plot_empty_data_is_valid() {
        let plot = ScatterPlot::new().build().unwrap();
        assert_eq!(plot.point_count(), 0);
        assert!(plot.x_extent().is_empty());
    }

    #[test]
    fn test_scatter_plot_length_mismatch() {
        let result = ScatterPlot::new()
            .x(&[1.0, 2.0, 3.0])
            .y(&[4.0, 5.0])
            .build();
        assert!(matches!(result, Err(Error::DataLengthMismatch { x_len: 3, y_len: 2 })));
    }

    #[test]
    fn test_scatter_plot_skips_non_finite_pairs() {
        let plot = ScatterPlot::new()
            .x(&[1.0, f64::NAN, 3.0])
            .y(&[4.0, 5.0, f64::INFINITY]);
        assert_eq!(plot.point_count(), 1);
    }

    #[test]
    fn test_scatter_plot_render() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        let area = PlotArea {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            x: LinearScale::new((0.0, 10.0), (0.0, 100.0)).unwrap(),
            y: LinearScale::new((0.0, 10.0), (100.0, 0.0)).unwrap(),
        };
        let plot = ScatterPlot::new()
            .x(&[2.0, 8.0])
            .y(&[2.0, 8.0])
            .color(Rgba::BLUE)
            .size(6.0);
        let mut stats = DrawStats::default();

        plot.tally(&mut stats);
        plot.draw(&mut fb, &area);

        assert_eq!(stats.points, 2);
        assert_eq!(fb.get_pixel(20, 80), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(80, 20), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
    }
}
