//! Chart mark layers.
//!
//! A mark knows its data extent (for autoscaling) and how to rasterize
//! itself into a [`PlotArea`]. Figures collect marks and draw them once
//! the axis limits are known.

mod bar;
mod scatter;

pub use bar::BarChart;
pub use scatter::ScatterPlot;

use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::scale::{Extent, LinearScale, Scale};

/// Counts of marks a figure draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Bars drawn.
    pub bars: usize,
    /// Scatter points drawn.
    pub points: usize,
}

impl DrawStats {
    /// Total marks of any kind.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.bars + self.points
    }
}

/// The axes rectangle together with its data-to-pixel scales.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    /// Axes bounds in pixels.
    pub rect: Rect,
    /// Horizontal data scale.
    pub x: LinearScale,
    /// Vertical data scale (bottom to top).
    pub y: LinearScale,
}

impl PlotArea {
    /// Map a data coordinate to pixel space.
    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> Point {
        Point::new(self.x.scale(x), self.y.scale(y))
    }
}

/// A layer of chart marks.
pub trait Mark {
    /// Horizontal extent of the finite data, including mark widths.
    fn x_extent(&self) -> Extent;

    /// Vertical extent of the finite data, including baselines.
    fn y_extent(&self) -> Extent;

    /// A y value autoscaling margins must not cross when the data touches it.
    fn sticky_y(&self) -> Option<f64> {
        None
    }

    /// Add the marks this layer draws to `stats`.
    fn tally(&self, stats: &mut DrawStats);

    /// Rasterize into `area`.
    fn draw(&self, fb: &mut Framebuffer, area: &PlotArea);
}
