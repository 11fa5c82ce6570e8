//! A single-axes figure drawn into an owned framebuffer.
//!
//! The figure records marks and labels as they are added and paints the
//! canvas once, the first time it is read after a change. Axis limits
//! follow the data: 5% margins on each side, bars pinned at zero, `(0, 1)`
//! when there is nothing to show.

use crate::color::Rgba;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::output::PngEncoder;
use crate::plots::{BarChart, DrawStats, Mark, PlotArea, ScatterPlot};
use crate::render::{draw_hline, draw_rect, draw_rect_outline, draw_text, draw_text_vertical, draw_vline, TextAnchor, TextStyle};
use crate::scale::{auto_limits, Extent, LinearScale, Scale, DEFAULT_MARGIN, DEFAULT_MAX_TICKS};

/// Subplot box as fractions of the figure, measured from the bottom-left.
const AXES_LEFT: f32 = 0.125;
const AXES_BOTTOM: f32 = 0.11;
const AXES_RIGHT: f32 = 0.9;
const AXES_TOP: f32 = 0.88;

// Decoration sizes in points.
const SPINE_WIDTH_PT: f32 = 0.8;
const TICK_LENGTH_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const LABEL_PAD_PT: f32 = 4.0;
const TITLE_PAD_PT: f32 = 6.0;

type BoxedMark = Box<dyn Mark + Send + Sync>;

/// Pixel sizes of the axes decorations at the figure's resolution.
#[derive(Debug, Clone, Copy)]
struct Decorations {
    spine: u32,
    tick_length: u32,
    tick_pad: u32,
    label_pad: u32,
    title_pad: u32,
    label: TextStyle,
    title: TextStyle,
}

impl Decorations {
    fn new(config: &RenderConfig) -> Self {
        let px = |pt: f32| config.points_to_px(pt).round().max(1.0) as u32;
        Self {
            spine: px(SPINE_WIDTH_PT),
            tick_length: px(TICK_LENGTH_PT),
            tick_pad: px(TICK_PAD_PT),
            label_pad: px(LABEL_PAD_PT),
            title_pad: px(TITLE_PAD_PT),
            label: TextStyle::new(config.font_scale(config.font_size_pt), config.foreground),
            title: TextStyle::new(config.font_scale(config.title_size_pt), config.foreground),
        }
    }
}

/// A figure with one set of axes.
pub struct Figure {
    config: RenderConfig,
    fb: Framebuffer,
    axes: Rect,
    deco: Decorations,
    title: Option<String>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    marks: Vec<BoxedMark>,
    /// Canvas is out of date with the marks and labels.
    dirty: bool,
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("width", &self.fb.width())
            .field("height", &self.fb.height())
            .field("title", &self.title)
            .field("xlabel", &self.xlabel)
            .field("ylabel", &self.ylabel)
            .field("marks", &self.marks.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Figure {
    /// Allocate the canvas for an empty set of axes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured size is not a valid canvas.
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let (width, height) = config.pixel_size()?;
        let fb = Framebuffer::new(width, height)?;
        let axes = Rect::from_fractions(
            width as f32,
            height as f32,
            AXES_LEFT,
            AXES_BOTTOM,
            AXES_RIGHT,
            AXES_TOP,
        );

        Ok(Self {
            config: config.clone(),
            fb,
            axes,
            deco: Decorations::new(config),
            title: None,
            xlabel: None,
            ylabel: None,
            marks: Vec::new(),
            dirty: true,
        })
    }

    /// Set the title drawn above the axes.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
        self.dirty = true;
    }

    /// Set the label drawn below the x axis.
    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
        self.dirty = true;
    }

    /// Set the label drawn left of the y axis, reading upward.
    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
        self.dirty = true;
    }

    /// Add one bar per value, centered on the value's index.
    pub fn bar(&mut self, values: &[f64]) {
        let bars = BarChart::new()
            .values(values)
            .color(self.config.series_color)
            .bar_width(self.config.bar_width);
        self.add_mark(Box::new(bars));
    }

    /// Add one marker per `(x[i], y[i])` pair.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DataLengthMismatch`] if the slices differ in
    /// length. The figure is left unchanged.
    pub fn scatter(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        let points = ScatterPlot::new()
            .x(x)
            .y(y)
            .color(self.config.series_color)
            .size(self.config.points_to_px(self.config.marker_size_pt))
            .build()?;
        self.add_mark(Box::new(points));
        Ok(())
    }

    /// Add an arbitrary mark layer.
    pub fn add_mark(&mut self, mark: BoxedMark) {
        self.marks.push(mark);
        self.dirty = true;
    }

    /// Bars and points the figure draws.
    #[must_use]
    pub fn stats(&self) -> DrawStats {
        let mut stats = DrawStats::default();
        for mark in &self.marks {
            mark.tally(&mut stats);
        }
        stats
    }

    /// Current `(x, y)` view limits.
    #[must_use]
    pub fn limits(&self) -> ((f64, f64), (f64, f64)) {
        self.autoscale()
    }

    /// The axes box in pixels.
    #[must_use]
    pub const fn axes(&self) -> Rect {
        self.axes
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.fb.width(), self.fb.height())
    }

    /// Title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The rendered canvas, painted first if anything changed.
    pub fn framebuffer(&mut self) -> &Framebuffer {
        self.draw();
        &self.fb
    }

    /// Release the figure, keeping the rendered canvas.
    #[must_use]
    pub fn into_framebuffer(mut self) -> Framebuffer {
        self.draw();
        self.fb
    }

    /// Encode the rendered canvas as PNG and release the figure.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn into_png(mut self) -> Result<Vec<u8>> {
        self.draw();
        PngEncoder::to_bytes(&self.fb)
    }

    fn draw(&mut self) {
        if self.dirty {
            self.redraw();
            self.dirty = false;
        }
    }

    fn redraw(&mut self) {
        let background = self.config.background;
        self.fb.clear(background);

        let (xlim, ylim) = self.autoscale();

        let axes = self.axes;
        let area = LinearScale::new(xlim, (axes.left(), axes.right()))
            .and_then(|x| Ok((x, LinearScale::new(ylim, (axes.bottom(), axes.top()))?)))
            .map(|(x, y)| PlotArea { rect: axes, x, y });

        match area {
            Ok(area) => {
                for mark in &self.marks {
                    mark.draw(&mut self.fb, &area);
                }
            }
            Err(e) => tracing::debug!(error = %e, ?xlim, ?ylim, "axis limits unusable, marks skipped"),
        }

        self.clip_to_axes(background);
        self.draw_frame();

        self.draw_x_axis(xlim);
        self.draw_y_axis(ylim);
        self.draw_title();
    }

    fn autoscale(&self) -> ((f64, f64), (f64, f64)) {
        let mut x = Extent::empty();
        let mut y = Extent::empty();
        let mut sticky = None;
        for mark in &self.marks {
            x.merge(mark.x_extent());
            y.merge(mark.y_extent());
            sticky = sticky.or(mark.sticky_y());
        }
        (
            auto_limits(x, DEFAULT_MARGIN, None),
            auto_limits(y, DEFAULT_MARGIN, sticky),
        )
    }

    /// Integer pixel edges `(left, top, right, bottom)` of the axes box.
    fn axes_px(&self) -> (i32, i32, i32, i32) {
        (
            self.axes.left().round() as i32,
            self.axes.top().round() as i32,
            self.axes.right().round() as i32,
            self.axes.bottom().round() as i32,
        )
    }

    /// Repaint everything outside the axes box, hiding marks that spill over.
    fn clip_to_axes(&mut self, background: Rgba) {
        let (left, top, right, bottom) = self.axes_px();
        let (w, h) = (self.fb.width(), self.fb.height());
        let inner_h = (bottom - top).max(0) as u32;

        draw_rect(&mut self.fb, 0, 0, w, top.max(0) as u32, background);
        draw_rect(&mut self.fb, 0, bottom, w, h.saturating_sub(bottom.max(0) as u32), background);
        draw_rect(&mut self.fb, 0, top, left.max(0) as u32, inner_h, background);
        draw_rect(&mut self.fb, right, top, w.saturating_sub(right.max(0) as u32), inner_h, background);
    }

    fn draw_frame(&mut self) {
        let (left, top, right, bottom) = self.axes_px();
        let t = self.deco.spine;
        let width = (right - left).max(0) as u32 + t;
        let height = (bottom - top).max(0) as u32 + t;
        draw_rect_outline(&mut self.fb, left, top, width, height, self.config.foreground, t);
    }

    fn draw_x_axis(&mut self, xlim: (f64, f64)) {
        let (left, _, right, bottom) = self.axes_px();
        let d = self.deco;
        let fg = self.config.foreground;
        let tick_top = bottom + d.spine as i32;
        let label_top = tick_top + (d.tick_length + d.tick_pad) as i32;
        let style = d.label.anchor(TextAnchor::Middle);

        if let Ok(scale) = LinearScale::new(xlim, (self.axes.left(), self.axes.right())) {
            let ticks = scale.ticks(DEFAULT_MAX_TICKS);
            for &v in &ticks.values {
                let px = scale.scale(v).round() as i32;
                if px < left || px > right {
                    continue;
                }
                draw_vline(&mut self.fb, px, tick_top, d.tick_length, d.spine, fg);
                draw_text(&mut self.fb, px, label_top, &ticks.label(v), style);
            }
        }

        if let Some(label) = &self.xlabel {
            let y = label_top + (d.label.text_height() + d.label_pad) as i32;
            let x = self.axes.center().x.round() as i32;
            draw_text(&mut self.fb, x, y, label, style);
        }
    }

    fn draw_y_axis(&mut self, ylim: (f64, f64)) {
        let (left, top, _, bottom) = self.axes_px();
        let d = self.deco;
        let fg = self.config.foreground;
        let tick_left = left - d.tick_length as i32;
        let label_right = tick_left - d.tick_pad as i32;
        let style = d.label.anchor(TextAnchor::End);
        let half_height = (d.label.text_height() / 2) as i32;
        let mut widest = 0;

        if let Ok(scale) = LinearScale::new(ylim, (self.axes.bottom(), self.axes.top())) {
            let ticks = scale.ticks(DEFAULT_MAX_TICKS);
            for &v in &ticks.values {
                let py = scale.scale(v).round() as i32;
                if py < top || py > bottom {
                    continue;
                }
                let text = ticks.label(v);
                widest = widest.max(d.label.text_width(&text));
                draw_hline(&mut self.fb, tick_left, py, d.tick_length, d.spine, fg);
                draw_text(&mut self.fb, label_right, py - half_height, &text, style);
            }
        }

        if let Some(label) = &self.ylabel {
            let x = label_right - (widest + d.label_pad + d.label.text_height()) as i32;
            let y = self.axes.center().y.round() as i32;
            draw_text_vertical(&mut self.fb, x, y, label, d.label.anchor(TextAnchor::Middle));
        }
    }

    fn draw_title(&mut self) {
        let Some(title) = &self.title else { return };
        let d = self.deco;
        let (_, top, _, _) = self.axes_px();
        let y = top - (d.title_pad + d.title.text_height()) as i32;
        let x = self.axes.center().x.round() as i32;
        draw_text(&mut self.fb, x, y, title, d.title.anchor(TextAnchor::Middle));
    }
}
