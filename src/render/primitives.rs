//! Primitive rendering functions.
//!
//! Rasterizes the handful of shapes a chart needs: axis-aligned lines,
//! filled rectangles with sub-pixel edges, and filled circles.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Lines
// ============================================================================

/// Draw a horizontal line of `thickness` pixels starting at `(x, y)`.
pub fn draw_hline(fb: &mut Framebuffer, x: i32, y: i32, length: u32, thickness: u32, color: Rgba) {
    draw_rect(fb, x, y, length, thickness.max(1), color);
}

/// Draw a vertical line of `thickness` pixels starting at `(x, y)`.
pub fn draw_vline(fb: &mut Framebuffer, x: i32, y: i32, length: u32, thickness: u32, color: Rgba) {
    draw_rect(fb, x, y, thickness.max(1), length, color);
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle. Parts left of or above the canvas are clipped.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    let (x, width) = clip_start(x, width);
    let (y, height) = clip_start(y, height);
    fb.fill_rect(x, y, width, height, color);
}

/// Draw a rectangle outline with the border inside the given bounds.
pub fn draw_rect_outline(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    color: Rgba,
    thickness: u32,
) {
    let t = thickness.max(1);
    let right = x + width as i32 - t as i32;
    let bottom = y + height as i32 - t as i32;

    draw_hline(fb, x, y, width, t, color);
    draw_hline(fb, x, bottom, width, t, color);
    draw_vline(fb, x, y, height, t, color);
    draw_vline(fb, right, y, height, t, color);
}

/// Fill a rectangle given in fractional pixel coordinates.
///
/// Edges are rounded to the nearest pixel boundary, but a rectangle with a
/// non-zero extent always covers at least one pixel in each direction.
pub fn fill_rect_f(fb: &mut Framebuffer, rect: Rect, color: Rgba) {
    if !(rect.x.is_finite() && rect.y.is_finite() && rect.width.is_finite() && rect.height.is_finite()) {
        return;
    }

    let x0 = rect.left().round() as i32;
    let y0 = rect.top().round() as i32;
    let x1 = (rect.right().round() as i32).max(x0 + 1);
    let y1 = (rect.bottom().round() as i32).max(y0 + 1);

    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    draw_rect(fb, x0, y0, (x1 - x0) as u32, (y1 - y0) as u32, color);
}

impl Drawable for Rect {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fill_rect_f(fb, *self, color);
    }
}

fn clip_start(start: i32, len: u32) -> (u32, u32) {
    if start >= 0 {
        (start as u32, len)
    } else {
        (0, len.saturating_sub(start.unsigned_abs()))
    }
}

// ============================================================================
// Circle/Point Drawing
// ============================================================================

/// Draw a filled circle using the midpoint algorithm.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `cx`, `cy` - Center coordinates
/// * `radius` - Circle radius in pixels
/// * `color` - Fill color
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.blend_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    // Each scanline is emitted once; octant pairs would double-blend
    // translucent colors on overlapping rows.
    let mut half_widths = vec![0i32; radius as usize + 1];
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        half_widths[y as usize] = half_widths[y as usize].max(x);
        half_widths[x as usize] = half_widths[x as usize].max(y);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    for (dy, &hw) in half_widths.iter().enumerate() {
        let dy = dy as i32;
        draw_span(fb, cx - hw, cx + hw, cy + dy, color);
        if dy != 0 {
            draw_span(fb, cx - hw, cx + hw, cy - dy, color);
        }
    }
}

/// Draw a marker of diameter `size` centered on `center`.
pub fn draw_point(fb: &mut Framebuffer, center: Point, size: f32, color: Rgba) {
    if !(center.x.is_finite() && center.y.is_finite()) {
        return;
    }
    let radius = (size / 2.0).round() as i32;
    draw_circle(fb, center.x.round() as i32, center.y.round() as i32, radius, color);
}

/// Blend a horizontal run of pixels `x1..=x2` on row `y`.
#[inline]
fn draw_span(fb: &mut Framebuffer, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 {
        return;
    }

    let x_start = x1.max(0);
    let x_end = x2.min(fb.width() as i32 - 1);
    for x in x_start..=x_end {
        fb.blend_pixel(x as u32, y as u32, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
