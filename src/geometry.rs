//! Geometric primitives for chart layout.
//!
//! Pixel space has its origin at the top-left corner of the canvas with
//! `y` growing downwards.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle spanning two arbitrary corners.
    ///
    /// The corners may be given in any order; the result always has a
    /// non-negative width and height.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Sub-rectangle of a `width` x `height` canvas given by fractional
    /// edges measured from the bottom-left, the way subplot boxes are
    /// usually specified.
    #[must_use]
    pub fn from_fractions(width: f32, height: f32, left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self::from_corners(
            Point::new(width * left, height * (1.0 - top)),
            Point::new(width * right, height * (1.0 - bottom)),
        )
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rect::from_corners(Point::new(10.0, 40.0), Point::new(2.0, 8.0));
        assert_eq!(rect, Rect::new(2.0, 8.0, 8.0, 32.0));
    }

    #[test]
    fn test_from_fractions_subplot_box() {
        let rect = Rect::from_fractions(1000.0, 600.0, 0.125, 0.11, 0.9, 0.88);
        assert!((rect.left() - 125.0).abs() < 0.001);
        assert!((rect.right() - 900.0).abs() < 0.001);
        assert!((rect.top() - 72.0).abs() < 0.01);
        assert!((rect.bottom() - 534.0).abs() < 0.01);
    }

    #[test]
    fn test_center() {
        let c = Rect::new(0.0, 0.0, 10.0, 4.0).center();
        assert_eq!(c, Point::new(5.0, 2.0));
    }
}
