//! Rasterization of chart primitives and text.
//!
//! # Algorithms
//!
//! - **Midpoint Circle**: filled scatter markers
//! - **Rounded-edge rectangles**: bars with fractional data extents
//! - **Bitmap font**: 5x7 glyphs scaled by an integer factor, horizontal or
//!   rotated for vertical axis labels

mod primitives;
mod text;

pub use primitives::{
    draw_circle, draw_hline, draw_point, draw_rect, draw_rect_outline, draw_vline, fill_rect_f,
    Drawable,
};
pub use text::{draw_text, draw_text_vertical, TextAnchor, TextStyle, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
