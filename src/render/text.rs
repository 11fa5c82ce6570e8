//! Bitmap text rendering.
//!
//! Labels are drawn with an embedded 5x7 font covering printable ASCII,
//! scaled by an integer factor so text stays crisp at any DPI.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::render::primitives::draw_rect;

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character in font pixels (glyph + 1 spacing).
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows of each glyph, top to bottom; bit 4 is the leftmost column.
#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; 95] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00], // 32 ' '
    [0x04,0x04,0x04,0x04,0x04,0x00,0x04], // 33 '!'
    [0x0A,0x0A,0x0A,0x00,0x00,0x00,0x00], // 34 '"'
    [0x0A,0x0A,0x1F,0x0A,0x1F,0x0A,0x0A], // 35 '#'
    [0x04,0x0F,0x14,0x0E,0x05,0x1E,0x04], // 36 '$'
    [0x18,0x19,0x02,0x04,0x08,0x13,0x03], // 37 '%'
    [0x0C,0x12,0x14,0x08,0x15,0x12,0x0D], // 38 '&'
    [0x04,0x04,0x08,0x00,0x00,0x00,0x00], // 39 '''
    [0x02,0x04,0x08,0x08,0x08,0x04,0x02], // 40 '('
    [0x08,0x04,0x02,0x02,0x02,0x04,0x08], // 41 ')'
    [0x00,0x04,0x15,0x0E,0x15,0x04,0x00], // 42 '*'
    [0x00,0x04,0x04,0x1F,0x04,0x04,0x00], // 43 '+'
    [0x00,0x00,0x00,0x00,0x00,0x04,0x08], // 44 ','
    [0x00,0x00,0x00,0x1F,0x00,0x00,0x00], // 45 '-'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x04], // 46 '.'
    [0x00,0x01,0x02,0x04,0x08,0x10,0x00], // 47 '/'
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // 48 '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // 49 '1'
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // 50 '2'
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // 51 '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // 52 '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // 53 '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // 54 '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // 55 '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // 56 '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // 57 '9'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x00], // 58 ':'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x08], // 59 ';'
    [0x02,0x04,0x08,0x10,0x08,0x04,0x02], // 60 '<'
    [0x00,0x00,0x1F,0x00,0x1F,0x00,0x00], // 61 '='
    [0x08,0x04,0x02,0x01,0x02,0x04,0x08], // 62 '>'
    [0x0E,0x11,0x01,0x02,0x04,0x00,0x04], // 63 '?'
    [0x0E,0x11,0x17,0x15,0x17,0x10,0x0E], // 64 '@'
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // 65 'A'
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // 66 'B'
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // 67 'C'
    [0x1C,0x12,0x11,0x11,0x11,0x12,0x1C], // 68 'D'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // 69 'E'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // 70 'F'
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // 71 'G'
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // 72 'H'
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // 73 'I'
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // 74 'J'
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // 75 'K'
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // 76 'L'
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // 77 'M'
    [0x11,0x11,0x19,0x15,0x13,0x11,0x11], // 78 'N'
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // 79 'O'
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // 80 'P'
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // 81 'Q'
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // 82 'R'
    [0x0F,0x10,0x10,0x0E,0x01,0x01,0x1E], // 83 'S'
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // 84 'T'
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // 85 'U'
    [0x11,0x11,0x11,0x11,0x11,0x0A,0x04], // 86 'V'
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // 87 'W'
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // 88 'X'
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // 89 'Y'
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // 90 'Z'
    [0x0E,0x08,0x08,0x08,0x08,0x08,0x0E], // 91 '['
    [0x00,0x10,0x08,0x04,0x02,0x01,0x00], // 92 '\'
    [0x0E,0x02,0x02,0x02,0x02,0x02,0x0E], // 93 ']'
    [0x04,0x0A,0x11,0x00,0x00,0x00,0x00], // 94 '^'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x1F], // 95 '_'
    [0x08,0x04,0x02,0x00,0x00,0x00,0x00], // 96 '`'
    [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F], // 97 'a'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x1E], // 98 'b'
    [0x00,0x00,0x0E,0x10,0x10,0x11,0x0E], // 99 'c'
    [0x01,0x01,0x0D,0x13,0x11,0x11,0x0F], // 100 'd'
    [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E], // 101 'e'
    [0x06,0x09,0x08,0x1C,0x08,0x08,0x08], // 102 'f'
    [0x00,0x00,0x0F,0x11,0x0F,0x01,0x0E], // 103 'g'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x11], // 104 'h'
    [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E], // 105 'i'
    [0x02,0x00,0x06,0x02,0x02,0x12,0x0C], // 106 'j'
    [0x10,0x10,0x12,0x14,0x18,0x14,0x12], // 107 'k'
    [0x0C,0x04,0x04,0x04,0x04,0x04,0x0E], // 108 'l'
    [0x00,0x00,0x1A,0x15,0x15,0x11,0x11], // 109 'm'
    [0x00,0x00,0x16,0x19,0x11,0x11,0x11], // 110 'n'
    [0x00,0x00,0x0E,0x11,0x11,0x11,0x0E], // 111 'o'
    [0x00,0x00,0x1E,0x11,0x1E,0x10,0x10], // 112 'p'
    [0x00,0x00,0x0D,0x13,0x0F,0x01,0x01], // 113 'q'
    [0x00,0x00,0x16,0x19,0x10,0x10,0x10], // 114 'r'
    [0x00,0x00,0x0E,0x10,0x0E,0x01,0x1E], // 115 's'
    [0x08,0x08,0x1C,0x08,0x08,0x09,0x06], // 116 't'
    [0x00,0x00,0x11,0x11,0x11,0x13,0x0D], // 117 'u'
    [0x00,0x00,0x11,0x11,0x11,0x0A,0x04], // 118 'v'
    [0x00,0x00,0x11,0x11,0x15,0x15,0x0A], // 119 'w'
    [0x00,0x00,0x11,0x0A,0x04,0x0A,0x11], // 120 'x'
    [0x00,0x00,0x11,0x11,0x0F,0x01,0x0E], // 121 'y'
    [0x00,0x00,0x1F,0x02,0x04,0x08,0x1F], // 122 'z'
    [0x02,0x04,0x04,0x08,0x04,0x04,0x02], // 123 '{'
    [0x04,0x04,0x04,0x04,0x04,0x04,0x04], // 124 '|'
    [0x08,0x04,0x04,0x02,0x04,0x04,0x08], // 125 '}'
    [0x00,0x00,0x08,0x15,0x02,0x00,0x00], // 126 '~'
];

/// Horizontal placement of text relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor is the left edge.
    #[default]
    Start,
    /// Anchor is the center.
    Middle,
    /// Anchor is the right edge.
    End,
}

/// How a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Integer magnification of the 5x7 font.
    pub scale: u32,
    /// Glyph color.
    pub color: Rgba,
    /// Placement along the text direction.
    pub anchor: TextAnchor,
}

impl TextStyle {
    /// Left-anchored text at `scale` in `color`.
    #[must_use]
    pub const fn new(scale: u32, color: Rgba) -> Self {
        Self {
            scale,
            color,
            anchor: TextAnchor::Start,
        }
    }

    /// Change the anchor.
    #[must_use]
    pub const fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Length of `text` along its baseline, in pixels.
    #[must_use]
    pub fn text_width(&self, text: &str) -> u32 {
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        (n * ADVANCE - 1) * self.scale.max(1)
    }

    /// Height of one line of text, in pixels.
    #[must_use]
    pub fn text_height(&self) -> u32 {
        GLYPH_HEIGHT * self.scale.max(1)
    }

    fn anchor_offset(&self, text: &str) -> i32 {
        let w = self.text_width(text) as i32;
        match self.anchor {
            TextAnchor::Start => 0,
            TextAnchor::Middle => w / 2,
            TextAnchor::End => w,
        }
    }
}

fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    let code = ch as u32;
    if (32..=126).contains(&code) {
        Some(&FONT_5X7[(code - 32) as usize])
    } else {
        None
    }
}

/// Draw horizontal text with the top of the glyphs at `y`.
pub fn draw_text(fb: &mut Framebuffer, x: i32, y: i32, text: &str, style: TextStyle) {
    let s = style.scale.max(1) as i32;
    let origin = x - style.anchor_offset(text);

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else { continue };
        let cell_x = origin + i as i32 * ADVANCE as i32 * s;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i32 {
                if bits & (0x10 >> col) != 0 {
                    draw_rect(fb, cell_x + col * s, y + row as i32 * s, s as u32, s as u32, style.color);
                }
            }
        }
    }
}

/// Draw text rotated 90 degrees counter-clockwise, reading bottom to top.
///
/// `x` is the left edge of the rotated glyphs (their tops) and `y` is the
/// anchor position along the vertical baseline.
pub fn draw_text_vertical(fb: &mut Framebuffer, x: i32, y: i32, text: &str, style: TextStyle) {
    let s = style.scale.max(1) as i32;
    let origin = y + style.anchor_offset(text);

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else { continue };
        let cell_y = origin - i as i32 * ADVANCE as i32 * s;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i32 {
                if bits & (0x10 >> col) != 0 {
                    draw_rect(fb, x + row as i32 * s, cell_y - (col + 1) * s, s as u32, s as u32, style.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_font_table_ordering() {
        // 'A' is 0x41; its top row is the centre bar.
        assert_eq!(glyph('A').unwrap()[0], 0x0E);
        assert_eq!(glyph(' ').unwrap(), &[0; 7]);
        assert!(glyph('~').is_some());
        assert!(glyph('\u{e9}').is_none());
    }

    #[test]
    fn test_text_metrics() {
        let style = TextStyle::new(2, Rgba::BLACK);
        assert_eq!(style.text_width(""), 0);
        assert_eq!(style.text_width("X"), 10);
        assert_eq!(style.text_width("Index"), (5 * 6 - 1) * 2);
        assert_eq!(style.text_height(), 14);
    }

    #[test]
    fn test_draw_text_pixels() {
        let mut fb = white_canvas(40, 20);
        draw_text(&mut fb, 1, 1, "I", TextStyle::new(1, Rgba::BLACK));

        // 'I' top row is 0x0E: columns 1..=3 lit
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(2, 1), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(4, 1), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(5, 1), Some(Rgba::WHITE));
        // middle rows only the stem
        assert_eq!(fb.get_pixel(3, 4), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(2, 4), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_text_anchor_end() {
        let mut a = white_canvas(60, 20);
        let mut b = white_canvas(60, 20);
        let style = TextStyle::new(1, Rgba::BLACK);

        draw_text(&mut a, 10, 2, "Y", style);
        let w = style.text_width("Y") as i32;
        draw_text(&mut b, 10 + w, 2, "Y", style.anchor(TextAnchor::End));

        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_draw_text_scaled_ink() {
        let mut small = white_canvas(80, 40);
        let mut large = white_canvas(80, 40);

        draw_text(&mut small, 0, 0, "Value", TextStyle::new(1, Rgba::BLACK));
        draw_text(&mut large, 0, 0, "Value", TextStyle::new(2, Rgba::BLACK));

        let ink = small.count_color(Rgba::BLACK);
        assert!(ink > 0);
        assert_eq!(large.count_color(Rgba::BLACK), ink * 4);
    }

    #[test]
    fn test_draw_text_vertical_matches_rotated_ink() {
        let mut horizontal = white_canvas(60, 60);
        let mut vertical = white_canvas(60, 60);
        let style = TextStyle::new(1, Rgba::BLACK);

        draw_text(&mut horizontal, 0, 0, "Y", style);
        draw_text_vertical(&mut vertical, 10, 40, "Y", style);

        assert_eq!(
            horizontal.count_color(Rgba::BLACK),
            vertical.count_color(Rgba::BLACK)
        );
        // Top of the rotated 'Y' faces left: its two arms start in column x = 10.
        assert_eq!(vertical.get_pixel(10, 39), Some(Rgba::BLACK));
        assert_eq!(vertical.get_pixel(10, 35), Some(Rgba::BLACK));
        assert_eq!(vertical.get_pixel(10, 37), Some(Rgba::WHITE));
    }

    #[test]
    fn test_unknown_characters_are_blank_cells() {
        let mut fb = white_canvas(60, 20);
        draw_text(&mut fb, 0, 0, "\u{2603}", TextStyle::new(1, Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 0);
    }
}
