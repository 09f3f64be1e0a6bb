//! Bitmap text rendering and glyph metrics
//!
//! Text is drawn procedurally from a 5x7 bitmap font using SDL2 rectangles.
//! The same metrics that place glyphs on screen feed the collision engine:
//! a line of text is nominally [`LINE_HEIGHT`] pixels tall at scale 1.0, and
//! every character advances the pen by a fixed width derived from the glyph
//! cell. Keeping metrics and rasterization together means collision boxes
//! always match what the player sees.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Nominal pixel height of a rendered text line at scale 1.0.
pub const LINE_HEIGHT: f32 = 48.0;

/// Glyph grid: 5 columns of ink plus 1 of spacing, 7 rows of ink with the
/// eighth row left as line gap.
const GLYPH_COLS: u32 = 5;
const CELL: f32 = LINE_HEIGHT / 8.0;

/// Horizontal advance of any character at scale 1.0.
pub fn advance_width(_c: char) -> f32 {
    (GLYPH_COLS + 1) as f32 * CELL
}

/// Total width of `text` at the given scale: the sum of per-character
/// advances. This is the width the collision engine boxes against.
pub fn text_width(text: &str, scale: f32) -> f32 {
    text.chars().map(|c| advance_width(c) * scale).sum()
}

/// Height of a rendered line at the given scale.
pub fn text_height(scale: f32) -> f32 {
    LINE_HEIGHT * scale
}

/// 5x7 bitmap pattern for a character (1 bit per pixel, MSB = left column).
///
/// Lookup is case-insensitive. Characters without a glyph render as a full
/// block so missing coverage is visible rather than silent.
fn glyph_pattern(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        ';' => &[0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '\'' => &[0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '"' => &[0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
    }
}

/// Draws `text` with its top-left corner at screen position (`x`, `y`).
///
/// `scale` multiplies the nominal 48-pixel line height; pixels of the glyph
/// grid are rendered as filled rectangles of the scaled cell size.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: f32,
    y: f32,
    scale: f32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let cell = CELL * scale;
    let cell_size = cell.ceil() as u32;
    let mut pen_x = x;

    for c in text.chars() {
        let pattern = glyph_pattern(c);
        for (row, &bits) in pattern.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if (bits >> (GLYPH_COLS - 1 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        (pen_x + col as f32 * cell).round() as i32,
                        (y + row as f32 * cell).round() as i32,
                        cell_size,
                        cell_size,
                    ))?;
                }
            }
        }
        pen_x += advance_width(c) * scale;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_uniform() {
        assert_eq!(advance_width('A'), advance_width(' '));
        assert_eq!(advance_width('A'), 36.0);
    }

    #[test]
    fn test_text_width_sums_advances() {
        assert_eq!(text_width("", 1.0), 0.0);
        assert_eq!(text_width("ab", 1.0), 72.0);
        assert_eq!(text_width("ab", 0.5), 36.0);
    }

    #[test]
    fn test_text_height_scales_line_height() {
        assert_eq!(text_height(1.0), 48.0);
        assert_eq!(text_height(0.5), 24.0);
    }

    #[test]
    fn test_every_glyph_fits_the_grid() {
        for c in ' '..='~' {
            for &row in glyph_pattern(c) {
                assert!(
                    u32::from(row) < 1 << GLYPH_COLS,
                    "glyph {:?} overflows 5 columns",
                    c
                );
            }
        }
    }
}
