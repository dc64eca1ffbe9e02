//! Built-in 5x7 bitmap face
//!
//! Used whenever a TrueType face cannot be loaded. Covers ASCII letters
//! (lowercase folds to uppercase), digits, space and a little punctuation.
//! Glyphs are scaled by an integer factor so the fallback keeps the
//! proportions of the design.

use super::{InkBounds, Typeface};

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance per character, in unscaled cells.
const ADVANCE: i32 = GLYPH_WIDTH + 1;
/// Nominal em height in unscaled cells.
const EM: f32 = 8.0;

/// The bitmap face. Stateless; the glyph table is static.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFace;

impl BuiltinFace {
    pub fn new() -> Self {
        BuiltinFace
    }

    /// Integer magnification for a requested pixel size.
    pub fn cell_scale(px: f32) -> i32 {
        ((px / EM) as i32).max(1)
    }

    /// Visit every lit cell of `text`, in unscaled cell coordinates relative
    /// to the pen origin. The ascender line sits one cell above the glyph top.
    fn for_each_cell(text: &str, mut visit: impl FnMut(i32, i32)) {
        for (index, ch) in text.chars().enumerate() {
            let Some(rows) = glyph_rows(ch) else { continue };
            let pen_x = index as i32 * ADVANCE;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        visit(pen_x + col, 1 + row as i32);
                    }
                }
            }
        }
    }
}

impl Typeface for BuiltinFace {
    fn name(&self) -> &str {
        "builtin"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn ink_bounds(&self, text: &str, px: f32) -> Option<InkBounds> {
        let k = Self::cell_scale(px);
        let mut bounds: Option<InkBounds> = None;
        Self::for_each_cell(text, |cx, cy| {
            let cell = InkBounds {
                min_x: cx * k,
                min_y: cy * k,
                max_x: (cx + 1) * k,
                max_y: (cy + 1) * k,
            };
            bounds = Some(match bounds {
                Some(b) => b.union(&cell),
                None => cell,
            });
        });
        bounds
    }

    fn draw(&self, text: &str, px: f32, origin: (i32, i32), plot: &mut dyn FnMut(i32, i32, f32)) {
        let k = Self::cell_scale(px);
        Self::for_each_cell(text, |cx, cy| {
            for dy in 0..k {
                for dx in 0..k {
                    plot(origin.0 + cx * k + dx, origin.1 + cy * k + dy, 1.0);
                }
            }
        });
    }
}

fn glyph_rows(ch: char) -> Option<&'static [u8; GLYPH_HEIGHT as usize]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}
