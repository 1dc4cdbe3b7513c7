//! Glyph rasterization and time string layout
//!
//! Draws catalog glyphs into a framebuffer. Text runs on a fixed pitch
//! of one glyph width per character, centered horizontally and aligned
//! to the top edge, which is all the layout a `HH:MM` clock face needs.

use crate::font::{self, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::framebuffer::{Color, Framebuffer, DISPLAY_WIDTH};

/// Draw a single glyph with its top-left corner at (`x`, `y`)
///
/// Only set bits are painted; everything already in the buffer shows
/// through the glyph's background. Pixels that fall outside the panel
/// are dropped by the framebuffer.
pub fn draw_glyph(frame: &mut Framebuffer, glyph: &Glyph, x: i32, y: i32, color: Color) {
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            if glyph.bit(row, col) {
                frame.set_pixel(x + col as i32, y + row as i32, color);
            }
        }
    }
}

/// Draw `text` horizontally centered along the top edge of the frame
///
/// Every character occupies one fixed-width slot whether or not the
/// catalog has a glyph for it; characters without a glyph leave their
/// slot blank. Runs wider than the panel extend past both edges and
/// clip there.
pub fn draw_text(frame: &mut Framebuffer, text: &str, color: Color) {
    let start_x = centered_origin(text.chars().count());
    for (slot, ch) in text.chars().enumerate() {
        if let Some(glyph) = font::lookup(ch) {
            draw_glyph(frame, glyph, start_x + (slot * GLYPH_WIDTH) as i32, 0, color);
        }
    }
}

/// Left edge of the first slot for a centered run of `char_count` glyphs
///
/// Negative when the run is wider than the panel.
fn centered_origin(char_count: usize) -> i32 {
    (DISPLAY_WIDTH as i32 - (char_count * GLYPH_WIDTH) as i32) / 2
}
