//! Clock face glyph catalog
//!
//! A fixed catalog of 24x32 bitmaps covering exactly the characters a
//! `HH:MM` string can contain: the digits `0`-`9` and `:`. Every other
//! character has no glyph, which callers treat as "draw nothing" - an
//! ordinary outcome, not an error.

mod glyphs;

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 24;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 32;

/// A fixed-size monochrome bitmap for one character.
///
/// Stored as one row-mask per row. Bit `GLYPH_WIDTH - 1 - col` of a
/// row-mask holds column `col`, so the most significant relevant bit is
/// the leftmost pixel. Bits above column `GLYPH_WIDTH - 1` are never
/// examined.
pub struct Glyph {
    rows: [u32; GLYPH_HEIGHT],
}

impl Glyph {
    /// Check whether the pixel at (`row`, `col`) is set.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the glyph dimensions.
    pub fn bit(&self, row: usize, col: usize) -> bool {
        assert!(row < GLYPH_HEIGHT && col < GLYPH_WIDTH);
        self.rows[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// Number of set pixels within the 24x32 window.
    pub fn ink_count(&self) -> u32 {
        self.rows
            .iter()
            .map(|mask| (mask & ((1 << GLYPH_WIDTH) - 1)).count_ones())
            .sum()
    }
}

/// Look up the glyph for a character.
///
/// Returns `None` for anything outside the supported set. Never panics.
pub fn lookup(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0' => Some(&glyphs::DIGIT_0),
        '1' => Some(&glyphs::DIGIT_1),
        '2' => Some(&glyphs::DIGIT_2),
        '3' => Some(&glyphs::DIGIT_3),
        '4' => Some(&glyphs::DIGIT_4),
        '5' => Some(&glyphs::DIGIT_5),
        '6' => Some(&glyphs::DIGIT_6),
        '7' => Some(&glyphs::DIGIT_7),
        '8' => Some(&glyphs::DIGIT_8),
        '9' => Some(&glyphs::DIGIT_9),
        ':' => Some(&glyphs::COLON),
        _ => None,
    }
}
