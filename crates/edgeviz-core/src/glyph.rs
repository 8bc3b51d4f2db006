//! 5x7 bitmap font for plot labels.
//!
//! Labels are integer ids, so the font only carries digits and the minus
//! sign. Each glyph row is a `u8` whose low five bits are the pixels,
//! bit 4 leftmost. Unknown characters still advance the cursor so a label
//! keeps its width even if it contains something unexpected.

/// Glyph columns.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal advance per character, in glyph pixels (5 columns + 1 gap).
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

static GLYPHS: [(char, [u8; GLYPH_HEIGHT]); 11] = [
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
];

/// Lookup table over the built-in glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphFont;

impl GlyphFont {
    pub fn new() -> Self {
        Self
    }

    /// Row bitmaps for `ch`, top row first.
    pub fn glyph(&self, ch: char) -> Option<&'static [u8; GLYPH_HEIGHT]> {
        GLYPHS.iter().find(|(c, _)| *c == ch).map(|(_, rows)| rows)
    }

    /// Lit pixels of `text` as `(column, row)` cells.
    ///
    /// Columns count from the left edge of the first character, rows from
    /// the top of the line.
    pub fn lit_cells(&self, text: &str) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (char_idx, ch) in text.chars().enumerate() {
            let Some(rows) = self.glyph(ch) else {
                continue;
            };
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        cells.push((char_idx * ADVANCE + col, row));
                    }
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_every_character_of_an_integer() {
        let font = GlyphFont::new();
        for ch in ('0'..='9').chain(['-']) {
            assert!(font.glyph(ch).is_some(), "missing glyph for '{ch}'");
        }
    }

    #[test]
    fn minus_is_one_row() {
        let cells = GlyphFont::new().lit_cells("-");
        assert_eq!(cells, (0..5).map(|c| (c, 3)).collect::<Vec<_>>());
    }

    #[test]
    fn second_character_is_offset_by_advance() {
        let font = GlyphFont::new();
        let one = font.lit_cells("1");
        let eleven = font.lit_cells("11");
        assert_eq!(eleven.len(), 2 * one.len());
        assert!(eleven.iter().any(|&(c, _)| c >= ADVANCE));
    }

    #[test]
    fn unknown_characters_draw_nothing() {
        assert!(GlyphFont::new().lit_cells("?x ").is_empty());
    }
}
