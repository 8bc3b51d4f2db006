//! RGBA colors and the id -> color rule.
//!
//! Both record kinds color themselves through [`color_of`]: the sentinel id
//! `-1` maps to black, every other key cycles through [`PALETTE`].

use serde::{Deserialize, Serialize};

/// Key meaning "uncategorized".
pub const SENTINEL_ID: i64 = -1;

/// sRGB color with straight alpha, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color with explicit RGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different opacity.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Components as an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert the color channels from sRGB to linear light, keeping alpha.
    ///
    /// Needed when the render target applies the sRGB transfer itself.
    pub fn to_linear(self) -> Self {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);
    pub const GOLD: Color = Color::new(1.0, 215.0 / 255.0, 0.0, 1.0);
    pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const INDIGO: Color = Color::new(75.0 / 255.0, 0.0, 130.0 / 255.0, 1.0);
    pub const VIOLET: Color = Color::new(238.0 / 255.0, 130.0 / 255.0, 238.0 / 255.0, 1.0);
}

/// Cyclic palette for categorized ids.
pub const PALETTE: [Color; 7] = [
    Color::ORANGE,
    Color::GOLD,
    Color::LIME,
    Color::CYAN,
    Color::BLUE,
    Color::INDIGO,
    Color::VIOLET,
];

/// Neutral color for the sentinel id.
pub const NEUTRAL: Color = Color::BLACK;

/// Map a face/watchtower id to its display color.
///
/// Negative keys other than the sentinel wrap with the Euclidean remainder,
/// so `-2` lands on the sixth palette entry (indigo).
pub fn color_of(key: i64) -> Color {
    if key == SENTINEL_ID {
        return NEUTRAL;
    }
    PALETTE[key.rem_euclid(PALETTE.len() as i64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_black() {
        assert_eq!(color_of(SENTINEL_ID), Color::BLACK);
    }

    #[test]
    fn sentinel_color_is_not_in_palette() {
        assert!(!PALETTE.contains(&color_of(SENTINEL_ID)));
    }

    #[test]
    fn palette_order() {
        assert_eq!(color_of(0), Color::ORANGE);
        assert_eq!(color_of(3), Color::CYAN);
        assert_eq!(color_of(6), Color::VIOLET);
        assert_eq!(color_of(7), Color::ORANGE);
    }

    #[test]
    fn negative_keys_wrap_euclidean() {
        assert_eq!(color_of(-2), Color::INDIGO);
        assert_eq!(color_of(-7), Color::ORANGE);
        assert_eq!(color_of(-8), Color::VIOLET);
        assert_eq!(color_of(i64::MIN), PALETTE[i64::MIN.rem_euclid(7) as usize]);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::GOLD.with_alpha(0.5);
        assert_eq!(c.to_array(), [1.0, 215.0 / 255.0, 0.0, 0.5]);
    }

    #[test]
    fn linearization_fixes_endpoints() {
        let white = Color::WHITE.to_linear();
        assert!((white.r - 1.0).abs() < 1e-6);
        assert_eq!(Color::BLACK.with_alpha(0.3).to_linear(), Color::new(0.0, 0.0, 0.0, 0.3));
    }
}
