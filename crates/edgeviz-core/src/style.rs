//! Plot style configuration.
//!
//! Every size and opacity used when turning records into draw calls lives
//! here so the dispatch code in [`plot`](crate::plot) stays free of magic
//! numbers. Data-unit sizes scale with the plot; pixel sizes do not.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Sizes, opacities and colors used for records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Radius of a watchtower dot, in screen pixels.
    pub watchtower_radius_px: f32,
    /// Opacity of watchtower dots.
    pub watchtower_alpha: f32,
    /// Radius of an edge endpoint dot, in screen pixels.
    pub endpoint_radius_px: f32,
    /// Opacity of edge endpoint dots.
    pub endpoint_alpha: f32,
    /// Color of edge endpoint dots.
    pub endpoint_color: Color,
    /// Full shaft width of edge arrows, in data units.
    pub arrow_width: f64,
    /// Opacity of edge arrows.
    pub arrow_alpha: f32,
    /// Color of edge id labels.
    pub label_color: Color,
    /// Size of one glyph pixel of a label, in screen pixels.
    pub label_pixel_px: f32,
}

impl PlotStyle {
    /// Arrow head width: three times the shaft width.
    pub fn head_width(&self) -> f64 {
        3.0 * self.arrow_width
    }

    /// Arrow head length: one and a half times the head width.
    pub fn head_length(&self) -> f64 {
        1.5 * self.head_width()
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            watchtower_radius_px: 2.5,
            watchtower_alpha: 0.5,
            endpoint_radius_px: 4.0,
            endpoint_alpha: 0.5,
            endpoint_color: Color::BLACK,
            arrow_width: 0.1,
            arrow_alpha: 0.7,
            label_color: Color::RED,
            label_pixel_px: 2.0,
        }
    }
}
