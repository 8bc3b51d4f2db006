//! Tessellation of draw calls into colored triangles.
//!
//! The renderer only knows how to fill triangles, so every draw call is
//! broken down here, on the CPU, where it can be checked without a GPU:
//!
//! | Draw call | Triangles |
//! |-----------|-----------|
//! | [`Point`] | fan of [`DOT_SEGMENTS`] around the center |
//! | [`Arrow`] | fan from the tip over the arrow outline |
//! | [`Label`] | two per lit glyph pixel |
//!
//! Dots and labels are sized in screen pixels, so their triangles depend on
//! the camera and viewport and must be rebuilt whenever either changes.

use crate::camera::{Camera2D, Viewport};
use crate::canvas::{Arrow, DrawCall, Label, Point, Scene};
use crate::color::Color;
use crate::glyph::{GlyphFont, GLYPH_HEIGHT};

/// Number of triangles used to approximate a dot.
pub const DOT_SEGMENTS: usize = 20;

/// A filled triangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [[f32; 2]; 3],
    pub color: Color,
}

/// Outline of a half arrow in data coordinates, starting at the tip.
///
/// In a frame where the arrow points along +x with its tip at the origin,
/// the outline is: tip, head corner, head/shaft join, tail corner, tail
/// center. The head is shortened to the segment length when the segment is
/// shorter than the head; a zero-length arrow has no outline.
pub fn arrow_polygon(arrow: &Arrow) -> Vec<[f64; 2]> {
    let length = arrow.length();
    if length == 0.0 || !length.is_finite() {
        return Vec::new();
    }

    let head_length = arrow.head_length.min(length);
    let half_head = arrow.head_width / 2.0;
    let half_shaft = arrow.width / 2.0;

    let local: [[f64; 2]; 5] = [
        [0.0, 0.0],
        [-head_length, -half_head],
        [-head_length, -half_shaft],
        [-length, -half_shaft],
        [-length, 0.0],
    ];

    let cos = (arrow.x2 - arrow.x1) / length;
    let sin = (arrow.y2 - arrow.y1) / length;
    local
        .into_iter()
        .map(|[a, b]| [arrow.x2 + a * cos - b * sin, arrow.y2 + a * sin + b * cos])
        .collect()
}

/// Break a whole scene into triangles, preserving draw-call order.
pub fn tessellate(scene: &Scene, camera: &Camera2D, viewport: Viewport) -> Vec<Triangle> {
    let world_per_px = camera.world_per_pixel(viewport);
    let font = GlyphFont::new();
    let mut out = Vec::new();

    for call in scene.calls() {
        match call {
            DrawCall::Point(p) => dot_triangles(p, world_per_px, &mut out),
            DrawCall::Arrow(a) => arrow_triangles(a, &mut out),
            DrawCall::Label(l) => label_triangles(l, &font, world_per_px, &mut out),
        }
    }
    out
}

fn to_f32(p: [f64; 2]) -> [f32; 2] {
    [p[0] as f32, p[1] as f32]
}

/// Fan over a polygon that is star-shaped around its first vertex.
fn fan(polygon: &[[f64; 2]], color: Color, out: &mut Vec<Triangle>) {
    let Some((&first, rest)) = polygon.split_first() else {
        return;
    };
    for pair in rest.windows(2) {
        out.push(Triangle {
            points: [to_f32(first), to_f32(pair[0]), to_f32(pair[1])],
            color,
        });
    }
}

fn dot_triangles(p: &Point, (wx, wy): (f64, f64), out: &mut Vec<Triangle>) {
    let rx = p.radius_px as f64 * wx;
    let ry = p.radius_px as f64 * wy;
    let center = to_f32([p.x, p.y]);
    let rim = |i: usize| {
        let theta = std::f64::consts::TAU * i as f64 / DOT_SEGMENTS as f64;
        to_f32([p.x + rx * theta.cos(), p.y + ry * theta.sin()])
    };

    for i in 0..DOT_SEGMENTS {
        out.push(Triangle {
            points: [center, rim(i), rim(i + 1)],
            color: p.color,
        });
    }
}

fn arrow_triangles(a: &Arrow, out: &mut Vec<Triangle>) {
    fan(&arrow_polygon(a), a.color, out);
}

fn label_triangles(l: &Label, font: &GlyphFont, (wx, wy): (f64, f64), out: &mut Vec<Triangle>) {
    let cell_w = l.pixel_px as f64 * wx;
    let cell_h = l.pixel_px as f64 * wy;

    for (col, row) in font.lit_cells(&l.text) {
        let left = l.x + col as f64 * cell_w;
        let right = left + cell_w;
        // Bottom glyph row sits on the anchor's baseline.
        let top = l.y + (GLYPH_HEIGHT - row) as f64 * cell_h;
        let bottom = top - cell_h;

        let bl = to_f32([left, bottom]);
        let br = to_f32([right, bottom]);
        let tr = to_f32([right, top]);
        let tl = to_f32([left, top]);
        out.push(Triangle {
            points: [bl, br, tr],
            color: l.color,
        });
        out.push(Triangle {
            points: [bl, tr, tl],
            color: l.color,
        });
    }
}
