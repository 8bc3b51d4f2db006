//! 2D orthographic camera and data bounds.
//!
//! The camera defines which rectangle of data space is visible. Data axes
//! are scaled independently, so a window that is wider than the data is
//! tall stretches the plot horizontally rather than leaving empty bands.
//!
//! World (data) Y grows upward; screen Y grows downward from the top-left
//! corner of the viewport.

use serde::{Deserialize, Serialize};

/// Fraction of the data span added on each side when fitting.
pub const MARGIN: f64 = 0.05;

/// Relative widening applied to an axis whose data span is zero.
const DEGENERATE_EXPANDER: f64 = 0.05;

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds containing a single point.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Grow to contain `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `(x, y)` lies inside or on the boundary.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

impl Default for Bounds {
    /// The unit square shown for an empty plot.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        }
    }
}

/// Size of the render target in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// A simple 2D orthographic camera.
///
/// The [`orthographic_matrix`](Self::orthographic_matrix) method produces a
/// column-major 4x4 matrix that maps data coordinates to clip space
/// `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Width of the visible area in data units.
    pub width: f64,
    /// Height of the visible area in data units.
    pub height: f64,
    /// Camera center X in data units.
    pub x: f64,
    /// Camera center Y in data units.
    pub y: f64,
}

impl Camera2D {
    /// Camera showing `bounds` with a [`MARGIN`] on every side.
    ///
    /// An axis with zero span is widened by 5% of its magnitude first
    /// (or to `±0.05` when the value is zero) so a single point still gets
    /// a usable view.
    pub fn fit(bounds: &Bounds) -> Self {
        let (min_x, max_x) = widen_degenerate(bounds.min_x, bounds.max_x);
        let (min_y, max_y) = widen_degenerate(bounds.min_y, bounds.max_y);
        let width = (max_x - min_x) * (1.0 + 2.0 * MARGIN);
        let height = (max_y - min_y) * (1.0 + 2.0 * MARGIN);

        Self {
            width,
            height,
            x: (min_x + max_x) / 2.0,
            y: (min_y + max_y) / 2.0,
        }
    }

    /// The visible rectangle.
    pub fn visible(&self) -> Bounds {
        Bounds {
            min_x: self.x - self.width / 2.0,
            max_x: self.x + self.width / 2.0,
            min_y: self.y - self.height / 2.0,
            max_y: self.y + self.height / 2.0,
        }
    }

    /// Produce a column-major 4x4 orthographic projection matrix.
    ///
    /// Maps the visible rectangle to clip space `[-1, 1]` on both axes.
    pub fn orthographic_matrix(&self) -> [f32; 16] {
        let v = self.visible();

        // Column-major orthographic projection.
        // Z is unused (2D), near=0.0, far=1.0.
        let sx = 2.0 / (v.max_x - v.min_x);
        let sy = 2.0 / (v.max_y - v.min_y);
        let tx = -(v.max_x + v.min_x) / (v.max_x - v.min_x);
        let ty = -(v.max_y + v.min_y) / (v.max_y - v.min_y);

        [
            sx as f32, 0.0, 0.0, 0.0, // column 0
            0.0, sy as f32, 0.0, 0.0, // column 1
            0.0, 0.0, 1.0, 0.0, // column 2
            tx as f32, ty as f32, 0.0, 1.0, // column 3
        ]
    }

    /// Data units covered by one screen pixel on each axis.
    pub fn world_per_pixel(&self, viewport: Viewport) -> (f64, f64) {
        (
            self.width / viewport.width as f64,
            self.height / viewport.height as f64,
        )
    }

    /// Convert a screen position (pixels, origin top-left) to data coordinates.
    pub fn screen_to_world(&self, sx: f64, sy: f64, viewport: Viewport) -> (f64, f64) {
        let v = self.visible();
        let (wx, wy) = self.world_per_pixel(viewport);
        (v.min_x + sx * wx, v.max_y - sy * wy)
    }

    /// Move the view by a screen-space drag of `(dx, dy)` pixels.
    ///
    /// Content follows the cursor: dragging right reveals what was on the left.
    pub fn pan_pixels(&mut self, dx: f64, dy: f64, viewport: Viewport) {
        let (wx, wy) = self.world_per_pixel(viewport);
        self.x -= dx * wx;
        self.y += dy * wy;
    }

    /// Scale the view by `factor` while keeping the data point under
    /// `(sx, sy)` fixed on screen. A factor below 1 zooms in.
    pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, viewport: Viewport) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let (ax, ay) = self.screen_to_world(sx, sy, viewport);
        self.x = ax + (self.x - ax) * factor;
        self.y = ay + (self.y - ay) * factor;
        self.width *= factor;
        self.height *= factor;
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::fit(&Bounds::default())
    }
}

fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        return (min, max);
    }
    if min == 0.0 {
        return (-DEGENERATE_EXPANDER, DEGENERATE_EXPANDER);
    }
    let delta = DEGENERATE_EXPANDER * min.abs();
    (min - delta, max + delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fit_adds_margin() {
        let cam = Camera2D::fit(&Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: -2.0,
            max_y: 2.0,
        });
        assert!(approx(cam.x, 5.0));
        assert!(approx(cam.y, 0.0));
        assert!(approx(cam.width, 11.0));
        assert!(approx(cam.height, 4.4));
        let v = cam.visible();
        assert!(approx(v.min_x, -0.5) && approx(v.max_x, 10.5));
    }

    #[test]
    fn fit_widens_single_point() {
        let cam = Camera2D::fit(&Bounds::at(100.0, 0.0));
        assert!(approx(cam.x, 100.0));
        // 100 +/- 5, then 5% margin each side.
        assert!(approx(cam.width, 11.0));
        assert!(approx(cam.height, 0.11));
    }

    #[test]
    fn default_camera_shows_unit_square() {
        let v = Camera2D::default().visible();
        assert!(approx(v.min_x, -0.05) && approx(v.max_x, 1.05));
        assert!(approx(v.min_y, -0.05) && approx(v.max_y, 1.05));
    }

    #[test]
    fn orthographic_matrix_maps_corners_to_clip_space() {
        let cam = Camera2D {
            width: 800.0,
            height: 600.0,
            x: 400.0,
            y: 300.0,
        };
        let m = cam.orthographic_matrix();
        // x_clip = sx * x + tx
        let clip = |x: f32, y: f32| (m[0] * x + m[12], m[5] * y + m[13]);
        let (lx, by) = clip(0.0, 0.0);
        let (rx, ty) = clip(800.0, 600.0);
        assert!((lx + 1.0).abs() < 1e-6 && (by + 1.0).abs() < 1e-6);
        assert!((rx - 1.0).abs() < 1e-6 && (ty - 1.0).abs() < 1e-6);
    }

    #[test]
    fn screen_to_world_flips_y() {
        let cam = Camera2D {
            width: 10.0,
            height: 10.0,
            x: 5.0,
            y: 5.0,
        };
        let vp = Viewport::new(100, 100);
        assert_eq!(cam.screen_to_world(0.0, 0.0, vp), (0.0, 10.0));
        assert_eq!(cam.screen_to_world(100.0, 100.0, vp), (10.0, 0.0));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut cam = Camera2D {
            width: 10.0,
            height: 10.0,
            x: 5.0,
            y: 5.0,
        };
        let vp = Viewport::new(100, 100);
        let before = cam.screen_to_world(25.0, 75.0, vp);
        cam.zoom_at(25.0, 75.0, 0.5, vp);
        let after = cam.screen_to_world(25.0, 75.0, vp);
        assert!(approx(before.0, after.0) && approx(before.1, after.1));
        assert!(approx(cam.width, 5.0));
    }

    #[test]
    fn zoom_ignores_bad_factor() {
        let mut cam = Camera2D::default();
        let before = cam.clone();
        cam.zoom_at(0.0, 0.0, 0.0, Viewport::new(10, 10));
        cam.zoom_at(0.0, 0.0, f64::NAN, Viewport::new(10, 10));
        assert_eq!(cam, before);
    }

    #[test]
    fn pan_follows_cursor() {
        let mut cam = Camera2D {
            width: 10.0,
            height: 10.0,
            x: 5.0,
            y: 5.0,
        };
        cam.pan_pixels(10.0, 10.0, Viewport::new(100, 100));
        assert!(approx(cam.x, 4.0));
        assert!(approx(cam.y, 6.0));
    }
}
