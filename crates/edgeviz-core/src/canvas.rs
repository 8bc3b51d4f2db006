//! Plot surface abstraction and the retained scene.
//!
//! Record dispatch issues draw calls against a [`Canvas`]. The only surface
//! the binary uses is [`Scene`], which keeps the calls in issue order until
//! the window opens; anything else that wants to observe draw calls (a test
//! double, an exporter) implements the same trait.

use serde::Serialize;

use crate::camera::Bounds;
use crate::color::Color;
use crate::geometry::arrow_polygon;

/// A filled dot whose radius is fixed in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub radius_px: f32,
    pub color: Color,
    /// Identification label; kept with the dot, never drawn.
    pub label: Option<String>,
}

/// A filled half arrow whose sizes are in data units.
///
/// Only the half on the right-hand side of the direction of travel is
/// filled. The head is included in the segment: the tip sits exactly on
/// `(x2, y2)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrow {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Full shaft width.
    pub width: f64,
    pub head_width: f64,
    pub head_length: f64,
    pub color: Color,
}

impl Arrow {
    /// Segment length.
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// Text anchored (baseline-left) at a data point, sized in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Size of one glyph pixel, in screen pixels.
    pub pixel_px: f32,
    pub color: Color,
}

/// One queued drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum DrawCall {
    Point(Point),
    Arrow(Arrow),
    Label(Label),
}

/// A surface that accepts draw calls.
pub trait Canvas {
    /// Draw a dot.
    fn point(&mut self, point: Point);

    /// Draw an arrow.
    fn arrow(&mut self, arrow: Arrow);

    /// Draw a text label.
    fn label(&mut self, label: Label);
}

/// Draw calls retained in issue order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    calls: Vec<DrawCall>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// All draw calls, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of queued draw calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Data extent of the scene, or `None` when nothing contributes to it.
    ///
    /// Dot centers and arrow outlines count; labels never move the limits.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        let mut include = |x: f64, y: f64| match bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => bounds = Some(Bounds::at(x, y)),
        };

        for call in &self.calls {
            match call {
                DrawCall::Point(p) => include(p.x, p.y),
                DrawCall::Arrow(a) => {
                    for [x, y] in arrow_polygon(a) {
                        include(x, y);
                    }
                }
                DrawCall::Label(_) => {}
            }
        }
        bounds
    }

    /// Serialize the scene as a JSON array of draw calls.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.calls)
    }
}

impl Canvas for Scene {
    fn point(&mut self, point: Point) {
        self.calls.push(DrawCall::Point(point));
    }

    fn arrow(&mut self, arrow: Arrow) {
        self.calls.push(DrawCall::Arrow(arrow));
    }

    fn label(&mut self, label: Label) {
        self.calls.push(DrawCall::Label(label));
    }
}
