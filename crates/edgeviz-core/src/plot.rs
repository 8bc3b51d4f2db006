//! Record → draw-call dispatch.
//!
//! | Record | Draw calls, in order |
//! |--------|----------------------|
//! | Watchtower | one dot colored by `id` |
//! | Edge | start dot, end dot, arrow colored by `face_id`, red id label at the midpoint |

use crate::canvas::{Arrow, Canvas, Label, Point};
use crate::color::color_of;
use crate::record::{Edge, Record, Watchtower};
use crate::style::PlotStyle;

/// Issue the draw calls for one record.
pub fn plot_record<C: Canvas + ?Sized>(record: &Record, style: &PlotStyle, canvas: &mut C) {
    match record {
        Record::Watchtower(w) => plot_watchtower(w, style, canvas),
        Record::Edge(e) => plot_edge(e, style, canvas),
    }
}

fn plot_watchtower<C: Canvas + ?Sized>(w: &Watchtower, style: &PlotStyle, canvas: &mut C) {
    canvas.point(Point {
        x: w.x,
        y: w.y,
        radius_px: style.watchtower_radius_px,
        color: color_of(w.id).with_alpha(style.watchtower_alpha),
        label: Some(w.id.to_string()),
    });
}

fn plot_edge<C: Canvas + ?Sized>(e: &Edge, style: &PlotStyle, canvas: &mut C) {
    let endpoint_color = style.endpoint_color.with_alpha(style.endpoint_alpha);
    for (x, y) in [(e.x1, e.y1), (e.x2, e.y2)] {
        canvas.point(Point {
            x,
            y,
            radius_px: style.endpoint_radius_px,
            color: endpoint_color,
            label: None,
        });
    }

    canvas.arrow(Arrow {
        x1: e.x1,
        y1: e.y1,
        x2: e.x2,
        y2: e.y2,
        width: style.arrow_width,
        head_width: style.head_width(),
        head_length: style.head_length(),
        color: color_of(e.face_id).with_alpha(style.arrow_alpha),
    });

    let dx = e.x2 - e.x1;
    let dy = e.y2 - e.y1;
    canvas.label(Label {
        x: e.x1 + dx / 2.0,
        y: e.y1 + dy / 2.0,
        text: e.id.to_string(),
        pixel_px: style.label_pixel_px,
        color: style.label_color,
    });
}
