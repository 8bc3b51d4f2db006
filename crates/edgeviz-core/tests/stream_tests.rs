//! End-to-end tests for the reading loop.
//!
//! These feed realistic producer output through `render_stream` and check
//! both sides of the contract: the echoed text and the queued draw calls.

use edgeviz_core::prelude::*;

/// Output of a polygon-splitting run, as the producer prints it.
const PRODUCER_OUTPUT: &str = "\
@W0 144.963100 -37.813600
@W-1 145.000000 -38.000000
@E0 0 0.000000 0.000000 10.000000 0.000000
@E1 0 10.000000 0.000000 10.000000 10.000000
Face 0 population served: 1234
@E2 1 10.000000 10.000000 0.000000 0.000000
";

fn run(input: &str) -> (Result<StreamSummary, StreamError>, String, Scene) {
    let mut out = Vec::new();
    let mut scene = Scene::new();
    let result = render_stream(input.as_bytes(), &mut out, &mut scene, &PlotStyle::default());
    (
        result,
        String::from_utf8(out).expect("echo output is UTF-8"),
        scene,
    )
}

#[test]
fn producer_output_round_trip() {
    let (result, out, scene) = run(PRODUCER_OUTPUT);
    let summary = result.expect("well-formed input");

    assert_eq!(
        summary,
        StreamSummary {
            lines: 6,
            passed_through: 1,
            watchtowers: 2,
            edges: 3,
        }
    );
    assert_eq!(out, "Face 0 population served: 1234\n");
    // Each watchtower is one call, each edge four.
    assert_eq!(scene.len(), 2 + 3 * 4);
}

#[test]
fn pass_through_lines_keep_order_around_records() {
    let input = "first\n@W1 0 0\n\nsecond line  with  spaces\n@E1 2 0 0 1 1\n  @not a record\nlast";
    let (result, out, _) = run(input);
    result.expect("well-formed input");
    assert_eq!(out, "first\n\nsecond line  with  spaces\n  @not a record\nlast");
}

#[test]
fn watchtower_example() {
    let (result, _, scene) = run("@W3 1.5 2.5\n");
    result.expect("well-formed input");

    let [DrawCall::Point(p)] = scene.calls() else {
        panic!("expected exactly one point, got {:?}", scene.calls());
    };
    assert_eq!((p.x, p.y), (1.5, 2.5));
    assert_eq!(p.color, PALETTE[3 % 7].with_alpha(0.5));
}

#[test]
fn edge_example() {
    let (result, _, scene) = run("@E5 -1 0 0 10 0\n");
    result.expect("well-formed input");

    let [DrawCall::Point(a), DrawCall::Point(b), DrawCall::Arrow(arrow), DrawCall::Label(label)] =
        scene.calls()
    else {
        panic!("unexpected draw calls {:?}", scene.calls());
    };
    assert_eq!((a.x, a.y), (0.0, 0.0));
    assert_eq!((b.x, b.y), (10.0, 0.0));
    assert_eq!((arrow.x1, arrow.y1, arrow.x2, arrow.y2), (0.0, 0.0, 10.0, 0.0));
    assert_eq!(arrow.color, color_of(SENTINEL_ID).with_alpha(0.7));
    assert_eq!(label.text, "5");
    assert_eq!((label.x, label.y), (5.0, 0.0));
}

#[test]
fn malformed_line_stops_the_stream() {
    let input = "before\n@W7 abc 2.0\nafter\n@W1 0 0\n";
    let (result, out, scene) = run(input);

    match result {
        Err(StreamError::Record {
            line: 2,
            source: RecordError::InvalidField { field: "x", .. },
        }) => {}
        other => panic!("expected invalid x on line 2, got {other:?}"),
    }
    // Nothing after the bad line was echoed or drawn.
    assert_eq!(out, "before\n");
    assert!(scene.is_empty());
}

#[test]
fn unknown_marker_stops_the_stream() {
    let (result, out, _) = run("@Q1 2 3\nafter\n");
    let err = result.expect_err("unknown marker is fatal");
    assert_eq!(err.to_string(), "line 1: unrecognized record marker '@Q' (expected '@W' or '@E')");
    assert!(out.is_empty());
}

#[test]
fn same_input_gives_same_scene() {
    let (_, out_a, scene_a) = run(PRODUCER_OUTPUT);
    let (_, out_b, scene_b) = run(PRODUCER_OUTPUT);
    assert_eq!(out_a, out_b);
    assert_eq!(scene_a, scene_b);
    assert_eq!(
        scene_a.to_json().expect("serialize"),
        scene_b.to_json().expect("serialize")
    );
}

#[test]
fn scene_fits_in_fitted_camera() {
    let (_, _, scene) = run(PRODUCER_OUTPUT);
    let bounds = scene.bounds().expect("scene has geometry");
    let visible = Camera2D::fit(&bounds).visible();

    assert!(visible.contains(bounds.min_x, bounds.min_y));
    assert!(visible.contains(bounds.max_x, bounds.max_y));
    // The watchtower far outside the edges still counts.
    assert!(bounds.max_x >= 145.0);
}

#[test]
fn custom_canvas_sees_calls_as_they_are_issued() {
    #[derive(Default)]
    struct Counter {
        points: usize,
        arrows: usize,
        labels: usize,
    }

    impl Canvas for Counter {
        fn point(&mut self, _: Point) {
            self.points += 1;
        }
        fn arrow(&mut self, _: Arrow) {
            self.arrows += 1;
        }
        fn label(&mut self, _: Label) {
            self.labels += 1;
        }
    }

    let mut counter = Counter::default();
    let mut sink = std::io::sink();
    render_stream(
        PRODUCER_OUTPUT.as_bytes(),
        &mut sink,
        &mut counter,
        &PlotStyle::default(),
    )
    .expect("well-formed input");

    assert_eq!(counter.points, 2 + 3 * 2);
    assert_eq!(counter.arrows, 3);
    assert_eq!(counter.labels, 3);
}
