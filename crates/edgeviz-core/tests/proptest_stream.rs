//! Property tests for the color rule, record parsing and the reading loop.

use edgeviz_core::prelude::*;
use proptest::prelude::*;

/// Lines that never start with the marker and never contain a newline.
fn plain_line() -> impl Strategy<Value = String> {
    "[^@\n\u{FEFF}][^\n]{0,40}|".prop_map(String::from)
}

/// Finite coordinates, kept to values that print and parse back exactly.
fn coord() -> impl Strategy<Value = f64> {
    (-1_000_000i64..1_000_000i64).prop_map(|v| v as f64 / 64.0)
}

#[derive(Debug, Clone)]
enum InputLine {
    Plain(String),
    Watchtower(i64, f64, f64),
    Edge(i64, i64, f64, f64, f64, f64),
}

impl InputLine {
    fn render(&self) -> String {
        match self {
            InputLine::Plain(s) => format!("{s}\n"),
            InputLine::Watchtower(id, x, y) => format!("@W{id} {x} {y}\n"),
            InputLine::Edge(id, f, x1, y1, x2, y2) => {
                format!("@E{id} {f}  {x1}\t{y1} {x2} {y2}\r\n")
            }
        }
    }
}

fn input_line() -> impl Strategy<Value = InputLine> {
    prop_oneof![
        plain_line().prop_map(InputLine::Plain),
        (-3i64..50, coord(), coord()).prop_map(|(id, x, y)| InputLine::Watchtower(id, x, y)),
        (-3i64..50, -3i64..50, coord(), coord(), coord(), coord())
            .prop_map(|(id, f, x1, y1, x2, y2)| InputLine::Edge(id, f, x1, y1, x2, y2)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn palette_has_period_seven(k in -1_000_000i64..1_000_000i64) {
        prop_assume!(k != SENTINEL_ID && k + 7 != SENTINEL_ID);
        prop_assert_eq!(color_of(k), color_of(k + 7));
        prop_assert!(PALETTE.contains(&color_of(k)));
    }

    #[test]
    fn pass_through_is_verbatim_and_ordered(lines in prop::collection::vec(input_line(), 0..40)) {
        let input: String = lines.iter().map(InputLine::render).collect();
        let expected: String = lines
            .iter()
            .filter(|l| matches!(l, InputLine::Plain(_)))
            .map(InputLine::render)
            .collect();

        let mut out = Vec::new();
        let mut scene = Scene::new();
        let summary = render_stream(input.as_bytes(), &mut out, &mut scene, &PlotStyle::default())
            .expect("generated input is well-formed");

        prop_assert_eq!(String::from_utf8(out).unwrap(), expected);
        prop_assert_eq!(summary.lines, lines.len());
        prop_assert_eq!(scene.len(), summary.watchtowers + 4 * summary.edges);
    }

    #[test]
    fn records_parse_back_to_their_fields(line in input_line()) {
        let text = line.render();
        match (line, classify(&text).expect("generated line is well-formed")) {
            (InputLine::Plain(_), Line::PassThrough(raw)) => prop_assert_eq!(raw, text.as_str()),
            (InputLine::Watchtower(id, x, y), Line::Record(Record::Watchtower(w))) => {
                prop_assert_eq!(w, Watchtower { id, x, y });
            }
            (InputLine::Edge(id, face_id, x1, y1, x2, y2), Line::Record(Record::Edge(e))) => {
                prop_assert_eq!(e, Edge { id, face_id, x1, y1, x2, y2 });
            }
            (line, parsed) => prop_assert!(false, "{:?} parsed as {:?}", line, parsed),
        }
    }

    #[test]
    fn arrow_never_overshoots(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let arrow = Arrow {
            x1, y1, x2, y2,
            width: 0.1,
            head_width: 0.3,
            head_length: 0.45,
            color: Color::BLACK,
        };
        let poly = edgeviz_core::geometry::arrow_polygon(&arrow);
        let length = arrow.length();
        prop_assume!(length > 0.0);

        let (ux, uy) = ((x2 - x1) / length, (y2 - y1) / length);
        for [px, py] in poly {
            // Projection onto the segment direction, measured from the start.
            let along = (px - x1) * ux + (py - y1) * uy;
            prop_assert!(along <= length + 1e-6, "vertex beyond tip: {} > {}", along, length);
            prop_assert!(along >= -1e-6, "vertex behind tail: {}", along);
        }
    }
}
