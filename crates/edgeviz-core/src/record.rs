//! Line classification and record parsing.
//!
//! The producer interleaves its normal output with annotation lines:
//!
//! ```text
//! @E<edge_id> <face_id> <x1> <y1> <x2> <y2>
//! @W<id> <x> <y>
//! ```
//!
//! Fields are separated by any run of whitespace, and the first field may
//! be glued to the type character. A line that does not start with
//! [`MARKER`] is passed through untouched.
//!
//! # Example
//!
//! ```
//! use edgeviz_core::record::{classify, Line, Record};
//!
//! match classify("@W3 1.5 2.5\n").unwrap() {
//!     Line::Record(Record::Watchtower(w)) => assert_eq!((w.id, w.x, w.y), (3, 1.5, 2.5)),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(matches!(classify("hello\n").unwrap(), Line::PassThrough("hello\n")));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::RecordError;

/// First character of every annotation line.
pub const MARKER: char = '@';

/// Type character for watchtower records.
const WATCHTOWER_TAG: char = 'W';

/// Type character for edge records.
const EDGE_TAG: char = 'E';

/// Which kind of record a marker line declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Watchtower,
    Edge,
}

impl RecordKind {
    fn field_count(self) -> usize {
        match self {
            RecordKind::Watchtower => 3,
            RecordKind::Edge => 6,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Watchtower => f.write_str("watchtower"),
            RecordKind::Edge => f.write_str("edge"),
        }
    }
}

/// A labeled point of interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watchtower {
    /// Color key; `-1` means uncategorized.
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

/// A directed segment from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Shown as the edge label.
    pub id: i64,
    /// Color key; `-1` means uncategorized.
    pub face_id: i64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A parsed annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Watchtower(Watchtower),
    Edge(Edge),
}

/// The outcome of classifying one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// Not an annotation; to be echoed verbatim (terminator included).
    PassThrough(&'a str),
    /// A well-formed annotation.
    Record(Record),
}

/// Classify a line and parse it if it carries an annotation.
///
/// `line` may still carry its terminator; pass-through lines are returned
/// exactly as given so the caller can echo them byte for byte.
///
/// # Errors
///
/// Returns a [`RecordError`] when the line starts with [`MARKER`] but is
/// not a well-formed `@W` or `@E` record.
pub fn classify(line: &str) -> Result<Line<'_>, RecordError> {
    let Some(rest) = line.strip_prefix(MARKER) else {
        return Ok(Line::PassThrough(line));
    };

    let mut chars = rest.chars();
    let kind = match chars.next() {
        Some(WATCHTOWER_TAG) => RecordKind::Watchtower,
        Some(EDGE_TAG) => RecordKind::Edge,
        other => {
            return Err(RecordError::UnknownMarker {
                marker: other
                    .filter(|c| !c.is_whitespace())
                    .map(String::from)
                    .unwrap_or_default(),
            })
        }
    };

    let record = parse_fields(kind, chars.as_str())?;
    Ok(Line::Record(record))
}

/// Parse the fields following the two-character prefix.
fn parse_fields(kind: RecordKind, body: &str) -> Result<Record, RecordError> {
    let tokens: Vec<&str> = body.split_whitespace().collect();
    let expected = kind.field_count();
    if tokens.len() != expected {
        return Err(RecordError::FieldCount {
            kind,
            expected,
            found: tokens.len(),
        });
    }

    let record = match kind {
        RecordKind::Watchtower => Record::Watchtower(Watchtower {
            id: parse_int(kind, "id", tokens[0])?,
            x: parse_coord(kind, "x", tokens[1])?,
            y: parse_coord(kind, "y", tokens[2])?,
        }),
        RecordKind::Edge => Record::Edge(Edge {
            id: parse_int(kind, "id", tokens[0])?,
            face_id: parse_int(kind, "face id", tokens[1])?,
            x1: parse_coord(kind, "x1", tokens[2])?,
            y1: parse_coord(kind, "y1", tokens[3])?,
            x2: parse_coord(kind, "x2", tokens[4])?,
            y2: parse_coord(kind, "y2", tokens[5])?,
        }),
    };
    Ok(record)
}

fn parse_int(kind: RecordKind, field: &'static str, token: &str) -> Result<i64, RecordError> {
    parse_token::<i64>(kind, field, token)
}

fn parse_coord(kind: RecordKind, field: &'static str, token: &str) -> Result<f64, RecordError> {
    let value = parse_token::<f64>(kind, field, token)?;
    if !value.is_finite() {
        return Err(RecordError::InvalidField {
            kind,
            field,
            token: token.to_owned(),
            reason: "coordinate must be finite".to_owned(),
        });
    }
    Ok(value)
}

fn parse_token<T>(kind: RecordKind, field: &'static str, token: &str) -> Result<T, RecordError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    token.parse::<T>().map_err(|e| RecordError::InvalidField {
        kind,
        field,
        token: token.to_owned(),
        reason: e.to_string(),
    })
}
