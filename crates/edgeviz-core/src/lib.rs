//! Edgeviz Core -- line-stream parsing and plot scene construction.
//!
//! This crate turns a text stream carrying `@E` (edge) and `@W` (watchtower)
//! annotation lines into a [`Scene`](canvas::Scene) of draw calls, forwarding
//! every other line untouched. Everything here is GPU-free: the scene,
//! camera math and tessellation can be exercised headlessly, and the
//! `edgeviz` crate only uploads the resulting triangles.
//!
//! # Quick Start
//!
//! ```
//! use edgeviz_core::prelude::*;
//!
//! let input = "splitting face 1\n@E5 -1 0 0 10 0\n@W3 1.5 2.5\n";
//! let mut echoed = Vec::new();
//! let mut scene = Scene::new();
//!
//! let summary = render_stream(input.as_bytes(), &mut echoed, &mut scene, &PlotStyle::default())
//!     .unwrap();
//!
//! assert_eq!(echoed, b"splitting face 1\n");
//! assert_eq!(summary.edges, 1);
//! assert_eq!(summary.watchtowers, 1);
//! // Two endpoint dots, one arrow, one label, one watchtower dot.
//! assert_eq!(scene.len(), 5);
//! ```

#![deny(unsafe_code)]

pub mod camera;
pub mod canvas;
pub mod color;
pub mod geometry;
pub mod glyph;
pub mod plot;
pub mod record;
pub mod stream;
pub mod style;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while parsing a single marker line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// The line starts with the marker but the type character is not `W` or `E`.
    #[error("unrecognized record marker '@{marker}' (expected '@W' or '@E')")]
    UnknownMarker {
        /// Whatever followed the `@` (empty when the line is just `@`).
        marker: String,
    },

    /// Wrong number of whitespace-separated fields after the prefix.
    #[error("{kind} record expects {expected} fields, found {found}")]
    FieldCount {
        kind: record::RecordKind,
        expected: usize,
        found: usize,
    },

    /// A field did not parse as the required numeric type.
    #[error("{kind} record has invalid {field} '{token}': {reason}")]
    InvalidField {
        kind: record::RecordKind,
        field: &'static str,
        token: String,
        reason: String,
    },
}

/// Errors produced while consuming an input stream.
///
/// Every variant is fatal: the stream is not read past the offending line.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A marker line was malformed.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// The line bytes are not valid UTF-8.
    #[error("line {line}: input is not valid UTF-8: {source}")]
    Encoding {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Reading input or writing pass-through output failed.
    #[error("stream I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::camera::{Bounds, Camera2D, Viewport};
    pub use crate::canvas::{Arrow, Canvas, DrawCall, Label, Point, Scene};
    pub use crate::color::{color_of, Color, PALETTE, SENTINEL_ID};
    pub use crate::geometry::{tessellate, Triangle};
    pub use crate::glyph::GlyphFont;
    pub use crate::plot::plot_record;
    pub use crate::record::{classify, Edge, Line, Record, RecordKind, Watchtower, MARKER};
    pub use crate::stream::{render_stream, StreamSummary};
    pub use crate::style::PlotStyle;
    pub use crate::{RecordError, StreamError};
}
