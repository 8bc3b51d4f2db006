//! The reading loop.
//!
//! [`render_stream`] consumes an input stream one line at a time. Each line
//! is decoded, classified, and then either written to the output (flushed
//! immediately, so echoed text keeps its place relative to anything else
//! the producer writes) or dispatched to the canvas as draw calls. The
//! loop ends at end of input or at the first bad line; nothing after a bad
//! line is read.
//!
//! Only `\n` ends a line. A lone `\r` stays inside the line, so
//! `@W1 0 0\r@W2 1 1\n` is a single malformed watchtower record.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::canvas::Canvas;
use crate::plot::plot_record;
use crate::record::{classify, Line, Record};
use crate::style::PlotStyle;
use crate::StreamError;

/// UTF-8 encoding of U+FEFF.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Counts gathered while reading a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Lines read, including the last one even if unterminated.
    pub lines: usize,
    /// Lines echoed to the output.
    pub passed_through: usize,
    pub watchtowers: usize,
    pub edges: usize,
}

/// Read `input` to the end, echoing plain lines to `output` and drawing
/// annotation lines onto `canvas`.
///
/// A byte-order mark at the very start of the stream is dropped. Line
/// terminators are preserved on echoed lines.
///
/// # Errors
///
/// Returns a [`StreamError`] naming the 1-based line number for a malformed
/// annotation or invalid UTF-8, or an I/O error from either side.
pub fn render_stream<R, W, C>(
    mut input: R,
    output: &mut W,
    canvas: &mut C,
    style: &PlotStyle,
) -> Result<StreamSummary, StreamError>
where
    R: BufRead,
    W: Write + ?Sized,
    C: Canvas + ?Sized,
{
    let mut summary = StreamSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;
        let line = summary.lines;

        let mut bytes = buf.as_slice();
        if line == 1 {
            bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
        }
        let text =
            std::str::from_utf8(bytes).map_err(|source| StreamError::Encoding { line, source })?;

        match classify(text).map_err(|source| StreamError::Record { line, source })? {
            Line::PassThrough(raw) => {
                output.write_all(raw.as_bytes())?;
                output.flush()?;
                summary.passed_through += 1;
            }
            Line::Record(record) => {
                match &record {
                    Record::Watchtower(_) => summary.watchtowers += 1,
                    Record::Edge(_) => summary.edges += 1,
                }
                tracing::trace!(line, ?record, "plotting record");
                plot_record(&record, style, canvas);
            }
        }
    }

    tracing::debug!(
        lines = summary.lines,
        passed_through = summary.passed_through,
        watchtowers = summary.watchtowers,
        edges = summary.edges,
        "input stream exhausted"
    );
    Ok(summary)
}
