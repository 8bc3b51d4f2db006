//! `edgeviz` -- plot the `@E`/`@W` lines of a producer's output.
//!
//! Reads standard input to the end, echoing every non-annotation line to
//! standard output as it arrives, then opens a window with the plot and
//! waits for it to be closed:
//!
//! ```text
//! ./voronoi1 towers.csv polygon.txt regions.txt < splits.txt | edgeviz
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=edgeviz=debug` for more.

use std::io;

use edgeviz::render::{run_windowed, WindowConfig};
use edgeviz_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let style = PlotStyle::default();
    let mut scene = Scene::new();

    let summary = {
        let input = io::stdin().lock();
        let mut output = io::stdout().lock();
        render_stream(input, &mut output, &mut scene, &style)?
    };

    tracing::info!(
        lines = summary.lines,
        edges = summary.edges,
        watchtowers = summary.watchtowers,
        "input consumed, opening plot"
    );

    run_windowed(scene, WindowConfig::default())
}
