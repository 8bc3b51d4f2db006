//! Interactive plot window.
//!
//! This module is feature-gated behind `renderer`. When the feature is not
//! enabled, this module compiles to nothing and the crate only re-exports
//! the headless core. The window draws the scene as alpha-blended
//! triangles over a white background, with no axes or ticks.

#[cfg(feature = "renderer")]
pub mod app;
#[cfg(feature = "renderer")]
pub mod renderer;

#[cfg(feature = "renderer")]
pub use app::{run_windowed, WindowConfig};
#[cfg(feature = "renderer")]
pub use renderer::DebugRenderer;
