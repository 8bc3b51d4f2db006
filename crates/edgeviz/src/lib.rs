//! Edgeviz -- plot `@E`/`@W` annotation lines from a text stream.
//!
//! The parsing, scene and tessellation live in [`edgeviz_core`]; this crate
//! adds the GPU window that shows the finished scene (feature `renderer`,
//! on by default) and the `edgeviz` binary that wires stdin and stdout to
//! it.

#![deny(unsafe_code)]

pub mod render;

/// Re-export the core crate for convenience.
pub use edgeviz_core;
