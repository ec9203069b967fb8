//! Lamina engine crate.
//!
//! This crate owns the renderer-agnostic primitives used by higher layers:
//! geometry, paint sources and the recorded draw stream.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
