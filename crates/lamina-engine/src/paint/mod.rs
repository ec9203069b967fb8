//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear/radial/sweep gradients)
//! - compositing (blend modes, mask blur) bundled as `FillPaint`
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;
mod paint;

pub use blend::BlendMode;
pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient, SpreadMode, SweepGradient};
pub use paint::{FillPaint, Paint, blur_radius_to_sigma};
