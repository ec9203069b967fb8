//! Coordinate and geometry types shared across engine renderers and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod direction;
mod path;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use direction::TextDirection;
pub use path::Path;
pub use rect::Rect;
pub use vec2::Vec2;

/// Feeds `value` into `state` so that values comparing equal hash equally
/// (`0.0` and `-0.0` share a bit pattern here).
#[inline]
pub fn hash_f32<H: core::hash::Hasher>(value: f32, state: &mut H) {
    let canonical = if value == 0.0 { 0.0f32 } else { value };
    state.write_u32(canonical.to_bits());
}
