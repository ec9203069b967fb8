//! Interpolation primitives shared by every decoration field.

use lamina_engine::coords::{CornerRadii, Vec2};
use lamina_engine::paint::Color;

/// Types that can be blended between two values.
///
/// `t = 0.0` returns `from`, `t = 1.0` returns `to`. Values outside `[0, 1]`
/// extrapolate, which spring curves rely on for overshoot.
pub trait Lerp: Sized {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

/// Types with a "zero contribution" point they can be scaled toward.
///
/// `scale(1.0)` must return an equal value and `scale(0.0)` the zero point
/// (transparent color, zero width, zero offset, ...).
pub trait Scale: Sized {
    #[must_use]
    fn scale(&self, factor: f32) -> Self;
}

/// `a + (b - a) * t`; exact when `a == b`.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Nullable interpolation: a missing side is the other side's zero point.
pub fn lerp_opt<T: Lerp + Scale>(a: Option<&T>, b: Option<&T>, t: f32) -> Option<T> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a.scale(1.0 - t)),
        (None, Some(b)) => Some(b.scale(t)),
        (Some(a), Some(b)) => Some(T::lerp(a, b, t)),
    }
}

impl Lerp for f32 {
    #[inline]
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        lerp_f32(*from, *to, t)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Vec2::new(lerp_f32(from.x, to.x, t), lerp_f32(from.y, to.y, t))
    }
}

impl Lerp for Color {
    /// Channel-wise in premultiplied space.
    #[inline]
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color::from_premul(
            lerp_f32(from.r, to.r, t),
            lerp_f32(from.g, to.g, t),
            lerp_f32(from.b, to.b, t),
            lerp_f32(from.a, to.a, t),
        )
    }
}

impl Scale for Color {
    #[inline]
    fn scale(&self, factor: f32) -> Self {
        self.scaled(factor)
    }
}

impl Lerp for CornerRadii {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        CornerRadii::new(
            lerp_f32(from.top_left, to.top_left, t),
            lerp_f32(from.top_right, to.top_right, t),
            lerp_f32(from.bottom_right, to.bottom_right, t),
            lerp_f32(from.bottom_left, to.bottom_left, t),
        )
    }
}

impl Scale for CornerRadii {
    fn scale(&self, factor: f32) -> Self {
        CornerRadii::new(
            self.top_left * factor,
            self.top_right * factor,
            self.bottom_right * factor,
            self.bottom_left * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_lerp_endpoints_and_overshoot() {
        assert_eq!(f32::lerp(&0.0, &10.0, 0.0), 0.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 0.5), 5.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 1.0), 10.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 1.5), 15.0);
    }

    #[test]
    fn f32_lerp_is_exact_between_equal_values() {
        for t in [0.1f32, 0.33, 0.7, 0.999] {
            assert_eq!(lerp_f32(0.3, 0.3, t), 0.3);
        }
    }

    #[test]
    fn color_lerp_midpoint() {
        let mid = Color::lerp(&Color::black(), &Color::white(), 0.5);
        assert_eq!(mid, Color::from_premul(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_opt_fades_missing_side() {
        let white = Color::white();
        assert_eq!(lerp_opt(Some(&white), None, 0.25), Some(white.scaled(0.75)));
        assert_eq!(lerp_opt(None, Some(&white), 0.25), Some(white.scaled(0.25)));
        assert_eq!(lerp_opt::<Color>(None, None, 0.25), None);
    }

    #[test]
    fn corner_radii_scale_to_zero() {
        assert_eq!(CornerRadii::all(8.0).scale(0.0), CornerRadii::zero());
    }
}
