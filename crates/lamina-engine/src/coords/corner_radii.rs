use core::hash::{Hash, Hasher};

use super::{Vec2, hash_f32};

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Clamps negative radii to zero.
    #[inline]
    #[must_use]
    pub fn non_negative(self) -> Self {
        Self {
            top_left: self.top_left.max(0.0),
            top_right: self.top_right.max(0.0),
            bottom_right: self.bottom_right.max(0.0),
            bottom_left: self.bottom_left.max(0.0),
        }
    }

    /// Shrinks every radius by `delta`, stopping at zero.
    ///
    /// Used to follow an outline that has been inset by `delta`.
    #[inline]
    #[must_use]
    pub fn deflate(self, delta: f32) -> Self {
        Self {
            top_left: (self.top_left - delta).max(0.0),
            top_right: (self.top_right - delta).max(0.0),
            bottom_right: (self.bottom_right - delta).max(0.0),
            bottom_left: (self.bottom_left - delta).max(0.0),
        }
    }

    /// Scales all radii down uniformly so adjacent corners never overlap
    /// within a box of `size`.
    #[must_use]
    pub fn fitted(self, size: Vec2) -> Self {
        let r = self.non_negative();
        let mut scale = 1.0f32;
        let mut limit = |sum: f32, length: f32| {
            if sum > 0.0 && sum > length {
                scale = scale.min(length.max(0.0) / sum);
            }
        };
        limit(r.top_left + r.top_right, size.x);
        limit(r.bottom_left + r.bottom_right, size.x);
        limit(r.top_left + r.bottom_left, size.y);
        limit(r.top_right + r.bottom_right, size.y);

        if scale < 1.0 {
            Self {
                top_left: r.top_left * scale,
                top_right: r.top_right * scale,
                bottom_right: r.bottom_right * scale,
                bottom_left: r.bottom_left * scale,
            }
        } else {
            r
        }
    }
}

impl Hash for CornerRadii {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.top_left, state);
        hash_f32(self.top_right, state);
        hash_f32(self.bottom_right, state);
        hash_f32(self.bottom_left, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_leaves_small_radii_alone() {
        let r = CornerRadii::all(10.0);
        assert_eq!(r.fitted(Vec2::new(100.0, 100.0)), r);
    }

    #[test]
    fn fitted_scales_oversized_radii_uniformly() {
        let r = CornerRadii::all(100.0).fitted(Vec2::new(100.0, 50.0));
        // Vertical edge (50) limits: 200 → 50, scale 0.25.
        assert_eq!(r, CornerRadii::all(25.0));
    }

    #[test]
    fn deflate_stops_at_zero() {
        let r = CornerRadii::new(10.0, 2.0, 5.0, 0.0).deflate(4.0);
        assert_eq!(r, CornerRadii::new(6.0, 0.0, 1.0, 0.0));
    }
}
