use core::hash::{Hash, Hasher};

use lamina_engine::coords::{CornerRadii, TextDirection, hash_f32};

use crate::lerp::{Lerp, Scale, lerp_f32};

/// Corner radii expressed relative to the reading direction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DirectionalRadii {
    pub top_start: f32,
    pub top_end: f32,
    pub bottom_end: f32,
    pub bottom_start: f32,
}

/// Corner-radius descriptor for rectangular decorations.
///
/// Resolved against a [`TextDirection`] into concrete [`CornerRadii`] at
/// paint and hit-test time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BorderRadius {
    Absolute(CornerRadii),
    Directional(DirectionalRadii),
}

impl BorderRadius {
    /// Same radius on every corner.
    #[inline]
    pub const fn circular(radius: f32) -> Self {
        BorderRadius::Absolute(CornerRadii::all(radius))
    }

    #[inline]
    pub const fn only(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        BorderRadius::Absolute(CornerRadii::new(top_left, top_right, bottom_right, bottom_left))
    }

    #[inline]
    pub const fn directional(top_start: f32, top_end: f32, bottom_end: f32, bottom_start: f32) -> Self {
        BorderRadius::Directional(DirectionalRadii { top_start, top_end, bottom_end, bottom_start })
    }

    pub fn resolve(&self, text_direction: TextDirection) -> CornerRadii {
        match *self {
            BorderRadius::Absolute(radii) => radii,
            BorderRadius::Directional(d) => match text_direction {
                TextDirection::Ltr => CornerRadii::new(d.top_start, d.top_end, d.bottom_end, d.bottom_start),
                TextDirection::Rtl => CornerRadii::new(d.top_end, d.top_start, d.bottom_start, d.bottom_end),
            },
        }
    }
}

impl From<CornerRadii> for BorderRadius {
    fn from(radii: CornerRadii) -> Self {
        BorderRadius::Absolute(radii)
    }
}

impl Lerp for BorderRadius {
    /// Component-wise for matching forms. Mixed absolute/directional pairs
    /// cannot be compared without a text direction, so they switch at the midpoint.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        match (from, to) {
            (BorderRadius::Absolute(a), BorderRadius::Absolute(b)) => {
                BorderRadius::Absolute(CornerRadii::lerp(a, b, t))
            }
            (BorderRadius::Directional(a), BorderRadius::Directional(b)) => {
                BorderRadius::Directional(DirectionalRadii {
                    top_start: lerp_f32(a.top_start, b.top_start, t),
                    top_end: lerp_f32(a.top_end, b.top_end, t),
                    bottom_end: lerp_f32(a.bottom_end, b.bottom_end, t),
                    bottom_start: lerp_f32(a.bottom_start, b.bottom_start, t),
                })
            }
            _ => if t < 0.5 { *from } else { *to },
        }
    }
}

impl Scale for BorderRadius {
    fn scale(&self, factor: f32) -> Self {
        match *self {
            BorderRadius::Absolute(r) => BorderRadius::Absolute(r.scale(factor)),
            BorderRadius::Directional(d) => BorderRadius::Directional(DirectionalRadii {
                top_start: d.top_start * factor,
                top_end: d.top_end * factor,
                bottom_end: d.bottom_end * factor,
                bottom_start: d.bottom_start * factor,
            }),
        }
    }
}

impl Hash for BorderRadius {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            BorderRadius::Absolute(r) => {
                0u8.hash(state);
                r.hash(state);
            }
            BorderRadius::Directional(d) => {
                1u8.hash(state);
                for v in [d.top_start, d.top_end, d.bottom_end, d.bottom_start] {
                    hash_f32(v, state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_resolves_per_text_direction() {
        let r = BorderRadius::directional(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.resolve(TextDirection::Ltr), CornerRadii::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.resolve(TextDirection::Rtl), CornerRadii::new(2.0, 1.0, 4.0, 3.0));
    }

    #[test]
    fn absolute_ignores_text_direction() {
        let r = BorderRadius::only(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.resolve(TextDirection::Rtl), CornerRadii::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn same_form_lerps_componentwise() {
        let mid = BorderRadius::lerp(&BorderRadius::circular(0.0), &BorderRadius::circular(10.0), 0.5);
        assert_eq!(mid, BorderRadius::circular(5.0));
    }

    #[test]
    fn mixed_forms_switch_at_midpoint() {
        let a = BorderRadius::circular(4.0);
        let b = BorderRadius::directional(8.0, 8.0, 8.0, 8.0);
        assert_eq!(BorderRadius::lerp(&a, &b, 0.49), a);
        assert_eq!(BorderRadius::lerp(&a, &b, 0.5), b);
    }
}
