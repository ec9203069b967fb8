use core::hash::{Hash, Hasher};

use lamina_engine::coords::{Path, Vec2, hash_f32};
use lamina_engine::paint::{Color, FillPaint, blur_radius_to_sigma};

use crate::lerp::{Lerp, Scale, lerp_f32};

/// A drop shadow cast by the decorated box.
///
/// The shadow is the box outline offset by `offset`, grown by
/// `spread_radius` and blurred by `blur_radius`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxShadow {
    pub color: Color,
    pub offset: Vec2,
    pub blur_radius: f32,
    pub spread_radius: f32,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self { color: Color::black(), offset: Vec2::zero(), blur_radius: 0.0, spread_radius: 0.0 }
    }
}

impl BoxShadow {
    pub fn new(color: Color, offset: Vec2, blur_radius: f32, spread_radius: f32) -> Self {
        Self { color, offset, blur_radius, spread_radius }
    }

    #[inline]
    pub fn blur_sigma(&self) -> f32 {
        blur_radius_to_sigma(self.blur_radius)
    }

    pub fn to_fill_paint(&self) -> FillPaint {
        FillPaint::new(self.color).with_blur_sigma(self.blur_sigma())
    }

    /// Shadow outline for a box whose own outline is `path`.
    pub(crate) fn shadow_path(&self, path: &Path) -> Path {
        let grow = |r: lamina_engine::coords::Rect| r.translate(self.offset).inflate(self.spread_radius);
        match *path {
            Path::Rect(r) => Path::Rect(grow(r)),
            Path::RoundedRect { rect, radii } => {
                let grown = grow(rect);
                Path::rounded_rect(grown, radii.fitted(rect.normalized().size).deflate(-self.spread_radius))
            }
            Path::Oval(r) => Path::Oval(grow(r)),
        }
    }

    /// Interpolates two shadow lists pairwise by index.
    ///
    /// When both lists are present the result is truncated to the shorter
    /// one. A missing list is scaled toward zero as a whole.
    pub fn lerp_list(a: Option<&[BoxShadow]>, b: Option<&[BoxShadow]>, t: f32) -> Option<Vec<BoxShadow>> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a.iter().map(|s| s.scale(1.0 - t)).collect()),
            (None, Some(b)) => Some(b.iter().map(|s| s.scale(t)).collect()),
            (Some(a), Some(b)) => Some(a.iter().zip(b).map(|(x, y)| BoxShadow::lerp(x, y, t)).collect()),
        }
    }
}

impl Lerp for BoxShadow {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            color: Color::lerp(&from.color, &to.color, t),
            offset: Vec2::lerp(&from.offset, &to.offset, t),
            blur_radius: lerp_f32(from.blur_radius, to.blur_radius, t).max(0.0),
            spread_radius: lerp_f32(from.spread_radius, to.spread_radius, t),
        }
    }
}

impl Scale for BoxShadow {
    /// Shrinks the geometry; the colour is kept.
    fn scale(&self, factor: f32) -> Self {
        Self {
            color: self.color,
            offset: self.offset * factor,
            blur_radius: self.blur_radius * factor,
            spread_radius: self.spread_radius * factor,
        }
    }
}

impl Hash for BoxShadow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.offset.hash(state);
        hash_f32(self.blur_radius, state);
        hash_f32(self.spread_radius, state);
    }
}
