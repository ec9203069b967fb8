use core::hash::{Hash, Hasher};

use lamina_engine::coords::{Rect, TextDirection, Vec2, hash_f32};

use crate::lerp::{Lerp, Scale, lerp_f32};

/// A point within a rectangle, in rectangle-relative units.
///
/// `(-1, -1)` is the top-left corner, `(0, 0)` the centre and `(1, 1)` the
/// bottom-right corner. Values outside `[-1, 1]` lie outside the rectangle.
///
/// A directional alignment measures `x` from the start edge, so it mirrors
/// horizontally under right-to-left text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Alignment {
    pub x: f32,
    pub y: f32,
    pub directional: bool,
}

impl Alignment {
    pub const TOP_LEFT: Self = Self::new(-1.0, -1.0);
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    pub const TOP_RIGHT: Self = Self::new(1.0, -1.0);
    pub const CENTER_LEFT: Self = Self::new(-1.0, 0.0);
    pub const CENTER: Self = Self::new(0.0, 0.0);
    pub const CENTER_RIGHT: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_LEFT: Self = Self::new(-1.0, 1.0);
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, directional: false }
    }

    /// Alignment whose horizontal component runs from the start edge.
    #[inline]
    pub const fn directional(start: f32, y: f32) -> Self {
        Self { x: start, y, directional: true }
    }

    /// Returns the absolute alignment for `text_direction`.
    #[inline]
    pub fn resolve(self, text_direction: TextDirection) -> Self {
        let x = if self.directional && text_direction.is_rtl() { -self.x } else { self.x };
        Self::new(x, self.y)
    }

    /// The point this alignment designates inside `rect`.
    pub fn within_rect(self, rect: Rect, text_direction: TextDirection) -> Vec2 {
        let a = self.resolve(text_direction);
        let c = rect.center();
        Vec2::new(c.x + a.x * rect.width() * 0.5, c.y + a.y * rect.height() * 0.5)
    }

    /// Places a box of `size` inside `rect` so that the alignment points of
    /// both coincide.
    pub fn inscribe(self, size: Vec2, rect: Rect, text_direction: TextDirection) -> Rect {
        let a = self.resolve(text_direction);
        let half_dx = (rect.width() - size.x) * 0.5;
        let half_dy = (rect.height() - size.y) * 0.5;
        Rect::new(
            rect.origin.x + half_dx + a.x * half_dx,
            rect.origin.y + half_dy + a.y * half_dy,
            size.x,
            size.y,
        )
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

impl Lerp for Alignment {
    /// Components lerp; directionality switches at the midpoint.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(from.x, to.x, t),
            y: lerp_f32(from.y, to.y, t),
            directional: if t < 0.5 { from.directional } else { to.directional },
        }
    }
}

impl Scale for Alignment {
    /// Scales toward the centre.
    fn scale(&self, factor: f32) -> Self {
        Self { x: self.x * factor, y: self.y * factor, directional: self.directional }
    }
}

impl Hash for Alignment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.x, state);
        hash_f32(self.y, state);
        self.directional.hash(state);
    }
}
