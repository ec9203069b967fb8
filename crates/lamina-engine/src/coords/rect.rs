use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `width` × `height` centred on `center`.
    #[inline]
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Rect::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    /// The lesser of width and height (by magnitude).
    #[inline]
    pub fn shortest_side(self) -> f32 {
        self.size.x.abs().min(self.size.y.abs())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Returns the rectangle moved by `offset`.
    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, size: self.size }
    }

    /// Grows every edge outward by `delta` (negative shrinks).
    #[inline]
    #[must_use]
    pub fn inflate(self, delta: f32) -> Self {
        Rect::new(
            self.origin.x - delta,
            self.origin.y - delta,
            self.size.x + delta * 2.0,
            self.size.y + delta * 2.0,
        )
    }

    /// Shrinks every edge inward by `delta`, never below zero size.
    #[inline]
    #[must_use]
    pub fn deflate(self, delta: f32) -> Self {
        let w = (self.size.x - delta * 2.0).max(0.0);
        let h = (self.size.y - delta * 2.0).max(0.0);
        Rect::from_center(self.center(), w, h)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Closed containment: [min, max]. Points on any edge are inside.
    #[inline]
    pub fn contains_inclusive(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x <= (r.origin.x + r.size.x)
            && p.y <= (r.origin.y + r.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_inclusive_accepts_max_edge() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains_inclusive(Vec2::new(10.0, 10.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains_inclusive(Vec2::new(10.1, 10.0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b).unwrap(), r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    // ── derived geometry ──────────────────────────────────────────────────

    #[test]
    fn center_and_shortest_side() {
        let rect = r(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 40.0));
        assert_eq!(rect.shortest_side(), 40.0);
    }

    #[test]
    fn inflate_grows_every_edge() {
        let rect = r(10.0, 10.0, 20.0, 20.0).inflate(5.0);
        assert_eq!(rect, r(5.0, 5.0, 30.0, 30.0));
    }

    #[test]
    fn deflate_clamps_to_zero() {
        let rect = r(0.0, 0.0, 10.0, 10.0).deflate(8.0);
        assert_eq!(rect.size, Vec2::zero());
        assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn translate_moves_origin_only() {
        let rect = r(1.0, 2.0, 3.0, 4.0).translate(Vec2::new(10.0, 20.0));
        assert_eq!(rect, r(11.0, 22.0, 3.0, 4.0));
    }
}
