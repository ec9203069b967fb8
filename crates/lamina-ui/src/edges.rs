use lamina_engine::coords::Rect;

/// Space on each side of a box, e.g. the room taken up by a border.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self::all(0.0);

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// `rect` with these edges removed. The size never goes negative.
    pub fn deflate_rect(self, rect: Rect) -> Rect {
        let r = rect.normalized();
        Rect::new(
            r.origin.x + self.left,
            r.origin.y + self.top,
            (r.width() - self.horizontal()).max(0.0),
            (r.height() - self.vertical()).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deflate_removes_each_side() {
        let edges = Edges { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 };
        assert_eq!(edges.deflate_rect(Rect::new(10.0, 10.0, 50.0, 40.0)), Rect::new(14.0, 11.0, 44.0, 36.0));
        assert_eq!((edges.horizontal(), edges.vertical()), (6.0, 4.0));
    }

    #[test]
    fn deflate_never_inverts() {
        let inner = Edges::all(20.0).deflate_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!((inner.width(), inner.height()), (0.0, 0.0));
    }
}
