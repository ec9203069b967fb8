use core::hash::{Hash, Hasher};
use std::sync::Arc;

use lamina_engine::coords::{CornerRadii, Path, Rect, hash_f32};
use lamina_engine::paint::{Color, FillPaint};

use crate::canvas::Canvas;
use crate::edges::Edges;
use crate::geometry::BoxShape;
use crate::lerp::{Lerp, Scale, lerp_f32};

/// One edge of a border. A zero width draws nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderSide {
    pub color: Color,
    pub width: f32,
}

impl BorderSide {
    pub const NONE: Self = Self { color: Color::transparent(), width: 0.0 };

    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { color, width }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::NONE
    }
}

impl Lerp for BorderSide {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            color: Color::lerp(&from.color, &to.color, t),
            width: lerp_f32(from.width, to.width, t).max(0.0),
        }
    }
}

impl Scale for BorderSide {
    /// Scales the width; the colour is kept so the side fades by thinning.
    fn scale(&self, factor: f32) -> Self {
        Self { color: self.color, width: (self.width * factor).max(0.0) }
    }
}

impl Hash for BorderSide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        hash_f32(self.width, state);
    }
}

/// Four-sided box border drawn on the inside of the decorated shape.
#[derive(Debug, Copy, Clone, Default, PartialEq, Hash)]
pub struct Border {
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
}

impl Border {
    /// Same side on all four edges.
    #[inline]
    pub const fn all(side: BorderSide) -> Self {
        Self { top: side, right: side, bottom: side, left: side }
    }

    /// True when every side has the same colour and width.
    pub fn is_uniform(&self) -> bool {
        self.right == self.top && self.bottom == self.top && self.left == self.top
    }

    /// Space the border occupies on each edge.
    pub fn dimensions(&self) -> Edges {
        Edges {
            top: self.top.width,
            right: self.right.width,
            bottom: self.bottom.width,
            left: self.left.width,
        }
    }

    fn sides(&self) -> [BorderSide; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Draws the border for a box occupying `rect`.
    ///
    /// `radii` are the already resolved corner radii of a rectangular shape.
    /// Non-uniform borders are only exact on plain rectangles; on rounded or
    /// circular shapes they are approximated by a uniform stroke of the widest side.
    pub fn paint(&self, canvas: &mut Canvas<'_>, rect: Rect, shape: BoxShape, radii: Option<CornerRadii>) {
        let rounded = radii.filter(|r| !r.is_zero());

        if self.is_uniform() {
            if self.top.is_visible() {
                stroke_inside(canvas, rect, shape, rounded, self.top);
            }
            return;
        }

        if shape == BoxShape::Rectangle && rounded.is_none() {
            self.paint_sides(canvas, rect);
            return;
        }

        let widest = self
            .sides()
            .into_iter()
            .fold(BorderSide::NONE, |acc, side| if side.width > acc.width { side } else { acc });
        log::warn!(
            "non-uniform border on a {shape:?} with rounded outline; drawing a uniform {}px stroke",
            widest.width
        );
        if widest.is_visible() {
            stroke_inside(canvas, rect, shape, rounded, widest);
        }
    }

    fn paint_sides(&self, canvas: &mut Canvas<'_>, rect: Rect) {
        let r = rect.normalized();
        // Top and bottom span the full width; left and right fill the gap between them.
        let middle = Edges { top: self.top.width, bottom: self.bottom.width, ..Edges::ZERO }.deflate_rect(r);
        let strips = [
            (self.top, Rect::new(r.origin.x, r.origin.y, r.width(), self.top.width)),
            (
                self.bottom,
                Rect::new(r.origin.x, r.max().y - self.bottom.width, r.width(), self.bottom.width),
            ),
            (self.left, Rect::new(middle.origin.x, middle.origin.y, self.left.width, middle.height())),
            (
                self.right,
                Rect::new(middle.max().x - self.right.width, middle.origin.y, self.right.width, middle.height()),
            ),
        ];
        for (side, strip) in strips {
            if side.is_visible() && !strip.is_empty() {
                canvas.fill_path(Path::Rect(strip), Arc::new(FillPaint::new(side.color)));
            }
        }
    }
}

/// Strokes `side` so that its outer edge sits on the shape outline.
fn stroke_inside(canvas: &mut Canvas<'_>, rect: Rect, shape: BoxShape, radii: Option<CornerRadii>, side: BorderSide) {
    let half = side.width * 0.5;
    let path = match shape {
        BoxShape::Circle => Path::circle(rect.center(), (rect.shortest_side() * 0.5 - half).max(0.0)),
        BoxShape::Rectangle => match radii {
            Some(radii) => {
                let fitted = radii.fitted(rect.normalized().size);
                Path::rounded_rect(rect.deflate(half), fitted.deflate(half))
            }
            None => Path::Rect(rect.deflate(half)),
        },
    };
    canvas.stroke_path(path, side.width, side.color);
}

impl Lerp for Border {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            top: BorderSide::lerp(&from.top, &to.top, t),
            right: BorderSide::lerp(&from.right, &to.right, t),
            bottom: BorderSide::lerp(&from.bottom, &to.bottom, t),
            left: BorderSide::lerp(&from.left, &to.left, t),
        }
    }
}

impl Scale for Border {
    fn scale(&self, factor: f32) -> Self {
        Self {
            top: self.top.scale(factor),
            right: self.right.scale(factor),
            bottom: self.bottom.scale(factor),
            left: self.left.scale(factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_engine::scene::{DrawCmd, DrawList};

    fn red() -> Color { Color::from_straight(1.0, 0.0, 0.0, 1.0) }

    fn paint(border: &Border, shape: BoxShape, radii: Option<CornerRadii>) -> DrawList {
        let mut list = DrawList::new();
        let mut canvas = Canvas::new(&mut list);
        border.paint(&mut canvas, Rect::new(0.0, 0.0, 100.0, 50.0), shape, radii);
        list
    }

    #[test]
    fn dimensions_report_side_widths() {
        let border = Border {
            top: BorderSide::new(1.0, red()),
            right: BorderSide::new(2.0, red()),
            bottom: BorderSide::new(3.0, red()),
            left: BorderSide::new(4.0, red()),
        };
        assert_eq!(border.dimensions(), Edges { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 });
    }

    #[test]
    fn uniform_border_strokes_inset_outline() {
        let list = paint(&Border::all(BorderSide::new(4.0, red())), BoxShape::Rectangle, None);
        assert_eq!(list.len(), 1);
        let DrawCmd::Stroke(stroke) = &list.items()[0].cmd else { panic!("expected stroke") };
        assert_eq!(stroke.path, Path::Rect(Rect::new(2.0, 2.0, 96.0, 46.0)));
        assert_eq!(stroke.width, 4.0);
    }

    #[test]
    fn uniform_border_on_circle_follows_inscribed_circle() {
        let list = paint(&Border::all(BorderSide::new(2.0, red())), BoxShape::Circle, None);
        let DrawCmd::Stroke(stroke) = &list.items()[0].cmd else { panic!("expected stroke") };
        assert_eq!(stroke.path, Path::circle(lamina_engine::coords::Vec2::new(50.0, 25.0), 24.0));
    }

    #[test]
    fn non_uniform_rect_border_fills_strips() {
        let border = Border { top: BorderSide::new(2.0, red()), ..Border::default() };
        let list = paint(&border, BoxShape::Rectangle, None);
        assert_eq!(list.len(), 1);
        let DrawCmd::Fill(fill) = &list.items()[0].cmd else { panic!("expected fill") };
        assert_eq!(fill.path, Path::Rect(Rect::new(0.0, 0.0, 100.0, 2.0)));
    }

    #[test]
    fn invisible_border_draws_nothing() {
        assert!(paint(&Border::default(), BoxShape::Rectangle, None).is_empty());
    }

    #[test]
    fn scale_zero_keeps_sides_with_zero_width() {
        let border = Border::all(BorderSide::new(3.0, red())).scale(0.0);
        assert_eq!(border, Border::all(BorderSide::new(0.0, red())));
    }
}
