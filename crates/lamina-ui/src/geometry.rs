//! Shape geometry shared by decoration painting and hit testing.

use lamina_engine::coords::{Path, Rect, TextDirection, Vec2};

use crate::border::Border;
use crate::edges::Edges;
use crate::radius::BorderRadius;

/// Outline family of a decorated box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BoxShape {
    #[default]
    Rectangle,
    /// Circle inscribed in the box, centred, with diameter equal to the
    /// shortest side.
    Circle,
}

/// Outline of a box occupying `rect`.
pub fn clip_path(rect: Rect, text_direction: TextDirection, shape: BoxShape, radius: Option<&BorderRadius>) -> Path {
    match shape {
        BoxShape::Circle => Path::circle(rect.center(), rect.shortest_side() * 0.5),
        BoxShape::Rectangle => match radius {
            Some(radius) => Path::rounded_rect(rect, radius.resolve(text_direction)),
            None => Path::Rect(rect),
        },
    }
}

/// Whether `position` (relative to the box origin) lies on the decoration.
///
/// Callers only ask about positions inside `size`.
pub fn hit_test(
    size: Vec2,
    position: Vec2,
    text_direction: TextDirection,
    shape: BoxShape,
    radius: Option<&BorderRadius>,
) -> bool {
    match shape {
        BoxShape::Rectangle => match radius {
            Some(_) => clip_path(Rect::from_origin_size(Vec2::zero(), size), text_direction, shape, radius)
                .contains(position),
            None => true,
        },
        BoxShape::Circle => {
            let center = size * 0.5;
            (position - center).length() <= size.min_component() * 0.5
        }
    }
}

/// Space reserved by `border` on each edge.
pub fn padding(border: Option<&Border>) -> Option<Edges> {
    border.map(Border::dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::BorderSide;
    use lamina_engine::coords::CornerRadii;
    use lamina_engine::paint::Color;

    const LTR: TextDirection = TextDirection::Ltr;

    fn square() -> Vec2 { Vec2::new(100.0, 100.0) }

    // ── clip path ─────────────────────────────────────────────────────────

    #[test]
    fn circle_clip_is_inscribed_in_shortest_side() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let path = clip_path(rect, LTR, BoxShape::Circle, None);
        assert_eq!(path.bounds(), Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn rounded_clip_resolves_direction() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let radius = BorderRadius::directional(10.0, 0.0, 0.0, 0.0);
        let path = clip_path(rect, TextDirection::Rtl, BoxShape::Rectangle, Some(&radius));
        assert_eq!(path, Path::RoundedRect { rect, radii: CornerRadii::new(0.0, 10.0, 0.0, 0.0) });
        assert_eq!(clip_path(rect, LTR, BoxShape::Rectangle, None), Path::Rect(rect));
    }

    // ── hit test ──────────────────────────────────────────────────────────

    #[test]
    fn circle_hit_test_center_and_corner() {
        assert!(hit_test(square(), Vec2::new(50.0, 50.0), LTR, BoxShape::Circle, None));
        assert!(!hit_test(square(), Vec2::new(100.0, 100.0), LTR, BoxShape::Circle, None));
        assert!(hit_test(square(), Vec2::new(50.0, 0.0), LTR, BoxShape::Circle, None));
    }

    #[test]
    fn zero_radius_rectangle_hits_everywhere_inside() {
        let radius = BorderRadius::circular(0.0);
        for p in [(0.0, 0.0), (100.0, 100.0), (0.0, 100.0), (37.5, 80.0)] {
            let pos = Vec2::new(p.0, p.1);
            assert!(hit_test(square(), pos, LTR, BoxShape::Rectangle, Some(&radius)), "{pos:?}");
            assert!(hit_test(square(), pos, LTR, BoxShape::Rectangle, None), "{pos:?}");
        }
    }

    #[test]
    fn rounded_corner_excludes_outside_of_arc() {
        let radius = BorderRadius::circular(20.0);
        assert!(!hit_test(square(), Vec2::new(1.0, 1.0), LTR, BoxShape::Rectangle, Some(&radius)));
        assert!(hit_test(square(), Vec2::new(10.0, 10.0), LTR, BoxShape::Rectangle, Some(&radius)));
    }

    // ── padding ───────────────────────────────────────────────────────────

    #[test]
    fn padding_comes_from_border() {
        let border = Border::all(BorderSide::new(3.0, Color::black()));
        assert_eq!(padding(Some(&border)), Some(Edges::all(3.0)));
        assert_eq!(padding(None), None);
    }
}
