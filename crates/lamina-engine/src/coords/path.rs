use super::{CornerRadii, Rect, Vec2};

/// Closed outline understood by every renderer.
///
/// Outlines are kept analytic rather than flattened so renderers can pick
/// their own tessellation or SDF strategy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Path {
    Rect(Rect),
    RoundedRect { rect: Rect, radii: CornerRadii },
    /// Ellipse inscribed in the rectangle.
    Oval(Rect),
}

impl Path {
    /// Circle of `radius` around `center`.
    #[inline]
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Path::Oval(Rect::from_center(center, radius * 2.0, radius * 2.0))
    }

    /// Rounded rectangle; collapses to a plain rectangle when every radius is zero.
    #[inline]
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        if radii.is_zero() {
            Path::Rect(rect)
        } else {
            Path::RoundedRect { rect, radii }
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        match *self {
            Path::Rect(rect) | Path::Oval(rect) => rect,
            Path::RoundedRect { rect, .. } => rect,
        }
    }

    /// Closed containment test: points on the outline count as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        match *self {
            Path::Rect(rect) => rect.contains_inclusive(p),
            Path::RoundedRect { rect, radii } => rounded_rect_contains(rect, radii, p),
            Path::Oval(rect) => {
                let r = rect.normalized();
                let rx = r.size.x * 0.5;
                let ry = r.size.y * 0.5;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let c = r.center();
                let dx = (p.x - c.x) / rx;
                let dy = (p.y - c.y) / ry;
                dx * dx + dy * dy <= 1.0
            }
        }
    }
}

fn rounded_rect_contains(rect: Rect, radii: CornerRadii, p: Vec2) -> bool {
    let r = rect.normalized();
    if !r.contains_inclusive(p) {
        return false;
    }
    let radii = radii.fitted(r.size);
    let min = r.min();
    let max = r.max();

    // (corner centre, radius, is the point inside that corner's square)
    let corners = [
        (Vec2::new(min.x + radii.top_left, min.y + radii.top_left), radii.top_left,
            p.x < min.x + radii.top_left && p.y < min.y + radii.top_left),
        (Vec2::new(max.x - radii.top_right, min.y + radii.top_right), radii.top_right,
            p.x > max.x - radii.top_right && p.y < min.y + radii.top_right),
        (Vec2::new(max.x - radii.bottom_right, max.y - radii.bottom_right), radii.bottom_right,
            p.x > max.x - radii.bottom_right && p.y > max.y - radii.bottom_right),
        (Vec2::new(min.x + radii.bottom_left, max.y - radii.bottom_left), radii.bottom_left,
            p.x < min.x + radii.bottom_left && p.y > max.y - radii.bottom_left),
    ];

    corners
        .iter()
        .filter(|(_, radius, in_corner)| *radius > 0.0 && *in_corner)
        .all(|(center, radius, _)| (p - *center).length() <= *radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }

    #[test]
    fn rect_contains_edges() {
        let path = Path::Rect(square());
        assert!(path.contains(Vec2::new(0.0, 0.0)));
        assert!(path.contains(Vec2::new(100.0, 100.0)));
        assert!(!path.contains(Vec2::new(100.5, 50.0)));
    }

    #[test]
    fn rounded_rect_excludes_cut_corner() {
        let path = Path::rounded_rect(square(), CornerRadii::all(20.0));
        assert!(!path.contains(Vec2::new(1.0, 1.0)));
        assert!(path.contains(Vec2::new(20.0, 1.0)));
        assert!(path.contains(Vec2::new(50.0, 50.0)));
        assert!(!path.contains(Vec2::new(99.0, 99.0)));
    }

    #[test]
    fn zero_radii_collapse_to_rect() {
        assert_eq!(Path::rounded_rect(square(), CornerRadii::zero()), Path::Rect(square()));
    }

    #[test]
    fn oval_contains_center_not_corner() {
        let path = Path::circle(Vec2::new(50.0, 50.0), 50.0);
        assert!(path.contains(Vec2::new(50.0, 50.0)));
        assert!(path.contains(Vec2::new(100.0, 50.0)));
        assert!(!path.contains(Vec2::new(100.0, 100.0)));
        assert_eq!(path.bounds(), square());
    }
}
