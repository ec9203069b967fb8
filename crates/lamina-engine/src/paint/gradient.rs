use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

fn stops_valid(stops: &[ColorStop]) -> bool {
    stops.len() >= 2 && stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Renderers may still impose additional constraints (sorting, stop count limits).
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && stops_valid(&self.stops)
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Radial gradient in logical pixel space.
///
/// `t = 0` sits on the focal circle (`focal`, `focal_radius`) and `t = 1` on the
/// outer circle (`center`, `radius`). Without a focal point the gradient is a
/// plain concentric ramp from `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub focal: Option<Vec2>,
    pub focal_radius: f32,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.focal.is_none_or(|f| f.is_finite())
            && stops_valid(&self.stops)
    }
}

/// Angular (conic) gradient around `center`.
///
/// Angles are radians, measured clockwise from the +X axis (screen space).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Vec2,
    pub start_angle: f32,
    pub end_angle: f32,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl SweepGradient {
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
            && self.start_angle < self.end_angle
            && stops_valid(&self.stops)
    }
}
