//! Rectangle-relative gradient descriptions.
//!
//! These are resolved into the engine's pixel-space gradient paints by
//! [`Gradient::create_shader`] once the target rectangle is known.

use core::f32::consts::TAU;
use core::hash::{Hash, Hasher};

use lamina_engine::coords::{Rect, TextDirection, hash_f32};
use lamina_engine::paint::gradient::{self as paint, ColorStop, SpreadMode};
use lamina_engine::paint::{Color, Paint};

use crate::alignment::Alignment;
use crate::lerp::{Lerp, Scale, lerp_f32, lerp_opt};

/// Gradient along the line from `begin` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub begin: Alignment,
    pub end: Alignment,
    pub colors: Vec<Color>,
    /// Positions in `[0, 1]`, one per colour. `None` spaces colours evenly.
    pub stops: Option<Vec<f32>>,
    pub tile_mode: SpreadMode,
}

impl LinearGradient {
    /// Left-to-right gradient across the vertical centre line.
    pub fn new(colors: Vec<Color>) -> Self {
        Self::between(Alignment::CENTER_LEFT, Alignment::CENTER_RIGHT, colors)
    }

    pub fn between(begin: Alignment, end: Alignment, colors: Vec<Color>) -> Self {
        Self { begin, end, colors, stops: None, tile_mode: SpreadMode::Pad }
    }
}

/// Gradient radiating from `center`.
///
/// `radius` and `focal_radius` are fractions of the shortest side of the
/// painted rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Alignment,
    pub radius: f32,
    pub focal: Option<Alignment>,
    pub focal_radius: f32,
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub tile_mode: SpreadMode,
}

impl RadialGradient {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            center: Alignment::CENTER,
            radius: 0.5,
            focal: None,
            focal_radius: 0.0,
            colors,
            stops: None,
            tile_mode: SpreadMode::Pad,
        }
    }
}

/// Gradient sweeping clockwise around `center` between two angles (radians).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Alignment,
    pub start_angle: f32,
    pub end_angle: f32,
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub tile_mode: SpreadMode,
}

impl SweepGradient {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            center: Alignment::CENTER,
            start_angle: 0.0,
            end_angle: TAU,
            colors,
            stops: None,
            tile_mode: SpreadMode::Pad,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
    Sweep,
}

/// Any of the supported gradient kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
    Sweep(SweepGradient),
}

impl From<LinearGradient> for Gradient {
    fn from(g: LinearGradient) -> Self {
        Gradient::Linear(g)
    }
}

impl From<RadialGradient> for Gradient {
    fn from(g: RadialGradient) -> Self {
        Gradient::Radial(g)
    }
}

impl From<SweepGradient> for Gradient {
    fn from(g: SweepGradient) -> Self {
        Gradient::Sweep(g)
    }
}

impl Gradient {
    pub fn kind(&self) -> GradientKind {
        match self {
            Gradient::Linear(_) => GradientKind::Linear,
            Gradient::Radial(_) => GradientKind::Radial,
            Gradient::Sweep(_) => GradientKind::Sweep,
        }
    }

    pub fn colors(&self) -> &[Color] {
        match self {
            Gradient::Linear(g) => &g.colors,
            Gradient::Radial(g) => &g.colors,
            Gradient::Sweep(g) => &g.colors,
        }
    }

    pub fn stops(&self) -> Option<&[f32]> {
        match self {
            Gradient::Linear(g) => g.stops.as_deref(),
            Gradient::Radial(g) => g.stops.as_deref(),
            Gradient::Sweep(g) => g.stops.as_deref(),
        }
    }

    pub fn tile_mode(&self) -> SpreadMode {
        match self {
            Gradient::Linear(g) => g.tile_mode,
            Gradient::Radial(g) => g.tile_mode,
            Gradient::Sweep(g) => g.tile_mode,
        }
    }

    #[must_use]
    pub fn with_stops(mut self, stops: Vec<f32>) -> Self {
        let (_, slot, _) = self.parts_mut();
        *slot = Some(stops);
        self
    }

    #[must_use]
    pub fn with_tile_mode(mut self, tile_mode: SpreadMode) -> Self {
        let (_, _, slot) = self.parts_mut();
        *slot = tile_mode;
        self
    }

    fn parts_mut(&mut self) -> (&mut Vec<Color>, &mut Option<Vec<f32>>, &mut SpreadMode) {
        match self {
            Gradient::Linear(g) => (&mut g.colors, &mut g.stops, &mut g.tile_mode),
            Gradient::Radial(g) => (&mut g.colors, &mut g.stops, &mut g.tile_mode),
            Gradient::Sweep(g) => (&mut g.colors, &mut g.stops, &mut g.tile_mode),
        }
    }

    /// Explicit stops, or evenly spaced ones when none were given.
    pub fn resolved_stops(&self) -> Vec<f32> {
        resolve_stops(self.colors().len(), self.stops())
    }

    /// Checks the structural rules every gradient must satisfy.
    pub fn validate(&self) -> Result<(), &'static str> {
        let colors = self.colors();
        if colors.len() < 2 {
            return Err("needs at least two colors");
        }
        if let Some(stops) = self.stops() {
            if stops.len() != colors.len() {
                return Err("stop count differs from color count");
            }
            if stops.iter().any(|s| !s.is_finite()) {
                return Err("stops must be finite");
            }
            if stops.windows(2).any(|w| w[1] < w[0]) {
                return Err("stops must be non-decreasing");
            }
        }
        if let Gradient::Radial(g) = self {
            if !(g.radius.is_finite() && g.radius > 0.0) {
                return Err("radius must be positive");
            }
            if !(g.focal_radius.is_finite() && g.focal_radius >= 0.0) {
                return Err("focal radius must be non-negative");
            }
        }
        Ok(())
    }

    /// Resolves the gradient into a pixel-space paint covering `rect`.
    pub fn create_shader(&self, rect: Rect, text_direction: TextDirection) -> Paint {
        let stops: Vec<ColorStop> = self
            .resolved_stops()
            .into_iter()
            .zip(self.colors())
            .map(|(t, &color)| ColorStop::new(t, color))
            .collect();
        let spread = self.tile_mode();

        match self {
            Gradient::Linear(g) => Paint::LinearGradient(paint::LinearGradient::new(
                g.begin.within_rect(rect, text_direction),
                g.end.within_rect(rect, text_direction),
                stops,
                spread,
            )),
            Gradient::Radial(g) => {
                let side = rect.shortest_side();
                Paint::RadialGradient(paint::RadialGradient {
                    center: g.center.within_rect(rect, text_direction),
                    radius: g.radius * side,
                    focal: g.focal.map(|f| f.within_rect(rect, text_direction)),
                    focal_radius: g.focal_radius * side,
                    stops,
                    spread,
                })
            }
            Gradient::Sweep(g) => Paint::SweepGradient(paint::SweepGradient {
                center: g.center.within_rect(rect, text_direction),
                start_angle: g.start_angle,
                end_angle: g.end_angle,
                stops,
                spread,
            }),
        }
    }

    /// Interpolates two gradients of the same kind; `None` when the kinds differ.
    pub fn lerp_same_kind(a: &Gradient, b: &Gradient, t: f32) -> Option<Gradient> {
        let (colors, stops) = lerp_color_ramps(a, b, t);
        let tile_mode = if t < 0.5 { a.tile_mode() } else { b.tile_mode() };

        let out = match (a, b) {
            (Gradient::Linear(a), Gradient::Linear(b)) => Gradient::Linear(LinearGradient {
                begin: Alignment::lerp(&a.begin, &b.begin, t),
                end: Alignment::lerp(&a.end, &b.end, t),
                colors,
                stops,
                tile_mode,
            }),
            (Gradient::Radial(a), Gradient::Radial(b)) => Gradient::Radial(RadialGradient {
                center: Alignment::lerp(&a.center, &b.center, t),
                radius: lerp_f32(a.radius, b.radius, t).max(0.0),
                focal: lerp_opt(a.focal.as_ref(), b.focal.as_ref(), t),
                focal_radius: lerp_f32(a.focal_radius, b.focal_radius, t).max(0.0),
                colors,
                stops,
                tile_mode,
            }),
            (Gradient::Sweep(a), Gradient::Sweep(b)) => Gradient::Sweep(SweepGradient {
                center: Alignment::lerp(&a.center, &b.center, t),
                start_angle: lerp_f32(a.start_angle, b.start_angle, t),
                end_angle: lerp_f32(a.end_angle, b.end_angle, t),
                colors,
                stops,
                tile_mode,
            }),
            _ => return None,
        };
        Some(out)
    }
}

impl Scale for Gradient {
    /// Fades every colour toward transparent; geometry is untouched.
    fn scale(&self, factor: f32) -> Self {
        let mut out = self.clone();
        let (colors, _, _) = out.parts_mut();
        for c in colors.iter_mut() {
            *c = c.scaled(factor);
        }
        out
    }
}

impl Hash for Gradient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.colors().hash(state);
        match self.stops() {
            Some(stops) => {
                stops.len().hash(state);
                for &s in stops {
                    hash_f32(s, state);
                }
            }
            None => usize::MAX.hash(state),
        }
        self.tile_mode().hash(state);
        match self {
            Gradient::Linear(g) => {
                g.begin.hash(state);
                g.end.hash(state);
            }
            Gradient::Radial(g) => {
                g.center.hash(state);
                hash_f32(g.radius, state);
                g.focal.hash(state);
                hash_f32(g.focal_radius, state);
            }
            Gradient::Sweep(g) => {
                g.center.hash(state);
                hash_f32(g.start_angle, state);
                hash_f32(g.end_angle, state);
            }
        }
    }
}

fn resolve_stops(count: usize, stops: Option<&[f32]>) -> Vec<f32> {
    match stops {
        Some(stops) => stops.to_vec(),
        None if count < 2 => vec![0.0; count],
        None => {
            let last = (count - 1) as f32;
            (0..count).map(|i| i as f32 / last).collect()
        }
    }
}

/// Blends the colour ramps of two gradients.
///
/// Identical stop layouts lerp colour by colour. Otherwise both ramps are
/// sampled at the union of their stops.
fn lerp_color_ramps(a: &Gradient, b: &Gradient, t: f32) -> (Vec<Color>, Option<Vec<f32>>) {
    let (ca, cb) = (a.colors(), b.colors());
    let (sa, sb) = (a.resolved_stops(), b.resolved_stops());

    if ca.len() == cb.len() && sa == sb {
        let colors = ca.iter().zip(cb).map(|(x, y)| Color::lerp(x, y, t)).collect();
        let stops = (a.stops().is_some() || b.stops().is_some()).then_some(sa);
        return (colors, stops);
    }

    let mut union: Vec<f32> = sa.iter().chain(&sb).copied().collect();
    union.sort_by(f32::total_cmp);
    union.dedup();

    let colors = union
        .iter()
        .map(|&s| Color::lerp(&sample_ramp(ca, &sa, s), &sample_ramp(cb, &sb, s), t))
        .collect();
    (colors, Some(union))
}

/// Colour of a ramp at position `s`, clamping outside the first and last stop.
fn sample_ramp(colors: &[Color], stops: &[f32], s: f32) -> Color {
    let (Some(&first), Some(&last)) = (colors.first(), colors.last()) else {
        return Color::transparent();
    };
    if stops.is_empty() || s <= stops[0] {
        return first;
    }
    for i in 1..stops.len().min(colors.len()) {
        if s <= stops[i] {
            let span = stops[i] - stops[i - 1];
            if span <= 0.0 {
                return colors[i];
            }
            return Color::lerp(&colors[i - 1], &colors[i], (s - stops[i - 1]) / span);
        }
    }
    last
}
