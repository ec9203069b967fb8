//! Interpolation between decorations.
//!
//! Gradient layers are matched from the end of each list: the most recently
//! added layers pair off first and the oldest layers of the longer list fade.
//! Paired layers of the same kind morph into each other. Layers of different
//! kinds cross-fade, so the output may hold more layers than either input.

use lamina_engine::paint::Color;

use super::{DecorationRef, LayeredDecoration};
use crate::border::Border;
use crate::geometry::BoxShape;
use crate::gradient::Gradient;
use crate::image::DecorationImage;
use crate::lerp::{Scale, lerp_f32, lerp_opt};
use crate::radius::BorderRadius;
use crate::shadow::BoxShadow;

impl LayeredDecoration {
    /// Interpolates between two optional decorations.
    ///
    /// A missing side stands for "nothing painted": the present side is
    /// scaled by its weight (`1 - t` for `a`, `t` for `b`).
    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Option<Self> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a.scale(1.0 - t)),
            (None, Some(b)) => Some(b.scale(t)),
            (Some(a), Some(b)) => Some(lerp_both(a, b, t)),
        }
    }

    /// Like [`lerp`](Self::lerp), accepting native box decorations on either side.
    pub fn lerp_any(a: Option<DecorationRef<'_>>, b: Option<DecorationRef<'_>>, t: f32) -> Option<Self> {
        let a = a.map(DecorationRef::to_layered);
        let b = b.map(DecorationRef::to_layered);
        Self::lerp(a.as_deref(), b.as_deref(), t)
    }

    /// Interpolates from `from` (or nothing) to `self`.
    pub fn lerp_from(&self, from: Option<DecorationRef<'_>>, t: f32) -> Self {
        match from {
            Some(from) => lerp_both(&from.to_layered(), self, t),
            None => self.scale(t),
        }
    }

    /// Interpolates from `self` to `to` (or nothing).
    pub fn lerp_to(&self, to: Option<DecorationRef<'_>>, t: f32) -> Self {
        match to {
            Some(to) => lerp_both(self, &to.to_layered(), t),
            None => self.scale(1.0 - t),
        }
    }
}

fn lerp_both(a: &LayeredDecoration, b: &LayeredDecoration, t: f32) -> LayeredDecoration {
    if t == 0.0 {
        return a.clone();
    }
    if t == 1.0 {
        return b.clone();
    }

    let shape = if t < 0.5 { a.shape } else { b.shape };
    // A circle has no corners; dropping the radius keeps the result buildable.
    let border_radius = match shape {
        BoxShape::Circle => None,
        BoxShape::Rectangle => lerp_opt::<BorderRadius>(a.border_radius.as_ref(), b.border_radius.as_ref(), t),
    };
    let (gradients, gradient_blurs) = lerp_gradient_layers(a, b, t);

    LayeredDecoration {
        color: lerp_opt::<Color>(a.color.as_ref(), b.color.as_ref(), t),
        border: lerp_opt::<Border>(a.border.as_ref(), b.border.as_ref(), t),
        border_radius,
        shadows: BoxShadow::lerp_list(a.shadows(), b.shadows(), t),
        gradients,
        gradient_blurs,
        background_blend_mode: if t < 0.5 { a.background_blend_mode } else { b.background_blend_mode },
        image: lerp_opt::<DecorationImage>(a.image.as_ref(), b.image.as_ref(), t),
        shape,
    }
}

/// Interpolates the gradient stacks of `a` and `b` with their blurs.
fn lerp_gradient_layers(a: &LayeredDecoration, b: &LayeredDecoration, t: f32) -> (Option<Vec<Gradient>>, Option<Vec<f32>>) {
    if a.gradients.is_none() && b.gradients.is_none() {
        return (None, None);
    }

    let mut from = a.gradient_layers().rev();
    let mut to = b.gradient_layers().rev();
    let capacity = a.gradients().map_or(0, <[_]>::len) + b.gradients().map_or(0, <[_]>::len);
    let mut out: Vec<(Gradient, f32)> = Vec::with_capacity(capacity);

    loop {
        match (from.next(), to.next()) {
            (Some((ga, blur_a)), Some((gb, blur_b))) => match Gradient::lerp_same_kind(ga, gb, t) {
                Some(g) => out.push((g, lerp_f32(blur_a, blur_b, t).max(0.0))),
                None => {
                    out.push((ga.scale(1.0 - t), blur_a));
                    out.push((gb.scale(t), blur_b));
                }
            },
            (Some((ga, blur_a)), None) => out.push((ga.scale(1.0 - t), blur_a)),
            (None, Some((gb, blur_b))) => out.push((gb.scale(t), blur_b)),
            (None, None) => break,
        }
    }

    out.reverse();
    let (gradients, blurs): (Vec<_>, Vec<_>) = out.into_iter().unzip();
    (Some(gradients), Some(blurs))
}
