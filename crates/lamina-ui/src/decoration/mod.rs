//! Layered box decoration: fill colour, any number of blended gradients with
//! per-gradient blur, shadows, an optional image, border and shape.

mod builder;
mod lerp;

use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use lamina_engine::coords::{Path, Rect, TextDirection, Vec2, hash_f32};
use lamina_engine::paint::{BlendMode, Color};

use crate::border::Border;
use crate::edges::Edges;
use crate::geometry::{self, BoxShape};
use crate::gradient::Gradient;
use crate::image::{ChangeCallback, DecorationImage};
use crate::lerp::Scale;
use crate::native::BoxDecoration;
use crate::painter::DecorationPainter;
use crate::radius::BorderRadius;
use crate::shadow::BoxShadow;

pub use builder::LayeredDecorationBuilder;
pub(crate) use builder::validate_fields;

/// Immutable description of how to paint a box.
///
/// Built through [`LayeredDecoration::builder`], which enforces:
/// - `gradients` and `gradient_blurs` are both present with equal lengths,
///   or both absent;
/// - a background blend mode only appears alongside a colour or gradients;
/// - circles carry no border radius.
///
/// Gradients paint in list order, the first one bottom-most.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayeredDecoration {
    color: Option<Color>,
    border: Option<Border>,
    border_radius: Option<BorderRadius>,
    shadows: Option<Vec<BoxShadow>>,
    gradients: Option<Vec<Gradient>>,
    gradient_blurs: Option<Vec<f32>>,
    background_blend_mode: Option<BlendMode>,
    image: Option<DecorationImage>,
    shape: BoxShape,
}

impl LayeredDecoration {
    pub fn builder() -> LayeredDecorationBuilder {
        LayeredDecorationBuilder::default()
    }

    /// Builder pre-filled with this decoration's fields, for deriving variants.
    pub fn to_builder(&self) -> LayeredDecorationBuilder {
        LayeredDecorationBuilder::from(self.clone())
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn border(&self) -> Option<&Border> {
        self.border.as_ref()
    }

    #[inline]
    pub fn border_radius(&self) -> Option<&BorderRadius> {
        self.border_radius.as_ref()
    }

    #[inline]
    pub fn shadows(&self) -> Option<&[BoxShadow]> {
        self.shadows.as_deref()
    }

    #[inline]
    pub fn gradients(&self) -> Option<&[Gradient]> {
        self.gradients.as_deref()
    }

    /// Blur radius per gradient, parallel to [`gradients`](Self::gradients).
    #[inline]
    pub fn gradient_blurs(&self) -> Option<&[f32]> {
        self.gradient_blurs.as_deref()
    }

    #[inline]
    pub fn background_blend_mode(&self) -> Option<BlendMode> {
        self.background_blend_mode
    }

    #[inline]
    pub fn image(&self) -> Option<&DecorationImage> {
        self.image.as_ref()
    }

    #[inline]
    pub fn shape(&self) -> BoxShape {
        self.shape
    }

    /// Gradient layers paired with their blur radius, bottom-most first.
    pub fn gradient_layers(&self) -> impl DoubleEndedIterator<Item = (&Gradient, f32)> + ExactSizeIterator {
        let gradients = self.gradients.as_deref().unwrap_or_default();
        let blurs = self.gradient_blurs.as_deref().unwrap_or_default();
        gradients.iter().zip(blurs.iter().copied())
    }

    // ── geometry ──────────────────────────────────────────────────────────

    pub fn clip_path(&self, rect: Rect, text_direction: TextDirection) -> Path {
        geometry::clip_path(rect, text_direction, self.shape, self.border_radius.as_ref())
    }

    pub fn hit_test(&self, size: Vec2, position: Vec2, text_direction: TextDirection) -> bool {
        geometry::hit_test(size, position, text_direction, self.shape, self.border_radius.as_ref())
    }

    pub fn padding(&self) -> Option<Edges> {
        geometry::padding(self.border.as_ref())
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Creates a painter bound to a copy of this decoration.
    ///
    /// `on_changed` fires when asynchronously loaded content (the image)
    /// becomes ready and the box should be painted again.
    pub fn create_painter(&self, on_changed: ChangeCallback) -> DecorationPainter {
        DecorationPainter::new(self.clone(), on_changed)
    }
}

impl Scale for LayeredDecoration {
    /// Fades every contribution toward zero. Shape, blend mode, blur radii
    /// and the set of border sides are kept.
    fn scale(&self, factor: f32) -> Self {
        Self {
            color: self.color.map(|c| c.scale(factor)),
            border: self.border.map(|b| b.scale(factor)),
            border_radius: self.border_radius.map(|r| r.scale(factor)),
            shadows: self.shadows.as_ref().map(|s| s.iter().map(|s| s.scale(factor)).collect()),
            gradients: self.gradients.as_ref().map(|g| g.iter().map(|g| g.scale(factor)).collect()),
            gradient_blurs: self.gradient_blurs.clone(),
            background_blend_mode: self.background_blend_mode,
            image: self.image.as_ref().map(|i| i.scale(factor)),
            shape: self.shape,
        }
    }
}

impl Hash for LayeredDecoration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.border.hash(state);
        self.border_radius.hash(state);
        self.shadows.hash(state);
        self.gradients.hash(state);
        match &self.gradient_blurs {
            Some(blurs) => {
                blurs.len().hash(state);
                for &b in blurs {
                    hash_f32(b, state);
                }
            }
            None => usize::MAX.hash(state),
        }
        self.background_blend_mode.hash(state);
        self.image.hash(state);
        self.shape.hash(state);
    }
}

impl From<&BoxDecoration> for LayeredDecoration {
    /// The single gradient becomes a one-layer list without blur.
    fn from(d: &BoxDecoration) -> Self {
        Self {
            color: d.color,
            border: d.border,
            border_radius: d.border_radius,
            shadows: d.box_shadow.clone(),
            gradients: d.gradient.clone().map(|g| vec![g]),
            gradient_blurs: d.gradient.as_ref().map(|_| vec![0.0]),
            background_blend_mode: d.background_blend_mode,
            image: d.image.clone(),
            shape: d.shape,
        }
    }
}

/// Either side of a decoration interpolation.
#[derive(Debug, Copy, Clone)]
pub enum DecorationRef<'a> {
    Layered(&'a LayeredDecoration),
    Box(&'a BoxDecoration),
}

impl<'a> DecorationRef<'a> {
    pub fn to_layered(self) -> Cow<'a, LayeredDecoration> {
        match self {
            DecorationRef::Layered(d) => Cow::Borrowed(d),
            DecorationRef::Box(d) => Cow::Owned(LayeredDecoration::from(d)),
        }
    }
}

impl<'a> From<&'a LayeredDecoration> for DecorationRef<'a> {
    fn from(d: &'a LayeredDecoration) -> Self {
        DecorationRef::Layered(d)
    }
}

impl<'a> From<&'a BoxDecoration> for DecorationRef<'a> {
    fn from(d: &'a BoxDecoration) -> Self {
        DecorationRef::Box(d)
    }
}
