use lamina_engine::paint::{BlendMode, Color};

use super::LayeredDecoration;
use crate::border::Border;
use crate::error::DecorationError;
use crate::geometry::BoxShape;
use crate::gradient::Gradient;
use crate::image::DecorationImage;
use crate::radius::BorderRadius;
use crate::shadow::BoxShadow;

/// Validating builder for [`LayeredDecoration`].
///
/// Every setter accepts either a value or `None`, so a builder obtained from
/// [`LayeredDecoration::to_builder`] can also clear fields.
///
/// ```rust,ignore
/// let decoration = LayeredDecoration::builder()
///     .color(Color::from_straight(0.1, 0.1, 0.15, 1.0))
///     .gradients(vec![LinearGradient::new(vec![a, b]).into()])
///     .gradient_blurs(vec![12.0])
///     .background_blend_mode(BlendMode::Screen)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayeredDecorationBuilder {
    inner: LayeredDecoration,
}

impl From<LayeredDecoration> for LayeredDecorationBuilder {
    fn from(inner: LayeredDecoration) -> Self {
        Self { inner }
    }
}

impl LayeredDecorationBuilder {
    pub fn color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.inner.color = color.into();
        self
    }

    pub fn border(mut self, border: impl Into<Option<Border>>) -> Self {
        self.inner.border = border.into();
        self
    }

    pub fn border_radius(mut self, radius: impl Into<Option<BorderRadius>>) -> Self {
        self.inner.border_radius = radius.into();
        self
    }

    pub fn shadows(mut self, shadows: impl Into<Option<Vec<BoxShadow>>>) -> Self {
        self.inner.shadows = shadows.into();
        self
    }

    pub fn gradients(mut self, gradients: impl Into<Option<Vec<Gradient>>>) -> Self {
        self.inner.gradients = gradients.into();
        self
    }

    /// Blur radius per gradient. Left unset, every gradient is painted sharp.
    pub fn gradient_blurs(mut self, blurs: impl Into<Option<Vec<f32>>>) -> Self {
        self.inner.gradient_blurs = blurs.into();
        self
    }

    pub fn background_blend_mode(mut self, mode: impl Into<Option<BlendMode>>) -> Self {
        self.inner.background_blend_mode = mode.into();
        self
    }

    pub fn image(mut self, image: impl Into<Option<DecorationImage>>) -> Self {
        self.inner.image = image.into();
        self
    }

    pub fn shape(mut self, shape: BoxShape) -> Self {
        self.inner.shape = shape;
        self
    }

    /// Validates and normalizes the decoration.
    ///
    /// An empty gradient list is treated as no gradients, and missing blurs
    /// default to zero for every gradient.
    pub fn build(self) -> Result<LayeredDecoration, DecorationError> {
        let mut d = self.inner;

        d.gradients = d.gradients.filter(|g| !g.is_empty());
        d.gradient_blurs = match (&d.gradients, d.gradient_blurs.take()) {
            (Some(gradients), None) => Some(vec![0.0; gradients.len()]),
            (Some(gradients), Some(blurs)) if blurs.len() != gradients.len() => {
                return Err(DecorationError::GradientBlurLengthMismatch {
                    gradients: gradients.len(),
                    blurs: blurs.len(),
                });
            }
            (Some(_), Some(blurs)) => Some(blurs),
            (None, Some(blurs)) if !blurs.is_empty() => {
                return Err(DecorationError::GradientBlurLengthMismatch { gradients: 0, blurs: blurs.len() });
            }
            (None, _) => None,
        };

        for (index, gradient) in d.gradients.iter().flatten().enumerate() {
            gradient.validate().map_err(|reason| DecorationError::InvalidGradient { index, reason })?;
        }
        if let Some(index) = d.gradient_blurs.iter().flatten().position(|b| !non_negative(*b)) {
            return Err(DecorationError::NegativeBlur { index });
        }
        validate_fields(d.border.as_ref(), d.shadows.as_deref(), d.image.as_ref())?;
        if d.background_blend_mode.is_some() && d.color.is_none() && d.gradients.is_none() {
            return Err(DecorationError::BlendModeWithoutBackground);
        }
        if d.shape == BoxShape::Circle && d.border_radius.is_some() {
            return Err(DecorationError::CornerRadiusOnCircle);
        }

        Ok(d)
    }
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

/// Range checks shared with [`BoxDecoration::validate`](crate::BoxDecoration::validate).
///
/// Interpolation between two values that pass these checks stays in range
/// for `t` in `[0, 1]`.
pub(crate) fn validate_fields(
    border: Option<&Border>,
    shadows: Option<&[BoxShadow]>,
    image: Option<&DecorationImage>,
) -> Result<(), DecorationError> {
    if let Some(b) = border {
        if ![b.top, b.right, b.bottom, b.left].iter().all(|side| non_negative(side.width)) {
            return Err(DecorationError::NegativeBorderWidth);
        }
    }
    if let Some(index) = shadows.unwrap_or_default().iter().position(|s| !non_negative(s.blur_radius)) {
        return Err(DecorationError::NegativeShadowBlur { index });
    }
    if let Some(image) = image {
        if !(0.0..=1.0).contains(&image.opacity) {
            return Err(DecorationError::ImageOpacityOutOfRange { opacity: image.opacity });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::BorderSide;
    use crate::gradient::{LinearGradient, SweepGradient};
    use lamina_engine::coords::Vec2;

    fn red() -> Color { Color::from_straight(1.0, 0.0, 0.0, 1.0) }
    fn blue() -> Color { Color::from_straight(0.0, 0.0, 1.0, 1.0) }

    fn two_gradients() -> Vec<Gradient> {
        vec![LinearGradient::new(vec![red(), blue()]).into(), SweepGradient::new(vec![blue(), red()]).into()]
    }

    // ── rejected combinations ─────────────────────────────────────────────

    #[test]
    fn blend_mode_needs_background() {
        let err = LayeredDecoration::builder().background_blend_mode(BlendMode::Multiply).build().unwrap_err();
        assert_eq!(err, DecorationError::BlendModeWithoutBackground);

        let ok = LayeredDecoration::builder().background_blend_mode(BlendMode::Multiply).color(red()).build();
        assert!(ok.is_ok());
    }

    #[test]
    fn blur_count_must_match_gradients() {
        let err = LayeredDecoration::builder()
            .gradients(two_gradients())
            .gradient_blurs(vec![1.0])
            .build()
            .unwrap_err();
        assert_eq!(err, DecorationError::GradientBlurLengthMismatch { gradients: 2, blurs: 1 });
    }

    #[test]
    fn circle_rejects_radius() {
        let err = LayeredDecoration::builder()
            .shape(BoxShape::Circle)
            .border_radius(BorderRadius::circular(4.0))
            .build()
            .unwrap_err();
        assert_eq!(err, DecorationError::CornerRadiusOnCircle);
    }

    #[test]
    fn invalid_gradient_reports_index() {
        let mut gradients = two_gradients();
        gradients.push(LinearGradient::new(vec![red()]).into());
        let err = LayeredDecoration::builder().gradients(gradients).build().unwrap_err();
        assert!(matches!(err, DecorationError::InvalidGradient { index: 2, .. }));
    }

    #[test]
    fn negative_blur_rejected() {
        let err = LayeredDecoration::builder()
            .gradients(two_gradients())
            .gradient_blurs(vec![0.0, -1.0])
            .build()
            .unwrap_err();
        assert_eq!(err, DecorationError::NegativeBlur { index: 1 });
    }

    #[test]
    fn out_of_range_fields_rejected() {
        let err = LayeredDecoration::builder()
            .image(DecorationImage::new("a.png").with_opacity(1.5))
            .build()
            .unwrap_err();
        assert_eq!(err, DecorationError::ImageOpacityOutOfRange { opacity: 1.5 });

        let err = LayeredDecoration::builder()
            .border(Border::all(BorderSide::new(-1.0, red())))
            .build()
            .unwrap_err();
        assert_eq!(err, DecorationError::NegativeBorderWidth);

        let shadows = vec![BoxShadow::default(), BoxShadow::new(red(), Vec2::zero(), -2.0, 0.0)];
        let err = LayeredDecoration::builder().shadows(shadows).build().unwrap_err();
        assert_eq!(err, DecorationError::NegativeShadowBlur { index: 1 });
    }

    // ── normalization ─────────────────────────────────────────────────────

    #[test]
    fn missing_blurs_default_to_zero() {
        let d = LayeredDecoration::builder().gradients(two_gradients()).build().unwrap();
        assert_eq!(d.gradient_blurs(), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn empty_gradient_list_is_absent() {
        let d = LayeredDecoration::builder().gradients(Vec::new()).gradient_blurs(Vec::new()).build().unwrap();
        assert_eq!(d.gradients(), None);
        assert_eq!(d.gradient_blurs(), None);
    }

    #[test]
    fn to_builder_can_clear_fields() {
        let d = LayeredDecoration::builder().color(red()).build().unwrap();
        let cleared = d.to_builder().color(None).build().unwrap();
        assert_eq!(cleared, LayeredDecoration::default());
    }
}
