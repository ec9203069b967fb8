use lamina_engine::paint::{BlendMode, Color};

use crate::border::Border;
use crate::decoration::validate_fields;
use crate::error::DecorationError;
use crate::geometry::BoxShape;
use crate::gradient::Gradient;
use crate::image::DecorationImage;
use crate::radius::BorderRadius;
use crate::shadow::BoxShadow;

/// Plain box decoration with at most one gradient.
///
/// Fields are public; call [`validate`](Self::validate) before painting a
/// hand-assembled value. Converts losslessly into a
/// [`LayeredDecoration`](crate::LayeredDecoration) and interpolates with one
/// through [`DecorationRef`](crate::DecorationRef).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxDecoration {
    pub color: Option<Color>,
    pub image: Option<DecorationImage>,
    pub border: Option<Border>,
    pub border_radius: Option<BorderRadius>,
    pub box_shadow: Option<Vec<BoxShadow>>,
    pub gradient: Option<Gradient>,
    pub background_blend_mode: Option<BlendMode>,
    pub shape: BoxShape,
}

impl BoxDecoration {
    pub fn validate(&self) -> Result<(), DecorationError> {
        if let Some(gradient) = &self.gradient {
            gradient.validate().map_err(|reason| DecorationError::InvalidGradient { index: 0, reason })?;
        }
        validate_fields(self.border.as_ref(), self.box_shadow.as_deref(), self.image.as_ref())?;
        if self.background_blend_mode.is_some() && self.color.is_none() && self.gradient.is_none() {
            return Err(DecorationError::BlendModeWithoutBackground);
        }
        if self.shape == BoxShape::Circle && self.border_radius.is_some() {
            return Err(DecorationError::CornerRadiusOnCircle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayeredDecoration;
    use crate::gradient::LinearGradient;

    #[test]
    fn validate_mirrors_layered_rules() {
        let blend_only = BoxDecoration { background_blend_mode: Some(BlendMode::Multiply), ..Default::default() };
        assert_eq!(blend_only.validate(), Err(DecorationError::BlendModeWithoutBackground));

        let rounded_circle = BoxDecoration {
            shape: BoxShape::Circle,
            border_radius: Some(BorderRadius::circular(2.0)),
            ..Default::default()
        };
        assert_eq!(rounded_circle.validate(), Err(DecorationError::CornerRadiusOnCircle));

        let negative_opacity = BoxDecoration {
            image: Some(DecorationImage::new("a.png").with_opacity(-0.5)),
            ..Default::default()
        };
        assert_eq!(negative_opacity.validate(), Err(DecorationError::ImageOpacityOutOfRange { opacity: -0.5 }));
    }

    #[test]
    fn valid_native_converts_to_valid_layered() {
        let native = BoxDecoration {
            gradient: Some(LinearGradient::new(vec![Color::black(), Color::white()]).into()),
            background_blend_mode: Some(BlendMode::Overlay),
            ..Default::default()
        };
        assert!(native.validate().is_ok());
        let layered = LayeredDecoration::from(&native);
        assert_eq!(layered.to_builder().build(), Ok(layered));
    }
}
