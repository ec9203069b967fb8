use crate::paint::BlendMode;
use crate::paint::Color;
use crate::paint::gradient::{LinearGradient, RadialGradient, SweepGradient};

/// Paint source for filling geometry.
///
/// Keep the enum closed so renderers can dispatch exhaustively. Gradient
/// geometry is already resolved into logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
    SweepGradient(SweepGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

/// Fully configured fill: source, compositing and mask blur.
///
/// Fill paints are what higher layers cache: building one may involve
/// resolving gradient geometry, so they are shared by `Arc` between the
/// cache and the recorded draw stream.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPaint {
    pub paint: Paint,
    /// `None` means the renderer default (source-over).
    pub blend_mode: Option<BlendMode>,
    /// Gaussian mask blur standard deviation in logical pixels.
    pub blur_sigma: Option<f32>,
}

impl FillPaint {
    #[inline]
    pub fn new(paint: impl Into<Paint>) -> Self {
        Self { paint: paint.into(), blend_mode: None, blur_sigma: None }
    }

    #[inline]
    #[must_use]
    pub fn with_blend_mode(mut self, blend_mode: Option<BlendMode>) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    /// Sets a mask blur; non-positive or non-finite sigmas disable blurring.
    #[inline]
    #[must_use]
    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = (sigma.is_finite() && sigma > 0.0).then_some(sigma);
        self
    }
}

/// Converts a blur radius into the Gaussian sigma most rasterizers expect.
///
/// `1 / sqrt(3)` matches the box-blur approximation used for CSS and
/// Skia shadows; the half-pixel bias keeps tiny radii visible.
#[inline]
pub fn blur_radius_to_sigma(radius: f32) -> f32 {
    if radius > 0.0 { radius * 0.577_350_27 + 0.5 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_blur_disables_mask() {
        let paint = FillPaint::new(Color::black()).with_blur_sigma(blur_radius_to_sigma(0.0));
        assert_eq!(paint.blur_sigma, None);
    }

    #[test]
    fn positive_blur_sets_sigma() {
        let paint = FillPaint::new(Color::black()).with_blur_sigma(blur_radius_to_sigma(10.0));
        let sigma = paint.blur_sigma.unwrap();
        assert!((sigma - 6.2735).abs() < 1e-3);
    }
}
