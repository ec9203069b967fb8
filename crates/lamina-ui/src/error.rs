use thiserror::Error;

/// Reasons a decoration cannot be constructed.
///
/// These are caller bugs; they are reported at build time and never
/// coerced into a "best effort" decoration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecorationError {
    #[error("{gradients} gradients but {blurs} gradient blurs")]
    GradientBlurLengthMismatch { gradients: usize, blurs: usize },

    #[error("background blend mode requires a color or gradients to blend")]
    BlendModeWithoutBackground,

    #[error("a circle decoration cannot have a border radius")]
    CornerRadiusOnCircle,

    #[error("gradient {index} is invalid: {reason}")]
    InvalidGradient { index: usize, reason: &'static str },

    #[error("gradient blur {index} must be finite and non-negative")]
    NegativeBlur { index: usize },

    #[error("border widths must be finite and non-negative")]
    NegativeBorderWidth,

    #[error("shadow {index} blur radius must be finite and non-negative")]
    NegativeShadowBlur { index: usize },

    #[error("image opacity {opacity} is outside [0, 1]")]
    ImageOpacityOutOfRange { opacity: f32 },
}

/// Failure to turn a decoration image source into pixels.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] ::image::ImageError),

    #[error("decoded image has unusable dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}
