//! Lamina UI: layered box decorations on top of `lamina-engine`.
//!
//! A [`LayeredDecoration`] describes how to paint a box: background colour,
//! any number of blended gradients with per-gradient blur, shadows, an
//! image, a border and a shape. Decorations are immutable values; derive
//! variants with [`LayeredDecoration::to_builder`] and animate between them
//! with [`LayeredDecoration::lerp`], which also accepts the single-gradient
//! [`BoxDecoration`] through [`DecorationRef`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lamina_ui::prelude::*;
//!
//! let decoration = LayeredDecoration::builder()
//!     .color(Color::from_straight(0.08, 0.08, 0.12, 1.0))
//!     .gradients(vec![
//!         LinearGradient::new(vec![teal, Color::transparent()]).into(),
//!         RadialGradient::new(vec![pink, Color::transparent()]).into(),
//!     ])
//!     .gradient_blurs(vec![0.0, 24.0])
//!     .background_blend_mode(BlendMode::Screen)
//!     .border_radius(BorderRadius::circular(12.0))
//!     .build()?;
//!
//! let mut painter = decoration.create_painter(Arc::new(|| request_redraw()));
//!
//! // In your frame callback:
//! let mut canvas = Canvas::new(&mut draw_list);
//! painter.paint(&mut canvas, origin, &ImageConfiguration::new(size));
//! ```

pub mod alignment;
pub mod border;
pub mod canvas;
pub mod configuration;
pub mod decoration;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod image;
pub mod lerp;
pub mod native;
pub mod painter;
pub mod radius;
pub mod shadow;

pub use decoration::{DecorationRef, LayeredDecoration, LayeredDecorationBuilder};
pub use error::{DecorationError, ImageLoadError};
pub use native::BoxDecoration;
pub use painter::DecorationPainter;

/// Everything needed to describe, animate and paint decorations.
pub mod prelude {
    pub use crate::alignment::Alignment;
    pub use crate::border::{Border, BorderSide};
    pub use crate::canvas::Canvas;
    pub use crate::configuration::ImageConfiguration;
    pub use crate::decoration::{DecorationRef, LayeredDecoration, LayeredDecorationBuilder};
    pub use crate::edges::Edges;
    pub use crate::error::{DecorationError, ImageLoadError};
    pub use crate::geometry::BoxShape;
    pub use crate::gradient::{Gradient, GradientKind, LinearGradient, RadialGradient, SweepGradient};
    pub use crate::image::{ChangeCallback, ContentFit, DecorationImage, ImagePainter, ImageSource};
    pub use crate::lerp::{Lerp, Scale};
    pub use crate::native::BoxDecoration;
    pub use crate::painter::DecorationPainter;
    pub use crate::radius::{BorderRadius, DirectionalRadii};
    pub use crate::shadow::BoxShadow;

    // Re-export the engine primitives everyone needs.
    pub use lamina_engine::coords::{CornerRadii, Path, Rect, TextDirection, Vec2};
    pub use lamina_engine::paint::{BlendMode, Color, SpreadMode};
    pub use lamina_engine::scene::DrawList;
}
