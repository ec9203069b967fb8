use std::sync::Arc;

use lamina_engine::coords::{Rect, TextDirection, Vec2};
use lamina_engine::paint::{FillPaint, blur_radius_to_sigma};

use crate::canvas::Canvas;
use crate::configuration::ImageConfiguration;
use crate::decoration::LayeredDecoration;
use crate::geometry::BoxShape;
use crate::image::{ChangeCallback, ImagePainter};

/// What a cached gradient paint was resolved against.
#[derive(Debug, Copy, Clone, PartialEq)]
struct SlotKey {
    rect: Rect,
    text_direction: TextDirection,
}

/// Cache entry for one gradient layer.
#[derive(Debug, Default)]
struct GradientSlot {
    cached: Option<(SlotKey, Arc<FillPaint>)>,
}

impl GradientSlot {
    /// Returns the cached paint for `key`, building a new one on a miss.
    fn resolve(&mut self, index: usize, key: SlotKey, build: impl FnOnce() -> FillPaint) -> Arc<FillPaint> {
        if let Some((cached_key, paint)) = &self.cached {
            if *cached_key == key {
                log::trace!("gradient {index}: reusing cached paint");
                return Arc::clone(paint);
            }
        }
        log::trace!("gradient {index}: building paint for {:?}", key.rect);
        let paint = Arc::new(build());
        self.cached = Some((key, Arc::clone(&paint)));
        paint
    }

    fn paint(&self) -> Option<&Arc<FillPaint>> {
        self.cached.as_ref().map(|(_, paint)| paint)
    }
}

/// Turns a [`LayeredDecoration`] into draw commands, caching fill paints
/// across calls.
///
/// Draw order: shadows, background colour, gradients (first one bottom-most),
/// image, border. The background blend mode applies to the colour and to
/// every gradient.
///
/// The colour paint is built once. Each gradient keeps its own slot and is
/// only rebuilt when the painted rectangle or text direction changes.
pub struct DecorationPainter {
    decoration: LayeredDecoration,
    on_changed: ChangeCallback,
    color_paint: Option<Arc<FillPaint>>,
    gradient_slots: Box<[GradientSlot]>,
    image_painter: Option<ImagePainter>,
    disposed: bool,
}

impl DecorationPainter {
    pub fn new(decoration: LayeredDecoration, on_changed: ChangeCallback) -> Self {
        let blend_mode = decoration.background_blend_mode();
        let color_paint = decoration.color().map(|c| Arc::new(FillPaint::new(c).with_blend_mode(blend_mode)));
        let slots = decoration.gradients().map_or(0, <[_]>::len);
        Self {
            decoration,
            on_changed,
            color_paint,
            gradient_slots: (0..slots).map(|_| GradientSlot::default()).collect(),
            image_painter: None,
            disposed: false,
        }
    }

    #[inline]
    pub fn decoration(&self) -> &LayeredDecoration {
        &self.decoration
    }

    /// The shared background-colour paint, if the decoration has a colour.
    #[inline]
    pub fn color_paint(&self) -> Option<&Arc<FillPaint>> {
        self.color_paint.as_ref()
    }

    /// The paint most recently used for gradient `index`.
    pub fn gradient_paint(&self, index: usize) -> Option<&Arc<FillPaint>> {
        self.gradient_slots.get(index).and_then(GradientSlot::paint)
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Paints the decoration for a box at `offset` of `configuration.size`.
    pub fn paint(&mut self, canvas: &mut Canvas<'_>, offset: Vec2, configuration: &ImageConfiguration) {
        if self.disposed {
            log::warn!("paint called on a disposed decoration painter");
            return;
        }
        let Some(size) = configuration.size else {
            log::warn!("decoration paint skipped: configuration has no size");
            return;
        };

        let rect = Rect::from_origin_size(offset, size);
        let text_direction = configuration.text_direction_or_default();
        let decoration = &self.decoration;
        let outline = decoration.clip_path(rect, text_direction);

        // ── shadows ───────────────────────────────────────────────────────
        for shadow in decoration.shadows().unwrap_or_default() {
            canvas.fill_path(shadow.shadow_path(&outline), Arc::new(shadow.to_fill_paint()));
        }

        // ── background ────────────────────────────────────────────────────
        if let Some(paint) = &self.color_paint {
            canvas.fill_path(outline, Arc::clone(paint));
        }

        let key = SlotKey { rect, text_direction };
        let blend_mode = decoration.background_blend_mode();
        for (index, ((gradient, blur), slot)) in
            decoration.gradient_layers().zip(self.gradient_slots.iter_mut()).enumerate()
        {
            let paint = slot.resolve(index, key, || {
                FillPaint::new(gradient.create_shader(rect, text_direction))
                    .with_blend_mode(blend_mode)
                    .with_blur_sigma(blur_radius_to_sigma(blur))
            });
            canvas.fill_path(outline, paint);
        }

        // ── image ─────────────────────────────────────────────────────────
        if let Some(image) = decoration.image() {
            let on_changed = &self.on_changed;
            let painter = self.image_painter.get_or_insert_with(|| image.create_painter(Arc::clone(on_changed)));
            painter.paint(canvas, rect, Some(outline), text_direction);
        }

        // ── border ────────────────────────────────────────────────────────
        if let Some(border) = decoration.border() {
            let radii = match decoration.shape() {
                BoxShape::Rectangle => decoration.border_radius().map(|r| r.resolve(text_direction)),
                BoxShape::Circle => None,
            };
            border.paint(canvas, rect, decoration.shape(), radii);
        }
    }

    /// Releases the image painter. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(mut image_painter) = self.image_painter.take() {
            image_painter.dispose();
        }
        log::debug!("decoration painter disposed");
    }
}

impl Drop for DecorationPainter {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl core::fmt::Debug for DecorationPainter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecorationPainter")
            .field("decoration", &self.decoration)
            .field("gradient_slots", &self.gradient_slots.len())
            .field("image_painter", &self.image_painter)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{Border, BorderSide};
    use lamina_engine::coords::Path;
    use lamina_engine::logging::{LoggingConfig, init_logging};
    use crate::gradient::{Gradient, LinearGradient, SweepGradient};
    use crate::image::DecorationImage;
    use crate::shadow::BoxShadow;
    use lamina_engine::paint::{BlendMode, Color, Paint};
    use lamina_engine::scene::{DrawCmd, DrawList};
    use std::io::Cursor;
    use std::sync::mpsc;
    use std::time::Duration;

    fn red() -> Color { Color::from_straight(1.0, 0.0, 0.0, 1.0) }
    fn blue() -> Color { Color::from_straight(0.0, 0.0, 1.0, 1.0) }

    fn noop() -> ChangeCallback {
        Arc::new(|| {})
    }

    fn gradients() -> Vec<Gradient> {
        vec![LinearGradient::new(vec![red(), blue()]).into(), SweepGradient::new(vec![blue(), red()]).into()]
    }

    fn decorated() -> LayeredDecoration {
        LayeredDecoration::builder()
            .color(red())
            .gradients(gradients())
            .gradient_blurs(vec![0.0, 6.0])
            .build()
            .unwrap()
    }

    fn config(w: f32, h: f32) -> ImageConfiguration {
        ImageConfiguration::new(Vec2::new(w, h))
    }

    fn paint_once(painter: &mut DecorationPainter, configuration: &ImageConfiguration) -> DrawList {
        init_logging(LoggingConfig::for_tests());
        let mut list = DrawList::new();
        painter.paint(&mut Canvas::new(&mut list), Vec2::zero(), configuration);
        list
    }

    // ── caching ───────────────────────────────────────────────────────────

    #[test]
    fn stable_rect_reuses_gradient_paints() {
        let mut painter = decorated().create_painter(noop());
        let color = Arc::clone(painter.color_paint().unwrap());

        paint_once(&mut painter, &config(100.0, 50.0));
        let first: Vec<_> = (0..2).map(|i| Arc::clone(painter.gradient_paint(i).unwrap())).collect();

        paint_once(&mut painter, &config(100.0, 50.0));
        for (i, paint) in first.iter().enumerate() {
            assert!(Arc::ptr_eq(paint, painter.gradient_paint(i).unwrap()), "slot {i} rebuilt");
        }

        paint_once(&mut painter, &config(120.0, 50.0));
        for (i, paint) in first.iter().enumerate() {
            assert!(!Arc::ptr_eq(paint, painter.gradient_paint(i).unwrap()), "slot {i} not rebuilt");
        }
        assert!(Arc::ptr_eq(&color, painter.color_paint().unwrap()));
    }

    #[test]
    fn text_direction_change_rebuilds_gradients() {
        let mut painter = decorated().create_painter(noop());
        paint_once(&mut painter, &config(10.0, 10.0));
        let first = Arc::clone(painter.gradient_paint(0).unwrap());
        paint_once(&mut painter, &config(10.0, 10.0).with_text_direction(TextDirection::Rtl));
        assert!(!Arc::ptr_eq(&first, painter.gradient_paint(0).unwrap()));
    }

    #[test]
    fn drawn_commands_share_cached_paints() {
        let mut painter = decorated().create_painter(noop());
        let list = paint_once(&mut painter, &config(10.0, 10.0));
        let DrawCmd::Fill(fill) = &list.items()[2].cmd else { panic!("expected fill") };
        assert!(Arc::ptr_eq(&fill.paint, painter.gradient_paint(1).unwrap()));
        assert!(fill.paint.blur_sigma.is_some());
        assert!(matches!(fill.paint.paint, Paint::SweepGradient(_)));
    }

    // ── draw order ────────────────────────────────────────────────────────

    #[test]
    fn paints_layers_in_order() {
        let decoration = decorated()
            .to_builder()
            .shadows(vec![BoxShadow::new(Color::black(), Vec2::new(0.0, 3.0), 2.0, 0.0)])
            .border(Border::all(BorderSide::new(1.0, blue())))
            .background_blend_mode(BlendMode::Multiply)
            .build()
            .unwrap();
        let mut painter = decoration.create_painter(noop());
        let mut list = paint_once(&mut painter, &config(40.0, 40.0));

        let kinds: Vec<&str> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Fill(f) => match f.paint.paint {
                    Paint::Solid(c) if c == Color::black() => "shadow",
                    Paint::Solid(_) => "color",
                    _ => "gradient",
                },
                DrawCmd::Stroke(_) => "border",
                DrawCmd::Image(_) => "image",
            })
            .collect();
        assert_eq!(kinds, ["shadow", "color", "gradient", "gradient", "border"]);

        let blend_modes: Vec<_> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Fill(f) => Some(f.paint.blend_mode),
                _ => None,
            })
            .collect();
        assert_eq!(blend_modes, [None, Some(BlendMode::Multiply), Some(BlendMode::Multiply), Some(BlendMode::Multiply)]);
    }

    #[test]
    fn circle_fills_use_inscribed_circle() {
        let decoration = LayeredDecoration::builder().color(red()).shape(BoxShape::Circle).build().unwrap();
        let mut painter = decoration.create_painter(noop());
        let list = paint_once(&mut painter, &config(80.0, 40.0));
        let DrawCmd::Fill(fill) = &list.items()[0].cmd else { panic!("expected fill") };
        assert_eq!(fill.path, Path::circle(Vec2::new(40.0, 20.0), 20.0));
    }

    // ── edge cases ────────────────────────────────────────────────────────

    #[test]
    fn missing_size_draws_nothing() {
        let mut painter = decorated().create_painter(noop());
        let list = paint_once(&mut painter, &ImageConfiguration::default());
        assert!(list.is_empty());
        assert!(painter.gradient_paint(0).is_none());
    }

    #[test]
    fn dispose_is_idempotent_and_stops_painting() {
        let mut painter = decorated().create_painter(noop());
        painter.dispose();
        painter.dispose();
        assert!(painter.is_disposed());
        assert!(paint_once(&mut painter, &config(10.0, 10.0)).is_empty());
    }

    // ── image ─────────────────────────────────────────────────────────────

    #[test]
    fn image_is_drawn_after_change_callback() {
        let img = ::image::RgbaImage::from_pixel(2, 2, ::image::Rgba([0, 255, 0, 255]));
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ::image::ImageFormat::Png).unwrap();

        let decoration = LayeredDecoration::builder()
            .color(red())
            .border(Border::all(BorderSide::new(1.0, blue())))
            .image(DecorationImage::new(png.into_inner()))
            .build()
            .unwrap();

        let (tx, rx) = mpsc::channel();
        let mut painter = decoration.create_painter(Arc::new(move || {
            let _ = tx.send(());
        }));

        let first = paint_once(&mut painter, &config(20.0, 20.0));
        assert_eq!(first.len(), 2);

        rx.recv_timeout(Duration::from_secs(10)).expect("image decode callback");

        let second = paint_once(&mut painter, &config(20.0, 20.0));
        assert_eq!(second.len(), 3);
        let image_item = &second.items()[1];
        assert!(matches!(image_item.cmd, DrawCmd::Image(_)));
        assert_eq!(image_item.clip_path, Some(Path::Rect(Rect::new(0.0, 0.0, 20.0, 20.0))));
        assert!(matches!(second.items()[2].cmd, DrawCmd::Stroke(_)));
    }
}
