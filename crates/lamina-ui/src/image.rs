//! Background images for decorations.

use core::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lamina_engine::coords::{Path, Rect, TextDirection, Vec2, hash_f32};
use lamina_engine::scene::ImagePixels;

use crate::alignment::Alignment;
use crate::canvas::Canvas;
use crate::error::ImageLoadError;
use crate::lerp::{Lerp, Scale, lerp_f32};

/// Callback used to ask the owner of a painter for another paint pass.
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Where a decoration image is read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Raster image file (PNG, JPEG, GIF, WebP, ...).
    Path(PathBuf),
    /// Encoded raster image held in memory.
    Bytes(Arc<[u8]>),
}

impl core::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes.into())
    }
}

/// How the image content should fit within the decorated box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentFit {
    /// Scale to fit within bounds while preserving aspect ratio.
    #[default]
    Contain,
    /// Scale to cover bounds while preserving aspect ratio. May crop.
    Cover,
    /// Stretch to exactly fill bounds, ignoring aspect ratio.
    Fill,
    /// Use the image's intrinsic size.
    None,
}

impl ContentFit {
    /// Size the image is drawn at inside `bounds`.
    pub fn apply(self, image: Vec2, bounds: Vec2) -> Vec2 {
        if image.x <= 0.0 || image.y <= 0.0 {
            return Vec2::zero();
        }
        match self {
            ContentFit::Contain => image * (bounds.x / image.x).min(bounds.y / image.y),
            ContentFit::Cover => image * (bounds.x / image.x).max(bounds.y / image.y),
            ContentFit::Fill => bounds,
            ContentFit::None => image,
        }
    }
}

/// An image painted behind the border and above every background fill.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationImage {
    pub source: ImageSource,
    pub fit: ContentFit,
    pub alignment: Alignment,
    /// Multiplier in `[0, 1]` applied to the image's alpha.
    pub opacity: f32,
}

impl DecorationImage {
    pub fn new(source: impl Into<ImageSource>) -> Self {
        Self { source: source.into(), fit: ContentFit::default(), alignment: Alignment::CENTER, opacity: 1.0 }
    }

    #[must_use]
    pub fn with_fit(mut self, fit: ContentFit) -> Self {
        self.fit = fit;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn create_painter(&self, on_changed: ChangeCallback) -> ImagePainter {
        ImagePainter::new(self.clone(), on_changed)
    }
}

impl Lerp for DecorationImage {
    /// Images showing the same content blend opacity and alignment; different
    /// content switches at the midpoint.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        if from.source == to.source && from.fit == to.fit {
            Self {
                source: from.source.clone(),
                fit: from.fit,
                alignment: Alignment::lerp(&from.alignment, &to.alignment, t),
                opacity: lerp_f32(from.opacity, to.opacity, t).clamp(0.0, 1.0),
            }
        } else if t < 0.5 {
            from.clone()
        } else {
            to.clone()
        }
    }
}

impl Scale for DecorationImage {
    fn scale(&self, factor: f32) -> Self {
        Self { opacity: (self.opacity * factor).clamp(0.0, 1.0), ..self.clone() }
    }
}

impl Hash for DecorationImage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.fit.hash(state);
        self.alignment.hash(state);
        hash_f32(self.opacity, state);
    }
}

// ── painter ───────────────────────────────────────────────────────────────

#[derive(Debug)]
enum DecodeState {
    Idle,
    Loading,
    Ready(Arc<ImagePixels>),
    Failed,
    Disposed,
}

/// Decodes a [`DecorationImage`] off-thread and draws it once available.
///
/// The first `paint` starts decoding and draws nothing. When the pixels are
/// ready the change callback fires so the owner can schedule a repaint.
pub struct ImagePainter {
    image: DecorationImage,
    on_changed: ChangeCallback,
    state: Arc<Mutex<DecodeState>>,
}

impl ImagePainter {
    pub fn new(image: DecorationImage, on_changed: ChangeCallback) -> Self {
        Self { image, on_changed, state: Arc::new(Mutex::new(DecodeState::Idle)) }
    }

    pub fn image(&self) -> &DecorationImage {
        &self.image
    }

    /// True once decoded pixels are available.
    pub fn is_ready(&self) -> bool {
        matches!(*lock(&self.state), DecodeState::Ready(_))
    }

    /// Draws the image into `rect`, clipped to `clip` (or `rect` when `None`).
    pub fn paint(&mut self, canvas: &mut Canvas<'_>, rect: Rect, clip: Option<Path>, text_direction: TextDirection) {
        let ready = match &*lock(&self.state) {
            DecodeState::Ready(pixels) => Some(Arc::clone(pixels)),
            DecodeState::Idle => None,
            DecodeState::Loading | DecodeState::Failed => return,
            DecodeState::Disposed => {
                log::warn!("image painter used after dispose; skipping draw");
                return;
            }
        };
        let Some(pixels) = ready else {
            *lock(&self.state) = DecodeState::Loading;
            self.spawn_decode();
            return;
        };

        if self.image.opacity <= 0.0 || rect.is_empty() {
            return;
        }

        let natural = Vec2::new(pixels.width as f32, pixels.height as f32);
        let size = self.image.fit.apply(natural, rect.normalized().size);
        let dest = self.image.alignment.inscribe(size, rect, text_direction);

        canvas.push_clip_path(clip.unwrap_or(Path::Rect(rect)));
        canvas.draw_image(dest, pixels, self.image.opacity);
        canvas.pop_clip();
    }

    /// Drops decoded pixels and suppresses any pending change notification.
    /// Calling it more than once is harmless.
    pub fn dispose(&mut self) {
        let mut state = lock(&self.state);
        if !matches!(*state, DecodeState::Disposed) {
            log::debug!("disposing image painter");
            *state = DecodeState::Disposed;
        }
    }

    fn spawn_decode(&self) {
        let source = self.image.source.clone();
        let state = Arc::clone(&self.state);
        let on_changed = Arc::clone(&self.on_changed);
        log::debug!("decoding decoration image {source}");

        let spawned = std::thread::Builder::new().name("lamina image decode".into()).spawn(move || {
            let result = decode(&source);
            {
                let mut guard = lock(&state);
                if matches!(*guard, DecodeState::Disposed) {
                    return;
                }
                match result {
                    Ok(pixels) => {
                        log::debug!("decoded decoration image {}x{}", pixels.width, pixels.height);
                        *guard = DecodeState::Ready(Arc::new(pixels));
                    }
                    Err(err) => {
                        log::warn!("decoration image {source} skipped: {err}");
                        *guard = DecodeState::Failed;
                        return;
                    }
                }
            }
            on_changed();
        });

        if let Err(err) = spawned {
            log::warn!("failed to start image decode thread: {err}");
            *lock(&self.state) = DecodeState::Failed;
        }
    }
}

impl core::fmt::Debug for ImagePainter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImagePainter")
            .field("image", &self.image)
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

fn lock(state: &Mutex<DecodeState>) -> MutexGuard<'_, DecodeState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Decodes `source` into straight-alpha RGBA8 pixels.
pub fn decode(source: &ImageSource) -> Result<ImagePixels, ImageLoadError> {
    let img = match source {
        ImageSource::Path(path) => ::image::open(path)?,
        ImageSource::Bytes(bytes) => ::image::load_from_memory(bytes)?,
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageLoadError::Dimensions { width, height });
    }
    ImagePixels::new(width, height, rgba.into_raw()).ok_or(ImageLoadError::Dimensions { width, height })
}
