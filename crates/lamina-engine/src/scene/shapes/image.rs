use std::sync::Arc;

use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Decoded RGBA8 pixels (straight alpha, row-major, tightly packed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImagePixels {
    /// Returns `None` when `rgba` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        (rgba.len() == expected).then_some(Self { width, height, rgba })
    }
}

/// Image payload: `image` is stretched into `dest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub dest: Rect,
    pub image: Arc<ImagePixels>,
    /// Multiplier in [0, 1] applied to every pixel's alpha.
    pub opacity: f32,
}

impl DrawList {
    /// Records an image draw into `dest`.
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, dest: Rect, image: Arc<ImagePixels>, opacity: f32) {
        self.push(z, DrawCmd::Image(ImageCmd { dest, image, opacity }));
    }
}
