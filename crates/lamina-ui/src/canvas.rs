use std::sync::Arc;

use lamina_engine::coords::{Path, Rect};
use lamina_engine::paint::{Color, FillPaint};
use lamina_engine::scene::{DrawList, ImagePixels, ZIndex};

/// Drawing surface passed to decoration painters.
///
/// Wraps the engine's `DrawList` and hands out increasing z-indices so that
/// commands paint back-to-front in the order they are issued.
pub struct Canvas<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Canvas<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self::with_base_z(draw_list, 0)
    }

    /// Starts issuing z-indices at `z`, for layering after existing content.
    pub fn with_base_z(draw_list: &'a mut DrawList, z: i32) -> Self {
        Self { draw_list, z }
    }

    /// The next z-index this canvas will assign.
    #[inline]
    pub fn current_z(&self) -> i32 {
        self.z
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills `path` with a (possibly shared) fill paint.
    pub fn fill_path(&mut self, path: Path, paint: Arc<FillPaint>) {
        let z = self.next_z();
        self.draw_list.push_fill(z, path, paint);
    }

    /// Strokes `width` centred on `path`.
    pub fn stroke_path(&mut self, path: Path, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_stroke(z, path, width, color);
    }

    /// Draws `image` stretched into `dest`.
    pub fn draw_image(&mut self, dest: Rect, image: Arc<ImagePixels>, opacity: f32) {
        let z = self.next_z();
        self.draw_list.push_image(z, dest, image, opacity);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip_path(&mut self, path: Path) {
        self.draw_list.push_clip_path(path);
    }

    /// End the most recent clip region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
