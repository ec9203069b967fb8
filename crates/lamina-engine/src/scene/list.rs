use crate::coords::{Path, Rect};

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels, already intersected with every active clip.
    /// `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
    /// Innermost clip outline. Renderers mask with it in addition to `clip_rect`.
    pub clip_path: Option<Path>,
}

#[derive(Debug, Clone, Copy)]
struct ClipEntry {
    rect: Rect,
    path: Path,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Clipping
///
/// Use [`push_clip_path`] / [`pop_clip`] to scope draw commands to an outline.
/// Clip bounds are intersected with the current parent, so nested clips narrow
/// the scissor rect; only the innermost outline is kept for masking.
///
/// ```ignore
/// draw_list.push_clip_path(Path::circle(center, radius));
/// // ... push children ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active clips. The top is always the current effective clip.
    clip_stack: Vec<ClipEntry>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of clips currently pushed.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        let clip = self.clip_stack.last().copied();
        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: clip.map(|c| c.rect),
            clip_path: clip.map(|c| c.path),
        });

        self.sorted_dirty = true;
    }

    /// Begins a rectangular scissor region.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        self.push_clip_path(Path::Rect(rect));
    }

    /// Begins a clip region shaped like `path`. All draw commands pushed until
    /// [`pop_clip`] are clipped to it (bounds intersected with any parent clip).
    ///
    /// Calls must be balanced with [`pop_clip`].
    pub fn push_clip_path(&mut self, path: Path) {
        let bounds = path.bounds().normalized();
        let rect = match self.clip_stack.last() {
            None => bounds,
            // No overlap produces a zero-area rect so the renderer skips those draws.
            Some(parent) => parent.rect.intersect(bounds).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(ClipEntry { rect, path });
    }

    /// Ends the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching push.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
