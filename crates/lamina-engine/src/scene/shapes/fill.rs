use std::sync::Arc;

use crate::coords::Path;
use crate::paint::FillPaint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled outline payload.
///
/// The paint is shared so callers that cache fill paints can hand the same
/// allocation to every frame's draw stream.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub path: Path,
    pub paint: Arc<FillPaint>,
}

impl FillCmd {
    #[inline]
    pub fn new(path: Path, paint: Arc<FillPaint>) -> Self {
        Self { path, paint }
    }
}

impl DrawList {
    /// Records a filled outline.
    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, path: Path, paint: Arc<FillPaint>) {
        self.push(z, DrawCmd::Fill(FillCmd::new(path, paint)));
    }
}
