use crate::coords::Path;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroke payload. The stroke is centred on `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a stroke of `width` centred on `path`.
    #[inline]
    pub fn push_stroke(&mut self, z: ZIndex, path: Path, width: f32, color: Color) {
        self.push(z, DrawCmd::Stroke(StrokeCmd { path, width, color }));
    }
}
