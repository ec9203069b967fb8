use crate::scene::shapes::fill::FillCmd;
use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::stroke::StrokeCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new command module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
    Image(ImageCmd),
}
