//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - track nested clip outlines
//! - keep command-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::{FillCmd, ImageCmd, ImagePixels, StrokeCmd};
pub use order::{SortKey, ZIndex};
