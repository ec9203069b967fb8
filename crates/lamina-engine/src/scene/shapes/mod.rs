pub(crate) mod fill;
pub(crate) mod image;
pub(crate) mod stroke;

pub use fill::FillCmd;
pub use image::{ImageCmd, ImagePixels};
pub use stroke::StrokeCmd;
