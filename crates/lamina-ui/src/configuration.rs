use lamina_engine::coords::{TextDirection, Vec2};

/// Per-paint context handed to decoration painters.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ImageConfiguration {
    /// Size of the box being painted. Painting is skipped without it.
    pub size: Option<Vec2>,
    /// Resolves directional radii and alignments. `None` paints left-to-right.
    pub text_direction: Option<TextDirection>,
}

impl ImageConfiguration {
    pub fn new(size: Vec2) -> Self {
        Self { size: Some(size), text_direction: None }
    }

    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.text_direction = Some(text_direction);
        self
    }

    #[inline]
    pub fn text_direction_or_default(&self) -> TextDirection {
        self.text_direction.unwrap_or_default()
    }
}
