/// Reading direction used to resolve start/end relative geometry.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextDirection {
    /// Left-to-right: "start" is the left edge.
    #[default]
    Ltr,
    /// Right-to-left: "start" is the right edge.
    Rtl,
}

impl TextDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}
