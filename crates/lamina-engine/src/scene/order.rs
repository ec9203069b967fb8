/// Layer of a draw item. Higher layers paint over lower ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Paint-order key: layer first, then insertion order within the layer.
///
/// Field order matters: the derived `Ord` compares `z` before `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Insertion index, keeping equal-layer items stable.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_insertion_order() {
        let low_late = SortKey::new(ZIndex::new(0), 9);
        let high_early = SortKey::new(ZIndex::new(1), 0);
        assert!(low_late < high_early);
        assert!(SortKey::new(ZIndex::new(1), 0) < SortKey::new(ZIndex::new(1), 1));
    }
}
