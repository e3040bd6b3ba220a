use super::ZIndex;

/// Position of an item in paint order: layer first, then insertion.
///
/// The derived ordering compares fields top to bottom, so `z` must stay first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
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
    fn layer_beats_insertion_order() {
        let early_top = SortKey::new(ZIndex::new(2), 0);
        let late_bottom = SortKey::new(ZIndex::new(1), 9);
        assert!(late_bottom < early_top);
        assert!(SortKey::new(ZIndex::new(1), 1) < SortKey::new(ZIndex::new(1), 2));
    }
}
