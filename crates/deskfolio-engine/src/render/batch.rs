use std::ops::Range;

use crate::coords::Rect;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum BatchKind {
    Quad,
    Glyph,
}

/// A run of instances drawn with one pipeline under one scissor.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Batch {
    pub kind: BatchKind,
    pub clip: Option<Rect>,
    pub instances: Range<u32>,
}

/// Draw calls for a frame, in paint order.
#[derive(Debug, Default)]
pub(super) struct BatchPlan {
    batches: Vec<Batch>,
}

impl BatchPlan {
    pub(super) fn clear(&mut self) {
        self.batches.clear();
    }

    pub(super) fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub(super) fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Appends `instances`, extending the last batch when kind and clip match
    /// and the ranges are contiguous.
    pub(super) fn push(&mut self, kind: BatchKind, clip: Option<Rect>, instances: Range<u32>) {
        if instances.is_empty() {
            return;
        }
        if let Some(last) = self.batches.last_mut() {
            if last.kind == kind && last.clip == clip && last.instances.end == instances.start {
                last.instances.end = instances.end;
                return;
            }
        }
        self.batches.push(Batch { kind, clip, instances });
    }
}
