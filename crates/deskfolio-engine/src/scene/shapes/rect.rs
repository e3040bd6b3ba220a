use crate::coords::{CornerRadii, Rect};
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::QuadShape;

/// Square-cornered fill without a border.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    pub(crate) fn quad(&self) -> QuadShape<'_> {
        QuadShape { rect: self.rect, radii: CornerRadii::zero(), paint: &self.paint, border: None }
    }
}

impl DrawList {
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint: Paint::Solid(color) }));
    }
}
