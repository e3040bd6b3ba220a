use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, QuadShape};

/// Fill with per-corner radii and an optional inner border.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl RoundedRectCmd {
    pub(crate) fn quad(&self) -> QuadShape<'_> {
        QuadShape {
            rect: self.rect,
            radii: self.radii,
            paint: &self.paint,
            border: self.border.as_ref(),
        }
    }
}

impl DrawList {
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, paint, border }));
    }
}
