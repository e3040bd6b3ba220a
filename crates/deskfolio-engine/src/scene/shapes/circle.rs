use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, QuadShape};

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl CircleCmd {
    /// Square the circle is inscribed in. Negative radii collapse to a point.
    #[inline]
    pub fn bounds(&self) -> Rect {
        let r = self.radius.max(0.0);
        Rect::new(self.center.x - r, self.center.y - r, r * 2.0, r * 2.0)
    }

    /// A circle is a rounded rect whose radius is half its side.
    pub(crate) fn quad(&self) -> QuadShape<'_> {
        let rect = self.bounds();
        QuadShape {
            rect,
            radii: CornerRadii::all(rect.size.x * 0.5),
            paint: &self.paint,
            border: self.border.as_ref(),
        }
    }
}

impl DrawList {
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, paint, border }));
    }
}
