//! Per-shape payloads and their `DrawList` push helpers.

mod circle;
mod rect;
mod rounded_rect;
mod text;

pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;

use crate::coords::{CornerRadii, Rect};
use crate::paint::{Color, Paint};

/// Geometry and fill of any shape, in the form the quad pipeline draws.
#[derive(Debug, Copy, Clone)]
pub(crate) struct QuadShape<'a> {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: &'a Paint,
    pub border: Option<&'a Border>,
}

/// Stroke drawn along the inner edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
